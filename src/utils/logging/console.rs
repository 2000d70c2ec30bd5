//! Console output utilities
//!
//! Plain-text overviews of the public and qualitative datasets. The
//! `*_lines` builders hold the layout; the `print_*` functions write them out.

use crate::algorithm::aggregation::DASHBOARD_CATEGORIES;
use crate::models::dataset::{CategoryCounts, PublicDataset};
use crate::models::field::Field;
use crate::models::qualitative::{QualitativeField, QualitativeResults};
use crate::report::{
    AppropriationTopic, MapLayer, QualitativeView, appropriation_labels, qualitative_view,
    ranked_categories, regional_flow_by_region, series_summary, state_shading,
};

/// Print the dashboard and map partitions of a public dataset
pub fn print_dataset_overview(dataset: &PublicDataset, top: usize) {
    for line in dataset_overview_lines(dataset, top) {
        println!("{line}");
    }
}

/// Print the qualitative section, field by field
pub fn print_qualitative_overview(results: Option<&QualitativeResults>) {
    for line in qualitative_overview_lines(results) {
        println!("{line}");
    }
}

/// Overview of a public dataset, one output line per entry
#[must_use]
pub fn dataset_overview_lines(dataset: &PublicDataset, top: usize) -> Vec<String> {
    let mut lines = vec!["== Painel ==".to_string()];
    for field in DASHBOARD_CATEGORIES {
        if let Some(counts) = dataset.dashboard.counts(field) {
            push_ranked(&mut lines, &field.to_string(), counts, top);
        }
    }

    lines.push("== Apropriação dos temas ==".to_string());
    for topic in AppropriationTopic::ALL {
        if let Some(counts) = dataset.dashboard.counts(topic.field()) {
            push_ranked(&mut lines, topic.title(), &appropriation_labels(counts), top);
        }
    }

    for field in [Field::Idade, Field::TempoGraduado] {
        let values = dataset.dashboard.series(field).unwrap_or_default();
        lines.push(match series_summary(values) {
            Some(summary) => format!("{field}: {summary}"),
            None => format!("{field}: sem dados"),
        });
    }

    lines.push("Fluxo regional:".to_string());
    for (region, stages) in regional_flow_by_region(&dataset.dashboard.fluxo_regional) {
        let points = stages
            .iter()
            .map(|(stage, count)| format!("{stage}={count}"))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("  {region}: {points}"));
    }

    lines.push("== Mapas ==".to_string());
    for layer in MapLayer::ALL {
        let Some(counts) = dataset.mapas.state_counts(layer.field()) else {
            continue;
        };
        let shading = state_shading(counts);
        lines.push(format!("{} (máximo {}):", layer.title(), shading.max));
        lines.extend(
            shading
                .states
                .iter()
                .filter(|shade| shade.value > 0)
                .map(|shade| format!("  {} {:<24} {:>6}", shade.state.code, shade.state.name, shade.value)),
        );
    }
    lines.push(format!(
        "Municípios com vagas: {}",
        dataset.mapas.vagas_por_municipio.len()
    ));
    lines
}

/// Qualitative section, one output line per entry
#[must_use]
pub fn qualitative_overview_lines(results: Option<&QualitativeResults>) -> Vec<String> {
    let mut lines = vec!["== Análise qualitativa ==".to_string()];
    for field in QualitativeField::ALL {
        lines.push(field.title().to_string());
        match qualitative_view(results, field) {
            QualitativeView::Ready {
                sentiments,
                summary,
                word_cloud,
            } => {
                lines.extend(sentiments.iter().map(|(label, count)| format!("  {label}: {count}")));
                lines.push(format!("  {summary}"));
                if let Some(path) = word_cloud {
                    lines.push(format!("  Nuvem de palavras: {}", path.display()));
                }
            }
            QualitativeView::Unavailable { message } => lines.push(format!("  {message}")),
        }
    }
    lines
}

fn push_ranked(lines: &mut Vec<String>, title: &str, counts: &CategoryCounts, top: usize) {
    lines.push(format!("{title} ({} registros):", counts.total()));
    lines.extend(ranked_categories(counts, top).into_iter().map(|entry| {
        format!("  {:<40} {:>6} ({:.1}%)", entry.category, entry.count, entry.percent)
    }));
}
