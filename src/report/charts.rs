//! Chart-ready views of dashboard data

use itertools::Itertools;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt;

use crate::models::dataset::{CategoryCounts, RegionFlow};
use crate::models::field::Field;
use crate::models::types::{Region, Stage};

/// One bar of a ranked bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCategory {
    pub category: String,
    pub count: u64,
    /// Share of the shown bars, rounded to one decimal
    pub percent: f64,
}

/// Top `limit` categories by count with their share of the shown subtotal
///
/// An empty result is the "no data" state.
#[must_use]
pub fn ranked_categories(counts: &CategoryCounts, limit: usize) -> Vec<RankedCategory> {
    let shown: Vec<(&str, u64)> = counts
        .iter()
        .sorted_by_key(|(_, count)| Reverse(*count))
        .take(limit)
        .collect();
    let subtotal: u64 = shown.iter().map(|(_, count)| count).sum();

    shown
        .into_iter()
        .map(|(category, count)| RankedCategory {
            category: category.to_string(),
            count,
            percent: round1(percent(count, subtotal)),
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean and median of a histogram series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
}

impl fmt::Display for SeriesSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} média={:.1} mediana={:.1}",
            self.count, self.mean, self.median
        )
    }
}

/// Summarize a value series, `None` when it is empty
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn series_summary(values: &[i32]) -> Option<SeriesSummary> {
    if values.is_empty() {
        return None;
    }

    let sorted: Vec<i32> = values.iter().copied().sorted().collect();
    let count = sorted.len();
    let mean = sorted.iter().map(|&v| f64::from(v)).sum::<f64>() / count as f64;
    let mid = count / 2;
    let median = if count % 2 == 0 {
        (f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0
    } else {
        f64::from(sorted[mid])
    };

    Some(SeriesSummary { count, mean, median })
}

/// Program topics the appropriation questions cover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppropriationTopic {
    Redes,
    Coordenacao,
    Gestao,
    Evidencias,
    PlataformasDigitais,
}

impl AppropriationTopic {
    pub const ALL: [Self; 5] = [
        Self::Redes,
        Self::Coordenacao,
        Self::Gestao,
        Self::Evidencias,
        Self::PlataformasDigitais,
    ];

    /// Dashboard field holding the answers
    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            Self::Redes => Field::ApropriacaoRedes,
            Self::Coordenacao => Field::ApropriacaoCoordenacao,
            Self::Gestao => Field::ApropriacaoGestao,
            Self::Evidencias => Field::ApropriacaoEvidencias,
            Self::PlataformasDigitais => Field::ExperienciaDigital,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Redes => "Organização de Redes de Atenção à Saúde",
            Self::Coordenacao => "Coordenação do Cuidado",
            Self::Gestao => "Gestão da Clínica e do Cuidado",
            Self::Evidencias => "Saúde Baseada em Evidências",
            Self::PlataformasDigitais => "Plataformas Digitais",
        }
    }
}

/// Label for the highest appropriation grade
pub const GRADE_HIGHEST: &str = "Maior (A)";
/// Label for the lowest appropriation grade
pub const GRADE_LOWEST: &str = "Menor (E)";
/// Label for every other answer
pub const GRADE_NOT_RATED: &str = "Não Avaliado";

/// Relabel appropriation grades, merging everything but A and E
#[must_use]
pub fn appropriation_labels(counts: &CategoryCounts) -> CategoryCounts {
    let mut merged: Vec<(String, u64)> = Vec::new();
    for (grade, count) in counts.iter() {
        let label = match grade {
            "A" => GRADE_HIGHEST,
            "E" => GRADE_LOWEST,
            _ => GRADE_NOT_RATED,
        };
        match merged.iter_mut().find(|(existing, _)| existing == label) {
            Some(entry) => entry.1 += count,
            None => merged.push((label.to_string(), count)),
        }
    }
    CategoryCounts::from_entries(merged)
}

/// Pivot the regional flow into one line per region, stages in order
#[must_use]
pub fn regional_flow_by_region(flow: &[RegionFlow]) -> BTreeMap<Region, Vec<(Stage, u64)>> {
    let mut lines: BTreeMap<Region, Vec<(Stage, u64)>> = BTreeMap::new();
    for entry in flow {
        lines.entry(entry.region).or_default().push((entry.stage, entry.count));
    }
    for points in lines.values_mut() {
        points.sort_by_key(|(stage, _)| *stage);
    }
    lines
}
