//! Qualitative section view with graceful degradation

use std::path::PathBuf;

use crate::models::dataset::CategoryCounts;
use crate::models::qualitative::{QualitativeField, QualitativeResults};

/// Shown when no analysis exists for a field
pub const UNAVAILABLE_MESSAGE: &str = "Dados não disponíveis.";
/// Shown when an analysis has no summary text
pub const SUMMARY_FALLBACK: &str = "Resumo não disponível.";
/// Sentiment labels in display order
pub const SENTIMENT_ORDER: [&str; 3] = ["Positivo", "Neutro", "Negativo"];

/// What the qualitative section should display for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualitativeView {
    Ready {
        /// Sentiment label → count, known labels first
        sentiments: CategoryCounts,
        summary: String,
        /// Word-cloud image, only when the file exists
        word_cloud: Option<PathBuf>,
    },
    Unavailable {
        message: &'static str,
    },
}

/// Build the view for a field; a missing file or field is `Unavailable`
#[must_use]
pub fn qualitative_view(results: Option<&QualitativeResults>, field: QualitativeField) -> QualitativeView {
    let Some(analysis) = results.and_then(|r| r.field(field)) else {
        return QualitativeView::Unavailable {
            message: UNAVAILABLE_MESSAGE,
        };
    };

    let distribution = &analysis.sentimentos.distribuicao;
    let known = SENTIMENT_ORDER
        .iter()
        .filter_map(|&label| distribution.get(label).map(|count| (label.to_string(), count)));
    let others = distribution
        .iter()
        .filter(|(label, _)| !SENTIMENT_ORDER.contains(label))
        .map(|(label, count)| (label.to_string(), count));

    QualitativeView::Ready {
        sentiments: CategoryCounts::from_entries(known.chain(others).collect()),
        summary: analysis
            .resumo
            .clone()
            .unwrap_or_else(|| SUMMARY_FALLBACK.to_string()),
        word_cloud: analysis
            .nuvem_palavras
            .clone()
            .filter(|path| path.exists()),
    }
}
