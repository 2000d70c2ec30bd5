//! Qualitative analysis results
//!
//! Produced by a separate text-analysis process and consumed as opaque,
//! read-only input. The file is optional: when it is missing, readers get
//! `None` and present an explicit "not available" state.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::dataset::CategoryCounts;
use crate::utils::io::json::read_json;
use crate::utils::logging::log_warning;

/// Free-text survey fields that were analysed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualitativeField {
    AptidoesRotina,
    CompetenciasFortalecer,
    ImpressaoServico,
    MomentoImersao,
}

impl QualitativeField {
    pub const ALL: [Self; 4] = [
        Self::AptidoesRotina,
        Self::CompetenciasFortalecer,
        Self::ImpressaoServico,
        Self::MomentoImersao,
    ];

    /// Key under `campos`
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::AptidoesRotina => "aptidoes_rotina",
            Self::CompetenciasFortalecer => "competencias_fortalecer",
            Self::ImpressaoServico => "impressao_servico",
            Self::MomentoImersao => "momento_imersao",
        }
    }

    /// Question shown to readers
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AptidoesRotina => "Expectativas em relação ao PMM-e",
            Self::CompetenciasFortalecer => "Considera apto para atuação",
            Self::ImpressaoServico => "Impressão sobre o serviço",
            Self::MomentoImersao => "Expectativas para imersão",
        }
    }
}

impl fmt::Display for QualitativeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Sentiment breakdown of one field
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Sentiments {
    /// Label → count
    #[serde(default)]
    pub distribuicao: CategoryCounts,
}

/// Analysis of one free-text field
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FieldAnalysis {
    #[serde(default)]
    pub sentimentos: Sentiments,
    /// Textual summary
    #[serde(default)]
    pub resumo: Option<String>,
    /// Pre-rendered word-cloud image
    #[serde(default)]
    pub nuvem_palavras: Option<PathBuf>,
}

/// Whole qualitative results document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QualitativeResults {
    #[serde(default)]
    pub campos: BTreeMap<String, FieldAnalysis>,
}

impl QualitativeResults {
    /// Load the results, or `None` if the file does not exist
    ///
    /// A file that exists but cannot be decoded is still an error.
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        match read_json(path, "qualitative analysis") {
            Ok(results) => Ok(Some(results)),
            Err(e) if e.is_not_found() => {
                log_warning(
                    "Qualitative analysis results not found, qualitative section will be empty",
                    Some(path),
                );
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Analysis for one field, if present
    #[must_use]
    pub fn field(&self, field: QualitativeField) -> Option<&FieldAnalysis> {
        self.campos.get(field.key())
    }
}
