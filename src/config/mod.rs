//! Configuration for the aggregation pipeline.

use chrono::{Local, NaiveDate};
use std::fmt;
use std::path::PathBuf;

/// Default location of the anonymized registry export
pub const DEFAULT_INPUT_PATH: &str = "dados_anonimizados.json";
/// Default location of the public aggregate dataset
pub const DEFAULT_OUTPUT_PATH: &str = "dados_publicos.json";
/// Default location of the qualitative analysis results
pub const DEFAULT_QUALITATIVE_PATH: &str = "resultados_analises.json";
/// Number of categories shown in ranked bar data
pub const DEFAULT_TOP_CATEGORIES: usize = 25;

/// Configuration for a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Raw `RECORDS` input file
    pub input_path: PathBuf,
    /// Public dataset output file (overwritten on every run)
    pub output_path: PathBuf,
    /// Optional qualitative analysis results
    pub qualitative_path: PathBuf,
    /// Date ages and years since graduation are evaluated at
    pub evaluation_date: NaiveDate,
    /// Whether to draw a progress bar while flattening
    pub show_progress: bool,
    /// Cap for ranked category listings
    pub top_categories: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            qualitative_path: PathBuf::from(DEFAULT_QUALITATIVE_PATH),
            evaluation_date: Local::now().date_naive(),
            show_progress: true,
            top_categories: DEFAULT_TOP_CATEGORIES,
        }
    }
}

impl PipelineConfig {
    /// Set the input file
    #[must_use]
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Set the output file
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Set the qualitative results file
    #[must_use]
    pub fn with_qualitative_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.qualitative_path = path.into();
        self
    }

    /// Pin the evaluation date
    #[must_use]
    pub const fn with_evaluation_date(mut self, date: NaiveDate) -> Self {
        self.evaluation_date = date;
        self
    }

    /// Enable or disable the progress bar
    #[must_use]
    pub const fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }
}

impl fmt::Display for PipelineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pipeline Configuration:")?;
        writeln!(f, "  Input: {}", self.input_path.display())?;
        writeln!(f, "  Output: {}", self.output_path.display())?;
        writeln!(f, "  Qualitative: {}", self.qualitative_path.display())?;
        writeln!(f, "  Evaluation Date: {}", self.evaluation_date)?;
        writeln!(f, "  Top Categories: {}", self.top_categories)?;
        Ok(())
    }
}
