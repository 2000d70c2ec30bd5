//! Aggregation of flattened rows into the public dataset
//!
//! Everything produced here is a count, a value series, or a course listing.
//! No identifier, name, raw date or home municipality ever reaches the output.

pub mod counts;
pub mod flows;
pub mod jobs;

use crate::models::dataset::{Dashboard, Maps, PublicDataset};
use crate::models::field::Field;
use crate::models::row::FlatRow;

pub use counts::{category_counts, numeric_series, ordered_counts};
pub use flows::{REGION_STAGES, regional_flow};
pub use jobs::jobs_by_municipality;

/// Columns shown as bar charts on the dashboard
pub const DASHBOARD_CATEGORIES: [Field; 17] = [
    Field::RacaDs,
    Field::SexoDs,
    Field::EstadoCivilDs,
    Field::IdentGeneroDs,
    Field::OrientacaoSexualDs,
    Field::TemNomeSocial,
    Field::AaTipoDs,
    Field::PaisFormacaoDs,
    Field::RmRecCnrmDs,
    Field::TitEspAmbDs,
    Field::Rm1EspMedicaDs,
    Field::Rm2EspMedicaDs,
    Field::Amb1EspMedicaDs,
    Field::Amb2EspMedicaDs,
    Field::CursoNomeLimpo,
    Field::RegiaoNascimento,
    Field::RegiaoVaga,
];

/// Self-assessed appropriation of program topics
pub const APPROPRIATION_FIELDS: [Field; 5] = [
    Field::ApropriacaoRedes,
    Field::ApropriacaoCoordenacao,
    Field::ApropriacaoGestao,
    Field::ApropriacaoEvidencias,
    Field::ExperienciaDigital,
];

/// Columns published as raw value series for histograms
pub const SERIES_FIELDS: [Field; 2] = [Field::Idade, Field::TempoGraduado];

/// State columns used to shade the maps
pub const MAP_STATE_FIELDS: [Field; 4] = [
    Field::RgUfDs,
    Field::EstadoGraduacao,
    Field::UfCrmDs,
    Field::VagaUf,
];

/// Build the public dataset from derived rows
#[must_use]
pub fn aggregate(rows: &[FlatRow]) -> PublicDataset {
    let categories = DASHBOARD_CATEGORIES
        .iter()
        .chain(APPROPRIATION_FIELDS.iter())
        .map(|&field| (field.name().to_string(), category_counts(rows, field)))
        .collect();

    let dashboard = Dashboard {
        categories,
        idade: numeric_series(rows, Field::Idade),
        tempo_graduado: numeric_series(rows, Field::TempoGraduado),
        fluxo_regional: regional_flow(rows),
    };

    let mapas = Maps {
        states: MAP_STATE_FIELDS
            .iter()
            .map(|&field| (field.name().to_string(), category_counts(rows, field)))
            .collect(),
        vagas_por_municipio: jobs_by_municipality(rows),
    };

    log::info!(
        "Aggregated {} rows into {} dashboard and {} map entries",
        rows.len(),
        dashboard.categories.len() + SERIES_FIELDS.len() + 1,
        mapas.states.len() + 1
    );
    PublicDataset { dashboard, mapas }
}
