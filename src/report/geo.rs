//! Map-ready views of the `mapas` partition

use std::fmt;

use crate::algorithm::derivation::geography::{STATES, StateInfo, state_by_code};
use crate::models::dataset::{CategoryCounts, Maps};
use crate::models::field::Field;

/// State-level map layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapLayer {
    BirthState,
    GraduationState,
    CrmState,
    JobState,
}

impl MapLayer {
    pub const ALL: [Self; 4] = [
        Self::BirthState,
        Self::GraduationState,
        Self::CrmState,
        Self::JobState,
    ];

    /// Field whose state counts shade the layer
    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            Self::BirthState => Field::RgUfDs,
            Self::GraduationState => Field::EstadoGraduacao,
            Self::CrmState => Field::UfCrmDs,
            Self::JobState => Field::VagaUf,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::BirthState => "Estado de Nascimento dos Profissionais",
            Self::GraduationState => "Estado de Graduação dos Profissionais",
            Self::CrmState => "Estado do CRM dos Profissionais",
            Self::JobState => "Estado da Vaga Principal",
        }
    }

    /// Only the job layer drills down into municipalities
    #[must_use]
    pub const fn has_municipality_detail(self) -> bool {
        matches!(self, Self::JobState)
    }
}

/// Value for one state on a choropleth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateShade {
    pub state: &'static StateInfo,
    pub value: u64,
}

/// Values for every state of the federation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateShading {
    /// One entry per state, in table order; 0 where there is no data
    pub states: Vec<StateShade>,
    /// Upper end of the color scale (at least 1)
    pub max: u64,
}

/// Shade every state from a state → count mapping
#[must_use]
pub fn state_shading(counts: &CategoryCounts) -> StateShading {
    let states: Vec<StateShade> = STATES
        .iter()
        .map(|state| StateShade {
            state,
            value: counts.get(state.name).unwrap_or(0),
        })
        .collect();

    StateShading {
        states,
        max: counts.max().max(1),
    }
}

/// Errors from municipality drill-down
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeoLookupError {
    /// Two-letter code not in the federation table
    #[error("Sigla de estado inválida: {0}")]
    InvalidStateCode(String),
}

/// Municipalities of one state that received placements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MunicipalityListing {
    pub state: &'static StateInfo,
    /// Municipality name → course names
    pub municipalities: Vec<(String, Vec<String>)>,
}

impl MunicipalityListing {
    /// Courses offered in a municipality, if it had placements
    #[must_use]
    pub fn courses(&self, municipality: &str) -> Option<&[String]> {
        self.municipalities
            .iter()
            .find(|(name, _)| name == municipality)
            .map(|(_, courses)| courses.as_slice())
    }
}

impl fmt::Display for MunicipalityListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Municípios com Vagas - {}", self.state.name)?;
        for (municipality, courses) in &self.municipalities {
            writeln!(f, "  {municipality}")?;
            for course in courses {
                writeln!(f, "    • {course}")?;
            }
        }
        Ok(())
    }
}

/// Municipality placements for a state given by two-letter code
pub fn municipality_jobs(maps: &Maps, state_code: &str) -> Result<MunicipalityListing, GeoLookupError> {
    let state = state_by_code(state_code)
        .ok_or_else(|| GeoLookupError::InvalidStateCode(state_code.to_string()))?;

    let municipalities = maps
        .vagas_por_municipio
        .iter()
        .filter(|jobs| jobs.state == state.name)
        .map(|jobs| (jobs.municipality.clone(), jobs.courses.clone()))
        .collect();

    Ok(MunicipalityListing { state, municipalities })
}
