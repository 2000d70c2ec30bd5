//! Common domain type definitions
//!
//! Enumerations shared by the derivation, aggregation and report layers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Brazilian macro-region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    Norte,
    Nordeste,
    Sudeste,
    Sul,
    #[serde(rename = "Centro-Oeste")]
    CentroOeste,
}

impl Region {
    /// All regions, north to south
    pub const ALL: [Self; 5] = [
        Self::Norte,
        Self::Nordeste,
        Self::Sudeste,
        Self::Sul,
        Self::CentroOeste,
    ];

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Norte => "Norte",
            Self::Nordeste => "Nordeste",
            Self::Sudeste => "Sudeste",
            Self::Sul => "Sul",
            Self::CentroOeste => "Centro-Oeste",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.name() == s)
            .ok_or_else(|| format!("Unknown region: {s}"))
    }
}

/// Life-course stage a region is observed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    /// State of birth
    Nascimento,
    /// State of graduation
    #[serde(rename = "Graduação")]
    Graduacao,
    /// State of medical license registration
    #[serde(rename = "CRM")]
    Crm,
    /// State of the main job placement
    Vaga,
}

impl Stage {
    /// All stages in life-course order
    pub const ALL: [Self; 4] = [Self::Nascimento, Self::Graduacao, Self::Crm, Self::Vaga];

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nascimento => "Nascimento",
            Self::Graduacao => "Graduação",
            Self::Crm => "CRM",
            Self::Vaga => "Vaga",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
