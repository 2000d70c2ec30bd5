//! Public aggregate dataset
//!
//! The only artifact the pipeline persists. It holds counts, value series and
//! course listings, never row-level data. Readers treat it as an immutable
//! lookup table keyed by field name.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::error::Result;
use crate::models::field::Field;
use crate::models::types::{Region, Stage};
use crate::utils::io::json::read_json;

/// Category → count mapping, kept in the order it was produced
///
/// Serialized as a JSON object. The aggregator emits entries by descending
/// count, ties in first-seen order; deserialization keeps file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts(Vec<(String, u64)>);

impl CategoryCounts {
    /// Build from already ordered entries
    #[must_use]
    pub const fn from_entries(entries: Vec<(String, u64)>) -> Self {
        Self(entries)
    }

    /// Count recorded for a category
    #[must_use]
    pub fn get(&self, category: &str) -> Option<u64> {
        self.0
            .iter()
            .find(|(key, _)| key == category)
            .map(|(_, count)| *count)
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.iter().map(|(_, count)| count).sum()
    }

    /// Number of distinct categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Largest single count, 0 when empty
    #[must_use]
    pub fn max(&self) -> u64 {
        self.0.iter().map(|(_, count)| *count).max().unwrap_or(0)
    }

    /// Iterate over `(category, count)` in stored order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(key, count)| (key.as_str(), *count))
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, count) in &self.0 {
            map.serialize_entry(category, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategoryCounts {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CountsVisitor;

        impl<'de> Visitor<'de> for CountsVisitor {
            type Value = CategoryCounts;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category counts")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((category, count)) = access.next_entry::<String, u64>()? {
                    entries.push((category, count));
                }
                Ok(CategoryCounts(entries))
            }
        }

        deserializer.deserialize_map(CountsVisitor)
    }
}

/// Count of people in a region at one life-course stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionFlow {
    #[serde(rename = "Momento")]
    pub stage: Stage,
    #[serde(rename = "Região")]
    pub region: Region,
    #[serde(rename = "Quantidade")]
    pub count: u64,
}

/// Courses offered in one municipality through main job placements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MunicipalityJobs {
    #[serde(rename = "vaga_uf")]
    pub state: String,
    #[serde(rename = "vaga_municipio")]
    pub municipality: String,
    /// One entry per placement, duplicates kept
    #[serde(rename = "curso_nome_limpo")]
    pub courses: Vec<String>,
}

/// `dashboard` partition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Category counts keyed by field name
    #[serde(flatten)]
    pub categories: BTreeMap<String, CategoryCounts>,
    /// Non-null ages
    pub idade: Vec<i32>,
    /// Non-null years since graduation
    pub tempo_graduado: Vec<i32>,
    pub fluxo_regional: Vec<RegionFlow>,
}

impl Dashboard {
    /// Category counts for a field
    #[must_use]
    pub fn counts(&self, field: Field) -> Option<&CategoryCounts> {
        self.categories.get(field.name())
    }

    /// Value series for a numeric field
    #[must_use]
    pub fn series(&self, field: Field) -> Option<&[i32]> {
        match field {
            Field::Idade => Some(&self.idade),
            Field::TempoGraduado => Some(&self.tempo_graduado),
            _ => None,
        }
    }
}

/// `mapas` partition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maps {
    /// State counts keyed by field name
    #[serde(flatten)]
    pub states: BTreeMap<String, CategoryCounts>,
    pub vagas_por_municipio: Vec<MunicipalityJobs>,
}

impl Maps {
    /// State counts for a map layer field
    #[must_use]
    pub fn state_counts(&self, field: Field) -> Option<&CategoryCounts> {
        self.states.get(field.name())
    }
}

/// The persisted, de-identified summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicDataset {
    pub dashboard: Dashboard,
    pub mapas: Maps,
}

impl PublicDataset {
    /// Read a dataset previously written by the pipeline
    pub fn load(path: &Path) -> Result<Self> {
        read_json(path, "public dataset")
    }
}
