//! Brazilian state and region lookups
//!
//! One fixed table of the 26 states and the federal district with their
//! two-letter code, full name, IBGE numeric code and macro-region.

use crate::models::types::Region;

/// Separator between city and state code in municipality strings
pub const MUNICIPALITY_SEPARATOR: &str = " - ";

/// One unit of the federation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateInfo {
    /// Two-letter code, e.g. "MG"
    pub code: &'static str,
    /// Full name, e.g. "Minas Gerais"
    pub name: &'static str,
    /// IBGE numeric code, e.g. "31"
    pub ibge_code: &'static str,
    pub region: Region,
}

const fn state(code: &'static str, name: &'static str, ibge_code: &'static str, region: Region) -> StateInfo {
    StateInfo { code, name, ibge_code, region }
}

/// All 27 units of the federation
pub const STATES: [StateInfo; 27] = [
    state("AC", "Acre", "12", Region::Norte),
    state("AL", "Alagoas", "27", Region::Nordeste),
    state("AP", "Amapá", "16", Region::Norte),
    state("AM", "Amazonas", "13", Region::Norte),
    state("BA", "Bahia", "29", Region::Nordeste),
    state("CE", "Ceará", "23", Region::Nordeste),
    state("DF", "Distrito Federal", "53", Region::CentroOeste),
    state("ES", "Espírito Santo", "32", Region::Sudeste),
    state("GO", "Goiás", "52", Region::CentroOeste),
    state("MA", "Maranhão", "21", Region::Nordeste),
    state("MT", "Mato Grosso", "51", Region::CentroOeste),
    state("MS", "Mato Grosso do Sul", "50", Region::CentroOeste),
    state("MG", "Minas Gerais", "31", Region::Sudeste),
    state("PA", "Pará", "15", Region::Norte),
    state("PB", "Paraíba", "25", Region::Nordeste),
    state("PR", "Paraná", "41", Region::Sul),
    state("PE", "Pernambuco", "26", Region::Nordeste),
    state("PI", "Piauí", "22", Region::Nordeste),
    state("RJ", "Rio de Janeiro", "33", Region::Sudeste),
    state("RN", "Rio Grande do Norte", "24", Region::Nordeste),
    state("RS", "Rio Grande do Sul", "43", Region::Sul),
    state("RO", "Rondônia", "11", Region::Norte),
    state("RR", "Roraima", "14", Region::Norte),
    state("SC", "Santa Catarina", "42", Region::Sul),
    state("SP", "São Paulo", "35", Region::Sudeste),
    state("SE", "Sergipe", "28", Region::Nordeste),
    state("TO", "Tocantins", "17", Region::Norte),
];

/// Look up a state by its two-letter code (case-sensitive)
#[must_use]
pub fn state_by_code(code: &str) -> Option<&'static StateInfo> {
    STATES.iter().find(|s| s.code == code)
}

/// Look up a state by its full name
#[must_use]
pub fn state_by_name(name: &str) -> Option<&'static StateInfo> {
    STATES.iter().find(|s| s.name == name)
}

/// Look up a state by its IBGE numeric code, e.g. "31"
#[must_use]
pub fn state_by_ibge_code(ibge_code: &str) -> Option<&'static StateInfo> {
    STATES.iter().find(|s| s.ibge_code == ibge_code)
}

/// State name from a `"<city> - <UF>"` municipality string
#[must_use]
pub fn graduation_state(municipality: Option<&str>) -> Option<&'static str> {
    let code = municipality?.split(MUNICIPALITY_SEPARATOR).nth(1)?.trim();
    state_by_code(code).map(|s| s.name)
}

/// Macro-region of a state given by full name
#[must_use]
pub fn region(state_name: Option<&str>) -> Option<Region> {
    state_by_name(state_name?).map(|s| s.region)
}
