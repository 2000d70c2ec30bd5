//! Label normalization
//!
//! A fixed, enumerated list of value rewrites observed in the registry.
//! Nothing here generalizes beyond these known cases.

use regex::Regex;
use std::sync::LazyLock;

/// Label for rows with a social name
pub const YES: &str = "Sim";
/// Label for rows without a social name
pub const NO: &str = "Não";

static COURSE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\s*Aprimoramento em\s+").expect("Invalid regex pattern")
});

/// `sexo_ds`: "Macho" becomes "Masculino"
#[must_use]
pub fn normalize_sex(value: Option<String>) -> Option<String> {
    value.map(|v| if v == "Macho" { "Masculino".to_string() } else { v })
}

/// `rm_rec_cnrm_ds`: every "Tenho" becomes "Possuo"
#[must_use]
pub fn normalize_residency(value: Option<String>) -> Option<String> {
    value.map(|v| v.replace("Tenho", "Possuo"))
}

/// "Sim" when a non-blank social name is present, "Não" otherwise
#[must_use]
pub fn has_social_name(value: Option<&str>) -> &'static str {
    match value {
        Some(name) if !name.trim().is_empty() => YES,
        _ => NO,
    }
}

/// Strip a leading "<n>. Aprimoramento em " from a course name
#[must_use]
pub fn clean_course_name(name: Option<&str>) -> Option<String> {
    name.map(|n| COURSE_PREFIX.replace(n, "").into_owned())
}
