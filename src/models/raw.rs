//! Raw registry records
//!
//! A `RawRecord` is one person's entry in the anonymized export. Three of its
//! members are independently JSON-encoded sub-documents; each is decoded on
//! demand into a [`Section`], which makes absence and corruption explicit
//! instead of collapsing them into silent nulls.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// Top-level shape of the input file
#[derive(Debug, Clone, Deserialize)]
pub struct RawDataset {
    /// All records, in file order; `None` when the key is missing
    #[serde(rename = "RECORDS", default)]
    pub records: Option<Vec<RawRecord>>,
}

/// Record identifier as found in the export (numeric or textual)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Numeric identifier
    Number(i64),
    /// Textual identifier
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One person's unflattened registry entry
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    /// Record identifier
    pub id: RecordId,
    /// JSON-encoded personal information
    #[serde(default)]
    pub info_pessoais: Option<Value>,
    /// JSON-encoded academic formation
    #[serde(default)]
    pub formacao_academica: Option<Value>,
    /// JSON-encoded selection-list data
    #[serde(default)]
    pub listas_selecao: Option<Value>,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub apropriacao_redes: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub apropriacao_coordenacao: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub apropriacao_gestao: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub apropriacao_evidencias: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub apropriacao_economia: Option<String>,
}

impl RawRecord {
    /// Create a record with only an identifier
    #[must_use]
    pub const fn new(id: RecordId) -> Self {
        Self {
            id,
            info_pessoais: None,
            formacao_academica: None,
            listas_selecao: None,
            apropriacao_redes: None,
            apropriacao_coordenacao: None,
            apropriacao_gestao: None,
            apropriacao_evidencias: None,
            apropriacao_economia: None,
        }
    }

    /// Decode the personal information sub-document
    #[must_use]
    pub fn personal_info(&self) -> Section<PersonalInfo> {
        Section::decode(self.info_pessoais.as_ref())
    }

    /// Decode the academic formation sub-document
    #[must_use]
    pub fn academic_formation(&self) -> Section<AcademicFormation> {
        Section::decode(self.formacao_academica.as_ref())
    }

    /// Decode the selection-list sub-document
    #[must_use]
    pub fn selection_lists(&self) -> Section<SelectionLists> {
        Section::decode(self.listas_selecao.as_ref())
    }
}

/// Decoding state of an embedded sub-document
#[derive(Debug, Clone, PartialEq)]
pub enum Section<T> {
    /// Sub-document decoded successfully
    Present(T),
    /// Sub-document missing, null or empty
    Absent,
    /// Sub-document present but undecodable; carries the reason
    Malformed(String),
}

impl<T: DeserializeOwned> Section<T> {
    /// Decode a sub-document that may be JSON text or an inline object
    #[must_use]
    pub fn decode(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::String(text)) if text.trim().is_empty() => Self::Absent,
            Some(Value::String(text)) => match serde_json::from_str::<Value>(text) {
                // Encoded `null` carries no data, same as a missing key
                Ok(Value::Null) => Self::Absent,
                Ok(inner) => Self::from_value(inner),
                Err(e) => Self::Malformed(e.to_string()),
            },
            Some(other) => Self::from_value(other.clone()),
        }
    }

    fn from_value(value: Value) -> Self {
        match value {
            Value::Object(ref map) if map.is_empty() => Self::Absent,
            Value::Object(_) => match serde_json::from_value(value) {
                Ok(section) => Self::Present(section),
                Err(e) => Self::Malformed(e.to_string()),
            },
            other => Self::Malformed(format!("expected an object, found {}", kind(&other))),
        }
    }
}

impl<T> Section<T> {
    /// Borrow the decoded content, treating malformed input as absent
    #[must_use]
    pub fn present(&self) -> Option<&T> {
        match self {
            Self::Present(section) => Some(section),
            Self::Absent | Self::Malformed(_) => None,
        }
    }

    /// Take the decoded content, treating malformed input as absent
    #[must_use]
    pub fn into_present(self) -> Option<T> {
        match self {
            Self::Present(section) => Some(section),
            Self::Absent | Self::Malformed(_) => None,
        }
    }

    /// Whether the sub-document was present but undecodable
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Personal information sub-document (`info_pessoais`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "optional_scalar")]
    pub raca_ds: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub data_nascimento: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub sexo_ds: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub estado_civil_ds: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub ident_genero_ds: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub orientacao_sexual_ds: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub nome_social: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub rg_uf_ds: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub municipio: Option<String>,
}

/// Academic formation sub-document (`formacao_academica`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AcademicFormation {
    #[serde(deserialize_with = "optional_scalar")]
    pub data_formacao: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub pais_formacao_ds: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub municipio_formacao: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub uf_crm_ds: Option<String>,
}

/// Selection-list sub-document (`listas_selecao`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectionLists {
    #[serde(deserialize_with = "optional_scalar")]
    pub aa_tipo_ds: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub rm_rec_cnrm_ds: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub rm_1_esp_medica_ds: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub rm_2_esp_medica_ds: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub tit_esp_amb_ds: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub amb_1_esp_medica_ds: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub amb_2_esp_medica_ds: Option<String>,
    /// Main job placement; an undecodable value is treated as missing
    #[serde(deserialize_with = "lenient_section")]
    pub vaga_principal_jdata: Option<MainPlacement>,
}

/// Main job placement nested in the selection lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MainPlacement {
    /// Course name, usually prefixed with its catalogue number
    #[serde(rename = "curso.nome", deserialize_with = "optional_scalar")]
    pub course_name: Option<String>,
    /// State name of the placement
    #[serde(rename = "ibge.no_uf", deserialize_with = "optional_scalar")]
    pub state: Option<String>,
    /// Municipality name of the placement
    #[serde(rename = "ibge.no_municipio", deserialize_with = "optional_scalar")]
    pub municipality: Option<String>,
}

/// Accept any JSON scalar, carrying numbers and booleans as text
fn optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_section<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(Section::decode(value.as_ref()).into_present())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_encoded_section() {
        let value = json!(r#"{"sexo_ds": "Feminino", "data_nascimento": "1990-05-02", "extra": 1}"#);
        let section = Section::<PersonalInfo>::decode(Some(&value));
        let info = section.present().unwrap();
        assert_eq!(info.sexo_ds.as_deref(), Some("Feminino"));
        assert_eq!(info.data_nascimento.as_deref(), Some("1990-05-02"));
        assert_eq!(info.raca_ds, None);
    }

    #[test]
    fn test_decode_absent_forms() {
        assert_eq!(Section::<PersonalInfo>::decode(None), Section::Absent);
        assert_eq!(Section::<PersonalInfo>::decode(Some(&Value::Null)), Section::Absent);
        assert_eq!(Section::<PersonalInfo>::decode(Some(&json!(""))), Section::Absent);
        assert_eq!(Section::<PersonalInfo>::decode(Some(&json!("null"))), Section::Absent);
        assert_eq!(Section::<PersonalInfo>::decode(Some(&json!("{}"))), Section::Absent);
    }

    #[test]
    fn test_decode_malformed_section() {
        assert!(Section::<PersonalInfo>::decode(Some(&json!("{not json"))).is_malformed());
        assert!(Section::<PersonalInfo>::decode(Some(&json!("[1, 2]"))).is_malformed());
        assert!(Section::<PersonalInfo>::decode(Some(&json!(42))).is_malformed());
    }

    #[test]
    fn test_inline_object_section() {
        let value = json!({"uf_crm_ds": "Bahia", "data_formacao": null});
        let formation = Section::<AcademicFormation>::decode(Some(&value))
            .into_present()
            .unwrap();
        assert_eq!(formation.uf_crm_ds.as_deref(), Some("Bahia"));
        assert_eq!(formation.data_formacao, None);
    }

    #[test]
    fn test_scalars_are_carried_as_text() {
        let record: RawRecord = serde_json::from_value(json!({
            "id": 7,
            "apropriacao_redes": "A",
            "apropriacao_gestao": 3,
            "apropriacao_economia": true
        }))
        .unwrap();
        assert_eq!(record.id, RecordId::Number(7));
        assert_eq!(record.apropriacao_redes.as_deref(), Some("A"));
        assert_eq!(record.apropriacao_gestao.as_deref(), Some("3"));
        assert_eq!(record.apropriacao_economia.as_deref(), Some("true"));
        assert_eq!(record.apropriacao_coordenacao, None);
    }

    #[test]
    fn test_main_placement_dotted_keys() {
        let value = json!(
            r#"{"aa_tipo_ds": "Ampla", "vaga_principal_jdata": {"curso.nome": "1. Aprimoramento em Geriatria", "ibge.no_uf": "Pará", "ibge.no_municipio": "Belém"}}"#
        );
        let lists = Section::<SelectionLists>::decode(Some(&value)).into_present().unwrap();
        let placement = lists.vaga_principal_jdata.unwrap();
        assert_eq!(placement.course_name.as_deref(), Some("1. Aprimoramento em Geriatria"));
        assert_eq!(placement.state.as_deref(), Some("Pará"));
        assert_eq!(placement.municipality.as_deref(), Some("Belém"));
    }

    #[test]
    fn test_bad_main_placement_does_not_spoil_lists() {
        let value = json!(r#"{"aa_tipo_ds": "Cotas", "vaga_principal_jdata": [1]}"#);
        let lists = Section::<SelectionLists>::decode(Some(&value)).into_present().unwrap();
        assert_eq!(lists.aa_tipo_ds.as_deref(), Some("Cotas"));
        assert_eq!(lists.vaga_principal_jdata, None);
    }

    #[test]
    fn test_missing_records_key() {
        let dataset: RawDataset = serde_json::from_value(json!({"OTHER": []})).unwrap();
        assert!(dataset.records.is_none());
    }
}
