//! Shared fixtures for integration tests

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use pmme_dados::PipelineConfig;
use serde_json::{Value, json};

/// Evaluation date used by every integration test
pub fn evaluation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 19).unwrap()
}

/// Config reading and writing inside `dir`
pub fn test_config(dir: &Path) -> PipelineConfig {
    PipelineConfig::default()
        .with_input_path(dir.join("dados_anonimizados.json"))
        .with_output_path(dir.join("dados_publicos.json"))
        .with_qualitative_path(dir.join("resultados_analises.json"))
        .with_evaluation_date(evaluation_date())
        .with_progress(false)
}

/// Write a `RECORDS` export to `dir` and return its path
pub fn write_export(dir: &Path, records: &[Value]) -> PathBuf {
    let path = dir.join("dados_anonimizados.json");
    std::fs::write(&path, json!({ "RECORDS": records }).to_string()).unwrap();
    path
}

/// A record with every sub-document populated, sub-documents encoded as JSON strings
pub fn full_record(id: i64, sex: &str, birth_state: &str, job: (&str, &str, &str)) -> Value {
    let (course, state, municipality) = job;
    json!({
        "id": id,
        "info_pessoais": json!({
            "raca_ds": "Parda",
            "data_nascimento": "1990-10-20",
            "sexo_ds": sex,
            "nome_social": "",
            "rg_uf_ds": birth_state,
            "municipio": "Cidade Natal"
        }).to_string(),
        "formacao_academica": json!({
            "data_formacao": "2015-12-10",
            "pais_formacao_ds": "Brasil",
            "municipio_formacao": "Belo Horizonte - MG",
            "uf_crm_ds": "Minas Gerais"
        }).to_string(),
        "listas_selecao": json!({
            "aa_tipo_ds": "Ampla concorrência",
            "rm_rec_cnrm_ds": "Tenho",
            "vaga_principal_jdata": {
                "curso.nome": course,
                "ibge.no_uf": state,
                "ibge.no_municipio": municipality
            }
        }).to_string(),
        "apropriacao_redes": "A",
        "apropriacao_coordenacao": "B",
        "apropriacao_gestao": null,
        "apropriacao_evidencias": "E",
        "apropriacao_economia": "C"
    })
}
