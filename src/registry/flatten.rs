//! Record flattening
//!
//! Turns each `RawRecord` into one `FlatRow` by copying a fixed set of members
//! out of every decodable sub-document. A sub-document that is missing or
//! malformed leaves its columns null; it never stops the other records.

use crate::models::raw::{AcademicFormation, PersonalInfo, RawRecord, Section, SelectionLists};
use crate::models::row::FlatRow;
use crate::utils::logging::{create_main_progress_bar, finish_progress_bar};

/// Counters collected while flattening
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlattenStats {
    /// Records processed
    pub records: usize,
    /// Sub-documents that were absent or null
    pub absent_sections: usize,
    /// Sub-documents that were present but could not be decoded
    pub malformed_sections: usize,
}

/// Flatten all records, one row per record in input order
#[must_use]
pub fn flatten_records(records: &[RawRecord], show_progress: bool) -> (Vec<FlatRow>, FlattenStats) {
    let pb = create_main_progress_bar(records.len() as u64, Some("Flattening records"), show_progress);
    let mut stats = FlattenStats::default();

    let rows = records
        .iter()
        .map(|record| {
            let row = flatten_record(record, &mut stats);
            pb.inc(1);
            row
        })
        .collect();

    finish_progress_bar(&pb, Some("Flattening complete"));
    if stats.malformed_sections > 0 {
        log::warn!(
            "{} malformed sub-documents were treated as absent",
            stats.malformed_sections
        );
    }
    (rows, stats)
}

/// Flatten a single record
pub fn flatten_record(record: &RawRecord, stats: &mut FlattenStats) -> FlatRow {
    let mut row = FlatRow::new(record.id.clone());
    stats.records += 1;

    if let Some(info) = track(record, "info_pessoais", record.personal_info(), stats) {
        apply_personal_info(&mut row, info);
    }
    if let Some(formation) = track(record, "formacao_academica", record.academic_formation(), stats) {
        apply_academic_formation(&mut row, formation);
    }
    if let Some(lists) = track(record, "listas_selecao", record.selection_lists(), stats) {
        apply_selection_lists(&mut row, lists);
    }

    row.apropriacao_redes.clone_from(&record.apropriacao_redes);
    row.apropriacao_coordenacao.clone_from(&record.apropriacao_coordenacao);
    row.apropriacao_gestao.clone_from(&record.apropriacao_gestao);
    row.apropriacao_evidencias.clone_from(&record.apropriacao_evidencias);
    row.experiencia_digital.clone_from(&record.apropriacao_economia);

    row
}

fn track<T>(record: &RawRecord, name: &str, section: Section<T>, stats: &mut FlattenStats) -> Option<T> {
    match section {
        Section::Present(content) => Some(content),
        Section::Absent => {
            stats.absent_sections += 1;
            None
        }
        Section::Malformed(reason) => {
            stats.malformed_sections += 1;
            log::warn!("Record {}: ignoring malformed {name}: {reason}", record.id);
            None
        }
    }
}

fn apply_personal_info(row: &mut FlatRow, info: PersonalInfo) {
    row.raca_ds = info.raca_ds;
    row.data_nascimento = info.data_nascimento;
    row.sexo_ds = info.sexo_ds;
    row.estado_civil_ds = info.estado_civil_ds;
    row.ident_genero_ds = info.ident_genero_ds;
    row.orientacao_sexual_ds = info.orientacao_sexual_ds;
    row.nome_social = info.nome_social;
    row.rg_uf_ds = info.rg_uf_ds;
    row.municipio = info.municipio;
}

fn apply_academic_formation(row: &mut FlatRow, formation: AcademicFormation) {
    row.data_formacao = formation.data_formacao;
    row.pais_formacao_ds = formation.pais_formacao_ds;
    row.municipio_formacao = formation.municipio_formacao;
    row.uf_crm_ds = formation.uf_crm_ds;
}

fn apply_selection_lists(row: &mut FlatRow, lists: SelectionLists) {
    row.aa_tipo_ds = lists.aa_tipo_ds;
    row.rm_rec_cnrm_ds = lists.rm_rec_cnrm_ds;
    row.rm_1_esp_medica_ds = lists.rm_1_esp_medica_ds;
    row.rm_2_esp_medica_ds = lists.rm_2_esp_medica_ds;
    row.tit_esp_amb_ds = lists.tit_esp_amb_ds;
    row.amb_1_esp_medica_ds = lists.amb_1_esp_medica_ds;
    row.amb_2_esp_medica_ds = lists.amb_2_esp_medica_ds;

    if let Some(placement) = lists.vaga_principal_jdata {
        row.curso_nome = placement.course_name;
        row.vaga_uf = placement.state;
        row.vaga_municipio = placement.municipality;
    }
}
