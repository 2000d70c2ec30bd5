//! Derived columns
//!
//! Row-independent functions that fill in the derived columns of a `FlatRow`.
//! Each derivation is total: bad input produces `None` for that column only.

pub mod dates;
pub mod geography;
pub mod labels;

use chrono::NaiveDate;

use crate::models::row::FlatRow;

/// Fill in every derived column of one row
///
/// `estado_graduacao` is computed before `regiao_graduacao`, which reads it.
pub fn derive_row(row: &mut FlatRow, reference_date: NaiveDate) {
    row.idade = dates::age(row.data_nascimento.as_deref(), reference_date);
    row.tempo_graduado = dates::years_since(row.data_formacao.as_deref(), reference_date);
    row.tem_nome_social = Some(labels::has_social_name(row.nome_social.as_deref()).to_string());
    row.estado_graduacao =
        geography::graduation_state(row.municipio_formacao.as_deref()).map(str::to_string);

    row.sexo_ds = labels::normalize_sex(row.sexo_ds.take());
    row.rm_rec_cnrm_ds = labels::normalize_residency(row.rm_rec_cnrm_ds.take());
    row.curso_nome_limpo = labels::clean_course_name(row.curso_nome.as_deref());

    row.regiao_nascimento = geography::region(row.rg_uf_ds.as_deref());
    row.regiao_graduacao = geography::region(row.estado_graduacao.as_deref());
    row.regiao_crm = geography::region(row.uf_crm_ds.as_deref());
    row.regiao_vaga = geography::region(row.vaga_uf.as_deref());
}

/// Fill in derived columns for all rows
pub fn derive_rows(rows: &mut [FlatRow], reference_date: NaiveDate) {
    for row in rows.iter_mut() {
        derive_row(row, reference_date);
    }
    log::debug!("Derived columns for {} rows at {reference_date}", rows.len());
}
