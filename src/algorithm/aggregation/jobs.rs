//! Job placements grouped by municipality

use itertools::Itertools;

use crate::models::dataset::MunicipalityJobs;
use crate::models::row::FlatRow;

/// Group placements by `(state, municipality)`
///
/// Only rows with a placement state, municipality and cleaned course name
/// take part. Groups are ordered by state then municipality; courses keep
/// row order and duplicates.
#[must_use]
pub fn jobs_by_municipality(rows: &[FlatRow]) -> Vec<MunicipalityJobs> {
    let placements = rows
        .iter()
        .filter_map(|row| {
            Some((
                row.vaga_uf.as_deref()?,
                row.vaga_municipio.as_deref()?,
                row.curso_nome_limpo.as_deref()?,
            ))
        })
        .sorted_by_key(|&(state, municipality, _)| (state, municipality));

    let groups = placements.chunk_by(|&(state, municipality, _)| (state, municipality));
    let jobs: Vec<MunicipalityJobs> = groups
        .into_iter()
        .map(|((state, municipality), group)| MunicipalityJobs {
            state: state.to_string(),
            municipality: municipality.to_string(),
            courses: group.map(|(_, _, course)| course.to_string()).collect(),
        })
        .collect();

    log::debug!("Grouped placements into {} municipalities", jobs.len());
    jobs
}
