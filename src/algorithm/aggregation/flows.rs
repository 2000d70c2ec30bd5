//! Region-by-stage cross-tabulation

use crate::algorithm::aggregation::counts::ordered_counts;
use crate::models::dataset::RegionFlow;
use crate::models::field::Field;
use crate::models::row::FlatRow;
use crate::models::types::Stage;

/// Region column observed at each life-course stage
pub const REGION_STAGES: [(Stage, Field); 4] = [
    (Stage::Nascimento, Field::RegiaoNascimento),
    (Stage::Graduacao, Field::RegiaoGraduacao),
    (Stage::Crm, Field::RegiaoCrm),
    (Stage::Vaga, Field::RegiaoVaga),
];

/// One `{stage, region, count}` entry per region seen at each stage
///
/// Stages come out in life-course order, regions by descending count.
/// Regions nobody reached at a stage are left out, so every count is ≥ 1.
#[must_use]
pub fn regional_flow(rows: &[FlatRow]) -> Vec<RegionFlow> {
    REGION_STAGES
        .iter()
        .flat_map(|&(stage, field)| {
            ordered_counts(rows.iter().filter_map(move |row| row.region(field)))
                .into_iter()
                .map(move |(region, count)| RegionFlow { stage, region, count })
        })
        .collect()
}
