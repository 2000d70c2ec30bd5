use crate::utils::{full_record, test_config, write_export};
use pmme_dados::models::{QualitativeField, Region, Stage};
use pmme_dados::report::{
    GeoLookupError, MapLayer, QualitativeView, municipality_jobs, qualitative_view,
    ranked_categories, regional_flow_by_region, state_shading,
};
use pmme_dados::{Field, Pipeline, PublicDataset, QualitativeResults};

fn build_dataset(dir: &std::path::Path) -> PublicDataset {
    write_export(
        dir,
        &[
            full_record(1, "Macho", "Bahia", ("1. Aprimoramento em Pediatria", "Bahia", "Salvador")),
            full_record(2, "Feminino", "Pará", ("2. Aprimoramento em Geriatria", "Pará", "Belém")),
            full_record(3, "Feminino", "Pará", ("2. Aprimoramento em Geriatria", "Pará", "Santarém")),
        ],
    );
    let summary = Pipeline::new(test_config(dir)).run().unwrap();
    PublicDataset::load(&summary.output_path).unwrap()
}

#[test]
fn test_map_views_from_written_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = build_dataset(dir.path());

    let counts = dataset.mapas.state_counts(MapLayer::JobState.field()).unwrap();
    let shading = state_shading(counts);
    assert_eq!(shading.max, 2);
    assert_eq!(shading.states.iter().map(|s| s.value).sum::<u64>(), 3);

    let listing = municipality_jobs(&dataset.mapas, "PA").unwrap();
    let names: Vec<&str> = listing.municipalities.iter().map(|(m, _)| m.as_str()).collect();
    assert_eq!(names, vec!["Belém", "Santarém"]);
    assert_eq!(listing.courses("Belém"), Some(&["Geriatria".to_string()][..]));

    assert!(municipality_jobs(&dataset.mapas, "RS").unwrap().municipalities.is_empty());
    assert_eq!(
        municipality_jobs(&dataset.mapas, "pa"),
        Err(GeoLookupError::InvalidStateCode("pa".into()))
    );
}

#[test]
fn test_chart_views_from_written_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = build_dataset(dir.path());

    let ranked = ranked_categories(dataset.dashboard.counts(Field::SexoDs).unwrap(), 25);
    assert_eq!(ranked[0].category, "Feminino");
    assert_eq!(ranked[0].count, 2);

    let by_region = regional_flow_by_region(&dataset.dashboard.fluxo_regional);
    assert!(by_region[&Region::Sudeste].contains(&(Stage::Graduacao, 3)));
    assert!(by_region[&Region::Norte].contains(&(Stage::Vaga, 2)));
}

#[test]
fn test_missing_qualitative_file_degrades_gracefully() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    let results = QualitativeResults::load_optional(&config.qualitative_path).unwrap();
    assert!(results.is_none());
    for field in QualitativeField::ALL {
        assert!(matches!(
            qualitative_view(results.as_ref(), field),
            QualitativeView::Unavailable { .. }
        ));
    }
}

#[test]
fn test_qualitative_file_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    std::fs::write(
        &config.qualitative_path,
        r#"{"campos": {"impressao_servico": {
            "sentimentos": {"distribuicao": {"Negativo": 1, "Neutro": 3, "Positivo": 5}},
            "resumo": "Boa impressão geral."
        }}}"#,
    )
    .unwrap();

    let results = QualitativeResults::load_optional(&config.qualitative_path).unwrap();
    let view = qualitative_view(results.as_ref(), QualitativeField::ImpressaoServico);
    let QualitativeView::Ready { sentiments, summary, word_cloud } = view else {
        panic!("expected a ready view");
    };
    assert_eq!(
        sentiments.iter().collect::<Vec<_>>(),
        vec![("Positivo", 5), ("Neutro", 3), ("Negativo", 1)]
    );
    assert_eq!(summary, "Boa impressão geral.");
    assert!(word_cloud.is_none());
}
