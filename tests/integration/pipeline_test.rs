use crate::utils::{full_record, test_config, write_export};
use pmme_dados::models::RegionFlow;
use pmme_dados::{Field, Pipeline, PipelineError, PublicDataset};
use serde_json::json;

#[test]
fn test_end_to_end_dataset() {
    let dir = tempfile::tempdir().unwrap();
    write_export(
        dir.path(),
        &[
            full_record(1, "Macho", "Bahia", ("1. Aprimoramento em Pediatria", "Bahia", "Salvador")),
            full_record(2, "Feminino", "Bahia", ("2. Aprimoramento em Geriatria", "Bahia", "Salvador")),
            full_record(3, "Macho", "Pará", ("1. Aprimoramento em Pediatria", "Pará", "Belém")),
            json!({"id": 4, "info_pessoais": "{not json", "apropriacao_redes": "A"}),
        ],
    );

    let summary = Pipeline::new(test_config(dir.path())).run().unwrap();
    assert_eq!(summary.stats.records, 4);
    assert_eq!(summary.stats.malformed_sections, 1);

    let dataset = PublicDataset::load(&summary.output_path).unwrap();
    let dashboard = &dataset.dashboard;

    let sex = dashboard.counts(Field::SexoDs).unwrap();
    assert_eq!(sex.iter().collect::<Vec<_>>(), vec![("Masculino", 2), ("Feminino", 1)]);
    assert_eq!(dashboard.counts(Field::RmRecCnrmDs).unwrap().get("Possuo"), Some(3));
    assert_eq!(dashboard.counts(Field::TemNomeSocial).unwrap().get("Não"), Some(4));
    assert_eq!(dashboard.counts(Field::ApropriacaoRedes).unwrap().get("A"), Some(4));
    assert_eq!(dashboard.counts(Field::ExperienciaDigital).unwrap().get("C"), Some(3));
    assert_eq!(dashboard.series(Field::Idade), Some(&[34, 34, 34][..]));
    assert_eq!(dashboard.series(Field::TempoGraduado), Some(&[9, 9, 9][..]));

    let course = dashboard.counts(Field::CursoNomeLimpo).unwrap();
    assert_eq!(course.get("Pediatria"), Some(2));
    assert_eq!(course.get("Geriatria"), Some(1));

    assert!(dashboard.fluxo_regional.iter().all(|flow| flow.count > 0));
    assert!(dashboard.fluxo_regional.contains(&RegionFlow {
        stage: pmme_dados::models::Stage::Graduacao,
        region: pmme_dados::models::Region::Sudeste,
        count: 3,
    }));

    let graduation = dataset.mapas.state_counts(Field::EstadoGraduacao).unwrap();
    assert_eq!(graduation.get("Minas Gerais"), Some(3));

    let jobs = &dataset.mapas.vagas_por_municipio;
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].state, "Bahia");
    assert_eq!(jobs[0].municipality, "Salvador");
    assert_eq!(jobs[0].courses, vec!["Pediatria".to_string(), "Geriatria".to_string()]);
    assert_eq!(jobs[1].municipality, "Belém");
}

#[test]
fn test_category_totals_never_exceed_records() {
    let dir = tempfile::tempdir().unwrap();
    let records: Vec<_> = (0..20)
        .map(|i| {
            let sex = if i % 3 == 0 { "Macho" } else { "Feminino" };
            full_record(i, sex, "Ceará", ("1. Aprimoramento em Pediatria", "Ceará", "Sobral"))
        })
        .collect();
    write_export(dir.path(), &records);

    let summary = Pipeline::new(test_config(dir.path())).run().unwrap();
    let dataset = PublicDataset::load(&summary.output_path).unwrap();

    for counts in dataset.dashboard.categories.values() {
        assert!(counts.total() <= 20);
    }
    assert_eq!(dataset.dashboard.counts(Field::SexoDs).unwrap().total(), 20);
}

#[test]
fn test_reruns_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    write_export(
        dir.path(),
        &[
            full_record(1, "Macho", "Goiás", ("1. Aprimoramento em Pediatria", "Goiás", "Anápolis")),
            full_record(2, "Feminino", "Acre", ("3. Aprimoramento em Psiquiatria", "Acre", "Rio Branco")),
        ],
    );
    let config = test_config(dir.path());

    Pipeline::new(config.clone()).run().unwrap();
    let first = std::fs::read(&config.output_path).unwrap();
    Pipeline::new(config.clone()).run().unwrap();
    let second = std::fs::read(&config.output_path).unwrap();

    assert_eq!(first, second);
    assert!(String::from_utf8(first).unwrap().contains("Goiás"));
}

#[test]
fn test_output_has_no_row_level_data() {
    let dir = tempfile::tempdir().unwrap();
    let mut record = full_record(7, "Feminino", "Bahia", ("1. Aprimoramento em Pediatria", "Bahia", "Salvador"));
    record["info_pessoais"] = json!(
        json!({"nome_social": "Maria Teste", "municipio": "Cidade Secreta", "data_nascimento": "1977-03-04"})
            .to_string()
    );
    write_export(dir.path(), &[record]);

    let summary = Pipeline::new(test_config(dir.path())).run().unwrap();
    let text = std::fs::read_to_string(&summary.output_path).unwrap();

    assert!(!text.contains("Maria Teste"));
    assert!(!text.contains("Cidade Secreta"));
    assert!(!text.contains("1977-03-04"));
    assert!(!text.contains("2015-12-10"));
}

#[test]
fn test_unknown_state_code_leaves_graduation_state_empty() {
    let dir = tempfile::tempdir().unwrap();
    write_export(
        dir.path(),
        &[json!({
            "id": 1,
            "formacao_academica": json!({"municipio_formacao": "Belo Horizonte - ZZ"}).to_string()
        })],
    );

    let summary = Pipeline::new(test_config(dir.path())).run().unwrap();
    let dataset = PublicDataset::load(&summary.output_path).unwrap();

    assert!(dataset.mapas.state_counts(Field::EstadoGraduacao).unwrap().is_empty());
    assert!(dataset.dashboard.fluxo_regional.is_empty());
}

#[test]
fn test_missing_sub_documents() {
    let dir = tempfile::tempdir().unwrap();
    write_export(
        dir.path(),
        &[json!({"id": "a1", "info_pessoais": null, "formacao_academica": "", "listas_selecao": "{}"})],
    );

    let summary = Pipeline::new(test_config(dir.path())).run().unwrap();
    assert_eq!(summary.stats.absent_sections, 3);
    assert_eq!(summary.stats.malformed_sections, 0);

    let dataset = PublicDataset::load(&summary.output_path).unwrap();
    assert!(dataset.dashboard.idade.is_empty());
    assert!(dataset.mapas.vagas_por_municipio.is_empty());
}

#[test]
fn test_missing_records_key_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    std::fs::write(&config.input_path, r#"{"DADOS": []}"#).unwrap();

    let err = Pipeline::new(config.clone()).run().unwrap_err();
    assert!(matches!(err, PipelineError::MissingRecords(_)));
    assert!(!config.output_path.exists());
}
