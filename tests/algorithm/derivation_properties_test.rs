use chrono::{Datelike, NaiveDate};
use pmme_dados::algorithm::derivation::dates::{age, whole_years_between};
use pmme_dados::algorithm::derivation::geography::{STATES, graduation_state, region};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_date(rng: &mut StdRng) -> NaiveDate {
    NaiveDate::from_ymd_opt(
        rng.random_range(1930..=2024),
        rng.random_range(1..=12),
        rng.random_range(1..=28),
    )
    .unwrap()
}

#[test]
fn test_age_brackets_reference_date() {
    let mut rng = StdRng::seed_from_u64(42);
    let reference = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();

    for _ in 0..2_000 {
        let birth = random_date(&mut rng);
        let years = whole_years_between(birth, reference);

        let last_birthday = birth.with_year(birth.year() + years).unwrap();
        let next_birthday = birth.with_year(birth.year() + years + 1).unwrap();
        assert!(last_birthday <= reference, "{birth} -> {years}");
        assert!(reference < next_birthday, "{birth} -> {years}");

        let text = birth.format("%Y-%m-%d").to_string();
        assert_eq!(age(Some(&text), reference), Some(years));
    }
}

#[test]
fn test_unparsable_dates_never_produce_age() {
    let reference = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();
    for raw in [
        "",
        "20/10/1990",
        "1990-13-01",
        "1990-02-30",
        "ontem",
        " 1990-01-01",
        "1990-01-01 ",
        "+1990-01-01",
        "-1990-01-01",
    ] {
        assert_eq!(age(Some(raw), reference), None, "{raw:?}");
    }
    assert_eq!(age(None, reference), None);
}

#[test]
fn test_every_state_code_resolves_to_its_region() {
    for state in &STATES {
        let municipality = format!("Capital - {}", state.code);
        assert_eq!(graduation_state(Some(&municipality)), Some(state.name));
        assert_eq!(region(Some(state.name)), Some(state.region));
    }
}

#[test]
fn test_state_extraction_edge_cases() {
    assert_eq!(graduation_state(Some("Belo Horizonte - ZZ")), None);
    assert_eq!(graduation_state(Some("Belo Horizonte")), None);
    assert_eq!(graduation_state(Some("Belo Horizonte - mg")), None);
    assert_eq!(graduation_state(None), None);
}
