use spyglass::pipeline::denylist::STASSUN_2017;
use spyglass::pipeline::merge::merge_catalogs;
use spyglass::{CatalogEntry, Denylist, SpyglassError};

fn entry(name: &str, date: &str) -> CatalogEntry {
    CatalogEntry {
        planet_name: name.to_string(),
        pub_date: date.to_string(),
        ..CatalogEntry::default()
    }
}

#[test]
fn test_one_record_per_planet_in_recency_order() {
    let primary = vec![entry("a", "2020-01"), entry("b", "2021-01")];
    let alternate = vec![entry("a", "2019-05"), entry("b", "2018-11-03")];

    let table = merge_catalogs(primary, alternate, &Denylist::empty()).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table[0].planet_name, "b");
    assert_eq!(table[0].pub_date, "2021-01");
    assert_eq!(table[1].planet_name, "a");
    assert_eq!(table[1].pub_date, "2020-01");
}

#[test]
fn test_fields_coalesce_independently() {
    let mut newest = entry("x", "2021-06");
    newest.mass = Some(2.0);
    newest.jmag = Some(10.0);

    let mut middle = entry("x", "2020-02-14");
    middle.mass = Some(1.0);
    middle.radius = Some(1.4);

    let mut oldest = entry("x", "2016-05");
    oldest.radius = Some(9.0);
    oldest.star_eff_temp = Some(5000.0);

    let table = merge_catalogs(vec![newest], vec![middle, oldest], &Denylist::empty()).unwrap();

    assert_eq!(table.len(), 1);
    let planet = &table[0];
    // Each field comes from the most recent record that reports it.
    assert_eq!(planet.mass, Some(2.0));
    assert_eq!(planet.jmag, Some(10.0));
    assert_eq!(planet.radius, Some(1.4));
    assert_eq!(planet.star_eff_temp, Some(5000.0));
    // A field no record reports stays null.
    assert_eq!(planet.kmag, None);
}

#[test]
fn test_denylisted_records_contribute_nothing() {
    let mut clean = entry("y", "2018-01");
    clean.radius = Some(1.0);

    let mut tainted = entry("y", "2022-01");
    tainted.reference = Some(STASSUN_2017.to_string());
    tainted.radius = Some(9.9);

    let mut tainted_only = entry("z", "2022-01");
    tainted_only.reference = Some(STASSUN_2017.to_string());

    let table = merge_catalogs(
        vec![clean, tainted],
        vec![tainted_only],
        &Denylist::default(),
    )
    .unwrap();

    // "z" had only denylisted solutions and is gone entirely; "y" keeps the
    // clean values and the clean publication date.
    assert_eq!(table.len(), 1);
    assert_eq!(table[0].planet_name, "y");
    assert_eq!(table[0].radius, Some(1.0));
    assert_eq!(table[0].pub_date, "2018-01");
}

#[test]
fn test_equal_dates_break_by_ingestion_order() {
    let mut first = entry("t", "2020-01");
    first.radius = Some(1.0);
    let mut second = entry("t", "2020-01");
    second.radius = Some(2.0);

    // Primary rows come before alternate rows at equal dates.
    let table = merge_catalogs(vec![first.clone()], vec![second.clone()], &Denylist::empty())
        .unwrap();
    assert_eq!(table[0].radius, Some(1.0));

    // Within one collection, input order decides.
    let table = merge_catalogs(vec![second, first], vec![], &Denylist::empty()).unwrap();
    assert_eq!(table[0].radius, Some(2.0));
}

#[test]
fn test_unparsable_date_is_fatal_even_when_denylisted() {
    let mut tainted = entry("y", "not a date");
    tainted.reference = Some(STASSUN_2017.to_string());

    let result = merge_catalogs(vec![tainted], vec![], &Denylist::default());
    assert!(matches!(
        result,
        Err(SpyglassError::InvalidPublicationDate(_))
    ));
}
