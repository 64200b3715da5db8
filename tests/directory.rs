use careboard::catalog::demo_catalog;
use careboard::directory::{filter_indices, match_ranges, search, SearchCache, Searchable};
use chrono::NaiveDate;

fn catalog() -> careboard::Catalog {
    demo_catalog(42, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()).unwrap()
}

#[test]
fn name_search_finds_a_single_patient() {
    let catalog = catalog();
    let hits = search(catalog.patients(), "ava");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "p3");
}

#[test]
fn id_prefix_matches_every_patient_sharing_it() {
    let catalog = catalog();
    let hits = search(catalog.patients(), "MTC-1122");
    let ids: Vec<&str> = hits.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2", "p3", "p4", "p5", "p6", "p7"]);
}

#[test]
fn blank_query_keeps_everything_in_order() {
    let catalog = catalog();
    let all: Vec<usize> = (0..catalog.patients().len()).collect();
    assert_eq!(filter_indices(catalog.patients(), ""), all);
    assert_eq!(filter_indices(catalog.patients(), "   "), all);
}

#[test]
fn schedule_search_covers_patient_and_doctor() {
    let catalog = catalog();
    let by_doctor = search(catalog.todays_appointments(), "carter");
    let ids: Vec<&str> = by_doctor.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["t-apt1", "t-apt5"]);

    let by_patient = search(catalog.todays_appointments(), "noah");
    assert_eq!(by_patient.len(), 1);
    assert_eq!(by_patient[0].id, "t-apt4");
}

#[test]
fn doctor_search_matches_specialty() {
    let catalog = catalog();
    let hits = search(catalog.doctors(), "CARDIO");
    assert!(!hits.is_empty());
    assert!(hits
        .iter()
        .all(|d| d.specialty.to_lowercase().contains("cardio") || d.name.to_lowercase().contains("cardio")));
}

#[test]
fn cache_tracks_query_changes() {
    let catalog = catalog();
    let mut cache = SearchCache::default();
    cache.reset(catalog.patients());
    assert_eq!(cache.len(), 12);

    assert!(cache.update(catalog.patients(), "liam"));
    assert_eq!(cache.matches(), &[1]);
    assert!(!cache.update(catalog.patients(), "liam"));
}

#[test]
fn highlight_ranges_use_character_positions() {
    assert_eq!(match_ranges("Zoë Zoë", "ë"), vec![(2, 3), (6, 7)]);
    assert!(match_ranges("Ava", " ").is_empty());
}

fn assert_search_partitions<T: Searchable>(records: &[T], query: &str, id: impl Fn(&T) -> &str) {
    let hits = search(records, query);
    let hit_ids: Vec<&str> = hits.iter().map(|record| id(*record)).collect();
    let needle = query.to_lowercase();

    for record in records {
        let contains = query.trim().is_empty()
            || record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
        assert_eq!(
            hit_ids.contains(&id(record)),
            contains,
            "record {} vs query {query:?}",
            id(record)
        );
    }

    let again: Vec<&str> = search(&hits, query).into_iter().map(|record| id(*record)).collect();
    assert_eq!(again, hit_ids, "re-filtering {query:?} changed the result");
}

#[test]
fn search_returns_exactly_the_matching_records_and_is_stable() {
    let catalog = catalog();
    for query in ["ava", "MTC-1122", "0105", "cardio", "zz", ""] {
        assert_search_partitions(catalog.patients(), query, |p| p.id.as_str());
        assert_search_partitions(catalog.doctors(), query, |d| d.id.as_str());
    }
}
