use super::{shipped_catalog, small_catalog};
use crate::components::catalog::{Catalog, RecordIssue};
use crate::components::episode_grid::ResultsLayout;

fn topics(catalog: &Catalog, query: &str) -> Vec<String> {
    catalog
        .filter(query)
        .records(catalog)
        .map(|(_, episode)| episode.topic.clone())
        .collect()
}

#[test]
fn test_shipped_catalog_has_fourteen_episodes() {
    let catalog = shipped_catalog();
    assert_eq!(catalog.len(), 14);
    assert_eq!(catalog.episodes()[0].date, "27-10-2025");
    assert_eq!(catalog.episodes()[6].media_path, "assets/videos/dns to ip.mp4");
    assert!(catalog.audit().is_empty());
}

#[test]
fn test_empty_query_keeps_catalog_order() {
    let catalog = shipped_catalog();
    let all: Vec<usize> = (0..catalog.len()).collect();

    assert_eq!(catalog.filter("").indices(), all.as_slice());
    assert_eq!(catalog.filter("   \t ").indices(), all.as_slice());
}

#[test]
fn test_python_query_matches_case_insensitively() {
    let catalog = shipped_catalog();
    let view = catalog.filter("python");

    assert_eq!(view.indices(), &[1, 2, 3, 4, 7]);
    let found = topics(&catalog, "python");
    assert!(found.iter().any(|t| t.starts_with("Python VM")));
    assert!(found.iter().any(|t| t.starts_with("Python is Value-Typed")));
    assert!(!view.contains(0));
    assert!(!view.contains(5));

    assert_eq!(catalog.filter("PYTHON"), view);
    assert_eq!(catalog.filter("  Python  "), view);
}

#[test]
fn test_date_query_matches_both_entries_for_that_day() {
    let catalog = shipped_catalog();
    let found = topics(&catalog, "17-12-2025");

    assert_eq!(found.len(), 2);
    assert!(found[0].starts_with("Caches"));
    assert!(found[1].starts_with("DNS to IP"));
}

#[test]
fn test_partial_date_matches_substring() {
    let catalog = shipped_catalog();
    let view = catalog.filter("-01-2026");

    assert_eq!(view.indices(), &[11, 12, 13]);
}

#[test]
fn test_no_match_gives_empty_view_and_no_results_layout() {
    let catalog = shipped_catalog();
    let view = catalog.filter("zzz-no-match");

    assert!(view.is_empty());
    assert_eq!(view.len(), 0);
    assert_eq!(ResultsLayout::for_view(&view), ResultsLayout::NoResults);
    assert_eq!(ResultsLayout::for_view(&catalog.filter("")), ResultsLayout::Grid);
}

#[test]
fn test_every_match_satisfies_the_predicate() {
    let catalog = shipped_catalog();
    let queries = [
        "stack", "DNS", "  cache ", "lldb", "2025", "12-2025", "c", "server", "x", "Ssh",
    ];

    for query in queries {
        let view = catalog.filter(query);
        let trimmed = query.trim();
        let needle = trimmed.to_lowercase();

        assert!(view.indices().windows(2).all(|w| w[0] < w[1]), "order for {query:?}");
        for (_, episode) in view.records(&catalog) {
            assert!(
                episode.topic.to_lowercase().contains(&needle) || episode.date.contains(trimmed),
                "{:?} should not match {:?}",
                episode.topic,
                query
            );
        }
        for (index, episode) in catalog.iter().enumerate() {
            if episode.topic.to_lowercase().contains(&needle) || episode.date.contains(trimmed) {
                assert!(view.contains(index), "{:?} missed {:?}", query, episode.topic);
            }
        }
    }
}

#[test]
fn test_filtering_twice_gives_same_view() {
    let catalog = small_catalog();

    assert_eq!(catalog.filter("rust"), catalog.filter("rust"));
    assert_eq!(catalog.filter("rust").indices(), &[0, 2]);
}

#[test]
fn test_date_match_uses_query_as_typed() {
    let catalog = Catalog::new(vec![crate::components::catalog::EpisodeRecord::new(
        "Dec 17", "Weekly sync", "a.m4a",
    )]);

    assert!(catalog.filter("Dec").contains(0));
    assert!(catalog.filter("dec").is_empty());
}

#[test]
fn test_from_json_accepts_file_and_media_path_names() {
    let json = r#"[
        {"date": "01-01-2026", "topic": "One", "file": "one.m4a"},
        {"date": "02-01-2026", "topic": "Two", "mediaPath": "two.mp4"}
    ]"#;
    let catalog = Catalog::from_json(json).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(0).unwrap().media_path, "one.m4a");
    assert_eq!(catalog.get(1).unwrap().media_path, "two.mp4");
}

#[test]
fn test_missing_fields_decode_as_empty_and_are_audited() {
    let json = r#"[
        {"date": "01-01-2026", "file": "one.m4a"},
        {"date": "2026/01/02", "topic": "Two", "file": ""},
        {"topic": "Three", "file": "three.m4a"}
    ]"#;
    let catalog = Catalog::from_json(json).unwrap();
    assert_eq!(catalog.get(0).unwrap().topic, "");

    let issues: Vec<(usize, RecordIssue)> = catalog
        .audit()
        .into_iter()
        .map(|finding| (finding.index, finding.issue))
        .collect();
    assert_eq!(
        issues,
        vec![
            (0, RecordIssue::EmptyTopic),
            (1, RecordIssue::EmptyMediaPath),
            (1, RecordIssue::UnparsableDate("2026/01/02".to_string())),
            (2, RecordIssue::EmptyDate),
        ]
    );

    // audited entries are still shown
    assert_eq!(catalog.filter("").len(), 3);
}

#[test]
fn test_from_json_rejects_non_list() {
    let err = Catalog::from_json(r#"{"date": "01-01-2026"}"#).unwrap_err();
    assert!(err.to_string().contains("catalog data"));
}

#[test]
fn test_records_skip_positions_outside_catalog() {
    let catalog = small_catalog();
    let view = crate::components::catalog::FilteredView::all(5);

    assert_eq!(view.records(&catalog).count(), 3);
}
