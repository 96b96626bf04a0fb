//! Property-based tests for URI normalization.
//!
//! Note: `dot_segments` already has property tests over bare paths.
//! This module focuses on whole URIs.

use crate::dot_segments::remove_dot_segments_from_path;
use crate::{normalize_uri, remove_dot_segments, Uri};
use proptest::prelude::*;

fn scheme_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("http".to_string()),
        Just("HTTPS".to_string()),
        Just("Ftp".to_string()),
        "[a-zA-Z][a-zA-Z0-9+.-]{0,6}",
    ]
}

fn host_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9-]{1,10}(\\.[a-zA-Z]{2,5}){0,2}",
        Just("[::1]".to_string()),
        Just("%41b%2ec".to_string()),
    ]
}

fn port_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just(String::new()),
        Just("80".to_string()),
        Just("443".to_string()),
        "[0-9]{1,5}",
    ])
}

fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(String::new()),
            Just(".".to_string()),
            Just("..".to_string()),
            Just("%2E".to_string()),
            Just("%2e%2E".to_string()),
            "[a-zA-Z0-9_~-]{1,6}",
            "%[0-9a-fA-F]{2}",
        ],
        0..8,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|p| format!("/{p}"))
            .collect::<String>()
    })
}

fn uri_strategy() -> impl Strategy<Value = String> {
    (
        scheme_strategy(),
        host_strategy(),
        port_strategy(),
        path_strategy(),
        prop::option::of("[a-zA-Z0-9=&%]{0,8}"),
    )
        .prop_map(|(scheme, host, port, path, query)| {
            let mut uri = format!("{scheme}://{host}");
            if let Some(port) = port {
                uri.push(':');
                uri.push_str(&port);
            }
            uri.push_str(&path);
            if let Some(query) = query {
                uri.push('?');
                uri.push_str(&query);
            }
            uri
        })
        .prop_filter("must parse", |s| Uri::parse(s).is_ok())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        .. ProptestConfig::default()
    })]

    // normalize_uri(normalize_uri(u)) == normalize_uri(u)
    #[test]
    fn normalize_idempotent(input in uri_strategy()) {
        let once = normalize_uri(input.as_str()).unwrap();
        let twice = normalize_uri(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    // Serializing a normalized URI and normalizing again changes nothing
    #[test]
    fn normalize_survives_string_round_trip(input in uri_strategy()) {
        let once = normalize_uri(input.as_str()).unwrap();
        let again = normalize_uri(once.to_string()).unwrap();
        prop_assert_eq!(once, again);
    }

    // remove_dot_segments is idempotent on whole URIs
    #[test]
    fn remove_dot_segments_idempotent(input in uri_strategy()) {
        let once = remove_dot_segments(input.as_str()).unwrap();
        let twice = remove_dot_segments(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    // remove_dot_segments changes only the path
    #[test]
    fn remove_dot_segments_only_touches_path(input in uri_strategy()) {
        let original = Uri::parse(&input).unwrap();
        let result = remove_dot_segments(&original).unwrap();

        prop_assert_eq!(result.scheme(), original.scheme());
        prop_assert_eq!(result.authority(), original.authority());
        prop_assert_eq!(result.query(), original.query());
        prop_assert_eq!(result.fragment(), original.fragment());
        prop_assert_eq!(result.path(), remove_dot_segments_from_path(original.path()));
    }

    // Neither operation modifies its input
    #[test]
    fn inputs_not_mutated(input in uri_strategy()) {
        let original = Uri::parse(&input).unwrap();
        let snapshot = original.clone();
        let _ = normalize_uri(&original).unwrap();
        let _ = remove_dot_segments(&original).unwrap();
        prop_assert_eq!(original, snapshot);
    }

    // The normalized path is never longer than the input path
    #[test]
    fn normalized_path_never_grows(input in uri_strategy()) {
        let original = Uri::parse(&input).unwrap();
        let normalized = normalize_uri(&original).unwrap();
        prop_assert!(normalized.path().len() <= original.path().len());
    }

    // Every output segment appears verbatim among the canonical input's segments
    #[test]
    fn no_invented_segments(input in uri_strategy()) {
        let canonical = Uri::parse(&input).unwrap().canonical().unwrap();
        let normalized = normalize_uri(&canonical).unwrap();
        let available: Vec<&str> = canonical.path().split('/').collect();
        for segment in normalized.path().split('/') {
            prop_assert!(available.contains(&segment), "invented segment {:?}", segment);
        }
    }

    // Scheme and host come out lower-case
    #[test]
    fn scheme_and_host_lowercase(input in uri_strategy()) {
        let normalized = normalize_uri(input.as_str()).unwrap();
        let scheme = normalized.scheme().unwrap();
        prop_assert_eq!(scheme, scheme.to_ascii_lowercase());
        // Hex digits of percent-encodings are the only upper-case allowed
        let host = normalized.host().unwrap();
        let unescaped: String = host
            .split('%')
            .enumerate()
            .map(|(i, part)| if i == 0 { part } else { part.get(2..).unwrap_or("") })
            .collect();
        prop_assert_eq!(unescaped.to_ascii_lowercase(), unescaped);
    }
}
