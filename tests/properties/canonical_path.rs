//! Property tests for route canonicalisation.

use proptest::prelude::*;

use sidenav::{normalize, routes_match};

fn route_like() -> impl Strategy<Value = String> {
    let segment = prop_oneof![
        Just("index".to_string()),
        Just("fr".to_string()),
        Just(String::new()),
        proptest::string::string_regex("[A-Za-z0-9._-]{1,8}").unwrap(),
    ];
    (any::<bool>(), proptest::collection::vec(segment, 0..6)).prop_map(|(rooted, segments)| {
        let body = segments.join("/");
        if rooted {
            format!("/{body}")
        } else {
            body
        }
    })
}

fn locale() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("fr".to_string())),
        Just(Some(String::new())),
        Just(Some("zh-Hans".to_string())),
        proptest::string::string_regex("[a-z.*+?()]{1,4}").unwrap().prop_map(Some),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: normalising twice equals normalising once.
    #[test]
    fn property_normalize_idempotent(p in route_like(), l in locale()) {
        let once = normalize(&p, l.as_deref());
        prop_assert_eq!(normalize(&once, l.as_deref()), once);
    }

    /// PROPERTY: idempotence also holds for arbitrary text.
    #[test]
    fn property_normalize_idempotent_arbitrary(p in "(?s).{0,64}", l in locale()) {
        let once = normalize(&p, l.as_deref());
        prop_assert_eq!(normalize(&once, l.as_deref()), once);
    }

    /// PROPERTY: no `/index` segment or leading locale survives normalisation.
    #[test]
    fn property_normalize_removes_markers(p in route_like(), l in locale()) {
        let out = normalize(&p, l.as_deref());
        let mut segments = out.split('/');
        let first = segments.next().unwrap_or_default();
        let rest: Vec<&str> = segments.collect();

        prop_assert!(!rest.contains(&"index"));
        if let Some(l) = l.as_deref().filter(|l| !l.is_empty()) {
            if first.is_empty() {
                prop_assert_ne!(rest.first().copied(), Some(l));
            }
        }
    }

    /// PROPERTY: a locale segment below the first level is kept.
    #[test]
    fn property_normalize_keeps_inner_locale(
        p in proptest::string::string_regex("(/[a-h0-9]{1,6}){1,3}").unwrap()
    ) {
        let inner = format!("/fr{p}/fr");
        prop_assert_eq!(normalize(&inner, Some("fr")), format!("{p}/fr"));
    }

    /// PROPERTY: paths with nothing to strip pass through unchanged.
    #[test]
    fn property_normalize_identity_without_markers(
        p in proptest::string::string_regex("(/[a-h0-9]{1,6}){0,5}").unwrap()
    ) {
        prop_assert_eq!(normalize(&p, None), p.clone());
        prop_assert_eq!(normalize(&p, Some("fr")), p);
    }

    /// PROPERTY: a trailing slash never changes whether routes match.
    #[test]
    fn property_routes_match_trailing_slash(
        p in proptest::string::string_regex("(/[a-z]{1,6}){1,4}").unwrap()
    ) {
        let with_slash = format!("{p}/");
        prop_assert!(routes_match(&p, &with_slash));
        prop_assert!(routes_match(&with_slash, &p));
    }
}
