//! Scenario: a localised site where routes carry a locale segment.

use sidenav::{normalize, CurrentRoute, NavigationSession, PageIndex, TreeNode};

use crate::common::*;

fn french_site() -> PageIndex {
    PageIndex::new(vec![TreeNode::folder(
        "guides",
        "/fr/guides/index",
        "Guides",
        [TreeNode::page("intro", "/fr/guides/intro", "Introduction")],
    )])
}

#[test]
fn locale_and_index_are_stripped() {
    assert_eq!(normalize("/fr/guides/index", Some("fr")), "/guides");
}

#[test]
fn localized_route_activates_page() {
    let mut session = NavigationSession::with_defaults(french_site());
    let active = session.navigate(CurrentRoute::localized("/fr/guides/intro", "fr"));

    assert_eq!(active.as_deref(), Some("/fr/guides/intro"));
    assert_eq!(session.current_path(), Some("/guides/intro"));
    assert_eq!(session.locale(), Some("fr"));
    // Entries are keyed by the node's own route.
    assert_eq!(session.expansion().entry("/fr/guides/index"), Some(true));
}

#[test]
fn localized_folder_index_is_active() {
    let mut session = NavigationSession::with_defaults(french_site());
    session.navigate(CurrentRoute::localized("/fr/guides/", "fr"));

    let rows = session.visible_structure();
    assert_eq!(
        row_summary(&rows),
        vec![
            (0, "Guides".to_string(), true, true),
            (1, "Introduction".to_string(), false, false),
        ]
    );
}

#[test]
fn other_locale_matches_nothing() {
    let mut session = NavigationSession::with_defaults(french_site());
    assert_eq!(
        session.navigate(CurrentRoute::localized("/de/guides/intro", "de")),
        None
    );
}

#[test]
fn page_named_like_the_locale_is_reachable() {
    let index = PageIndex::new(vec![TreeNode::folder(
        "docs",
        "/docs",
        "Docs",
        [TreeNode::page("fr", "/docs/fr", "Français")],
    )]);
    let mut session = NavigationSession::with_defaults(index);

    assert_eq!(
        session.navigate(CurrentRoute::localized("/fr/docs/fr", "fr")).as_deref(),
        Some("/docs/fr")
    );
    assert_eq!(
        session.navigate(CurrentRoute::localized("/fr/docs", "fr")).as_deref(),
        Some("/docs")
    );
}
