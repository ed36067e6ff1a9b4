use std::path::Path;

use facet_core::catalog::{Catalog, CatalogEntryId};
use facet_core::facet::{ClassFormat, ClassMode, ClassSize, Facet, FacetValue};
use facet_core::session::{BrowseSession, UiEvent};
use facet_core::view::{SortKey, Tab};

fn load_catalog() -> Catalog {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog.json");
    Catalog::from_path(&path).unwrap()
}

fn visible_ids(session: &BrowseSession<'_>) -> Vec<String> {
    session
        .visible()
        .iter()
        .map(|e| e.id.as_str().to_string())
        .collect()
}

fn toggle(id: &str) -> UiEvent {
    UiEvent::ToggleSaved {
        id: CatalogEntryId::from(id),
    }
}

#[test]
fn saved_deep_link_opens_saved_tab() {
    let catalog = load_catalog();

    let mut session = BrowseSession::from_query_param(&catalog, Some("saved"));
    assert_eq!(session.view().active_tab, Tab::Saved);
    assert!(visible_ids(&session).is_empty());

    session.dispatch(toggle("course3"));
    session.dispatch(toggle("course5"));
    assert_eq!(visible_ids(&session), vec!["course3", "course5"]);
    assert_eq!(session.saved_count(), 2);

    session.dispatch(toggle("course3"));
    assert_eq!(visible_ids(&session), vec!["course5"]);
    assert!(!session.is_saved(&CatalogEntryId::from("course3")));
}

#[test]
fn other_deep_links_open_all() {
    let catalog = load_catalog();
    let session = BrowseSession::from_query_param(&catalog, Some("new"));
    assert_eq!(session.view().active_tab, Tab::All);
    assert_eq!(visible_ids(&session).len(), 6);
}

#[test]
fn facet_change_engages_filters_and_reconciles() {
    let catalog = load_catalog();
    let mut session = BrowseSession::new(&catalog);
    assert!(!session.view().facets_engaged);

    let view = session.dispatch(UiEvent::FacetChanged {
        change: ClassMode::Offline.into(),
    });
    assert!(view.facets_engaged);
    assert_eq!(view.facets.format(), ClassFormat::Inbound);
    assert_eq!(visible_ids(&session), vec!["course4"]);

    session.dispatch(UiEvent::FacetChanged {
        change: ClassFormat::Outbound.into(),
    });
    assert_eq!(session.view().facets.size(), ClassSize::OneOnOne);
    assert_eq!(visible_ids(&session), vec!["course6"]);
}

#[test]
fn opening_filters_applies_default_selection() {
    let catalog = load_catalog();
    let mut session = BrowseSession::new(&catalog);

    session.dispatch(UiEvent::FiltersOpened);

    // Online / Live / Group
    assert_eq!(visible_ids(&session), vec!["course1"]);
}

#[test]
fn reset_disengages_and_restores_defaults() {
    let catalog = load_catalog();
    let mut session = BrowseSession::new(&catalog);
    session.dispatch(UiEvent::FacetChanged {
        change: ClassMode::Offline.into(),
    });

    let view = session.dispatch(UiEvent::FiltersReset);

    assert!(!view.facets_engaged);
    assert_eq!(view.facets.mode(), ClassMode::Online);
    assert_eq!(visible_ids(&session).len(), 6);
}

#[test]
fn options_follow_current_selection() {
    let catalog = load_catalog();
    let mut session = BrowseSession::new(&catalog);

    let online: Vec<FacetValue> = session.options(Facet::Format).values;
    assert_eq!(online, vec![ClassFormat::Live.into(), ClassFormat::Recorded.into()]);

    session.dispatch(UiEvent::FacetChanged {
        change: ClassMode::Offline.into(),
    });
    let offline = session.options(Facet::Format).values;
    assert_eq!(offline, vec![ClassFormat::Inbound.into(), ClassFormat::Outbound.into()]);
}

#[test]
fn query_sort_and_tab_are_last_write_wins() {
    let catalog = load_catalog();
    let mut session = BrowseSession::new(&catalog);

    session.dispatch(UiEvent::QueryChanged { query: "zzz".into() });
    session.dispatch(UiEvent::QueryChanged { query: "e".into() });
    session.dispatch(UiEvent::SortChanged { sort_key: SortKey::Rating });
    session.dispatch(UiEvent::TabChanged { tab: Tab::Completed });
    session.dispatch(UiEvent::TabChanged { tab: Tab::Enrolled });

    assert_eq!(session.view().query, "e");
    // Enrolled: course2 (4.6), course5 (4.5); both contain "e".
    assert_eq!(visible_ids(&session), vec!["course2", "course5"]);
}

#[test]
fn toggling_unknown_id_still_toggles() {
    let catalog = load_catalog();
    let mut session = BrowseSession::new(&catalog);

    session.dispatch(toggle("course99"));

    assert!(session.is_saved(&CatalogEntryId::from("course99")));
    session.dispatch(UiEvent::TabChanged { tab: Tab::Saved });
    assert!(visible_ids(&session).is_empty());
}

#[test]
fn outcome_metadata_tracks_view() {
    let catalog = load_catalog();
    let mut session = BrowseSession::new(&catalog);
    session.dispatch(UiEvent::QueryChanged { query: "python".into() });

    let outcome = session.outcome();

    assert_eq!(outcome.metadata.query, "python");
    assert_eq!(outcome.metadata.entries_matched, 1);
    assert_eq!(outcome.metadata.excluded_by_text, 5);
}
