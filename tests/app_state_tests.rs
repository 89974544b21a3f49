//! Application state tests
//!
//! Tests for the expand/collapse selection invariants and cursor
//! navigation.

use canvex::canvas::content::SectionId;
use canvex::canvas::layout::Nav;
use canvex::ui::theme::Theme;
use canvex::ui::App;

/// Helper to create a test app with the default theme
fn create_test_app() -> App {
    App::new(Theme::default_theme().clone())
}

#[tokio::test]
async fn test_initial_state_has_no_expanded_section() {
    let app = create_test_app();
    assert_eq!(app.expanded, None);
    for id in SectionId::all() {
        assert!(!app.is_expanded(*id));
    }
}

#[tokio::test]
async fn test_toggle_expands_from_empty() {
    for id in SectionId::all() {
        let mut app = create_test_app();
        app.toggle_section(*id);
        assert_eq!(app.expanded, Some(*id));
    }
}

#[tokio::test]
async fn test_toggle_same_section_collapses() {
    for id in SectionId::all() {
        let mut app = create_test_app();
        app.toggle_section(*id);
        app.toggle_section(*id);
        assert_eq!(app.expanded, None);
    }
}

#[tokio::test]
async fn test_toggle_other_section_replaces_selection() {
    let mut app = create_test_app();
    app.toggle_section(SectionId::Problem);
    app.toggle_section(SectionId::Solution);

    assert_eq!(app.expanded, Some(SectionId::Solution));
    assert!(!app.is_expanded(SectionId::Problem));
}

#[tokio::test]
async fn test_end_to_end_selection_scenario() {
    let mut app = create_test_app();
    assert_eq!(app.expanded, None);

    // Click "Problem" -> expanded
    app.toggle_section(SectionId::Problem);
    assert_eq!(app.expanded, Some(SectionId::Problem));

    // Click "Problem" again -> collapsed
    app.toggle_section(SectionId::Problem);
    assert_eq!(app.expanded, None);

    // Click "Problem" then "Solution" -> only "Solution" expanded
    app.toggle_section(SectionId::Problem);
    app.toggle_section(SectionId::Solution);
    assert_eq!(app.expanded, Some(SectionId::Solution));
}

#[tokio::test]
async fn test_toggle_moves_cursor() {
    let mut app = create_test_app();
    app.toggle_section(SectionId::RevenueStreams);
    assert_eq!(app.cursor, SectionId::RevenueStreams);
}

#[tokio::test]
async fn test_cursor_navigation_does_not_expand() {
    let mut app = create_test_app();
    app.move_cursor(Nav::Right);
    app.move_cursor(Nav::Down);
    assert_eq!(app.expanded, None);
}

#[tokio::test]
async fn test_next_previous_roundtrip() {
    let mut app = create_test_app();
    let start = app.cursor;

    app.next();
    assert_ne!(app.cursor, start);
    app.previous();
    assert_eq!(app.cursor, start);
}

#[tokio::test]
async fn test_next_cycles_through_all_sections() {
    let mut app = create_test_app();
    let mut visited = vec![app.cursor];

    for _ in 0..8 {
        app.next();
        visited.push(app.cursor);
    }

    visited.sort_by_key(|id| id.as_str());
    visited.dedup();
    assert_eq!(visited.len(), 9, "next() should visit every section");
}

#[tokio::test]
async fn test_toggle_cursor_section() {
    let mut app = create_test_app();
    app.next();
    let focused = app.cursor;

    app.toggle_cursor_section();
    assert_eq!(app.expanded, Some(focused));

    app.toggle_cursor_section();
    assert_eq!(app.expanded, None);
}

#[tokio::test]
async fn test_cycle_theme_walks_built_ins() {
    let mut app = create_test_app();
    let first = app.theme.name;

    let mut seen = vec![first];
    for _ in 0..Theme::all().len() - 1 {
        seen.push(app.cycle_theme());
    }
    assert_eq!(seen.len(), Theme::all().len());

    // One more step wraps around to the start.
    assert_eq!(app.cycle_theme(), first);
}
