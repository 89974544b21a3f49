//! Rendering tests
//!
//! Draws the canvas into a test backend and asserts on the produced
//! buffer: every section title appears, rendering is idempotent, and
//! the expanded cell reveals its annotations.

use canvex::canvas::content::{SectionId, SECTIONS};
use canvex::ui::theme::Theme;
use canvex::ui::{render, App};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// Wide enough that no cell title is clipped by its block border.
const TEST_WIDTH: u16 = 170;
const TEST_HEIGHT: u16 = 50;

fn create_test_app() -> App {
    App::new(Theme::default_theme().clone())
}

fn draw(app: &App) -> Buffer {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    let mut terminal = Terminal::new(backend).expect("create terminal");
    terminal.draw(|f| render(f, app)).expect("draw");
    terminal.backend().buffer().clone()
}

fn buffer_text(buffer: &Buffer) -> String {
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                text.push_str(cell.symbol());
            }
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_all_section_titles_rendered() {
    let app = create_test_app();
    let text = buffer_text(&draw(&app));

    for section in &SECTIONS {
        let title = section.title.to_uppercase();
        assert!(text.contains(&title), "missing section title: {title}");
    }
}

#[test]
fn test_header_and_footer_rendered() {
    let app = create_test_app();
    let text = buffer_text(&draw(&app));

    assert!(text.contains("CardEx"));
    assert!(text.contains("LEAN CANVAS"));
    assert!(text.contains("$12B+"));
    assert!(text.contains("Quit"));
}

#[test]
fn test_render_is_idempotent() {
    let app = create_test_app();
    assert_eq!(draw(&app), draw(&app));
}

#[test]
fn test_render_is_idempotent_with_expanded_section() {
    let mut app = create_test_app();
    app.toggle_section(SectionId::RevenueStreams);
    assert_eq!(draw(&app), draw(&app));
}

#[test]
fn test_expanding_changes_output() {
    let mut app = create_test_app();
    let collapsed = draw(&app);

    app.toggle_section(SectionId::Problem);
    let expanded = draw(&app);

    assert_ne!(collapsed, expanded);
}

#[test]
fn test_expanded_section_shows_annotations() {
    let mut app = create_test_app();

    let before = buffer_text(&draw(&app));
    assert!(!before.contains("Alternatives:"));

    app.toggle_section(SectionId::Problem);
    let after = buffer_text(&draw(&app));
    assert!(after.contains("Alternatives:"));
}

#[test]
fn test_collapse_restores_initial_output() {
    let mut app = create_test_app();
    let initial = draw(&app);

    // The cursor starts on Problem and toggling keeps it there, so a
    // double toggle returns to the exact initial state.
    app.toggle_section(SectionId::Problem);
    app.toggle_section(SectionId::Problem);

    assert_eq!(draw(&app), initial);
}

#[test]
fn test_info_modal_overlays_canvas() {
    let mut app = create_test_app();
    app.toggle_info();
    let text = buffer_text(&draw(&app));

    assert!(text.contains("About"));
    assert!(text.contains("cycle color theme"));
}
