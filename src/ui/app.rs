use crate::canvas::content::SectionId;
use crate::canvas::layout::{self, Nav};
use crate::ui::theme::Theme;

/// Transient UI state for one viewer session.
///
/// The only domain state is `expanded`: the identifier of the currently
/// expanded section, or `None`. At most one section is expanded at a time.
/// The cursor is a presentation aid for keyboard navigation and never
/// affects which section is expanded on its own.
pub struct App {
    pub expanded: Option<SectionId>,
    pub cursor: SectionId,
    pub should_quit: bool,
    pub show_info: bool,
    pub theme: Theme,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            expanded: None,
            cursor: SectionId::Problem,
            should_quit: false,
            show_info: false,
            theme,
        }
    }

    /// Toggle a section's expanded state. Expanding a section collapses
    /// any other; toggling the expanded section collapses it.
    pub fn toggle_section(&mut self, id: SectionId) {
        if self.expanded == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id);
        }
        // Keep keyboard focus on whatever was last toggled (mouse included).
        self.cursor = id;
    }

    /// Toggle the section under the keyboard cursor.
    pub fn toggle_cursor_section(&mut self) {
        self.toggle_section(self.cursor);
    }

    pub fn is_expanded(&self, id: SectionId) -> bool {
        self.expanded == Some(id)
    }

    pub fn move_cursor(&mut self, nav: Nav) {
        self.cursor = layout::neighbor(self.cursor, nav);
    }

    /// Move the cursor forward in reading order.
    pub fn next(&mut self) {
        self.move_cursor(Nav::Right);
    }

    /// Move the cursor backward in reading order.
    pub fn previous(&mut self) {
        self.move_cursor(Nav::Left);
    }

    pub fn toggle_info(&mut self) {
        self.show_info = !self.show_info;
    }

    /// Switch to the next built-in theme and return its name, so the
    /// caller can persist the choice.
    pub fn cycle_theme(&mut self) -> &'static str {
        let themes = Theme::all();
        let pos = themes
            .iter()
            .position(|t| t.name == self.theme.name)
            .unwrap_or_default();
        let next = &themes[(pos + 1) % themes.len()];
        self.theme = next.clone();
        next.name
    }
}
