//! # Theme System
//!
//! Provides a centralized color theme system for the Canvex TUI.
//!
//! ## Overview
//!
//! The [`Theme`] struct defines the chrome colors used throughout the UI.
//! Instead of hardcoding `ratatui::style::Color` values, rendering code
//! references theme fields. The active theme can be cycled at runtime with
//! the `t` key and is persisted via [`crate::ui::config`].
//!
//! Section accent colors are part of the canvas content, not the theme:
//! each canvas section carries its own color and keeps it across themes.
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default) - warm, dark pastel theme
//! - **Catppuccin Macchiato** - medium-dark pastel theme
//! - **Dracula** - dark theme with vivid colors
//! - **Nord** - arctic, north-bluish color palette
//! - **Tokyo Night** - dark theme inspired by Tokyo city lights

use ratatui::style::Color;

/// Chrome colors used by the Canvex TUI, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name displayed in the info modal.
    pub name: &'static str,

    // -- Background colors --
    /// Main background color for the canvas.
    pub bg: Color,

    // -- Foreground / text colors --
    /// Primary text color (section items).
    pub fg: Color,
    /// Muted/secondary text (annotations, hints, footer).
    pub fg_dim: Color,

    // -- Accent colors --
    /// Primary accent used for branding and the cursor cell border.
    pub accent: Color,
    /// Secondary accent for stat values and the version tag.
    pub secondary: Color,

    // -- Selection --
    /// Background fill for the expanded cell.
    pub selection_bg: Color,
}

impl Theme {
    /// Return the list of all built-in themes (order = cycle order).
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Catppuccin Mocha).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }
}

// ---------------------------------------------------------------------------
// Built-in theme definitions
// ---------------------------------------------------------------------------

static BUILT_IN_THEMES: [Theme; 5] = [
    // 0 - Catppuccin Mocha (default)
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),           // base
        fg: Color::Rgb(205, 214, 244),        // text
        fg_dim: Color::Rgb(108, 112, 134),    // overlay0
        accent: Color::Rgb(137, 180, 250),    // blue
        secondary: Color::Rgb(249, 226, 175), // yellow
        selection_bg: Color::Rgb(69, 71, 90), // surface1
    },
    // 1 - Catppuccin Macchiato
    Theme {
        name: "Catppuccin Macchiato",
        bg: Color::Rgb(36, 39, 58),            // base
        fg: Color::Rgb(202, 211, 245),         // text
        fg_dim: Color::Rgb(110, 115, 141),     // overlay0
        accent: Color::Rgb(138, 173, 244),     // blue
        secondary: Color::Rgb(238, 212, 159),  // yellow
        selection_bg: Color::Rgb(73, 77, 100), // surface1
    },
    // 2 - Dracula
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(139, 233, 253),    // cyan
        secondary: Color::Rgb(241, 250, 140), // yellow
        selection_bg: Color::Rgb(68, 71, 90),
    },
    // 3 - Nord
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),    // frost
        secondary: Color::Rgb(235, 203, 139), // yellow
        selection_bg: Color::Rgb(67, 76, 94),
    },
    // 4 - Tokyo Night
    Theme {
        name: "Tokyo Night",
        bg: Color::Rgb(26, 27, 38),
        fg: Color::Rgb(169, 177, 214),
        fg_dim: Color::Rgb(86, 95, 137),
        accent: Color::Rgb(122, 162, 247),    // blue
        secondary: Color::Rgb(224, 175, 104), // yellow
        selection_bg: Color::Rgb(41, 46, 66),
    },
];
