//! # UI Module
//!
//! This module provides the terminal user interface components for Canvex.
//!
//! ## Components
//!
//! - [`App`] - Application state management (expanded section, cursor, theme)
//! - [`mod@render`] - Rendering functions for drawing the TUI
//! - [`mod@theme`] - Built-in color themes
//! - [`mod@config`] - Persisted user configuration
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │          Header (product, tagline, tags)             │
//! ├──────────┬────────┬──────────┬──────────┬────────────┤
//! │          │Solution│          │  Unfair  │            │
//! │ Problem  ├────────┤   UVP    ├──────────┤  Customer  │
//! │          │  Key   │          │ Channels │  Segments  │
//! │          │Metrics │          │          │            │
//! ├──────────┴────────┼──────────┴──────────┴────────────┤
//! │  Cost Structure   │         Revenue Streams          │
//! ├───────────────────┴──────────────────────────────────┤
//! │          Footer (concept stats, key hints)           │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Features
//!
//! - Grid navigation with arrow keys or hjkl
//! - One section expanded at a time, toggled with Enter or a mouse click
//! - Runtime theme switching, persisted across sessions

pub mod app;
pub mod config;
pub mod render;
pub mod theme;

pub use app::App;
pub use render::render;
