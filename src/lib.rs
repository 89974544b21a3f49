//! Canvex - a terminal Lean Canvas viewer
//!
//! This library provides the core functionality for rendering the CardEx
//! Lean Canvas (a fixed nine-section business-model grid) as an
//! interactive terminal user interface.

pub mod canvas;
pub mod ui;
