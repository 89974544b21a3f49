//! # Canvas Module
//!
//! The fixed Lean Canvas content table and its grid geometry.
//!
//! ## Layout
//!
//! The canvas is the classic five-column Lean Canvas arrangement:
//!
//! | Col 1 | Col 2 | Col 3 | Col 4 | Col 5 |
//! |-------|-------|-------|-------|-------|
//! | Problem | Solution | Unique Value Proposition | Unfair Advantage | Customer Segments |
//! | Problem | Key Metrics | Unique Value Proposition | Channels | Customer Segments |
//! | Cost Structure | Cost Structure | Revenue Streams | Revenue Streams | Revenue Streams |
//!
//! Problem, Unique Value Proposition, and Customer Segments span the first
//! two rows; the bottom row is split between Cost Structure and Revenue
//! Streams.
//!
//! Content lives in [`content`] and is embedded at compile time. Geometry
//! (cell rects, mouse hit-testing, cursor movement) lives in [`layout`].

pub mod content;
pub mod layout;

pub use content::{section, Annotation, Section, SectionId, SECTIONS};
pub use layout::{grid_rects, neighbor, screen_chunks, section_at, Nav};
