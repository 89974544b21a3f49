//! # Grid Geometry
//!
//! Maps the nine canvas sections onto a 5-column by 3-row terminal grid,
//! mirroring the classic Lean Canvas arrangement. All functions here are
//! pure: the renderer uses them to place cells, and the event loop reuses
//! the same math to hit-test mouse clicks and move the keyboard cursor.

use crate::canvas::content::SectionId;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Number of column tracks in the canvas grid.
const GRID_COLS: usize = 5;
/// Number of row tracks in the canvas grid.
const GRID_ROWS: usize = 3;

/// Placement of one section in the grid, in track coordinates.
#[derive(Debug, Clone, Copy)]
struct Slot {
    id: SectionId,
    col: usize,
    row: usize,
    col_span: usize,
    row_span: usize,
}

/// Grid placements, in reading order (left to right, top to bottom).
static GRID: [Slot; 9] = [
    Slot { id: SectionId::Problem, col: 0, row: 0, col_span: 1, row_span: 2 },
    Slot { id: SectionId::Solution, col: 1, row: 0, col_span: 1, row_span: 1 },
    Slot { id: SectionId::UniqueValueProp, col: 2, row: 0, col_span: 1, row_span: 2 },
    Slot { id: SectionId::UnfairAdvantage, col: 3, row: 0, col_span: 1, row_span: 1 },
    Slot { id: SectionId::CustomerSegments, col: 4, row: 0, col_span: 1, row_span: 2 },
    Slot { id: SectionId::KeyMetrics, col: 1, row: 1, col_span: 1, row_span: 1 },
    Slot { id: SectionId::Channels, col: 3, row: 1, col_span: 1, row_span: 1 },
    Slot { id: SectionId::CostStructure, col: 0, row: 2, col_span: 2, row_span: 1 },
    Slot { id: SectionId::RevenueStreams, col: 2, row: 2, col_span: 3, row_span: 1 },
];

/// Cursor movement direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Left,
    Right,
    Up,
    Down,
}

/// Split the full frame into (header, canvas, footer) areas.
pub fn screen_chunks(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Header
            Constraint::Min(0),    // Canvas grid
            Constraint::Length(2), // Footer
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

fn row_tracks(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(36),
            Constraint::Percentage(36),
            Constraint::Min(0),
        ])
        .split(area)
        .to_vec()
}

fn col_tracks(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, GRID_COLS as u32); GRID_COLS])
        .split(area)
        .to_vec()
}

/// Compute the screen rect for each section within `area`, in reading
/// order. Spanning cells are unions of the underlying row/column tracks.
pub fn grid_rects(area: Rect) -> Vec<(SectionId, Rect)> {
    let rows = row_tracks(area);
    let cols = col_tracks(area);

    GRID.iter()
        .map(|slot| {
            let top = rows[slot.row];
            let bottom = rows[slot.row + slot.row_span - 1];
            let left = cols[slot.col];
            let right = cols[slot.col + slot.col_span - 1];
            let rect = Rect {
                x: left.x,
                y: top.y,
                width: (right.x + right.width).saturating_sub(left.x),
                height: (bottom.y + bottom.height).saturating_sub(top.y),
            };
            (slot.id, rect)
        })
        .collect()
}

/// Hit-test a terminal coordinate against the canvas grid. Returns `None`
/// outside the grid area.
pub fn section_at(column: u16, row: u16, area: Rect) -> Option<SectionId> {
    let pos = Position::new(column, row);
    grid_rects(area)
        .into_iter()
        .find(|(_, rect)| rect.contains(pos))
        .map(|(id, _)| id)
}

fn slot(id: SectionId) -> &'static Slot {
    // GRID covers every SectionId, so the search is total.
    GRID.iter()
        .find(|s| s.id == id)
        .unwrap_or(&GRID[0])
}

fn reading_order_step(id: SectionId, delta: isize) -> SectionId {
    let pos = GRID
        .iter()
        .position(|s| s.id == id)
        .unwrap_or_default() as isize;
    let len = GRID.len() as isize;
    let next = (pos + delta).rem_euclid(len);
    GRID[next as usize].id
}

/// The section the cursor lands on when moving from `id` in `nav`
/// direction. Left/right walk reading order with wraparound; up/down move
/// between rows, picking the cell with the greatest column overlap.
pub fn neighbor(id: SectionId, nav: Nav) -> SectionId {
    match nav {
        Nav::Left => reading_order_step(id, -1),
        Nav::Right => reading_order_step(id, 1),
        Nav::Up | Nav::Down => {
            let from = slot(id);
            let target_row = match nav {
                Nav::Up => (from.row + GRID_ROWS - 1) % GRID_ROWS,
                _ => (from.row + from.row_span) % GRID_ROWS,
            };
            vertical_neighbor(from, target_row)
        }
    }
}

fn col_overlap(a: &Slot, b: &Slot) -> usize {
    let start = a.col.max(b.col);
    let end = (a.col + a.col_span).min(b.col + b.col_span);
    end.saturating_sub(start)
}

fn vertical_neighbor(from: &Slot, target_row: usize) -> SectionId {
    GRID.iter()
        .filter(|s| s.row <= target_row && target_row < s.row + s.row_span)
        .filter(|s| s.id != from.id)
        .max_by_key(|s| (col_overlap(from, *s), std::cmp::Reverse(s.col)))
        .map(|s| s.id)
        .unwrap_or(from.id)
}
