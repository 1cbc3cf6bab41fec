//! Screen geometry: where the board sits in the window and which cell a
//! pointer position falls on.

use crate::config::{BOARD_HEIGHT, BOARD_WIDTH};

/// Pixel offset of the board's top-left corner.
pub const FIELD_ORIGIN: (u32, u32) = (10, 10);
/// Rendered edge length of one cell.
pub const TILE_SIZE: u32 = 32;

/// Window size needed to show the whole board with its margin.
pub const fn screen_size() -> (u32, u32) {
    (
        BOARD_WIDTH as u32 * TILE_SIZE + FIELD_ORIGIN.0 * 2,
        BOARD_HEIGHT as u32 * TILE_SIZE + FIELD_ORIGIN.1 * 2,
    )
}

/// Top-left pixel of the cell at `(x, y)`.
pub const fn cell_origin(x: usize, y: usize) -> (u32, u32) {
    (
        FIELD_ORIGIN.0 + x as u32 * TILE_SIZE,
        FIELD_ORIGIN.1 + y as u32 * TILE_SIZE,
    )
}

// Tile edges are inclusive on both sides, so a pixel on the seam between two
// tiles resolves to the one with the lower index.
fn axis(px: u32, origin: u32, cells: usize) -> Option<usize> {
    let rel = px.checked_sub(origin)?;
    if rel > cells as u32 * TILE_SIZE {
        return None;
    }
    Some((rel.saturating_sub(1) / TILE_SIZE) as usize)
}

/// Board coordinates under the pointer at `(px, py)`, or `None` off the board.
pub fn cell_at_pixel(px: u32, py: u32) -> Option<(usize, usize)> {
    let x = axis(px, FIELD_ORIGIN.0, BOARD_WIDTH)?;
    let y = axis(py, FIELD_ORIGIN.1, BOARD_HEIGHT)?;
    Some((x, y))
}
