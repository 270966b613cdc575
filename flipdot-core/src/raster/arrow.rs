use crate::{
    foundation::core::{Cell, CellIndex, Grid, Vec2},
    raster::{
        Clip,
        line::{bresenham_line, line_cells},
        to_indices,
    },
};

/// Shafts this short or shorter get no head.
const MIN_HEADED_LENGTH: f64 = 3.0;
const MAX_HEAD_SIZE: f64 = 5.0;

/// The two barb end points of an arrow pointing from `from` to `to`, or
/// `None` when the shaft is too short to carry a head.
pub fn arrowhead_barbs(from: Cell, to: Cell) -> Option<(Cell, Cell)> {
    let dir = to.to_vec2() - from.to_vec2();
    let len = dir.hypot();
    if len <= MIN_HEADED_LENGTH {
        return None;
    }

    let n = dir / len;
    let size = (len / 3.0).min(MAX_HEAD_SIZE);
    let perp = Vec2::new(-n.y, n.x);
    let back = to.to_vec2() - n * size;
    let spread = perp * (size * 0.5);

    Some((Cell::from_vec2(back + spread), Cell::from_vec2(back - spread)))
}

/// Shaft from `from` to `to` followed by the two arrowhead strokes.
///
/// Segments are concatenated as drawn, so the end point appears once per
/// segment. Setting cells is idempotent, so callers need not de-duplicate.
pub fn arrow(grid: Grid, from: Cell, to: Cell, clip: Clip) -> Vec<CellIndex> {
    let mut out = bresenham_line(grid, from, to, clip);
    if let Some((left, right)) = arrowhead_barbs(from, to) {
        out.extend(to_indices(grid, line_cells(to, left), clip));
        out.extend(to_indices(grid, line_cells(to, right), clip));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/raster/arrow.rs"]
mod tests;
