use crate::{
    foundation::core::{Cell, CellIndex, Grid},
    raster::{Clip, to_indices},
};

/// Cells of the Bresenham line from `from` to `to`, both endpoints included.
///
/// The walk takes exactly `max(|dx|, |dy|) + 1` steps, advances monotonically
/// along the dominant axis, and consecutive cells differ by at most one in
/// each axis.
pub fn line_cells(from: Cell, to: Cell) -> Vec<Cell> {
    let dx = (i64::from(to.x) - i64::from(from.x)).abs();
    let dy = (i64::from(to.y) - i64::from(from.y)).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };

    let mut out = Vec::with_capacity(dx.max(dy) as usize + 1);
    let mut err = dx - dy;
    let (mut x, mut y) = (from.x, from.y);

    loop {
        out.push(Cell::new(x, y));
        if x == to.x && y == to.y {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
    out
}

/// Linear offsets along the line from `from` to `to`.
///
/// Editors historically call this with [`Clip::None`]; in that mode the
/// caller must clip or pre-validate the endpoints before indexing a buffer.
pub fn bresenham_line(grid: Grid, from: Cell, to: Cell, clip: Clip) -> Vec<CellIndex> {
    to_indices(grid, line_cells(from, to), clip)
}

/// Join sparse pointer samples into one continuous brush stroke.
///
/// Each consecutive pair is connected with [`line_cells`]; the joint cell
/// shared by two segments is emitted once.
pub fn polyline(grid: Grid, points: &[Cell], clip: Clip) -> Vec<CellIndex> {
    let mut cells = Vec::new();
    match points {
        [] => {}
        [only] => cells.push(*only),
        _ => {
            for (i, pair) in points.windows(2).enumerate() {
                let seg = line_cells(pair[0], pair[1]);
                let skip = usize::from(i > 0);
                cells.extend(seg.into_iter().skip(skip));
            }
        }
    }
    to_indices(grid, cells, clip)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/line.rs"]
mod tests;
