use crate::{
    foundation::core::{Cell, CellIndex, Grid},
    frame::buffer::PixelBuffer,
    raster::{Clip, to_indices},
};

fn normalized(a: Cell, b: Cell) -> (Cell, Cell) {
    (
        Cell::new(a.x.min(b.x), a.y.min(b.y)),
        Cell::new(a.x.max(b.x), a.y.max(b.y)),
    )
}

/// Outline of the axis-aligned rectangle spanned by two opposite corners.
///
/// Corners may be given in any order. Each border cell is emitted once:
/// top row, bottom row, then the two sides without their corners.
pub fn rectangle(grid: Grid, a: Cell, b: Cell, clip: Clip) -> Vec<CellIndex> {
    let (lo, hi) = normalized(a, b);
    let mut cells = Vec::new();
    for x in lo.x..=hi.x {
        cells.push(Cell::new(x, lo.y));
    }
    if hi.y > lo.y {
        for x in lo.x..=hi.x {
            cells.push(Cell::new(x, hi.y));
        }
    }
    for y in (lo.y + 1)..hi.y {
        cells.push(Cell::new(lo.x, y));
        if hi.x > lo.x {
            cells.push(Cell::new(hi.x, y));
        }
    }
    to_indices(grid, cells, clip)
}

/// Every cell inside the rectangle spanned by two corners, row by row.
pub fn filled_rectangle(grid: Grid, a: Cell, b: Cell, clip: Clip) -> Vec<CellIndex> {
    let (lo, hi) = normalized(a, b);
    let cells = (lo.y..=hi.y).flat_map(move |y| (lo.x..=hi.x).map(move |x| Cell::new(x, y)));
    to_indices(grid, cells, clip)
}

/// Paint-bucket fill of the 4-connected region containing `start`.
///
/// The region is every cell reachable from `start` whose state equals the
/// start cell's state. Returns the number of cells changed.
pub fn flood_fill(buffer: &mut PixelBuffer, start: Cell, value: bool) -> usize {
    let Some(target) = buffer.get(start) else {
        return 0;
    };
    if target == value {
        return 0;
    }

    let mut changed = 0;
    let mut stack = vec![start];
    while let Some(c) = stack.pop() {
        if buffer.get(c) != Some(target) {
            continue;
        }
        buffer.set(c, value);
        changed += 1;
        stack.extend([c.offset(1, 0), c.offset(-1, 0), c.offset(0, 1), c.offset(0, -1)]);
    }
    changed
}

#[cfg(test)]
#[path = "../../tests/unit/raster/shapes.rs"]
mod tests;
