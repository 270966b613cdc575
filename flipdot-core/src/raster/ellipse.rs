use std::{collections::HashSet, ops::RangeInclusive};

use crate::{
    foundation::core::{Cell, CellIndex, Grid},
    raster::{Clip, to_indices},
};

/// Collects mirrored candidates once each, in first-plotted order.
///
/// With a `keep` grid, candidates outside it are dropped before they are
/// stored, so the memory use of a clipped outline is bounded by the grid.
struct Plotter {
    center: Cell,
    keep: Option<Grid>,
    seen: HashSet<Cell>,
    out: Vec<Cell>,
}

impl Plotter {
    fn new(center: Cell, keep: Option<Grid>) -> Self {
        Self {
            center,
            keep,
            seen: HashSet::new(),
            out: Vec::new(),
        }
    }

    /// Absolute cell at `center + (dx, dy)`. Offsets whose sum leaves the
    /// `i32` coordinate space have no cell and are skipped.
    fn at(&self, dx: i128, dy: i128) -> Option<Cell> {
        let x = i32::try_from(i128::from(self.center.x) + dx).ok()?;
        let y = i32::try_from(i128::from(self.center.y) + dy).ok()?;
        Some(Cell::new(x, y))
    }

    fn plot(&mut self, c: Cell) {
        if self.keep.is_some_and(|g| !g.contains(c)) {
            return;
        }
        if self.seen.insert(c) {
            self.out.push(c);
        }
    }

    fn plot_offset(&mut self, dx: i128, dy: i128) {
        if let Some(c) = self.at(dx, dy) {
            self.plot(c);
        }
    }

    fn plot4(&mut self, x: i128, y: i128) {
        self.plot_offset(x, y);
        self.plot_offset(-x, y);
        self.plot_offset(x, -y);
        self.plot_offset(-x, -y);
    }

    /// Largest `|dx|` that can still land on the kept grid.
    fn reach_x(&self) -> Option<i128> {
        self.keep.map(|g| {
            let cx = i128::from(self.center.x);
            cx.abs().max((i128::from(g.width) - 1 - cx).abs())
        })
    }

    /// Coordinates `c - r ..= c + r` on one axis, narrowed to the kept grid's
    /// `0..len` when there is one and to the `i32` coordinate space otherwise.
    fn span(&self, c: i32, r: u32, len: impl Fn(Grid) -> u32) -> RangeInclusive<i64> {
        let (c, r) = (i64::from(c), i64::from(r));
        let (lo, hi) = match self.keep {
            Some(g) => (0, i64::from(len(g)) - 1),
            None => (i64::from(i32::MIN), i64::from(i32::MAX)),
        };
        (c - r).max(lo)..=(c + r).min(hi)
    }
}

/// Outline cells of the axis-aligned ellipse centred on `center`.
///
/// Zero radii collapse to a point or to a straight segment through the
/// centre. Otherwise the two-region midpoint algorithm is used, so the result
/// is a closed, 8-connected outline that is symmetric about both axes.
///
/// Every candidate is returned, so the output grows with the radii. Cells
/// beyond the `i32` coordinate range are skipped. Use [`ellipse`] with
/// [`Clip::Bounds`] for large radii.
pub fn ellipse_cells(center: Cell, rx: u32, ry: u32) -> Vec<Cell> {
    outline(center, rx, ry, None)
}

fn outline(center: Cell, rx: u32, ry: u32, keep: Option<Grid>) -> Vec<Cell> {
    let mut plotter = Plotter::new(center, keep);

    match (rx, ry) {
        (0, 0) => plotter.plot(center),
        (0, ry) => {
            for y in plotter.span(center.y, ry, |g| g.height) {
                if let Ok(y) = i32::try_from(y) {
                    plotter.plot(Cell::new(center.x, y));
                }
            }
        }
        (rx, 0) => {
            for x in plotter.span(center.x, rx, |g| g.width) {
                if let Ok(x) = i32::try_from(x) {
                    plotter.plot(Cell::new(x, center.y));
                }
            }
        }
        (rx, ry) => midpoint(&mut plotter, i128::from(rx), i128::from(ry)),
    }

    plotter.out
}

fn midpoint(plotter: &mut Plotter, rx: i128, ry: i128) {
    let rx2 = rx * rx;
    let ry2 = ry * ry;
    // x only grows, so once it passes the reach nothing else can land.
    let reach_x = plotter.reach_x().unwrap_or(i128::MAX);

    let mut x = 0i128;
    let mut y = ry;
    let mut px = 0i128;
    let mut py = 2 * rx2 * y;

    // Region 1: |slope| <= 1, stepping x.
    // Midpoint decision values carry a `+ r^2 / 4` term that is either whole
    // or `.25`, so rounding reduces to integer division.
    let mut p = ry2 - rx2 * ry + rx2 / 4;
    while px < py {
        if x > reach_x {
            return;
        }
        plotter.plot4(x, y);
        x += 1;
        px += 2 * ry2;
        if p < 0 {
            p += ry2 + px;
        } else {
            y -= 1;
            py -= 2 * rx2;
            p += ry2 + px - py;
        }
    }

    // Region 2: stepping y down to the major axis.
    p = region2_start(rx2, ry2, x, y);
    while y >= 0 {
        if x > reach_x {
            return;
        }
        plotter.plot4(x, y);
        y -= 1;
        py -= 2 * rx2;
        if p > 0 {
            p += rx2 - py;
        } else {
            x += 1;
            px += 2 * ry2;
            p += rx2 - py + px;
        }
    }
}

/// Decision value at the midpoint `(x + 1/2, y - 1)`.
fn region2_start(rx2: i128, ry2: i128, x: i128, y: i128) -> i128 {
    let exact = || {
        let a = ry2.checked_mul(x.checked_mul(x)?.checked_add(x)?)?;
        let b = rx2.checked_mul((y - 1).checked_mul(y - 1)?.checked_sub(ry2)?)?;
        a.checked_add(b)?.checked_add(ry2 / 4)
    };
    exact().unwrap_or_else(|| {
        // Only radii near `u32::MAX` on both axes get here.
        let (xf, yf) = (x as f64 + 0.5, (y - 1) as f64);
        let (rx2f, ry2f) = (rx2 as f64, ry2 as f64);
        (ry2f * xf * xf + rx2f * (yf * yf - ry2f)).round() as i128
    })
}

/// Linear offsets of an ellipse outline.
///
/// With [`Clip::Bounds`] off-grid candidates are discarded as they are
/// plotted, and the walk stops once the outline has moved past the grid.
/// Any radius is accepted.
pub fn ellipse(grid: Grid, center: Cell, rx: u32, ry: u32, clip: Clip) -> Vec<CellIndex> {
    match clip {
        Clip::Bounds => to_indices(grid, outline(center, rx, ry, Some(grid)), clip),
        Clip::None => to_indices(grid, ellipse_cells(center, rx, ry), clip),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/ellipse.rs"]
mod tests;
