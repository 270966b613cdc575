//! Integer rasterization of lines, ellipses, arrows and editor shapes.
//!
//! Every primitive is a pure function of its inputs: it returns cell offsets
//! and leaves applying them to the caller's [`PixelBuffer`](crate::PixelBuffer).

pub(crate) mod arrow;
pub(crate) mod ellipse;
pub(crate) mod line;
pub(crate) mod shapes;

use crate::foundation::core::{Cell, CellIndex, Grid};

/// Whether a rasterizer drops cells that fall outside the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Clip {
    /// Discard cells outside `[0, width) x [0, height)`.
    #[default]
    Bounds,
    /// Emit every offset as computed. Offsets may be negative, and an x past
    /// the right edge aliases into the next row.
    None,
}

pub(crate) fn to_indices(grid: Grid, cells: impl IntoIterator<Item = Cell>, clip: Clip) -> Vec<CellIndex> {
    cells
        .into_iter()
        .filter(|&c| clip == Clip::None || grid.contains(c))
        .map(|c| grid.index(c))
        .collect()
}
