use crate::{
    codec::bits::{decode_bits, decode_bits_strict, encode_bits},
    foundation::core::{Cell, CellIndex, Grid},
    foundation::error::{FlipdotError, FlipdotResult},
};

/// Caller-owned monochrome frame: one `bool` per dot, row-major.
///
/// Rasterizers never write here directly. They return offsets, and
/// [`PixelBuffer::apply`] re-validates each one before writing, so unclipped
/// rasterizer output cannot reach outside the buffer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
    grid: Grid,
    cells: Vec<bool>,
}

impl PixelBuffer {
    /// All-off buffer for `grid`.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            cells: vec![false; grid.cell_count()],
        }
    }

    /// Wrap existing cells. The length must match the grid.
    pub fn from_cells(grid: Grid, cells: Vec<bool>) -> FlipdotResult<Self> {
        if cells.len() != grid.cell_count() {
            return Err(FlipdotError::validation(format!(
                "buffer has {} cells, grid {}x{} needs {}",
                cells.len(),
                grid.width,
                grid.height,
                grid.cell_count()
            )));
        }
        Ok(Self { grid, cells })
    }

    /// Lenient decode (see [`decode_bits`]).
    pub fn from_bits(grid: Grid, bits: &str) -> Self {
        Self {
            grid,
            cells: decode_bits(bits, grid.cell_count()),
        }
    }

    /// Decode a bit string that must cover the grid exactly.
    pub fn from_bits_strict(grid: Grid, bits: &str) -> FlipdotResult<Self> {
        Ok(Self {
            grid,
            cells: decode_bits_strict(bits, grid.cell_count())?,
        })
    }

    /// Wire encoding (see [`encode_bits`]).
    pub fn to_bits(&self) -> String {
        encode_bits(&self.cells)
    }

    /// Dimensions of the frame.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// State of `cell`, or `None` off the grid.
    pub fn get(&self, cell: Cell) -> Option<bool> {
        self.grid.checked_index(cell).map(|i| self.cells[i])
    }

    /// Set one cell. Returns `false` (and does nothing) off the grid.
    pub fn set(&mut self, cell: Cell, on: bool) -> bool {
        match self.grid.checked_index(cell) {
            Some(i) => {
                self.cells[i] = on;
                true
            }
            None => false,
        }
    }

    /// Write `on` to every in-range offset in `indices`; returns how many
    /// offsets were in range. Out-of-range offsets are skipped.
    pub fn apply(&mut self, indices: &[CellIndex], on: bool) -> usize {
        let mut written = 0;
        for &i in indices {
            if let Some(slot) = self.grid.slot(i) {
                self.cells[slot] = on;
                written += 1;
            }
        }
        written
    }

    /// Turn every cell off.
    pub fn clear(&mut self) {
        self.fill(false);
    }

    /// Set every cell to `on`.
    pub fn fill(&mut self, on: bool) {
        self.cells.iter_mut().for_each(|c| *c = on);
    }

    /// Flip every cell.
    pub fn invert(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = !*c);
    }

    /// Number of cells that are on.
    pub fn count_on(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// OR-compose `sprite` with its top-left corner at `at`, clipped to this
    /// buffer. Off cells in the sprite leave the destination untouched.
    pub fn blit(&mut self, sprite: &PixelBuffer, at: Cell) {
        for (slot, &on) in sprite.cells.iter().enumerate() {
            if on {
                let c = sprite.grid.cell_at(slot);
                self.set(c.offset(at.x, at.y), true);
            }
        }
    }

    /// Debug rendering: `#` for on, `.` for off, one line per row.
    pub fn to_ascii(&self) -> String {
        let w = self.grid.width as usize;
        let mut s = String::with_capacity(self.cells.len() + self.grid.height as usize);
        for row in self.cells.chunks(w) {
            s.extend(row.iter().map(|&on| if on { '#' } else { '.' }));
            s.push('\n');
        }
        s
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/buffer.rs"]
mod tests;
