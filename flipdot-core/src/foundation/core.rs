use crate::foundation::error::{FlipdotError, FlipdotResult};

pub use kurbo::Vec2;

/// Linear cell offset `y * width + x` into a row-major buffer.
///
/// Signed so that unclipped rasterizer output can be represented as computed,
/// including offsets left of column 0 or above row 0.
pub type CellIndex = i64;

/// Dimensions of a monochrome dot matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Grid {
    /// Columns.
    pub width: u32,
    /// Rows.
    pub height: u32,
}

impl Grid {
    /// 84×28 panel.
    pub const LARGE: Self = Self {
        width: 84,
        height: 28,
    };

    /// 80×20 panel.
    pub const SMALL: Self = Self {
        width: 80,
        height: 20,
    };

    /// Grid of `width` x `height` cells; both must be at least 1.
    pub fn new(width: u32, height: u32) -> FlipdotResult<Self> {
        let grid = Self { width, height };
        grid.validate()?;
        Ok(grid)
    }

    /// Reject empty grids, including ones built as struct literals.
    pub fn validate(self) -> FlipdotResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FlipdotError::validation(format!(
                "grid must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// `width * height`.
    pub fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether `cell` lies on the grid.
    pub fn contains(self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.width && (cell.y as u32) < self.height
    }

    /// Row-major offset of `cell`, with no bounds check.
    pub fn index(self, cell: Cell) -> CellIndex {
        i64::from(cell.y) * i64::from(self.width) + i64::from(cell.x)
    }

    /// Offset of `cell` if it lies on the grid.
    pub fn checked_index(self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| self.index(cell) as usize)
    }

    /// Convert a linear offset back into an in-bounds buffer slot.
    pub fn slot(self, index: CellIndex) -> Option<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.cell_count())
    }

    /// Cell stored at buffer slot `slot`.
    pub fn cell_at(self, slot: usize) -> Cell {
        let w = self.width as usize;
        Cell::new((slot % w) as i32, (slot / w) as i32)
    }

    /// Middle cell, rounding down.
    pub fn center(self) -> Cell {
        Cell::new((self.width / 2) as i32, (self.height / 2) as i32)
    }
}

/// Integer grid coordinate. May lie off the grid.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Cell {
    /// Column, growing right.
    pub x: i32,
    /// Row, growing down.
    pub y: i32,
}

impl Cell {
    /// Cell at column `x`, row `y`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Nearest cell to a continuous position (half away from zero).
    pub fn from_vec2(v: Vec2) -> Self {
        Self::new(v.x.round() as i32, v.y.round() as i32)
    }

    /// The cell as a continuous position.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(f64::from(self.x), f64::from(self.y))
    }

    /// This cell moved by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Zero-based frame number.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open range of frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame in the range.
    pub start: FrameIndex,
    /// First frame after the range.
    pub end: FrameIndex,
}

impl FrameRange {
    /// Range `start..end`; `start` must not exceed `end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> FlipdotResult<Self> {
        if start.0 > end.0 {
            return Err(FlipdotError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames in the range.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// Whether the range holds no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Whether `f` falls inside the range.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }
}

/// Frame rate as the rational `num / den` frames per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator; must be > 0.
    pub num: u32,
    /// Denominator; must be > 0.
    pub den: u32,
}

impl Fps {
    /// Validated frame rate.
    pub fn new(num: u32, den: u32) -> FlipdotResult<Self> {
        let fps = Self { num, den };
        fps.validate()?;
        Ok(fps)
    }

    /// Reject a zero numerator or denominator.
    pub fn validate(self) -> FlipdotResult<()> {
        if self.den == 0 {
            return Err(FlipdotError::validation("Fps den must be > 0"));
        }
        if self.num == 0 {
            return Err(FlipdotError::validation("Fps num must be > 0"));
        }
        Ok(())
    }

    /// Seconds between two frames.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Wall-clock offset of frame `frame`, floored to whole milliseconds.
    pub fn frame_to_ms(self, frame: FrameIndex) -> u64 {
        let n = u128::from(frame.0) * 1000 * u128::from(self.den) / u128::from(self.num);
        u64::try_from(n).unwrap_or(u64::MAX)
    }
}

/// Timing handed to an animation for a single frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTiming {
    /// Seconds since the previous frame; zero on the first frame.
    pub delta_time_secs: f64,
    /// Milliseconds since playback started.
    pub elapsed_ms: u64,
}

impl FrameTiming {
    /// Timing with the given delta and elapsed time.
    pub fn new(delta_time_secs: f64, elapsed_ms: u64) -> Self {
        Self {
            delta_time_secs,
            elapsed_ms,
        }
    }

    /// Elapsed time in seconds.
    pub fn elapsed_secs(self) -> f64 {
        self.elapsed_ms as f64 / 1000.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
