use std::f64::consts::TAU;

use crate::{
    animation::{AnimationRenderer, ensure_canvas, spec::WaveParams},
    foundation::core::{Cell, FrameTiming, Grid},
    foundation::error::{FlipdotError, FlipdotResult},
    frame::buffer::PixelBuffer,
    raster::{Clip, line::polyline},
};

/// A travelling sine wave spanning the full width.
#[derive(Clone, Debug)]
pub struct Wave {
    grid: Grid,
    amplitude: f64,
    wavelength: f64,
    speed: f64,
}

impl Wave {
    /// Validate amplitude, wavelength and speed for `grid`.
    pub fn new(params: &WaveParams, grid: Grid) -> FlipdotResult<Self> {
        grid.validate()?;
        let half = f64::from(grid.height - 1) / 2.0;
        let amplitude = params.amplitude.unwrap_or(half * 0.8);
        if !amplitude.is_finite() || amplitude < 0.0 {
            return Err(FlipdotError::validation("wave amplitude must be >= 0"));
        }
        if !params.wavelength.is_finite() || params.wavelength <= 0.0 {
            return Err(FlipdotError::validation("wave wavelength must be > 0"));
        }
        if !params.speed.is_finite() {
            return Err(FlipdotError::validation("wave speed must be finite"));
        }
        Ok(Self {
            grid,
            amplitude,
            wavelength: params.wavelength,
            speed: params.speed,
        })
    }

    /// Row of the wave in column `x` at time `secs`.
    pub fn row_at(&self, x: u32, secs: f64) -> i32 {
        let mid = f64::from(self.grid.height - 1) / 2.0;
        let phase = TAU * (f64::from(x) / self.wavelength - self.speed * secs);
        (mid - self.amplitude * phase.sin()).round() as i32
    }
}

impl AnimationRenderer for Wave {
    fn render(&mut self, canvas: &mut PixelBuffer, timing: FrameTiming) -> FlipdotResult<()> {
        ensure_canvas(self.grid, canvas)?;
        let secs = timing.elapsed_secs();
        let points: Vec<Cell> = (0..self.grid.width)
            .map(|x| Cell::new(x as i32, self.row_at(x, secs)))
            .collect();
        canvas.clear();
        canvas.apply(&polyline(self.grid, &points, Clip::Bounds), true);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/wave.rs"]
mod tests;
