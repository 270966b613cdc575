use crate::{
    animation::{AnimationRenderer, ensure_canvas, spec::TimerParams},
    foundation::core::{Cell, FrameTiming, Grid},
    foundation::error::FlipdotResult,
    frame::buffer::PixelBuffer,
    raster::{Clip, line::bresenham_line},
    text::font::{GLYPH_HEIGHT, draw_text, text_width},
};

/// `MM:SS` clock, counting up from zero or down from a fixed duration.
#[derive(Clone, Debug)]
pub struct Timer {
    grid: Grid,
    params: TimerParams,
}

impl Timer {
    /// Timer for `grid`.
    pub fn new(params: &TimerParams, grid: Grid) -> FlipdotResult<Self> {
        grid.validate()?;
        Ok(Self {
            grid,
            params: params.clone(),
        })
    }

    /// Whole seconds shown at `elapsed_ms`. Countdowns round up, so the
    /// starting value is visible for a full second and `00:00` only appears
    /// once time is up.
    pub fn display_secs(&self, elapsed_ms: u64) -> u64 {
        match self.params.countdown_secs {
            None => elapsed_ms / 1000,
            Some(total) => total
                .saturating_mul(1000)
                .saturating_sub(elapsed_ms)
                .div_ceil(1000),
        }
    }

    /// `MM:SS` text shown at `elapsed_ms`.
    pub fn label(&self, elapsed_ms: u64) -> String {
        let secs = self.display_secs(elapsed_ms);
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    /// Fraction of the bar to fill: progress through the countdown, or
    /// through the current minute when counting up.
    fn progress(&self, elapsed_ms: u64) -> f64 {
        match self.params.countdown_secs {
            Some(0) => 1.0,
            Some(total) => (elapsed_ms as f64 / (total as f64 * 1000.0)).min(1.0),
            None => (elapsed_ms % 60_000) as f64 / 60_000.0,
        }
    }
}

impl AnimationRenderer for Timer {
    fn render(&mut self, canvas: &mut PixelBuffer, timing: FrameTiming) -> FlipdotResult<()> {
        ensure_canvas(self.grid, canvas)?;
        canvas.clear();

        let g = self.grid;
        let label = self.label(timing.elapsed_ms);
        let x = (g.width as i32 - text_width(&label) as i32) / 2;
        let y = (g.height as i32 - GLYPH_HEIGHT as i32) / 2;
        draw_text(canvas, Cell::new(x, y), &label);

        if self.params.progress_bar {
            let filled = (self.progress(timing.elapsed_ms) * f64::from(g.width)).floor() as i32;
            if filled > 0 {
                let row = g.height as i32 - 1;
                let bar = bresenham_line(g, Cell::new(0, row), Cell::new(filled - 1, row), Clip::Bounds);
                canvas.apply(&bar, true);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timer.rs"]
mod tests;
