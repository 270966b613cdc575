use crate::{
    animation::{AnimationRenderer, ensure_canvas, spec::TextScrollParams},
    foundation::core::{Cell, FrameTiming, Grid},
    foundation::error::{FlipdotError, FlipdotResult},
    frame::buffer::PixelBuffer,
    text::font::{GLYPH_HEIGHT, draw_text, text_width},
};

/// Marquee text entering at the right edge and leaving at the left.
#[derive(Clone, Debug)]
pub struct TextScroll {
    grid: Grid,
    text: String,
    speed: f64,
    row: i32,
}

impl TextScroll {
    /// Validate the text and speed for `grid`.
    pub fn new(params: &TextScrollParams, grid: Grid) -> FlipdotResult<Self> {
        grid.validate()?;
        if params.text.is_empty() {
            return Err(FlipdotError::validation("scroll text must not be empty"));
        }
        if !params.speed.is_finite() || params.speed < 0.0 {
            return Err(FlipdotError::validation("scroll speed must be >= 0"));
        }
        let row = params
            .row
            .unwrap_or((grid.height as i32 - GLYPH_HEIGHT as i32) / 2);
        Ok(Self {
            grid,
            text: params.text.clone(),
            speed: params.speed,
            row,
        })
    }

    /// Left edge of the text at `elapsed_ms`. Starts just off the right edge
    /// and wraps once the text has fully left on the left.
    pub fn left_at(&self, elapsed_ms: u64) -> i32 {
        let width = i64::from(self.grid.width);
        let travel = width + i64::from(text_width(&self.text)) + 1;
        let moved = (elapsed_ms as f64 * self.speed / 1000.0).floor() as i64;
        (width - moved.rem_euclid(travel)) as i32
    }
}

impl AnimationRenderer for TextScroll {
    fn render(&mut self, canvas: &mut PixelBuffer, timing: FrameTiming) -> FlipdotResult<()> {
        ensure_canvas(self.grid, canvas)?;
        canvas.clear();
        draw_text(canvas, Cell::new(self.left_at(timing.elapsed_ms), self.row), &self.text);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scroll.rs"]
mod tests;
