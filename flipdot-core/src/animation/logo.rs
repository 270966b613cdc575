use crate::{
    animation::{AnimationRenderer, ease::Ease, ensure_canvas, spec::LogoParams},
    foundation::core::{Cell, FrameTiming, Grid},
    foundation::error::{FlipdotError, FlipdotResult},
    frame::buffer::PixelBuffer,
    raster::{Clip, line::bresenham_line, shapes::rectangle},
    text::font::{GLYPH_HEIGHT, draw_text, text_width},
};

/// Centred logo artwork revealed by a left-to-right wipe, then held.
#[derive(Clone, Debug)]
pub struct Logo {
    grid: Grid,
    sprite: PixelBuffer,
    at: Cell,
    reveal_ms: u64,
    ease: Ease,
}

impl Logo {
    /// Build the logo artwork and centre it on `grid`.
    pub fn new(params: &LogoParams, grid: Grid) -> FlipdotResult<Self> {
        grid.validate()?;
        let sprite = match &params.bitmap {
            Some(bm) => PixelBuffer::from_bits_strict(Grid::new(bm.width, bm.height)?, &bm.bits)?,
            None => framed_text(&params.text)?,
        };
        let sg = sprite.grid();
        let at = Cell::new(
            (grid.width as i32 - sg.width as i32) / 2,
            (grid.height as i32 - sg.height as i32) / 2,
        );
        Ok(Self {
            grid,
            sprite,
            at,
            reveal_ms: params.reveal_ms,
            ease: params.ease,
        })
    }

    /// The artwork before it is placed on the panel.
    pub fn sprite(&self) -> &PixelBuffer {
        &self.sprite
    }

    /// Top-left corner of the artwork on the panel.
    pub fn origin(&self) -> Cell {
        self.at
    }

    /// Number of artwork columns uncovered at `elapsed_ms`.
    pub fn visible_columns(&self, elapsed_ms: u64) -> u32 {
        let width = self.sprite.grid().width;
        if self.reveal_ms == 0 || elapsed_ms >= self.reveal_ms {
            return width;
        }
        let t = self.ease.apply(elapsed_ms as f64 / self.reveal_ms as f64);
        ((t * f64::from(width)).ceil() as u32).min(width)
    }
}

/// Default artwork: `text` inside a one-cell frame with a one-cell margin.
fn framed_text(text: &str) -> FlipdotResult<PixelBuffer> {
    if text.is_empty() {
        return Err(FlipdotError::validation(
            "logo needs either a bitmap or non-empty text",
        ));
    }
    let w = text_width(text) + 4;
    let h = GLYPH_HEIGHT + 4;
    let grid = Grid::new(w, h)?;
    let mut sprite = PixelBuffer::new(grid);
    let frame = rectangle(
        grid,
        Cell::new(0, 0),
        Cell::new(w as i32 - 1, h as i32 - 1),
        Clip::Bounds,
    );
    sprite.apply(&frame, true);
    draw_text(&mut sprite, Cell::new(2, 2), text);
    Ok(sprite)
}

impl AnimationRenderer for Logo {
    fn render(&mut self, canvas: &mut PixelBuffer, timing: FrameTiming) -> FlipdotResult<()> {
        ensure_canvas(self.grid, canvas)?;
        canvas.clear();
        canvas.blit(&self.sprite, self.at);

        let sg = self.sprite.grid();
        let visible = self.visible_columns(timing.elapsed_ms);
        if visible < sg.width {
            let cutoff = self.at.x + visible as i32;
            for y in 0..self.grid.height as i32 {
                for x in cutoff.max(0)..self.grid.width as i32 {
                    canvas.set(Cell::new(x, y), false);
                }
            }
            let edge = bresenham_line(
                self.grid,
                Cell::new(cutoff, self.at.y),
                Cell::new(cutoff, self.at.y + sg.height as i32 - 1),
                Clip::Bounds,
            );
            canvas.apply(&edge, true);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/logo.rs"]
mod tests;
