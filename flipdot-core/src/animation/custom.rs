use crate::{
    animation::{AnimationRenderer, ensure_canvas, spec::CustomFramesParams},
    foundation::core::{Cell, FrameTiming, Grid},
    foundation::error::{FlipdotError, FlipdotResult},
    frame::buffer::PixelBuffer,
};

/// Hand-drawn frames played back on a fixed cadence instead of computed.
#[derive(Clone, Debug)]
pub struct CustomFrames {
    grid: Grid,
    frames: Vec<PixelBuffer>,
    frame_ms: u64,
    looping: bool,
}

impl CustomFrames {
    /// Decode every frame against `grid`; all must match it exactly.
    pub fn new(params: &CustomFramesParams, grid: Grid) -> FlipdotResult<Self> {
        grid.validate()?;
        if params.frames.is_empty() {
            return Err(FlipdotError::validation("custom_frames needs at least one frame"));
        }
        if params.frame_ms == 0 {
            return Err(FlipdotError::validation("custom_frames frame_ms must be > 0"));
        }
        let frames = params
            .frames
            .iter()
            .enumerate()
            .map(|(i, bits)| {
                PixelBuffer::from_bits_strict(grid, bits)
                    .map_err(|e| FlipdotError::validation(format!("frame {i}: {e}")))
            })
            .collect::<FlipdotResult<Vec<_>>>()?;
        Ok(Self {
            grid,
            frames,
            frame_ms: params.frame_ms,
            looping: params.looping,
        })
    }

    /// Which stored frame is on screen at `elapsed_ms`.
    pub fn frame_at(&self, elapsed_ms: u64) -> usize {
        let n = (elapsed_ms / self.frame_ms) as usize;
        if self.looping {
            n % self.frames.len()
        } else {
            n.min(self.frames.len() - 1)
        }
    }
}

impl AnimationRenderer for CustomFrames {
    fn render(&mut self, canvas: &mut PixelBuffer, timing: FrameTiming) -> FlipdotResult<()> {
        ensure_canvas(self.grid, canvas)?;
        canvas.clear();
        canvas.blit(&self.frames[self.frame_at(timing.elapsed_ms)], Cell::new(0, 0));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/custom.rs"]
mod tests;
