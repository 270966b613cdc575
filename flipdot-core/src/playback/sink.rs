use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    foundation::core::{Fps, FrameIndex, Grid},
    foundation::error::FlipdotResult,
    frame::buffer::PixelBuffer,
    frame::preview::{PreviewStyle, render_preview, save_png},
};

/// Configuration provided to a [`FrameSink`] at the start of a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    /// Grid of every pushed frame.
    pub grid: Grid,
    /// Frame clock of the show.
    pub fps: Fps,
    /// Frames the player will step through; fewer may be pushed when
    /// unchanged frames are skipped.
    pub frames: u64,
}

/// Sink contract for consuming rendered frames in playback order.
///
/// Ordering contract: `push_frame` is called in strictly increasing
/// `FrameIndex` order.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> FlipdotResult<()>;
    /// Push one frame in strictly increasing order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &PixelBuffer) -> FlipdotResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> FlipdotResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, PixelBuffer)>,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Frames pushed since the last `begin`.
    pub fn frames(&self) -> &[(FrameIndex, PixelBuffer)] {
        &self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> FlipdotResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &PixelBuffer) -> FlipdotResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> FlipdotResult<()> {
        Ok(())
    }
}

/// Writes each frame as `frame_00000.png`, `frame_00001.png`, … into a
/// directory, named by frame index.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    style: PreviewStyle,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Write previews into `dir`, created on `begin`.
    pub fn new(dir: impl Into<PathBuf>, style: PreviewStyle) -> Self {
        Self {
            dir: dir.into(),
            style,
            written: Vec::new(),
        }
    }

    /// `dir/frame_NNNNN.png` for frame `idx`.
    pub fn frame_path(dir: &Path, idx: FrameIndex) -> PathBuf {
        dir.join(format!("frame_{:05}.png", idx.0))
    }

    /// Files written so far, in push order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, _cfg: SinkConfig) -> FlipdotResult<()> {
        self.style.validate()?;
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir '{}'", self.dir.display()))?;
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &PixelBuffer) -> FlipdotResult<()> {
        let path = Self::frame_path(&self.dir, idx);
        save_png(&render_preview(frame, &self.style)?, &path)?;
        tracing::debug!(frame = idx.0, path = %path.display(), "wrote png");
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> FlipdotResult<()> {
        tracing::info!(
            frames = self.written.len(),
            dir = %self.dir.display(),
            "png sequence complete"
        );
        Ok(())
    }
}

/// Streams raw frames as text, one `<index> <bits>` line per frame.
///
/// This is the format a display driver or a polling client consumes.
pub struct BitLinesSink<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> BitLinesSink<W> {
    /// Write lines to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> FrameSink for BitLinesSink<W> {
    fn begin(&mut self, _cfg: SinkConfig) -> FlipdotResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &PixelBuffer) -> FlipdotResult<()> {
        writeln!(self.out, "{} {}", idx.0, frame.to_bits()).context("write bit line")?;
        Ok(())
    }

    fn end(&mut self) -> FlipdotResult<()> {
        self.out.flush().context("flush bit lines")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/sink.rs"]
mod tests;
