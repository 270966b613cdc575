use crate::{
    animation::{Animation, AnimationRenderer},
    foundation::core::{Fps, FrameIndex, FrameRange, FrameTiming, Grid},
    foundation::error::{FlipdotError, FlipdotResult},
    frame::buffer::PixelBuffer,
    playback::show::Show,
    playback::sink::{FrameSink, SinkConfig},
};

/// Steps a show's animation on a fixed frame clock.
///
/// Animations carry state from frame to frame, so frames are produced
/// strictly in order starting at frame 0.
#[derive(Clone, Debug)]
pub struct Player {
    fps: Fps,
    duration: u64,
    animation: Animation,
    canvas: PixelBuffer,
    next: FrameIndex,
}

impl Player {
    /// Validate `show` and position the player before frame 0.
    pub fn new(show: &Show) -> FlipdotResult<Self> {
        show.validate()?;
        Ok(Self {
            fps: show.fps,
            duration: show.duration,
            animation: Animation::from_spec(&show.animation, show.grid)?,
            canvas: PixelBuffer::new(show.grid),
            next: FrameIndex(0),
        })
    }

    /// Grid of the show being played.
    pub fn grid(&self) -> Grid {
        self.canvas.grid()
    }

    /// Index of the frame the next call to [`Player::next_frame`] produces.
    pub fn position(&self) -> FrameIndex {
        self.next
    }

    /// Whether every frame of the show has been produced.
    pub fn is_finished(&self) -> bool {
        self.next.0 >= self.duration
    }

    /// Timing handed to the animation for `frame`.
    pub fn timing(fps: Fps, frame: FrameIndex) -> FrameTiming {
        let delta = if frame.0 == 0 {
            0.0
        } else {
            fps.frame_duration_secs()
        };
        FrameTiming::new(delta, fps.frame_to_ms(frame))
    }

    /// Render the next frame. Playback may run past `duration`; callers that
    /// care check [`Player::is_finished`].
    pub fn next_frame(&mut self) -> FlipdotResult<(FrameIndex, &PixelBuffer)> {
        let idx = self.next;
        let timing = Self::timing(self.fps, idx);
        self.animation.render(&mut self.canvas, timing)?;
        self.next = FrameIndex(idx.0 + 1);
        Ok((idx, &self.canvas))
    }
}

/// Render frame `frame` of `show` by replaying from the start.
pub fn render_frame_at(show: &Show, frame: FrameIndex) -> FlipdotResult<PixelBuffer> {
    if frame.0 >= show.duration {
        return Err(FlipdotError::validation(format!(
            "frame {} is past the end of a {}-frame show",
            frame.0, show.duration
        )));
    }
    let mut player = Player::new(show)?;
    loop {
        let (idx, canvas) = player.next_frame()?;
        if idx == frame {
            return Ok(canvas.clone());
        }
    }
}

/// Options for [`render_show`].
#[derive(Clone, Debug, Default)]
pub struct RenderOpts {
    /// Only push frames whose bit string differs from the last pushed frame.
    pub skip_unchanged: bool,
    /// Restrict output to a sub-range. Frames before it are still stepped
    /// so that animation state is correct.
    pub range: Option<FrameRange>,
}

/// Aggregated playback counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames in the requested range.
    pub frames_total: u64,
    /// Frames handed to the sink.
    pub frames_pushed: u64,
    /// Frames skipped because they matched the previous pushed frame.
    pub frames_unchanged: u64,
}

/// Play `show` from frame 0 and push frames into `sink`.
#[tracing::instrument(skip(show, sink), fields(animation = show.animation_kind()))]
pub fn render_show(
    show: &Show,
    sink: &mut dyn FrameSink,
    opts: &RenderOpts,
) -> FlipdotResult<RenderStats> {
    let full = FrameRange::new(FrameIndex(0), FrameIndex(show.duration))?;
    let range = opts.range.unwrap_or(full);
    if range.is_empty() {
        return Err(FlipdotError::validation("render range must be non-empty"));
    }
    if range.end.0 > show.duration {
        return Err(FlipdotError::validation(format!(
            "render range ends at {} but the show has {} frames",
            range.end.0, show.duration
        )));
    }

    let mut player = Player::new(show)?;
    sink.begin(SinkConfig {
        grid: show.grid,
        fps: show.fps,
        frames: range.len_frames(),
    })?;

    let mut stats = RenderStats::default();
    let mut last_bits: Option<String> = None;
    while player.position() < range.end {
        let (idx, canvas) = player.next_frame()?;
        if !range.contains(idx) {
            continue;
        }
        stats.frames_total += 1;

        if opts.skip_unchanged {
            let bits = canvas.to_bits();
            if last_bits.as_deref() == Some(bits.as_str()) {
                stats.frames_unchanged += 1;
                continue;
            }
            last_bits = Some(bits);
        }

        sink.push_frame(idx, canvas)?;
        stats.frames_pushed += 1;
    }

    sink.end()?;
    tracing::info!(
        total = stats.frames_total,
        pushed = stats.frames_pushed,
        unchanged = stats.frames_unchanged,
        "show rendered"
    );
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/playback/player.rs"]
mod tests;
