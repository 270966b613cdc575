//! Built-in procedural animations and the renderer contract they share.

pub(crate) mod custom;
pub(crate) mod ease;
pub(crate) mod logo;
pub(crate) mod pong;
pub(crate) mod scroll;
pub(crate) mod spec;
pub(crate) mod star;
pub(crate) mod timer;
pub(crate) mod wave;

use crate::{
    foundation::core::{FrameTiming, Grid},
    foundation::error::{FlipdotError, FlipdotResult},
    frame::buffer::PixelBuffer,
};

use self::{
    custom::CustomFrames, logo::Logo, pong::Pong, scroll::TextScroll, spec::AnimationSpec,
    star::StarBounce, timer::Timer, wave::Wave,
};

/// Something that draws one frame at a time onto a dot-matrix canvas.
///
/// Any state carried between frames (positions, velocities, scores) lives in
/// the renderer value itself. The canvas's grid supplies width and height and
/// must match the grid the renderer was built for.
pub trait AnimationRenderer {
    /// Redraw `canvas` for the frame described by `timing`.
    fn render(&mut self, canvas: &mut PixelBuffer, timing: FrameTiming) -> FlipdotResult<()>;
}

/// The closed set of animations a show can play.
#[derive(Clone, Debug)]
pub enum Animation {
    /// See [`StarBounce`].
    StarBounce(StarBounce),
    /// See [`Pong`].
    Pong(Pong),
    /// See [`Wave`].
    Wave(Wave),
    /// See [`Timer`].
    Timer(Timer),
    /// See [`TextScroll`].
    TextScroll(TextScroll),
    /// See [`Logo`].
    Logo(Logo),
    /// See [`CustomFrames`].
    CustomFrames(CustomFrames),
}

impl Animation {
    /// Validate `spec` against `grid` and build fresh animation state.
    pub fn from_spec(spec: &AnimationSpec, grid: Grid) -> FlipdotResult<Self> {
        grid.validate()?;
        Ok(match spec {
            AnimationSpec::StarBounce(p) => Self::StarBounce(StarBounce::new(p, grid)?),
            AnimationSpec::Pong(p) => Self::Pong(Pong::new(p, grid)?),
            AnimationSpec::Wave(p) => Self::Wave(Wave::new(p, grid)?),
            AnimationSpec::Timer(p) => Self::Timer(Timer::new(p, grid)?),
            AnimationSpec::TextScroll(p) => Self::TextScroll(TextScroll::new(p, grid)?),
            AnimationSpec::Logo(p) => Self::Logo(Logo::new(p, grid)?),
            AnimationSpec::CustomFrames(p) => Self::CustomFrames(CustomFrames::new(p, grid)?),
        })
    }

    /// Same string as the `kind` tag the animation was built from.
    pub fn name(&self) -> &'static str {
        match self {
            Self::StarBounce(_) => "star_bounce",
            Self::Pong(_) => "pong",
            Self::Wave(_) => "wave",
            Self::Timer(_) => "timer",
            Self::TextScroll(_) => "text_scroll",
            Self::Logo(_) => "logo",
            Self::CustomFrames(_) => "custom_frames",
        }
    }
}

impl AnimationRenderer for Animation {
    fn render(&mut self, canvas: &mut PixelBuffer, timing: FrameTiming) -> FlipdotResult<()> {
        match self {
            Self::StarBounce(a) => a.render(canvas, timing),
            Self::Pong(a) => a.render(canvas, timing),
            Self::Wave(a) => a.render(canvas, timing),
            Self::Timer(a) => a.render(canvas, timing),
            Self::TextScroll(a) => a.render(canvas, timing),
            Self::Logo(a) => a.render(canvas, timing),
            Self::CustomFrames(a) => a.render(canvas, timing),
        }
    }
}

pub(crate) fn ensure_canvas(expected: Grid, canvas: &PixelBuffer) -> FlipdotResult<()> {
    let got = canvas.grid();
    if got != expected {
        return Err(FlipdotError::animation(format!(
            "canvas is {}x{}, animation was built for {}x{}",
            got.width, got.height, expected.width, expected.height
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
