//! Serializable animation parameters, as they appear in show files.
//!
//! Every parameter struct is `#[serde(default)]`, so `{"kind": "pong"}` is a
//! complete spec.

use crate::animation::ease::Ease;

/// One animation and its parameters, tagged by `kind`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnimationSpec {
    /// `"star_bounce"`
    StarBounce(StarBounceParams),
    /// `"pong"`
    Pong(PongParams),
    /// `"wave"`
    Wave(WaveParams),
    /// `"timer"`
    Timer(TimerParams),
    /// `"text_scroll"`
    TextScroll(TextScrollParams),
    /// `"logo"`
    Logo(LogoParams),
    /// `"custom_frames"`
    CustomFrames(CustomFramesParams),
}

impl AnimationSpec {
    /// The serialized `kind` tag.
    pub fn kind(&self) -> &'static str {
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

/// Parameters of a [`StarBounce`](crate::StarBounce).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StarBounceParams {
    /// Distance from centre to each star tip, in cells.
    pub radius: u32,
    /// Initial velocity in cells per second.
    pub velocity: [f64; 2],
    /// Initial centre; the grid centre when absent.
    pub start: Option<[f64; 2]>,
}

impl Default for StarBounceParams {
    fn default() -> Self {
        Self {
            radius: 3,
            velocity: [14.0, 9.0],
            start: None,
        }
    }
}

/// Parameters of a [`Pong`](crate::Pong) match.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PongParams {
    /// Paddle length in cells.
    pub paddle_height: u32,
    /// Maximum paddle travel in cells per second.
    pub paddle_speed: f64,
    /// Ball speed in cells per second.
    pub ball_speed: f64,
    /// Serve angle from horizontal, in degrees.
    pub serve_angle_deg: f64,
    /// Draw both scores either side of the net.
    pub show_score: bool,
}

impl Default for PongParams {
    fn default() -> Self {
        Self {
            paddle_height: 6,
            paddle_speed: 14.0,
            ball_speed: 24.0,
            serve_angle_deg: 35.0,
            show_score: true,
        }
    }
}

/// Parameters of a [`Wave`](crate::Wave).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WaveParams {
    /// Peak offset from the middle row; 80% of the half height when absent.
    pub amplitude: Option<f64>,
    /// Cells per full cycle.
    pub wavelength: f64,
    /// Cycles per second the wave travels.
    pub speed: f64,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            amplitude: None,
            wavelength: 24.0,
            speed: 0.5,
        }
    }
}

/// Parameters of a [`Timer`](crate::Timer).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimerParams {
    /// Count down from this many seconds instead of counting up.
    pub countdown_secs: Option<u64>,
    /// Draw a progress bar along the bottom row.
    pub progress_bar: bool,
}

/// Parameters of a [`TextScroll`](crate::TextScroll).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TextScrollParams {
    /// Text to scroll; letters outside the font draw as boxes.
    pub text: String,
    /// Cells per second, right to left.
    pub speed: f64,
    /// Top row of the text; vertically centred when absent.
    pub row: Option<i32>,
}

impl Default for TextScrollParams {
    fn default() -> Self {
        Self {
            text: "HELLO WORLD".to_owned(),
            speed: 12.0,
            row: None,
        }
    }
}

/// A raw monochrome bitmap given as a bit string.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BitmapSpec {
    /// Bitmap width in cells.
    pub width: u32,
    /// Bitmap height in cells.
    pub height: u32,
    /// Row-major bit string of exactly `width * height` characters.
    pub bits: String,
}

/// Parameters of a [`Logo`](crate::Logo).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogoParams {
    /// Explicit logo artwork. When absent, `text` is drawn inside a frame.
    pub bitmap: Option<BitmapSpec>,
    /// Text drawn inside the frame when there is no bitmap.
    pub text: String,
    /// Duration of the left-to-right reveal; `0` shows the logo at once.
    pub reveal_ms: u64,
    /// Curve applied to the reveal.
    pub ease: Ease,
}

impl Default for LogoParams {
    fn default() -> Self {
        Self {
            bitmap: None,
            text: "FLIPDOT".to_owned(),
            reveal_ms: 1500,
            ease: Ease::Out,
        }
    }
}

/// Parameters of [`CustomFrames`](crate::CustomFrames).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CustomFramesParams {
    /// One bit string per frame, each covering the whole grid.
    pub frames: Vec<String>,
    /// How long each frame is shown.
    pub frame_ms: u64,
    /// Start over after the last frame instead of holding it.
    pub looping: bool,
}

impl Default for CustomFramesParams {
    fn default() -> Self {
        Self {
            frames: Vec::new(),
            frame_ms: 100,
            looping: true,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spec.rs"]
mod tests;
