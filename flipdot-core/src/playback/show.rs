use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    animation::{Animation, spec::AnimationSpec},
    foundation::core::{Fps, Grid},
    foundation::error::{FlipdotError, FlipdotResult},
    frame::preview::PreviewStyle,
};

/// A playable animation for one panel: the JSON-facing show file.
///
/// ```json
/// {
///   "grid": { "width": 84, "height": 28 },
///   "fps": { "num": 20, "den": 1 },
///   "duration": 200,
///   "animation": { "kind": "text_scroll", "text": "NEXT TRAIN 4 MIN" }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Show {
    /// Panel the show is drawn for.
    pub grid: Grid,
    /// Frame clock.
    pub fps: Fps,
    /// Length in frames.
    pub duration: u64,
    /// What to play.
    pub animation: AnimationSpec,
    /// How PNG previews draw the dots.
    #[serde(default)]
    pub preview: PreviewStyle,
}

impl Show {
    /// Parse a show from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> FlipdotResult<Self> {
        serde_json::from_reader(r).map_err(|e| FlipdotError::serde(format!("parse show JSON: {e}")))
    }

    /// Parse a show from a JSON string.
    pub fn from_json(s: &str) -> FlipdotResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Read and parse a show file.
    pub fn from_path(path: impl AsRef<Path>) -> FlipdotResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("open show '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize as indented JSON.
    pub fn to_json_pretty(&self) -> FlipdotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FlipdotError::serde(format!("serialize show JSON: {e}")))
    }

    /// The `kind` tag of the animation, e.g. `"pong"`.
    pub fn animation_kind(&self) -> &'static str {
        self.animation.kind()
    }

    /// Check every field, including building the animation once.
    pub fn validate(&self) -> FlipdotResult<()> {
        self.grid.validate()?;
        self.fps.validate()?;
        if self.duration == 0 {
            return Err(FlipdotError::validation("show duration must be > 0 frames"));
        }
        self.preview.validate()?;
        Animation::from_spec(&self.animation, self.grid)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/show.rs"]
mod tests;
