/// Progress curve for time-based reveals.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant speed.
    #[default]
    Linear,
    /// Cubic ease-in.
    In,
    /// Cubic ease-out.
    Out,
    /// Cubic ease-in-out.
    InOut,
    /// Jump in `n` equal steps, like a mechanical counter.
    Steps(u32),
}

impl Ease {
    /// Map linear progress `t` to eased progress; both clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::In => t * t * t,
            Self::Out => 1.0 - (1.0 - t).powi(3),
            Self::InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::Steps(0) => t,
            Self::Steps(n) => {
                let n = f64::from(n);
                (t * n).floor() / n
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
