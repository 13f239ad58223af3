use crate::foundation::math::clamp01;

/// Easing curves available to motion presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Quadratic ease-out.
    OutQuad,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in-out.
    InOutCubic,
}

impl Ease {
    /// Map progress `t` (clamped to `[0, 1]`, `NaN` as `0`) through the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = clamp01(t);
        match self {
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }

    /// Pick the entry curve for a form sharpness in `[0, 1]`.
    ///
    /// Sharp forms snap in (`OutCubic`), soft forms glide (`InOutCubic`).
    pub fn for_sharpness(sharpness: f64) -> Self {
        if sharpness >= 0.7 {
            Self::OutCubic
        } else if sharpness >= 0.35 {
            Self::OutQuad
        } else {
            Self::InOutCubic
        }
    }

    /// CSS `cubic-bezier(...)` approximation for shells that animate with CSS transitions.
    pub fn css_timing_function(self) -> &'static str {
        match self {
            Self::OutQuad => "cubic-bezier(0.5, 1, 0.89, 1)",
            Self::OutCubic => "cubic-bezier(0.33, 1, 0.68, 1)",
            Self::InOutCubic => "cubic-bezier(0.65, 0, 0.35, 1)",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
