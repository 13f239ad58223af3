use crate::{
    composition::{tables::mode_profile, tags::Mode},
    foundation::math::{round_to, safe_opacity},
};

const MIN_WEIGHT: i32 = 100;
const MAX_WEIGHT: i32 = 900;

/// One named text style.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TextStyle {
    /// Font size in px.
    pub size_px: f64,
    /// Font weight, `100..=900`.
    pub weight: u16,
    /// Letter spacing in em.
    pub tracking_em: f64,
    /// Line height as a multiple of the font size.
    pub line_height: f64,
    /// Resting opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Text style presets used by cue content.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Typography {
    /// Opening line while the cue arrives.
    pub arrival: TextStyle,
    /// Main instruction.
    pub prompt: TextStyle,
    /// Secondary guidance.
    pub hint: TextStyle,
    /// Numbers and readouts.
    pub data: TextStyle,
    /// Selectable options.
    pub choice: TextStyle,
    /// Closing line.
    pub afterglow: TextStyle,
    /// Labels and captions.
    pub micro: TextStyle,
    /// Decorative background lettering.
    pub texture: TextStyle,
}

impl Typography {
    /// Every preset with its name, in declaration order.
    pub fn presets(&self) -> [(&'static str, TextStyle); 8] {
        [
            ("arrival", self.arrival),
            ("prompt", self.prompt),
            ("hint", self.hint),
            ("data", self.data),
            ("choice", self.choice),
            ("afterglow", self.afterglow),
            ("micro", self.micro),
            ("texture", self.texture),
        ]
    }
}

// (size_px, weight, tracking_em, line_height, opacity) before the mode bias.
const ARRIVAL: (f64, i32, f64, f64, f64) = (28.0, 300, 0.01, 1.25, 1.0);
const PROMPT: (f64, i32, f64, f64, f64) = (20.0, 400, 0.0, 1.35, 1.0);
const HINT: (f64, i32, f64, f64, f64) = (14.0, 400, 0.02, 1.4, 0.7);
const DATA: (f64, i32, f64, f64, f64) = (32.0, 500, -0.01, 1.1, 1.0);
const CHOICE: (f64, i32, f64, f64, f64) = (16.0, 500, 0.01, 1.3, 0.9);
const AFTERGLOW: (f64, i32, f64, f64, f64) = (22.0, 300, 0.02, 1.35, 0.85);
const MICRO: (f64, i32, f64, f64, f64) = (11.0, 500, 0.08, 1.2, 0.6);
const TEXTURE: (f64, i32, f64, f64, f64) = (64.0, 200, 0.12, 1.0, 0.08);

fn style(base: (f64, i32, f64, f64, f64), mode: Mode) -> TextStyle {
    let profile = mode_profile(mode);
    let (size_px, weight, tracking_em, line_height, opacity) = base;
    TextStyle {
        size_px: round_to(size_px * profile.size_scale, 2),
        weight: (weight + profile.weight_delta).clamp(MIN_WEIGHT, MAX_WEIGHT) as u16,
        tracking_em: round_to(tracking_em + profile.tracking_delta, 4),
        line_height,
        opacity: safe_opacity(opacity),
    }
}

pub(crate) fn derive_typography(mode: Mode) -> Typography {
    Typography {
        arrival: style(ARRIVAL, mode),
        prompt: style(PROMPT, mode),
        hint: style(HINT, mode),
        data: style(DATA, mode),
        choice: style(CHOICE, mode),
        afterglow: style(AFTERGLOW, mode),
        micro: style(MICRO, mode),
        texture: style(TEXTURE, mode),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/typography.rs"]
mod tests;
