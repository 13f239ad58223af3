use crate::{
    composition::{
        fingerprint::{OutputFingerprint, fingerprint_output},
        input::{CompositionInput, RawCompositionInput},
        motion::{Motion, RadiusTokens, derive_motion, derive_radius},
        palette::{Palette, derive_palette},
        tables::micro_variant_index,
        typography::{Typography, derive_typography},
    },
    foundation::{color::Rgba, error::CueResult},
};

const SEAL_WIDTH_PX: f64 = 2.0;

/// Extra ring drawn around capstone cues.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SealRing {
    /// Ring stroke color (the accent glow).
    pub color: Rgba,
    /// Stroke width in px.
    pub width_px: f64,
    /// Pulse period in ms.
    pub pulse_ms: u32,
}

/// Complete presentation spec for one cue; stable for the cue's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CompositionOutput {
    /// Named colors.
    pub palette: Palette,
    /// Named text styles.
    pub typography: Typography,
    /// Named timings.
    pub motion: Motion,
    /// Corner radii.
    pub radius: RadiusTokens,
    /// Present only for capstone cues.
    pub seal: Option<SealRing>,
    /// Index of the micro-variant row picked by the seed.
    pub variant: u8,
}

impl CompositionOutput {
    /// Stable digest of every emitted value.
    pub fn fingerprint(&self) -> OutputFingerprint {
        fingerprint_output(self)
    }
}

/// Derive the full presentation spec for a cue.
///
/// Pure: the same input always yields a bit-identical output.
pub fn compose(input: &CompositionInput) -> CompositionOutput {
    let palette = derive_palette(input);
    let motion = derive_motion(input);
    let seal = input.is_capstone.then(|| SealRing {
        color: palette.accent_glow,
        width_px: SEAL_WIDTH_PX,
        pulse_ms: motion.accent_pulse_ms,
    });

    CompositionOutput {
        palette,
        typography: derive_typography(input.mode),
        motion,
        radius: derive_radius(input.form),
        seal,
        variant: micro_variant_index(input.seed) as u8,
    }
}

/// Parse string tags and compose.
///
/// Fails with [`crate::CueError::Configuration`] naming the first invalid field; never
/// returns a partial output.
pub fn compose_raw(raw: &RawCompositionInput) -> CueResult<CompositionOutput> {
    let input = raw.parse()?;
    Ok(compose(&input))
}

#[cfg(test)]
#[path = "../../tests/unit/composition/compositor.rs"]
mod tests;
