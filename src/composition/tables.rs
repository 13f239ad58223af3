//! Fixed lookup tables behind composition.
//!
//! Designers reason about exact outputs from these numbers, so everything here is a literal.
//! Changing a value changes every affected [`crate::OutputFingerprint`].

use crate::{
    composition::tags::{Chrono, Form, Mode, Signature},
    foundation::color::Hsl,
};

/// Base hue (degrees), saturation and lightness of each signature.
pub(crate) fn signature_base(signature: Signature) -> Hsl {
    let (h, s, l) = match signature {
        Signature::Ember => (14.0, 0.78, 0.56),
        Signature::Tide => (198.0, 0.64, 0.52),
        Signature::Grove => (132.0, 0.42, 0.46),
        Signature::Dusk => (268.0, 0.38, 0.50),
        Signature::Dawn => (32.0, 0.84, 0.66),
        Signature::Frost => (190.0, 0.36, 0.74),
        Signature::Moss => (84.0, 0.34, 0.44),
        Signature::Clay => (20.0, 0.40, 0.50),
        Signature::Iris => (244.0, 0.58, 0.62),
        Signature::Saffron => (44.0, 0.92, 0.58),
        Signature::Slate => (214.0, 0.16, 0.54),
        Signature::Coral => (356.0, 0.72, 0.64),
        Signature::Ink => (226.0, 0.46, 0.36),
        Signature::Pearl => (40.0, 0.22, 0.82),
        Signature::Sage => (150.0, 0.22, 0.58),
        Signature::Aurora => (164.0, 0.70, 0.56),
    };
    Hsl::new(h, s, l)
}

/// Additive lighting bias for a time of day.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ChronoShift {
    pub(crate) saturation: f64,
    pub(crate) lightness: f64,
    /// Fraction of the way the hue is pulled toward [`WARM_HUE_DEG`].
    pub(crate) warmth: f64,
    /// Lightness of body text.
    pub(crate) text_lightness: f64,
    /// Opacity of the shadow slot.
    pub(crate) shadow_alpha: f64,
}

pub(crate) fn chrono_shift(chrono: Chrono) -> ChronoShift {
    match chrono {
        Chrono::Morning => ChronoShift {
            saturation: 0.04,
            lightness: 0.06,
            warmth: 0.0,
            text_lightness: 0.96,
            shadow_alpha: 0.45,
        },
        Chrono::Work => ChronoShift {
            saturation: 0.0,
            lightness: 0.0,
            warmth: 0.0,
            text_lightness: 0.94,
            shadow_alpha: 0.55,
        },
        Chrono::Evening => ChronoShift {
            saturation: 0.06,
            lightness: -0.04,
            warmth: 0.08,
            text_lightness: 0.92,
            shadow_alpha: 0.62,
        },
        Chrono::Night => ChronoShift {
            saturation: -0.12,
            lightness: -0.12,
            warmth: 0.0,
            text_lightness: 0.88,
            shadow_alpha: 0.75,
        },
    }
}

/// Hue that evening light leans toward (amber).
pub(crate) const WARM_HUE_DEG: f64 = 30.0;

/// Structural character of a form.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FormProfile {
    /// `0` is fully soft, `1` fully angular.
    pub(crate) sharpness: f64,
    /// Corner radii `[sm, md, lg]` in px.
    pub(crate) radius: [f64; 3],
}

pub(crate) fn form_profile(form: Form) -> FormProfile {
    let (sharpness, radius) = match form {
        Form::Shard => (1.0, [2.0, 4.0, 6.0]),
        Form::Lattice => (0.8, [4.0, 6.0, 10.0]),
        Form::Thread => (0.55, [6.0, 10.0, 16.0]),
        Form::Pulse => (0.4, [8.0, 14.0, 22.0]),
        Form::Orbit => (0.25, [12.0, 20.0, 32.0]),
        Form::Bloom => (0.1, [16.0, 24.0, 40.0]),
    };
    FormProfile { sharpness, radius }
}

/// Entry duration bounds in ms, softest to sharpest form.
pub(crate) const ENTRY_MS_SOFT: f64 = 1100.0;
pub(crate) const ENTRY_MS_SHARP: f64 = 450.0;

/// Typography and motion bias of a mode.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ModeProfile {
    pub(crate) weight_delta: i32,
    pub(crate) tracking_delta: f64,
    pub(crate) size_scale: f64,
    pub(crate) breath_ms: u32,
}

pub(crate) fn mode_profile(mode: Mode) -> ModeProfile {
    match mode {
        Mode::Knowing => ModeProfile {
            weight_delta: 100,
            tracking_delta: -0.005,
            size_scale: 1.0,
            breath_ms: 4200,
        },
        Mode::Embodying => ModeProfile {
            weight_delta: 0,
            tracking_delta: 0.02,
            size_scale: 1.04,
            breath_ms: 5200,
        },
        Mode::Believing => ModeProfile {
            weight_delta: -100,
            tracking_delta: 0.04,
            size_scale: 1.08,
            breath_ms: 6400,
        },
    }
}

/// Hue rotation and lift applied to derive the accent from the base.
#[derive(Clone, Copy, Debug)]
pub(crate) struct AccentSpread {
    pub(crate) rotation_deg: f64,
    pub(crate) lightness: f64,
    pub(crate) saturation: f64,
    pub(crate) glow_alpha: f64,
    pub(crate) pulse_ms: u32,
}

pub(crate) const ACCENT_STANDARD: AccentSpread = AccentSpread {
    rotation_deg: 40.0,
    lightness: 0.08,
    saturation: 0.05,
    glow_alpha: 0.40,
    pulse_ms: 1600,
};

pub(crate) const ACCENT_CAPSTONE: AccentSpread = AccentSpread {
    rotation_deg: 72.0,
    lightness: 0.16,
    saturation: 0.12,
    glow_alpha: 0.55,
    pulse_ms: 2400,
};

/// Rotation from base hue to the secondary (split complement).
pub(crate) const SECONDARY_ROTATION_DEG: f64 = -150.0;

/// One pre-approved micro-variation row, selected by `seed % MICRO_VARIANTS.len()`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MicroVariant {
    pub(crate) hue_nudge: f64,
    pub(crate) lightness_nudge: f64,
    pub(crate) glow_alpha_nudge: f64,
    pub(crate) breath_offset_ms: i32,
    pub(crate) stagger_ms: u32,
}

pub(crate) const MICRO_VARIANTS: [MicroVariant; 3] = [
    MicroVariant {
        hue_nudge: 0.0,
        lightness_nudge: 0.0,
        glow_alpha_nudge: 0.0,
        breath_offset_ms: 0,
        stagger_ms: 80,
    },
    MicroVariant {
        hue_nudge: 6.0,
        lightness_nudge: 0.02,
        glow_alpha_nudge: 0.04,
        breath_offset_ms: 300,
        stagger_ms: 110,
    },
    MicroVariant {
        hue_nudge: -6.0,
        lightness_nudge: -0.02,
        glow_alpha_nudge: -0.04,
        breath_offset_ms: -300,
        stagger_ms: 60,
    },
];

pub(crate) fn micro_variant_index(seed: u64) -> usize {
    (seed % MICRO_VARIANTS.len() as u64) as usize
}
