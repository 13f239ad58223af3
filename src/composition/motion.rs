use std::time::Duration;

use crate::{
    animation::ease::Ease,
    composition::{
        input::CompositionInput,
        tables::{
            ACCENT_CAPSTONE, ACCENT_STANDARD, ENTRY_MS_SHARP, ENTRY_MS_SOFT, MICRO_VARIANTS,
            form_profile, micro_variant_index, mode_profile,
        },
        tags::Form,
    },
    foundation::math::lerp,
};

const PILL_RADIUS: f64 = 999.0;

/// A timed easing curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct MotionCurve {
    /// Duration in milliseconds.
    pub duration_ms: u32,
    /// Easing applied over the duration.
    pub ease: Ease,
}

impl MotionCurve {
    /// Duration as a [`Duration`].
    pub fn duration(self) -> Duration {
        Duration::from_millis(u64::from(self.duration_ms))
    }
}

/// Named timing presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Motion {
    /// Element entry.
    pub entry: MotionCurve,
    /// Full breath cycle of ambient animation.
    pub breath_cycle_ms: u32,
    /// Accent pulse period.
    pub accent_pulse_ms: u32,
    /// Delay between staggered siblings.
    pub stagger_ms: u32,
}

impl Motion {
    /// Breath cycle as a [`Duration`].
    pub fn breath_cycle(&self) -> Duration {
        Duration::from_millis(u64::from(self.breath_cycle_ms))
    }
}

/// Corner-radius tokens in px.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RadiusTokens {
    /// Small controls.
    pub sm: f64,
    /// Cards.
    pub md: f64,
    /// Panels.
    pub lg: f64,
    /// Fully rounded.
    pub pill: f64,
}

pub(crate) fn derive_radius(form: Form) -> RadiusTokens {
    let [sm, md, lg] = form_profile(form).radius;
    RadiusTokens {
        sm,
        md,
        lg,
        pill: PILL_RADIUS,
    }
}

pub(crate) fn derive_motion(input: &CompositionInput) -> Motion {
    let sharpness = form_profile(input.form).sharpness;
    let variant = MICRO_VARIANTS[micro_variant_index(input.seed)];
    let breath_ms = i64::from(mode_profile(input.mode).breath_ms)
        + i64::from(variant.breath_offset_ms);
    let accent = if input.is_capstone {
        ACCENT_CAPSTONE
    } else {
        ACCENT_STANDARD
    };

    Motion {
        entry: MotionCurve {
            duration_ms: lerp(ENTRY_MS_SOFT, ENTRY_MS_SHARP, sharpness).round() as u32,
            ease: Ease::for_sharpness(sharpness),
        },
        breath_cycle_ms: breath_ms.max(1) as u32,
        accent_pulse_ms: accent.pulse_ms,
        stagger_ms: variant.stagger_ms,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/motion.rs"]
mod tests;
