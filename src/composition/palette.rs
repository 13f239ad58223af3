use crate::{
    composition::{
        input::CompositionInput,
        tables::{
            ACCENT_CAPSTONE, ACCENT_STANDARD, MICRO_VARIANTS, SECONDARY_ROTATION_DEG,
            WARM_HUE_DEG, chrono_shift, micro_variant_index, signature_base,
        },
    },
    foundation::{
        color::{Hsl, Rgba},
        math::hue_delta,
    },
};

const PRIMARY_FAINT_ALPHA: f64 = 0.18;
const PRIMARY_GLOW_ALPHA: f64 = 0.35;
const PRIMARY_GLOW_LIFT: f64 = 0.12;
const SECONDARY_SATURATION_SCALE: f64 = 0.6;
const SECONDARY_GLOW_ALPHA: f64 = 0.30;
const TEXT_SATURATION: f64 = 0.12;
const TEXT_FAINT_ALPHA: f64 = 0.55;
const SHADOW_SATURATION: f64 = 0.30;
const SHADOW_LIGHTNESS: f64 = 0.06;

/// Closed set of named colors every cue can rely on.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Palette {
    /// Body text.
    pub text: Rgba,
    /// De-emphasized text.
    pub text_faint: Rgba,
    /// Signature color.
    pub primary: Rgba,
    /// Translucent primary for fills.
    pub primary_faint: Rgba,
    /// Lifted translucent primary for halos.
    pub primary_glow: Rgba,
    /// Hue-rotated highlight.
    pub accent: Rgba,
    /// Translucent accent for halos.
    pub accent_glow: Rgba,
    /// Split-complement support color.
    pub secondary: Rgba,
    /// Translucent secondary for halos.
    pub secondary_glow: Rgba,
    /// Drop shadow.
    pub shadow: Rgba,
}

impl Palette {
    /// Every slot with its name, in declaration order.
    pub fn slots(&self) -> [(&'static str, Rgba); 10] {
        [
            ("text", self.text),
            ("text_faint", self.text_faint),
            ("primary", self.primary),
            ("primary_faint", self.primary_faint),
            ("primary_glow", self.primary_glow),
            ("accent", self.accent),
            ("accent_glow", self.accent_glow),
            ("secondary", self.secondary),
            ("secondary_glow", self.secondary_glow),
            ("shadow", self.shadow),
        ]
    }
}

/// Base hue after chrono lighting and seed micro-variation.
pub(crate) fn resolve_base(input: &CompositionInput) -> Hsl {
    let shift = chrono_shift(input.chrono);
    let variant = MICRO_VARIANTS[micro_variant_index(input.seed)];
    let base = signature_base(input.signature);
    let warm = shift.warmth * hue_delta(base.h, WARM_HUE_DEG);
    base.shifted(
        warm + variant.hue_nudge,
        shift.saturation,
        shift.lightness + variant.lightness_nudge,
    )
}

pub(crate) fn derive_palette(input: &CompositionInput) -> Palette {
    let shift = chrono_shift(input.chrono);
    let variant = MICRO_VARIANTS[micro_variant_index(input.seed)];
    let spread = if input.is_capstone {
        ACCENT_CAPSTONE
    } else {
        ACCENT_STANDARD
    };

    let base = resolve_base(input);
    let accent = base.shifted(spread.rotation_deg, spread.saturation, spread.lightness);
    let secondary = Hsl::new(
        base.h + SECONDARY_ROTATION_DEG,
        base.s * SECONDARY_SATURATION_SCALE,
        base.l,
    );
    let text = Hsl::new(base.h, TEXT_SATURATION, shift.text_lightness);

    Palette {
        text: text.to_rgba(),
        text_faint: text.to_rgba_with_alpha(TEXT_FAINT_ALPHA),
        primary: base.to_rgba(),
        primary_faint: base.to_rgba_with_alpha(PRIMARY_FAINT_ALPHA),
        primary_glow: base
            .shifted(0.0, 0.0, PRIMARY_GLOW_LIFT)
            .to_rgba_with_alpha(PRIMARY_GLOW_ALPHA + variant.glow_alpha_nudge),
        accent: accent.to_rgba(),
        accent_glow: accent.to_rgba_with_alpha(spread.glow_alpha + variant.glow_alpha_nudge),
        secondary: secondary.to_rgba(),
        secondary_glow: secondary
            .to_rgba_with_alpha(SECONDARY_GLOW_ALPHA + variant.glow_alpha_nudge),
        shadow: Hsl::new(base.h, SHADOW_SATURATION, SHADOW_LIGHTNESS)
            .to_rgba_with_alpha(shift.shadow_alpha),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/palette.rs"]
mod tests;
