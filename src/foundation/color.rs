use crate::foundation::math::{clamp01, round_to, safe_opacity, wrap_hue};

/// Hue/saturation/lightness triple in sRGB space.
///
/// `h` is in degrees, `s` and `l` are normalized to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`.
    pub h: f64,
    /// Saturation in `[0, 1]`.
    pub s: f64,
    /// Lightness in `[0, 1]`.
    pub l: f64,
}

impl Hsl {
    /// Build a normalized HSL value (hue wrapped, saturation/lightness clamped).
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: clamp01(s),
            l: clamp01(l),
        }
    }

    /// Additive offsets, re-normalized.
    pub fn shifted(self, dh: f64, ds: f64, dl: f64) -> Self {
        Self::new(self.h + dh, self.s + ds, self.l + dl)
    }

    /// Convert to an opaque straight-alpha color.
    pub fn to_rgba(self) -> Rgba {
        self.to_rgba_with_alpha(1.0)
    }

    /// Convert to a straight-alpha color with the given (clamped) alpha.
    pub fn to_rgba_with_alpha(self, a: f64) -> Rgba {
        let h = wrap_hue(self.h) / 360.0;
        let s = clamp01(self.s);
        let l = clamp01(self.l);
        let a = safe_opacity(a);

        if s == 0.0 {
            return Rgba::new(l, l, l, a);
        }

        fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                return p + (q - p) * 6.0 * t;
            }
            if t < 1.0 / 2.0 {
                return q;
            }
            if t < 2.0 / 3.0 {
                return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
            }
            p
        }

        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;

        Rgba::new(
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
            a,
        )
    }
}

/// Straight (non-premultiplied) RGBA color with normalized `f64` channels.
///
/// Deserialized values pass through [`Rgba::new`], so channels are always in range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "RgbaDef")]
pub struct Rgba {
    /// Red in `[0, 1]`.
    pub r: f64,
    /// Green in `[0, 1]`.
    pub g: f64,
    /// Blue in `[0, 1]`.
    pub b: f64,
    /// Alpha in `[0, 1]`.
    pub a: f64,
}

impl Rgba {
    /// Build a color; channels are clamped and rounded to 4 decimals.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        fn channel(v: f64) -> f64 {
            round_to(clamp01(v), 4)
        }
        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
            a: channel(safe_opacity(a)),
        }
    }

    /// Same color with a replaced alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Multiply alpha by a transient factor (breath amplitude, drag progress, ...).
    ///
    /// The factor may be out of range; the result is always a valid opacity.
    pub fn scale_alpha(self, factor: f64) -> Self {
        self.with_alpha(self.a * safe_opacity(factor))
    }

    /// 8-bit channels `[r, g, b, a]`.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn to_u8(x: f64) -> u8 {
            (clamp01(x) * 255.0).round() as u8
        }
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }

    /// CSS functional notation, e.g. `rgba(255, 128, 0, 0.5)`.
    pub fn to_css(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("rgba({r}, {g}, {b}, {})", round_to(safe_opacity(self.a), 3))
    }

    /// Lowercase `#rrggbbaa`.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

#[derive(serde::Deserialize)]
struct RgbaDef {
    r: f64,
    g: f64,
    b: f64,
    #[serde(default = "opaque")]
    a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl From<RgbaDef> for Rgba {
    fn from(def: RgbaDef) -> Self {
        Self::new(def.r, def.g, def.b, def.a)
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
