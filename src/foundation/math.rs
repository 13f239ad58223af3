/// Clamp an opacity-bearing value into `[0, 1]`.
///
/// Breathing animations and drag-driven interpolation can overshoot transiently; every opacity
/// that leaves the crate goes through this. `NaN` maps to fully transparent.
pub fn safe_opacity(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Clamp a unit-interval quantity (saturation, lightness, progress) into `[0, 1]`.
pub(crate) fn clamp01(v: f64) -> f64 {
    safe_opacity(v)
}

/// Linear interpolation; `t` is clamped to `[0, 1]`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * clamp01(t)
}

/// Wrap a hue in degrees into `[0, 360)`.
pub(crate) fn wrap_hue(deg: f64) -> f64 {
    if !deg.is_finite() {
        return 0.0;
    }
    let h = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Signed shortest rotation in degrees from `from` to `to`, in `[-180, 180)`.
pub(crate) fn hue_delta(from: f64, to: f64) -> f64 {
    if !from.is_finite() || !to.is_finite() {
        return 0.0;
    }
    (to - from + 540.0).rem_euclid(360.0) - 180.0
}

/// Round to a fixed number of decimals so derived tokens stay readable and stable.
pub(crate) fn round_to(v: f64, decimals: i32) -> f64 {
    let p = 10f64.powi(decimals);
    (v * p).round() / p
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
