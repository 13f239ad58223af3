use super::*;

#[test]
fn safe_opacity_clamps_out_of_range() {
    for (input, expected) in [
        (-0.5, 0.0),
        (0.0, 0.0),
        (0.42, 0.42),
        (1.0, 1.0),
        (1.7, 1.0),
        (f64::INFINITY, 1.0),
        (f64::NEG_INFINITY, 0.0),
    ] {
        assert_eq!(safe_opacity(input), expected);
    }
    assert_eq!(safe_opacity(f64::NAN), 0.0);
}

#[test]
fn lerp_clamps_t() {
    assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
    assert_eq!(lerp(10.0, 20.0, -1.0), 10.0);
    assert_eq!(lerp(10.0, 20.0, 3.0), 20.0);
}

#[test]
fn wrap_hue_stays_in_range() {
    assert_eq!(wrap_hue(0.0), 0.0);
    assert_eq!(wrap_hue(360.0), 0.0);
    assert_eq!(wrap_hue(400.0), 40.0);
    assert_eq!(wrap_hue(-30.0), 330.0);
    assert_eq!(wrap_hue(f64::NAN), 0.0);
    let h = wrap_hue(-1e-14);
    assert!((0.0..360.0).contains(&h));
}

#[test]
fn round_to_is_stable() {
    assert_eq!(round_to(0.123456, 3), 0.123);
    assert_eq!(round_to(1.0005, 2), 1.0);
}

#[test]
fn hue_delta_takes_the_short_way_round() {
    assert_eq!(hue_delta(10.0, 30.0), 20.0);
    assert_eq!(hue_delta(350.0, 30.0), 40.0);
    assert_eq!(hue_delta(30.0, 350.0), -40.0);
    assert_eq!(hue_delta(200.0, 30.0), -170.0);
    assert_eq!(hue_delta(210.0, 30.0), -180.0);
    assert_eq!(hue_delta(f64::NAN, 30.0), 0.0);
}
