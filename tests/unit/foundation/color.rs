use super::*;

#[test]
fn hsl_primaries_convert() {
    let red = Hsl::new(0.0, 1.0, 0.5).to_rgba();
    assert_eq!(red, Rgba::new(1.0, 0.0, 0.0, 1.0));

    let green = Hsl::new(120.0, 1.0, 0.5).to_rgba();
    assert_eq!(green, Rgba::new(0.0, 1.0, 0.0, 1.0));

    let grey = Hsl::new(200.0, 0.0, 0.25).to_rgba();
    assert_eq!(grey, Rgba::new(0.25, 0.25, 0.25, 1.0));
}

#[test]
fn hsl_new_normalizes() {
    let c = Hsl::new(-90.0, 1.4, -0.2);
    assert_eq!(c.h, 270.0);
    assert_eq!(c.s, 1.0);
    assert_eq!(c.l, 0.0);

    let shifted = Hsl::new(350.0, 0.5, 0.5).shifted(20.0, 0.7, -0.9);
    assert_eq!(shifted.h, 10.0);
    assert_eq!(shifted.s, 1.0);
    assert_eq!(shifted.l, 0.0);
}

#[test]
fn alpha_is_always_clamped() {
    let c = Hsl::new(30.0, 0.5, 0.5).to_rgba_with_alpha(3.0);
    assert_eq!(c.a, 1.0);
    assert_eq!(c.with_alpha(-2.0).a, 0.0);
    assert_eq!(c.with_alpha(0.5).scale_alpha(1.8).a, 0.5);
    assert_eq!(c.with_alpha(0.5).scale_alpha(-1.0).a, 0.0);
    assert_eq!(c.with_alpha(0.5).scale_alpha(0.5).a, 0.25);
}

#[test]
fn css_and_hex_encoding() {
    let c = Rgba::new(1.0, 0.5, 0.0, 0.5);
    assert_eq!(c.to_css(), "rgba(255, 128, 0, 0.5)");
    assert_eq!(c.to_hex(), "#ff800080");
    assert_eq!(format!("{c}"), c.to_css());
}

#[test]
fn deserialized_colors_are_clamped() {
    let c: Rgba = serde_json::from_str(r#"{"r":0,"g":0,"b":0,"a":1.7}"#).unwrap();
    assert_eq!(c.a, 1.0);
    assert_eq!(c.to_css(), "rgba(0, 0, 0, 1)");

    let c: Rgba = serde_json::from_str(r#"{"r":-2,"g":0.25,"b":9,"a":-0.4}"#).unwrap();
    assert_eq!(c, Rgba::new(0.0, 0.25, 1.0, 0.0));

    let c: Rgba = serde_json::from_str(r#"{"r":1,"g":1,"b":1}"#).unwrap();
    assert_eq!(c.a, 1.0);
}

#[test]
fn css_clamps_hand_built_alpha() {
    let c = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: -0.4,
    };
    assert_eq!(c.to_css(), "rgba(0, 0, 0, 0)");
    let c = Rgba { a: f64::NAN, ..c };
    assert_eq!(c.to_css(), "rgba(0, 0, 0, 0)");
    let c = Rgba { a: 3.0, ..c };
    assert_eq!(c.to_css(), "rgba(0, 0, 0, 1)");
}
