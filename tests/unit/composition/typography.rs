use super::*;

#[test]
fn knowing_is_heaviest_believing_is_airiest() {
    let k = derive_typography(Mode::Knowing);
    let e = derive_typography(Mode::Embodying);
    let b = derive_typography(Mode::Believing);

    assert_eq!(k.prompt.weight, 500);
    assert_eq!(e.prompt.weight, 400);
    assert_eq!(b.prompt.weight, 300);

    assert!(k.prompt.tracking_em < e.prompt.tracking_em);
    assert!(e.prompt.tracking_em < b.prompt.tracking_em);
    assert!(b.arrival.size_px > k.arrival.size_px);
}

#[test]
fn weights_stay_in_css_range() {
    for &mode in Mode::ALL {
        for (name, s) in derive_typography(mode).presets() {
            assert!((100..=900).contains(&s.weight), "{name}: {}", s.weight);
            assert!((0.0..=1.0).contains(&s.opacity), "{name}");
            assert!(s.size_px > 0.0);
        }
    }
    // texture weight 200 - 100 stays at the floor
    assert_eq!(derive_typography(Mode::Believing).texture.weight, 100);
}
