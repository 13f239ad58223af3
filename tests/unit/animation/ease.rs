use super::*;

const ALL: [Ease; 3] = [Ease::OutQuad, Ease::OutCubic, Ease::InOutCubic];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn sharpness_buckets() {
    assert_eq!(Ease::for_sharpness(1.0), Ease::OutCubic);
    assert_eq!(Ease::for_sharpness(0.7), Ease::OutCubic);
    assert_eq!(Ease::for_sharpness(0.5), Ease::OutQuad);
    assert_eq!(Ease::for_sharpness(0.1), Ease::InOutCubic);
}

#[test]
fn serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&Ease::InOutCubic).unwrap(),
        "\"in_out_cubic\""
    );
}

#[test]
fn nan_progress_is_treated_as_start() {
    for ease in ALL {
        assert_eq!(ease.apply(f64::NAN), 0.0);
    }
}

#[test]
fn every_curve_is_reachable_from_a_form() {
    let picked: Vec<Ease> = [1.0, 0.5, 0.1]
        .into_iter()
        .map(Ease::for_sharpness)
        .collect();
    assert_eq!(picked, vec![Ease::OutCubic, Ease::OutQuad, Ease::InOutCubic]);
    for ease in ALL {
        assert!(picked.contains(&ease), "{ease:?}");
    }
}
