use super::*;

const ALL: [Ease; 8] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InOutSine,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn input_outside_unit_range_is_clamped() {
    assert_eq!(Ease::InOutQuad.apply(-3.0), 0.0);
    assert_eq!(Ease::InOutQuad.apply(7.0), 1.0);
}

#[test]
fn in_out_variants_are_symmetric_at_half() {
    for ease in [Ease::InOutQuad, Ease::InOutCubic, Ease::InOutSine] {
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-12, "{ease:?}");
    }
}
