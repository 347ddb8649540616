use super::*;

fn two_keys(mode: InterpMode, ease: Ease) -> Keyframes<f64> {
    Keyframes {
        keys: vec![
            Keyframe {
                time: 1.0,
                value: 0.0,
                ease,
            },
            Keyframe {
                time: 3.0,
                value: 10.0,
                ease: Ease::Linear,
            },
        ],
        mode,
    }
}

#[test]
fn keyframes_hold_is_constant_between_keys() {
    let kf = two_keys(InterpMode::Hold, Ease::Linear);
    assert_eq!(kf.sample(2.0).unwrap(), 0.0);
    assert_eq!(kf.sample(3.0).unwrap(), 10.0);
}

#[test]
fn keyframes_linear_interpolates() {
    let kf = two_keys(InterpMode::Linear, Ease::Linear);
    assert_eq!(kf.sample(2.0).unwrap(), 5.0);
}

#[test]
fn keyframes_clamp_outside_range() {
    let kf = two_keys(InterpMode::Linear, Ease::Linear);
    assert_eq!(kf.sample(-5.0).unwrap(), 0.0);
    assert_eq!(kf.sample(100.0).unwrap(), 10.0);
    assert_eq!(kf.end_time(), 3.0);
}

#[test]
fn ease_of_leading_key_shapes_segment() {
    let kf = two_keys(InterpMode::Linear, Ease::InQuad);
    assert_eq!(kf.sample(2.0).unwrap(), 2.5);
}

#[test]
fn coincident_keys_jump_to_later_value() {
    let kf = Keyframes {
        keys: vec![
            Keyframe {
                time: 0.0,
                value: 1.0,
                ease: Ease::Linear,
            },
            Keyframe {
                time: 2.0,
                value: 1.0,
                ease: Ease::Linear,
            },
            Keyframe {
                time: 2.0,
                value: 4.0,
                ease: Ease::Linear,
            },
        ],
        mode: InterpMode::Linear,
    };
    assert_eq!(kf.sample(1.999).unwrap(), 1.0);
    assert_eq!(kf.sample(2.0).unwrap(), 4.0);
}

#[test]
fn validate_rejects_unsorted_and_empty() {
    let mut kf = two_keys(InterpMode::Linear, Ease::Linear);
    kf.keys.reverse();
    assert!(kf.validate().is_err());

    let empty: Keyframes<f64> = Keyframes {
        keys: vec![],
        mode: InterpMode::Hold,
    };
    assert!(empty.validate().is_err());
    assert!(empty.sample(0.0).is_err());
}

#[test]
fn vector_and_color_lerp() {
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(2.0, 4.0, -6.0);
    assert_eq!(<Vec3 as Lerp>::lerp(&a, &b, 0.5), Vec3::new(1.0, 2.0, -3.0));

    let c = <Rgb as Lerp>::lerp(&Rgb::new(0.0, 0.0, 0.0), &Rgb::WHITE, 0.25);
    assert_eq!(c, Rgb::new(0.25, 0.25, 0.25));
}
