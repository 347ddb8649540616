use super::*;

#[test]
fn clock_accumulates_and_counts_ticks() {
    let mut clock = SceneClock::new(None);
    clock.advance(0.5).unwrap();
    clock.advance(0.25).unwrap();
    clock.advance(0.0).unwrap();
    assert_eq!(clock.elapsed(), 0.75);
    assert_eq!(clock.presented(), 0.75);
    assert_eq!(clock.ticks(), 3);
}

#[test]
fn clock_rejects_backwards_or_non_finite_delta() {
    let mut clock = SceneClock::new(None);
    assert!(clock.advance(-0.01).is_err());
    assert!(clock.advance(f64::NAN).is_err());
    assert!(clock.advance(f64::INFINITY).is_err());
    assert_eq!(clock.elapsed(), 0.0);
    assert_eq!(clock.ticks(), 0);
}

#[test]
fn stop_motion_presents_whole_frames() {
    let mut clock = SceneClock::new(Some(StopMotion::default()));
    clock.advance(0.1).unwrap();
    // 0.1 s is frame 1 at 12 fps.
    assert!((clock.presented() - 1.0 / 12.0).abs() < 1e-15);
    clock.advance(0.05).unwrap();
    assert!((clock.presented() - 1.0 / 12.0).abs() < 1e-15);
    clock.advance(0.02).unwrap();
    assert!((clock.presented() - 2.0 / 12.0).abs() < 1e-15);
}

#[test]
fn jitter_is_bounded_and_deterministic() {
    let sm = StopMotion::default();
    for f in 0..200 {
        for axis in 0..3 {
            let j = sm.jitter(FrameIndex(f), axis);
            assert!(j.abs() <= sm.jitter_amount);
            assert_eq!(j, sm.jitter(FrameIndex(f), axis));
        }
    }
    assert_ne!(sm.jitter(FrameIndex(1), 0), sm.jitter(FrameIndex(2), 0));
    assert_ne!(sm.jitter(FrameIndex(1), 0), sm.jitter(FrameIndex(1), 1));

    let reseeded = StopMotion { seed: 9, ..sm };
    assert_ne!(sm.jitter(FrameIndex(1), 0), reseeded.jitter(FrameIndex(1), 0));
}

#[test]
fn stop_motion_validation() {
    StopMotion::default().validate().unwrap();
    let bad = StopMotion {
        jitter_amount: -1.0,
        ..StopMotion::default()
    };
    assert!(bad.validate().is_err());
    let bad = StopMotion {
        fps: Fps { num: 0, den: 1 },
        ..StopMotion::default()
    };
    assert!(bad.validate().is_err());
}
