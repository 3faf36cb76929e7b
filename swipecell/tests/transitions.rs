use std::time::{Duration, Instant};

use swipecell::{Animator, Easing, Settle, TransitionConfig};

// =============================================================================
// Easing Function Tests
// =============================================================================

#[test]
fn test_easing_boundaries() {
    // All easing functions map 0->0 and 1->1, spring included.
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::ExpInOut,
        Easing::Spring,
    ] {
        assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
        assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);
    }
}

#[test]
fn test_easing_linear() {
    assert_eq!(Easing::Linear.apply(0.25), 0.25);
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
}

#[test]
fn test_easing_ease_in() {
    // EaseIn: t * t (quadratic)
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
    assert!((Easing::EaseIn.apply(0.25) - 0.0625).abs() < 0.0001);
}

#[test]
fn test_easing_ease_out() {
    // EaseOut: 1 - (1-t)^2 (quadratic, fast start)
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
}

#[test]
fn test_easing_ease_in_out_midpoint() {
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    assert!(Easing::EaseInOut.apply(0.25) < 0.25);
    assert!(Easing::EaseInOut.apply(0.75) > 0.75);
}

#[test]
fn test_easing_exp_in_out_midpoint() {
    assert!((Easing::ExpInOut.apply(0.5) - 0.5).abs() < 0.0001);
    // Exponential curve barely moves at first, races through the middle.
    assert!(Easing::ExpInOut.apply(0.1) < 0.01);
    assert!(Easing::ExpInOut.apply(0.9) > 0.99);
}

#[test]
fn test_easing_monotonic() {
    // All easing functions except Spring are monotonically increasing.
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::ExpInOut,
    ] {
        let mut prev = 0.0;
        for i in 1..=20 {
            let t = i as f32 / 20.0;
            let val = easing.apply(t);
            assert!(val >= prev, "{:?} not monotonic at t={}", easing, t);
            prev = val;
        }
    }
}

#[test]
fn test_easing_spring_overshoots() {
    // The spring passes the target before settling back onto it.
    assert!(Easing::Spring.apply(0.26) > 1.0);
    assert_eq!(Easing::Spring.apply(1.0), 1.0);
}

// =============================================================================
// TransitionConfig Tests
// =============================================================================

#[test]
fn test_transition_config_new() {
    let config = TransitionConfig::new(Duration::from_millis(300), Easing::EaseOut);
    assert_eq!(config.duration, Duration::from_millis(300));
    assert_eq!(config.easing, Easing::EaseOut);
    assert_eq!(config.delay, Duration::ZERO);
}

#[test]
fn test_transition_config_with_delay() {
    let config = TransitionConfig::new(Duration::from_millis(100), Easing::Linear)
        .with_delay(Duration::from_millis(250));
    assert_eq!(config.delay, Duration::from_millis(250));
}

#[test]
fn test_canonical_configs() {
    assert_eq!(TransitionConfig::SETTLE.duration, Duration::from_millis(150));
    assert_eq!(TransitionConfig::SETTLE.easing, Easing::Linear);
    assert_eq!(TransitionConfig::SETTLE.delay, Duration::ZERO);

    assert_eq!(TransitionConfig::PEEK.delay, Duration::from_millis(400));
    assert_eq!(TransitionConfig::PEEK.duration, Duration::from_millis(1200));
    assert_eq!(TransitionConfig::PEEK.easing, Easing::ExpInOut);

    assert_eq!(TransitionConfig::CLOSE.duration, Duration::from_millis(400));
    assert_eq!(TransitionConfig::CLOSE.easing, Easing::Spring);
}

// =============================================================================
// Animator Tests
// =============================================================================

#[test]
fn test_animator_idle() {
    let mut animator = Animator::new();
    let now = Instant::now();
    assert!(!animator.is_active());
    assert_eq!(animator.sample(now), None);
    assert_eq!(animator.tick(now), None);
    assert_eq!(animator.target(), None);
}

#[test]
fn test_animator_linear_sampling() {
    let mut animator = Animator::new();
    let t0 = Instant::now();
    let config = TransitionConfig::new(Duration::from_millis(200), Easing::Linear);
    animator.animate_to(0.0, 100.0, config, Settle::Open, t0);

    assert!(animator.is_active());
    assert_eq!(animator.target(), Some(100.0));
    assert!((animator.sample(t0).unwrap() - 0.0).abs() < 0.0001);
    assert!((animator.sample(t0 + Duration::from_millis(100)).unwrap() - 50.0).abs() < 0.0001);
    // Past the end, sampling holds the target.
    assert!((animator.sample(t0 + Duration::from_millis(300)).unwrap() - 100.0).abs() < 0.0001);

    assert_eq!(animator.tick(t0 + Duration::from_millis(100)), None);
}

#[test]
fn test_animator_completes_exactly_once() {
    let mut animator = Animator::new();
    let t0 = Instant::now();
    let config = TransitionConfig::new(Duration::from_millis(150), Easing::Linear);
    animator.animate_to(-60.0, -120.0, config, Settle::Open, t0);

    let done = animator
        .tick(t0 + Duration::from_millis(150))
        .expect("transition should complete");
    assert_eq!(done.x, -120.0);
    assert_eq!(done.settle, Settle::Open);

    assert!(!animator.is_active());
    assert_eq!(animator.tick(t0 + Duration::from_millis(500)), None);
}

#[test]
fn test_animator_delay_holds_start_value() {
    let mut animator = Animator::new();
    let t0 = Instant::now();
    let config = TransitionConfig::new(Duration::from_millis(100), Easing::Linear)
        .with_delay(Duration::from_millis(100));
    animator.animate_to(-200.0, 0.0, config, Settle::Cosmetic, t0);

    // During the delay the value sits at `from`.
    assert!((animator.sample(t0 + Duration::from_millis(50)).unwrap() - -200.0).abs() < 0.0001);
    assert_eq!(animator.tick(t0 + Duration::from_millis(150)), None);

    let done = animator
        .tick(t0 + Duration::from_millis(200))
        .expect("completes after delay plus duration");
    assert_eq!(done.x, 0.0);
    assert_eq!(done.settle, Settle::Cosmetic);
}

#[test]
fn test_animator_supersedes_in_flight_transition() {
    let mut animator = Animator::new();
    let t0 = Instant::now();
    let settle = TransitionConfig::new(Duration::from_millis(150), Easing::Linear);
    animator.animate_to(0.0, -120.0, settle, Settle::Open, t0);

    // New transition mid-flight takes over the slot.
    let close = TransitionConfig::new(Duration::from_millis(400), Easing::Linear);
    let t1 = t0 + Duration::from_millis(75);
    animator.animate_to(-60.0, 0.0, close, Settle::Closed, t1);

    // The old deadline passes without a completion.
    assert_eq!(animator.tick(t0 + Duration::from_millis(200)), None);
    assert_eq!(animator.target(), Some(0.0));

    let done = animator
        .tick(t1 + Duration::from_millis(400))
        .expect("superseding transition completes");
    assert_eq!(done.x, 0.0);
    assert_eq!(done.settle, Settle::Closed);
}

#[test]
fn test_animator_cancel() {
    let mut animator = Animator::new();
    let t0 = Instant::now();
    let config = TransitionConfig::new(Duration::from_millis(100), Easing::Linear);
    animator.animate_to(0.0, 50.0, config, Settle::Open, t0);

    animator.cancel();
    assert!(!animator.is_active());
    assert_eq!(animator.tick(t0 + Duration::from_millis(200)), None);
}

#[test]
fn test_animator_zero_duration_completes_immediately() {
    let mut animator = Animator::new();
    let t0 = Instant::now();
    let config = TransitionConfig::new(Duration::ZERO, Easing::Linear);
    animator.animate_to(5.0, 0.0, config, Settle::Closed, t0);

    let done = animator.tick(t0).expect("zero-duration transition");
    assert_eq!(done.x, 0.0);
}
