// Host-side tests for the idle-activity blend.

use threadart_core::constants::{IDLE_TARGET_OPACITY, IDLE_THRESHOLD_MS};
use threadart_core::IdleTracker;

#[test]
fn stays_hidden_while_active() {
    let mut idle = IdleTracker::new(0.0);
    for i in 0..100 {
        let now = i as f64 * 16.0;
        idle.note_activity(now);
        assert_eq!(idle.update(now), 0.0);
    }
}

#[test]
fn threshold_is_strict() {
    let idle = IdleTracker::new(1000.0);
    assert!(!idle.is_idle(1000.0 + IDLE_THRESHOLD_MS));
    assert!(idle.is_idle(1000.0 + IDLE_THRESHOLD_MS + 1.0));
}

#[test]
fn fades_in_monotonically_within_bounds() {
    let mut idle = IdleTracker::new(0.0);
    let mut prev = 0.0;
    for i in 0..1000 {
        let now = IDLE_THRESHOLD_MS + 1.0 + i as f64 * 16.0;
        let o = idle.update(now);
        assert!((0.0..=IDLE_TARGET_OPACITY).contains(&o));
        assert!(o > prev, "tick {i}: {o} <= {prev}");
        prev = o;
    }
    assert!((IDLE_TARGET_OPACITY - prev).abs() < 1e-6);
}

#[test]
fn activity_mid_fade_turns_it_around() {
    let mut idle = IdleTracker::new(0.0);
    let mut now = IDLE_THRESHOLD_MS + 1.0;
    for _ in 0..50 {
        now += 16.0;
        idle.update(now);
    }
    let peak = idle.opacity();
    assert!(peak > 0.0 && peak < IDLE_TARGET_OPACITY);

    idle.note_activity(now);
    let mut prev = peak;
    for _ in 0..150 {
        now += 16.0;
        let o = idle.update(now);
        assert!(o >= 0.0 && o < prev);
        prev = o;
    }
}
