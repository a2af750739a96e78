// Host-side tests for tuning constants and their relationships.

use threadart_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn blend_factors_are_fractions() {
    assert!(IDLE_BLEND_ALPHA > 0.0 && IDLE_BLEND_ALPHA < 1.0);
    assert!(RADIAL_ROTATION_ALPHA > 0.0 && RADIAL_ROTATION_ALPHA < 1.0);
    assert!(IDLE_TARGET_OPACITY > IDLE_DRAW_THRESHOLD);
    assert!(IDLE_TARGET_OPACITY <= 1.0);
    assert!(ART_LINE_ALPHA > 0.0 && ART_LINE_ALPHA <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spawn_schedule_is_ordered() {
    assert!(SPAWN_SPLIT > 0.0 && SPAWN_SPLIT < SPAWN_BURST_THRESHOLD);
    assert!(SPAWN_BURST_THRESHOLD < 1.0);
    assert!(SPAWN_BURST >= 40);
    // The late regime starts where the early one ends.
    assert_eq!(
        SPAWN_LATE_BASE,
        SPAWN_BASE + (SPAWN_SPLIT * SPAWN_EARLY_GAIN) as usize
    );
}

#[test]
fn chord_offsets_fit_the_circle() {
    for offset in RADIAL_CHORD_OFFSETS {
        assert!(offset > 0 && offset < RADIAL_POINTS);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn generation_defaults_divide_evenly() {
    assert!(BATCH_SIZE > 0);
    assert_eq!(DEFAULT_LINE_COUNT % BATCH_SIZE as u32, 0);
    assert!(PREVIEW_MAX_SIZE <= OUTPUT_SIZE);
    assert!(CROP_MIN_SCALE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn intro_reveals_navigation_before_hero() {
    assert!(INTRO_NAV_DELAY_MS < INTRO_HERO_DELAY_MS);
    assert!(GALLERY_CAPACITY > 0);
    assert!(GALLERY_MIN_ART_LEN > 0);
}
