// Shared animation and generation tuning constants.
//
// All durations are milliseconds; all lengths are surface units (CSS pixels).

// Scene phases
pub const TRANSITION_DURATION_MS: f64 = 2000.0;

// Idle threads
pub const HERO_THREAD_COUNT: usize = 25; // idle-display thread set
pub const GENERATOR_THREAD_COUNT: usize = 30; // generator-display thread set
pub const IDLE_SPEED_MIN: f64 = 0.0005;
pub const IDLE_SPEED_SPAN: f64 = 0.001;
pub const IDLE_CENTER_SPREAD: f64 = 0.5; // fraction of the surface the center anchor wanders in
pub const IDLE_END_AMPLITUDE: f64 = 0.1; // end-point drift as a fraction of width/height
pub const IDLE_END_Y_FREQ: f64 = 1.3; // y drifts slightly faster than x
pub const IDLE_CP1_FREQ: f64 = 0.001;
pub const IDLE_CP2_FREQ: f64 = 0.0008;
pub const IDLE_CONTROL_WOBBLE: f64 = 50.0;

// Control points sit at 30% / 70% along the chord
pub const CP1_T: f64 = 0.3;
pub const CP2_T: f64 = 0.7;

// Transition threads
pub const TRANSITION_EDGE_MARGIN: f64 = 20.0; // curves start/end just off-surface
pub const TRANSITION_CONTROL_JITTER: f64 = 200.0; // full width of the +-100 perturbation
pub const TRANSITION_LINE_WIDTH: f64 = 0.6;
pub const TRANSITION_ALPHA: f64 = 0.8;

// Transition spawn schedule
pub const SPAWN_BASE: usize = 3;
pub const SPAWN_EARLY_GAIN: f64 = 40.0;
pub const SPAWN_SPLIT: f64 = 0.5;
pub const SPAWN_LATE_BASE: usize = 23;
pub const SPAWN_LATE_GAIN: f64 = 10.0;
pub const SPAWN_BURST_THRESHOLD: f64 = 0.85;
pub const SPAWN_BURST: usize = 40;

// Idle-activity blend
pub const IDLE_THRESHOLD_MS: f64 = 3000.0;
pub const IDLE_TARGET_OPACITY: f64 = 0.2;
pub const IDLE_BLEND_ALPHA: f64 = 0.02; // new = old + α*(target-old)
pub const IDLE_DRAW_THRESHOLD: f64 = 0.001;

// Radial pattern
pub const RADIAL_POINTS: usize = 120;
pub const RADIAL_RADIUS_SCALE: f64 = 0.35;
pub const RADIAL_BREATH_AMPLITUDE: f64 = 20.0;
pub const RADIAL_BREATH_STEP: f64 = 0.005;
pub const RADIAL_ROTATION_GAIN: f64 = 0.2; // target rotation per unit of normalized pointer x
pub const RADIAL_ROTATION_ALPHA: f64 = 0.02;
pub const RADIAL_DRIFT_PER_MS: f64 = 0.00005;
pub const RADIAL_DISTORT_LOBES: f64 = 3.0;
pub const RADIAL_DISTORT_GAIN: f64 = 20.0;
pub const RADIAL_CHORD_OFFSETS: [usize; 3] = [30, 40, 50];
pub const RADIAL_ALPHA: f64 = 0.2;

// Generation
pub const PIN_COUNT: usize = 200;
pub const DEFAULT_LINE_COUNT: u32 = 3000;
pub const BATCH_SIZE: usize = 10;
pub const OUTPUT_SIZE: f64 = 500.0;
pub const ART_LINE_WIDTH: f64 = 0.5;
pub const ART_LINE_ALPHA: f64 = 0.4;

// Crop
pub const PREVIEW_MAX_SIZE: f64 = 400.0;
pub const PREVIEW_GUTTER: f64 = 40.0;
pub const CROP_MIN_SCALE: f64 = 0.1;
pub const WHEEL_ZOOM_PER_UNIT: f64 = 0.001;

// Gallery
pub const GALLERY_KEY: &str = "stringArtGallery";
pub const GALLERY_CAPACITY: usize = 3;
pub const GALLERY_MIN_ART_LEN: usize = 100; // shorter payloads are broken captures

// Intro
pub const INTRO_PLAYED_KEY: &str = "logoAnimationPlayed";
pub const INTRO_NAV_DELAY_MS: u32 = 1500;
pub const INTRO_HERO_DELAY_MS: u32 = 2000;
