// Host-side tests for the frame-budgeted generation loop, driven by a
// scripted engine on a manual scheduler.

use std::cell::RefCell;
use std::rc::Rc;

use threadart_core::*;

/// Emits `source` deterministic segments, then nothing.
struct ScriptedEngine {
    remaining: u32,
    step: u32,
    pins: usize,
}

impl LineEngine for ScriptedEngine {
    type Source = u32;

    fn create(_width: u32, _height: u32) -> Result<Self, GenerateError> {
        Ok(Self {
            remaining: 0,
            step: 0,
            pins: 0,
        })
    }

    fn load_source(&mut self, source: &u32) {
        self.remaining = *source;
    }

    fn init_pins(&mut self, count: usize, _arrangement: PinArrangement) {
        self.pins = count;
    }

    fn generate_steps(&mut self, n: usize) -> Batch {
        let mut batch = Batch::new();
        while batch.len() < n && self.remaining > 0 {
            let pin = (self.step as usize % self.pins.max(1)) as f64;
            batch.push(Segment::new(
                Point::new(pin, 0.0),
                Point::new(0.0, self.step as f64),
            ));
            self.step += 1;
            self.remaining -= 1;
        }
        batch
    }
}

struct MissingEngine;

impl LineEngine for MissingEngine {
    type Source = ();

    fn create(_width: u32, _height: u32) -> Result<Self, GenerateError> {
        Err(GenerateError::EngineUnavailable("not loaded".into()))
    }

    fn load_source(&mut self, _source: &()) {}

    fn init_pins(&mut self, _count: usize, _arrangement: PinArrangement) {}

    fn generate_steps(&mut self, _n: usize) -> Batch {
        Batch::new()
    }
}

type Signals = Rc<RefCell<Vec<UiSignal>>>;

struct Harness {
    generator: Rc<RefCell<GenerationLoop<ScriptedEngine>>>,
    scheduler: ManualScheduler,
    surface: RecordingSurface,
    signals: Signals,
}

impl Harness {
    fn prepared(available: u32) -> Self {
        let generator = Rc::new(RefCell::new(GenerationLoop::new(GeneratorParams::default())));
        let surface = RecordingSurface::new(500.0, 500.0);
        let signals: Signals = Rc::default();
        generator
            .borrow_mut()
            .prepare(available, &mut surface.clone(), &mut signals.clone())
            .unwrap();
        Self {
            generator,
            scheduler: ManualScheduler::new(),
            surface,
            signals,
        }
    }

    fn start(&self, target: u32) -> CancelHandle {
        self.generator
            .borrow_mut()
            .start(target, &mut self.surface.clone(), &mut self.signals.clone())
            .unwrap();
        drive(
            &self.generator,
            &self.scheduler,
            self.surface.clone(),
            self.signals.clone(),
        )
    }

    /// Advance until nothing is scheduled; returns the number of ticks run.
    fn run_out(&self) -> usize {
        let mut ticks = 0;
        while self.scheduler.pending() > 0 {
            ticks += self.scheduler.advance(16.0);
        }
        ticks
    }

    fn statuses(&self) -> Vec<GenerationStatus> {
        self.signals
            .borrow()
            .iter()
            .filter_map(|s| match s {
                UiSignal::Status(status) => Some(status.clone()),
                _ => None,
            })
            .collect()
    }

    fn segments(&self) -> Vec<Segment> {
        self.surface
            .ops()
            .into_iter()
            .flat_map(|op| match op {
                DrawOp::Path(segments, _) => segments,
                _ => Vec::new(),
            })
            .collect()
    }
}

#[test]
fn prepare_fills_white_and_reports_ready() {
    let h = Harness::prepared(100);
    assert_eq!(h.surface.ops(), vec![DrawOp::Fill(Rgba::WHITE)]);
    assert_eq!(h.statuses(), vec![GenerationStatus::Ready]);
    assert!(h.generator.borrow().is_ready());
    assert!(!h.generator.borrow().is_active());
}

#[test]
fn default_run_takes_three_hundred_ticks() {
    let h = Harness::prepared(10_000);
    h.start(constants::DEFAULT_LINE_COUNT);
    let ticks = h.run_out();

    assert_eq!(ticks, 300);
    assert_eq!(h.surface.line_count(), 3000);
    let run = h.generator.borrow().run();
    assert_eq!(run.drawn_count, 3000);
    assert!(!run.is_active);
    let completes = h
        .statuses()
        .iter()
        .filter(|s| **s == GenerationStatus::Complete)
        .count();
    assert_eq!(completes, 1);
    assert_eq!(
        h.signals.borrow().iter().rev().nth(1),
        Some(&UiSignal::Progress(100.0))
    );
}

#[test]
fn art_lines_are_thin_translucent_black() {
    let h = Harness::prepared(10_000);
    h.start(20);
    h.run_out();
    for op in h.surface.ops() {
        if let DrawOp::Path(_, style) = op {
            assert_eq!(style.color, Rgba::BLACK.with_alpha(constants::ART_LINE_ALPHA));
            assert_eq!(style.width, constants::ART_LINE_WIDTH);
        }
    }
}

#[test]
fn overshoot_is_less_than_one_batch() {
    let h = Harness::prepared(10_000);
    h.start(25);
    let ticks = h.run_out();
    assert_eq!(ticks, 3);
    let drawn = h.generator.borrow().run().drawn_count;
    assert!(drawn >= 25);
    assert!(drawn < 25 + constants::BATCH_SIZE as u32);
    assert_eq!(h.generator.borrow().run().progress_percent(), 100.0);
}

#[test]
fn progress_is_monotonic() {
    let h = Harness::prepared(10_000);
    h.start(95);
    h.run_out();
    let progress: Vec<f64> = h
        .signals
        .borrow()
        .iter()
        .filter_map(|s| match s {
            UiSignal::Progress(p) => Some(*p),
            _ => None,
        })
        .collect();
    assert_eq!(progress.first(), Some(&0.0));
    assert!(progress.windows(2).all(|w| w[0] <= w[1]));
    assert!(progress.iter().all(|p| (0.0..=100.0).contains(p)));
}

#[test]
fn stop_drops_the_queued_frame() {
    let h = Harness::prepared(10_000);
    h.start(3000);
    for _ in 0..5 {
        h.scheduler.advance(16.0);
    }
    assert_eq!(h.surface.line_count(), 50);

    // A frame is already queued at this point.
    assert_eq!(h.scheduler.pending(), 1);
    assert!(h.generator.borrow_mut().stop(&mut h.signals.clone()));
    assert_eq!(h.scheduler.advance(16.0), 0);
    assert_eq!(h.surface.line_count(), 50);
    assert_eq!(h.statuses().last(), Some(&GenerationStatus::Stopped));

    // Nothing to stop any more.
    assert!(!h.generator.borrow_mut().stop(&mut h.signals.clone()));
}

#[test]
fn restart_redraws_identical_lines() {
    let h = Harness::prepared(10_000);
    h.start(40);
    h.run_out();
    let first = h.segments();
    h.surface.take_ops();

    h.start(40);
    h.run_out();
    let ops = h.surface.ops();
    assert_eq!(ops[0], DrawOp::Fill(Rgba::WHITE));
    assert_eq!(h.segments(), first);
}

#[test]
fn restart_after_stop_begins_from_scratch() {
    let h = Harness::prepared(10_000);
    let stale = h.start(100);
    h.scheduler.advance(16.0);
    h.generator.borrow_mut().stop(&mut h.signals.clone());
    assert!(stale.is_cancelled());

    h.surface.take_ops();
    h.start(30);
    assert_eq!(h.run_out(), 3);
    assert_eq!(h.surface.line_count(), 30);
    assert_eq!(h.generator.borrow().run().drawn_count, 30);
}

#[test]
fn exhausted_engine_completes_early() {
    let h = Harness::prepared(45);
    h.start(100);
    let ticks = h.run_out();
    assert_eq!(ticks, 6);
    let run = h.generator.borrow().run();
    assert_eq!(run.drawn_count, 45);
    assert!(!run.is_active);
    assert_eq!(h.statuses().last(), Some(&GenerationStatus::Complete));
}

#[test]
fn start_rejects_bad_requests() {
    let h = Harness::prepared(10_000);
    let mut surface = h.surface.clone();
    let mut signals = h.signals.clone();

    assert!(matches!(
        h.generator.borrow_mut().start(0, &mut surface, &mut signals),
        Err(GenerateError::InvalidTarget)
    ));

    h.start(100);
    assert!(matches!(
        h.generator.borrow_mut().start(100, &mut surface, &mut signals),
        Err(GenerateError::AlreadyRunning)
    ));

    let mut fresh: GenerationLoop<ScriptedEngine> = GenerationLoop::new(GeneratorParams::default());
    assert!(matches!(
        fresh.start(100, &mut surface, &mut signals),
        Err(GenerateError::EngineUnavailable(_))
    ));
}

#[test]
fn reset_wipes_everything() {
    let h = Harness::prepared(10_000);
    h.start(3000);
    h.scheduler.advance(16.0);
    h.generator
        .borrow_mut()
        .reset(&mut h.surface.clone(), &mut h.signals.clone());

    assert_eq!(h.scheduler.advance(16.0), 0);
    assert_eq!(h.surface.ops().last(), Some(&DrawOp::Clear));
    assert_eq!(h.signals.borrow().last(), Some(&UiSignal::Progress(0.0)));
    let generator = h.generator.borrow();
    assert!(!generator.is_ready());
    assert_eq!(generator.run(), GenerationRun::default());
}

#[test]
fn missing_engine_reports_error_status() {
    let mut generator: GenerationLoop<MissingEngine> = GenerationLoop::new(GeneratorParams::default());
    let mut surface = RecordingSurface::new(500.0, 500.0);
    let mut signals = Vec::new();
    let result = generator.prepare((), &mut surface, &mut signals);
    assert!(matches!(result, Err(GenerateError::EngineUnavailable(_))));
    assert_eq!(
        signals,
        vec![UiSignal::Status(GenerationStatus::Error(
            "line-selection engine unavailable: not loaded".into()
        ))]
    );
    assert!(surface.ops().is_empty());
}

/// Ignores the requested count and hands back five batches' worth every call.
struct GreedyEngine;

impl LineEngine for GreedyEngine {
    type Source = ();

    fn create(_width: u32, _height: u32) -> Result<Self, GenerateError> {
        Ok(Self)
    }

    fn load_source(&mut self, _source: &()) {}

    fn init_pins(&mut self, _count: usize, _arrangement: PinArrangement) {}

    fn generate_steps(&mut self, n: usize) -> Batch {
        (0..n * 5)
            .map(|i| Segment::new(Point::new(i as f64, 0.0), Point::new(0.0, i as f64)))
            .collect()
    }
}

#[test]
fn oversized_engine_batches_are_capped() {
    let mut generator: GenerationLoop<GreedyEngine> = GenerationLoop::new(GeneratorParams::default());
    let mut surface = RecordingSurface::new(500.0, 500.0);
    let mut signals = Vec::new();
    generator.prepare((), &mut surface, &mut signals).unwrap();
    generator.start(25, &mut surface, &mut signals).unwrap();
    let mut ticks = 0;
    while generator.tick(&mut surface, &mut signals) == Flow::Continue {
        ticks += 1;
    }
    let drawn = generator.run().drawn_count;
    assert_eq!(ticks + 1, 3);
    assert_eq!(drawn, 30);
    assert!(drawn <= 25 + constants::BATCH_SIZE as u32 - 1);
}
