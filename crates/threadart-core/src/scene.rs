//! Hero/generator animation state machine.
//!
//! `IdleDisplay` -> `Transitioning` -> `GeneratorDisplay`, never backwards.
//! One [`SceneState`] is owned by the frame loop and ticked once per frame.

use rand::rngs::StdRng;

use crate::config::SceneParams;
use crate::constants::{IDLE_DRAW_THRESHOLD, TRANSITION_ALPHA, TRANSITION_LINE_WIDTH};
use crate::idle::IdleTracker;
use crate::radial::{PointerOffset, RadialPattern};
use crate::signals::{UiSignal, UiSink};
use crate::surface::{Rgba, StrokeStyle, Surface};
use crate::threads::{transition_spawn_count, IdleThread, Thread, TransitionThread};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    IdleDisplay,
    Transitioning,
    GeneratorDisplay,
}

/// The hero canvas scene: current phase, its thread sets and the radial
/// pattern shown behind them.
pub struct SceneState {
    params: SceneParams,
    phase: Phase,
    phase_started_ms: f64,
    width: f64,
    height: f64,
    pointer: PointerOffset,
    radial: RadialPattern,
    idle: IdleTracker,
    hero_threads: Vec<IdleThread>,
    generator_threads: Vec<IdleThread>,
    rng: StdRng,
}

impl SceneState {
    pub fn new(params: SceneParams, width: f64, height: f64, now_ms: f64, mut rng: StdRng) -> Self {
        let hero_threads = IdleThread::spawn_many(&mut rng, params.hero_threads, width, height);
        Self {
            params,
            phase: Phase::IdleDisplay,
            phase_started_ms: now_ms,
            width,
            height,
            pointer: PointerOffset::default(),
            radial: RadialPattern::default(),
            idle: IdleTracker::new(now_ms),
            hero_threads,
            generator_threads: Vec::new(),
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phase_started_ms(&self) -> f64 {
        self.phase_started_ms
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn idle_opacity(&self) -> f64 {
        self.idle.opacity()
    }

    pub fn radial(&self) -> &RadialPattern {
        &self.radial
    }

    pub fn pointer(&self) -> PointerOffset {
        self.pointer
    }

    pub fn hero_threads(&self) -> &[IdleThread] {
        &self.hero_threads
    }

    pub fn generator_threads(&self) -> &[IdleThread] {
        &self.generator_threads
    }

    /// Rebuild every dimension-dependent thread set for the new size.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.hero_threads =
            IdleThread::spawn_many(&mut self.rng, self.params.hero_threads, width, height);
        if self.phase == Phase::GeneratorDisplay {
            self.reset_generator_threads();
        }
        log::debug!("[scene] resized to {width}x{height}");
    }

    pub fn note_activity(&mut self, now_ms: f64) {
        self.idle.note_activity(now_ms);
    }

    /// Pointer moved to surface coordinates `(x, y)`; counts as activity.
    pub fn pointer_moved(&mut self, x: f64, y: f64, now_ms: f64) {
        self.pointer = PointerOffset::from_surface(x, y, self.width, self.height);
        self.idle.note_activity(now_ms);
    }

    /// Leave `IdleDisplay`. Returns false (and does nothing) in any other phase.
    pub fn start_transition(&mut self, now_ms: f64, sink: &mut impl UiSink) -> bool {
        if self.phase != Phase::IdleDisplay {
            return false;
        }
        self.enter(Phase::Transitioning, now_ms, sink);
        true
    }

    pub fn tick(&mut self, now_ms: f64, surface: &mut impl Surface, sink: &mut impl UiSink) {
        let blend = self.idle.update(now_ms);
        match self.phase {
            Phase::IdleDisplay => {
                surface.clear();
                self.radial
                    .render(surface, now_ms, self.pointer, Rgba::BLACK);
                if blend > IDLE_DRAW_THRESHOLD {
                    draw_threads(surface, &self.hero_threads, now_ms, Rgba::BLACK.with_alpha(blend));
                }
            }
            Phase::Transitioning => {
                // No clear: the threads pile up until the surface is dark.
                self.radial.step(self.pointer);
                let elapsed = now_ms - self.phase_started_ms;
                let progress = (elapsed / self.params.transition_duration_ms).clamp(0.0, 1.0);
                let style = StrokeStyle::new(
                    Rgba::BLACK.with_alpha(TRANSITION_ALPHA),
                    TRANSITION_LINE_WIDTH,
                );
                for _ in 0..transition_spawn_count(progress) {
                    let thread = TransitionThread::spawn(&mut self.rng, self.width, self.height);
                    surface.stroke_curve(&thread.curve(now_ms, self.width, self.height), style);
                }
                if elapsed > self.params.transition_duration_ms {
                    surface.fill(Rgba::BLACK);
                    self.reset_generator_threads();
                    self.enter(Phase::GeneratorDisplay, now_ms, sink);
                }
            }
            Phase::GeneratorDisplay => {
                surface.fill(Rgba::BLACK);
                self.radial
                    .render(surface, now_ms, self.pointer, Rgba::WHITE);
                if blend > IDLE_DRAW_THRESHOLD {
                    draw_threads(
                        surface,
                        &self.generator_threads,
                        now_ms,
                        Rgba::WHITE.with_alpha(blend),
                    );
                }
            }
        }
    }

    fn enter(&mut self, phase: Phase, now_ms: f64, sink: &mut impl UiSink) {
        log::info!("[scene] {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        self.phase_started_ms = now_ms;
        sink.emit(UiSignal::PhaseChanged(phase));
    }

    fn reset_generator_threads(&mut self) {
        self.generator_threads = IdleThread::spawn_many(
            &mut self.rng,
            self.params.generator_threads,
            self.width,
            self.height,
        );
    }
}

fn draw_threads<T: Thread>(surface: &mut impl Surface, threads: &[T], now_ms: f64, color: Rgba) {
    let (width, height) = surface.size();
    let style = StrokeStyle::new(color, 1.0);
    for thread in threads {
        surface.stroke_curve(&thread.curve(now_ms, width, height), style);
    }
}
