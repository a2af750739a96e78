//! Frame-budgeted incremental string-art drawing.
//!
//! Each tick pulls one batch of segments from the external line-selection
//! engine and strokes them onto the art surface without clearing, until the
//! target line count is reached or the run is stopped.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Deserialize;
use smallvec::SmallVec;

use crate::config::GeneratorParams;
use crate::constants::{ART_LINE_ALPHA, ART_LINE_WIDTH, BATCH_SIZE};
use crate::error::GenerateError;
use crate::geometry::Segment;
use crate::schedule::{CancelHandle, Flow, Scheduler};
use crate::signals::{GenerationStatus, UiSignal, UiSink};
use crate::surface::{Rgba, StrokeStyle, Surface};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinArrangement {
    Square,
    Circle,
}

impl PinArrangement {
    pub fn as_str(self) -> &'static str {
        match self {
            PinArrangement::Square => "square",
            PinArrangement::Circle => "circle",
        }
    }
}

pub type Batch = SmallVec<[Segment; BATCH_SIZE]>;

/// External pin-placement and line-selection engine.
///
/// The sequence of segments can only be restarted by creating a new instance
/// and loading the source again.
pub trait LineEngine: Sized {
    type Source;

    fn create(width: u32, height: u32) -> Result<Self, GenerateError>;
    fn load_source(&mut self, source: &Self::Source);
    fn init_pins(&mut self, count: usize, arrangement: PinArrangement);
    /// Up to `n` segments; fewer (or none) once the engine runs out.
    fn generate_steps(&mut self, n: usize) -> Batch;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationRun {
    pub target_line_count: u32,
    pub drawn_count: u32,
    pub is_active: bool,
}

impl GenerationRun {
    pub fn progress_percent(&self) -> f64 {
        if self.target_line_count == 0 {
            return 0.0;
        }
        (self.drawn_count as f64 / self.target_line_count as f64 * 100.0).min(100.0)
    }
}

/// Owns the engine for one confirmed source and draws its lines a batch per
/// tick.
pub struct GenerationLoop<E: LineEngine> {
    params: GeneratorParams,
    source: Option<E::Source>,
    engine: Option<E>,
    run: GenerationRun,
    pending: Option<CancelHandle>,
}

impl<E: LineEngine> GenerationLoop<E> {
    pub fn new(params: GeneratorParams) -> Self {
        Self {
            params,
            source: None,
            engine: None,
            run: GenerationRun::default(),
            pending: None,
        }
    }

    pub fn params(&self) -> &GeneratorParams {
        &self.params
    }

    pub fn run(&self) -> GenerationRun {
        self.run
    }

    pub fn is_active(&self) -> bool {
        self.run.is_active
    }

    pub fn is_ready(&self) -> bool {
        self.engine.is_some()
    }

    fn output_px(&self) -> u32 {
        self.params.output_size.round().max(1.0) as u32
    }

    fn fresh_engine(&self, source: &E::Source) -> Result<E, GenerateError> {
        let size = self.output_px();
        let mut engine = E::create(size, size)?;
        engine.load_source(source);
        Ok(engine)
    }

    /// Take a confirmed, composited source image and get an engine ready for it.
    pub fn prepare(
        &mut self,
        source: E::Source,
        surface: &mut impl Surface,
        sink: &mut impl UiSink,
    ) -> Result<(), GenerateError> {
        self.halt();
        let engine = match self.fresh_engine(&source) {
            Ok(engine) => engine,
            Err(e) => {
                sink.emit(UiSignal::Status(GenerationStatus::Error(e.to_string())));
                return Err(e);
            }
        };
        self.engine = Some(engine);
        self.source = Some(source);
        self.run = GenerationRun::default();
        surface.fill(Rgba::WHITE);
        sink.emit(UiSignal::Status(GenerationStatus::Ready));
        log::info!("[generate] source prepared");
        Ok(())
    }

    /// Begin a run of `target` lines from a clean surface and a fresh engine
    /// loaded with the confirmed source.
    pub fn start(
        &mut self,
        target: u32,
        surface: &mut impl Surface,
        sink: &mut impl UiSink,
    ) -> Result<(), GenerateError> {
        if self.run.is_active {
            return Err(GenerateError::AlreadyRunning);
        }
        if target == 0 {
            return Err(GenerateError::InvalidTarget);
        }
        if self.engine.is_none() {
            return Err(GenerateError::EngineUnavailable("not prepared".into()));
        }
        let source = self.source.as_ref().ok_or(GenerateError::MissingSource)?;
        let mut engine = match self.fresh_engine(source) {
            Ok(engine) => engine,
            Err(e) => {
                sink.emit(UiSignal::Status(GenerationStatus::Error(e.to_string())));
                return Err(e);
            }
        };
        engine.init_pins(self.params.pins, self.params.arrangement);
        self.engine = Some(engine);

        surface.fill(Rgba::WHITE);
        self.run = GenerationRun {
            target_line_count: target,
            drawn_count: 0,
            is_active: true,
        };
        sink.emit(UiSignal::Status(GenerationStatus::Generating));
        sink.emit(UiSignal::Progress(0.0));
        log::info!(
            "[generate] start: target={} pins={} arrangement={}",
            target,
            self.params.pins,
            self.params.arrangement.as_str()
        );
        Ok(())
    }

    /// Draw one batch. Returns `Flow::Break` once the run is over.
    pub fn tick(&mut self, surface: &mut impl Surface, sink: &mut impl UiSink) -> Flow {
        if !self.run.is_active {
            return Flow::Break;
        }
        let Some(engine) = self.engine.as_mut() else {
            self.run.is_active = false;
            return Flow::Break;
        };
        let mut batch = engine.generate_steps(self.params.batch_size);
        batch.truncate(self.params.batch_size);
        let style = StrokeStyle::new(Rgba::BLACK.with_alpha(ART_LINE_ALPHA), ART_LINE_WIDTH);
        for segment in &batch {
            surface.stroke_line(segment, style);
        }
        self.run.drawn_count += batch.len() as u32;
        sink.emit(UiSignal::Progress(self.run.progress_percent()));
        log::trace!(
            "[generate] {}/{}",
            self.run.drawn_count,
            self.run.target_line_count
        );

        if batch.is_empty() || self.run.drawn_count >= self.run.target_line_count {
            if batch.is_empty() {
                log::warn!(
                    "[generate] engine exhausted at {}/{}",
                    self.run.drawn_count,
                    self.run.target_line_count
                );
            }
            self.run.is_active = false;
            self.pending = None;
            sink.emit(UiSignal::Status(GenerationStatus::Complete));
            log::info!("[generate] complete: {} lines", self.run.drawn_count);
            return Flow::Break;
        }
        Flow::Continue
    }

    /// Stop an active run, keeping whatever is already drawn.
    pub fn stop(&mut self, sink: &mut impl UiSink) -> bool {
        if !self.run.is_active {
            return false;
        }
        self.halt();
        sink.emit(UiSignal::Status(GenerationStatus::Stopped));
        log::info!(
            "[generate] stopped at {}/{}",
            self.run.drawn_count,
            self.run.target_line_count
        );
        true
    }

    /// Drop the engine and source and wipe the art surface.
    pub fn reset(&mut self, surface: &mut impl Surface, sink: &mut impl UiSink) {
        self.halt();
        self.engine = None;
        self.source = None;
        self.run = GenerationRun::default();
        surface.clear();
        sink.emit(UiSignal::Progress(0.0));
        log::info!("[generate] reset");
    }

    fn halt(&mut self) {
        self.run.is_active = false;
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}

/// Schedule `generator` to tick once per frame on `scheduler`.
pub fn drive<E, S, K>(
    generator: &Rc<RefCell<GenerationLoop<E>>>,
    scheduler: &impl Scheduler,
    mut surface: S,
    mut sink: K,
) -> CancelHandle
where
    E: LineEngine + 'static,
    E::Source: 'static,
    S: Surface + 'static,
    K: UiSink + 'static,
{
    let ticking = Rc::clone(generator);
    let handle = scheduler.run(Box::new(move |_| {
        ticking.borrow_mut().tick(&mut surface, &mut sink)
    }));
    if let Some(stale) = generator.borrow_mut().pending.replace(handle.clone()) {
        stale.cancel();
    }
    handle
}
