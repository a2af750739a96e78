use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use threadart_core::{CancelHandle, Flow, SceneParams, SceneState, Scheduler, Tick, UiSink};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::canvas::CanvasSurface;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `Scheduler` on `requestAnimationFrame`; ticks get the frame timestamp.
#[derive(Clone, Copy, Default)]
pub struct RafScheduler;

impl Scheduler for RafScheduler {
    fn run(&self, mut tick: Tick) -> CancelHandle {
        let handle = CancelHandle::new();
        let Some(window) = web::window() else {
            log::error!("[frame] no window; task not scheduled");
            handle.cancel();
            return handle;
        };
        let slot: FrameSlot = Rc::new(RefCell::new(None));
        let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let slot_tick = slot.clone();
        let frame_id_tick = frame_id.clone();
        let handle_tick = handle.clone();
        let window_tick = window.clone();
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            frame_id_tick.set(None);
            if handle_tick.is_cancelled() {
                return;
            }
            match tick(now) {
                Flow::Continue => frame_id_tick.set(request(&window_tick, &slot_tick)),
                Flow::Break => release(&slot_tick),
            }
        }) as Box<dyn FnMut(f64)>));

        let slot_cancel = slot.clone();
        let frame_id_cancel = frame_id.clone();
        let window_cancel = window.clone();
        handle.set_on_cancel(move || {
            if let Some(id) = frame_id_cancel.take() {
                let _ = window_cancel.cancel_animation_frame(id);
            }
            release(&slot_cancel);
        });

        frame_id.set(request(&window, &slot));
        handle
    }
}

fn request(window: &web::Window, slot: &FrameSlot) -> Option<i32> {
    let slot = slot.borrow();
    let closure = slot.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

fn release(slot: &FrameSlot) {
    if let Some(closure) = slot.borrow_mut().take() {
        // May be called from inside the closure itself; free it afterwards.
        spawn_local(async move { drop(closure) });
    }
}

/// Build the scene for `canvas` and tick it every frame for the page's lifetime.
pub fn start_hero_loop<K>(
    canvas: &web::HtmlCanvasElement,
    params: SceneParams,
    mut sink: K,
) -> anyhow::Result<Rc<RefCell<SceneState>>>
where
    K: UiSink + 'static,
{
    let mut surface = CanvasSurface::from_canvas(canvas)?;
    let (width, height) = crate::dom::fit_canvas_to_window(canvas);
    let scene = Rc::new(RefCell::new(SceneState::new(
        params,
        width,
        height,
        instant::now(),
        StdRng::from_entropy(),
    )));
    log::info!("[frame] hero loop {}x{}", width, height);

    let ticking = scene.clone();
    RafScheduler.run(Box::new(move |now| {
        ticking.borrow_mut().tick(now, &mut surface, &mut sink);
        Flow::Continue
    }));
    Ok(scene)
}
