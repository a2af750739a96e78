//! Binding to the page's `StringArtGenerator` line-selection engine.

use threadart_core::{Batch, GenerateError, LineEngine, PinArrangement, Point, Segment};
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    type StringArtGenerator;

    #[wasm_bindgen(constructor, catch)]
    fn new(width: u32, height: u32) -> Result<StringArtGenerator, JsValue>;

    #[wasm_bindgen(method, js_name = loadFromElement)]
    fn load_from_element(this: &StringArtGenerator, source: &web::HtmlCanvasElement);

    #[wasm_bindgen(method, js_name = initPins)]
    fn init_pins(this: &StringArtGenerator, count: u32, arrangement: &str);

    #[wasm_bindgen(method, js_name = generateSteps)]
    fn generate_steps(this: &StringArtGenerator, n: u32) -> js_sys::Array;
}

pub struct JsLineEngine {
    inner: StringArtGenerator,
}

impl LineEngine for JsLineEngine {
    type Source = web::HtmlCanvasElement;

    fn create(width: u32, height: u32) -> Result<Self, GenerateError> {
        StringArtGenerator::new(width, height)
            .map(|inner| Self { inner })
            .map_err(|e| GenerateError::EngineUnavailable(format!("{:?}", e)))
    }

    fn load_source(&mut self, source: &web::HtmlCanvasElement) {
        self.inner.load_from_element(source);
    }

    fn init_pins(&mut self, count: usize, arrangement: PinArrangement) {
        self.inner.init_pins(count as u32, arrangement.as_str());
    }

    fn generate_steps(&mut self, n: usize) -> Batch {
        self.inner
            .generate_steps(n as u32)
            .iter()
            .filter_map(|step| {
                let segment = parse_step(&step);
                if segment.is_none() {
                    log::debug!("[engine] skipping malformed step {:?}", step);
                }
                segment
            })
            .take(n)
            .collect()
    }
}

/// `{p1: {x, y}, p2: {x, y}}`
fn parse_step(step: &JsValue) -> Option<Segment> {
    Some(Segment::new(point(step, "p1")?, point(step, "p2")?))
}

fn point(obj: &JsValue, key: &str) -> Option<Point> {
    let p = js_sys::Reflect::get(obj, &JsValue::from_str(key)).ok()?;
    let x = js_sys::Reflect::get(&p, &JsValue::from_str("x")).ok()?.as_f64()?;
    let y = js_sys::Reflect::get(&p, &JsValue::from_str("y")).ok()?.as_f64()?;
    Some(Point::new(x, y))
}
