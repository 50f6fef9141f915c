use crate::canvas::CanvasSurface;
use backdrop_core::{Backdrop, FrameOutcome};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedBackdrop = Rc<RefCell<Backdrop<CanvasSurface>>>;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// requestAnimationFrame loop around a shared [`Backdrop`]. The callback
/// re-requests itself only while the controller asks for another frame.
#[derive(Clone)]
pub struct FrameLoop {
    tick: Tick,
}

impl FrameLoop {
    pub fn new(backdrop: SharedBackdrop) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            let outcome = backdrop.borrow_mut().step_frame(now);
            match outcome {
                Ok(FrameOutcome::RequestNext) => request(&tick_clone),
                Ok(FrameOutcome::Stop) => {}
                Err(e) => log::error!("[frame] animation stopped: {}", e),
            }
        }) as Box<dyn FnMut(f64)>));
        Self { tick }
    }

    pub fn request(&self) {
        request(&self.tick);
    }
}

fn request(tick: &Tick) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
        }
    }
}
