#![cfg(target_arch = "wasm32")]
//! Browser front-end: finds the backdrop canvas, boots the core controller
//! and drives it from requestAnimationFrame.

use backdrop_core::setup::{bootstrap, Host, Setup, SetupError};
use backdrop_core::Viewport;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

pub mod canvas;
pub mod constants;
pub mod dom;
mod events;
mod frame;

use canvas::CanvasSurface;
use constants::{config_attr, CANVAS_ID};

struct WebHost {
    window: web::Window,
    document: web::Document,
    canvas: Option<web::HtmlCanvasElement>,
}

impl Host for WebHost {
    type Surface = CanvasSurface;

    fn disabled(&self) -> bool {
        dom::disable_flag_set(&self.window)
    }

    fn acquire_surface(&mut self) -> Result<Option<CanvasSurface>, SetupError> {
        let Some(canvas) = dom::find_canvas(&self.document, CANVAS_ID)
            .map_err(|e| SetupError::Host(e.to_string()))?
        else {
            return Ok(None);
        };
        self.canvas = Some(canvas.clone());
        Ok(Some(CanvasSurface::new(canvas)?))
    }

    fn viewport(&self) -> Result<Viewport, SetupError> {
        dom::window_viewport(&self.window).map_err(|e| SetupError::Host(e.to_string()))
    }

    fn prefers_reduced_motion(&self) -> bool {
        dom::prefers_reduced_motion(&self.window)
    }

    fn config_value(&self, key: &str) -> Option<String> {
        self.canvas.as_ref()?.get_attribute(&config_attr(key))
    }

    fn now(&self) -> f64 {
        dom::now_ms(&self.window)
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    // The backdrop is decoration: failures are logged, never surfaced to the page.
    if let Err(e) = init() {
        log::warn!("ambient backdrop disabled: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let mut host = WebHost {
        window: window.clone(),
        document: document.clone(),
        canvas: None,
    };
    let backdrop = match bootstrap(&mut host) {
        Setup::Ready(b) => Rc::new(RefCell::new(b)),
        Setup::Inert(_) => return Ok(()),
    };

    let frames = frame::FrameLoop::new(backdrop.clone());
    events::wire_resize(&window, backdrop.clone());
    events::wire_visibility(&document, backdrop.clone(), frames.clone());

    let now = dom::now_ms(&window);
    if backdrop.borrow_mut().start(now) {
        frames.request();
    }
    Ok(())
}
