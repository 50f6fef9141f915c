use crate::constants::{DISABLE_FLAG, REDUCED_MOTION_QUERY};
use backdrop_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let w = web::window()?;
    let d = w.document()?;
    Some((w, d))
}

/// `Ok(None)` when no element carries `id`; an element of the wrong kind is an error.
pub fn find_canvas(
    document: &web::Document,
    id: &str,
) -> anyhow::Result<Option<web::HtmlCanvasElement>> {
    let Some(el) = document.get_element_by_id(id) else {
        return Ok(None);
    };
    let canvas = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", id, e))?;
    Ok(Some(canvas))
}

/// CSS-pixel window size plus the device pixel ratio.
pub fn window_viewport(window: &web::Window) -> anyhow::Result<Viewport> {
    let w = js_number(window.inner_width(), "innerWidth")?;
    let h = js_number(window.inner_height(), "innerHeight")?;
    Ok(Viewport::new(w, h, window.device_pixel_ratio()))
}

fn js_number(v: Result<JsValue, JsValue>, what: &str) -> anyhow::Result<f64> {
    v.map_err(|e| anyhow::anyhow!("{} unavailable: {:?}", what, e))?
        .as_f64()
        .ok_or_else(|| anyhow::anyhow!("{} is not a number", what))
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn disable_flag_set(window: &web::Window) -> bool {
    js_sys::Reflect::get(window, &JsValue::from_str(DISABLE_FLAG))
        .map(|v| v.is_truthy())
        .unwrap_or(false)
}

/// Same timebase as requestAnimationFrame timestamps.
#[inline]
pub fn now_ms(window: &web::Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or(0.0)
}

pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("{} listener not attached: {:?}", event, e);
    }
    closure.forget();
}
