use crate::dom;
use crate::frame::{FrameLoop, SharedBackdrop};
use web_sys as web;

/// Keep the surface sized to the window.
pub fn wire_resize(window: &web::Window, backdrop: SharedBackdrop) {
    let win = window.clone();
    dom::add_listener(window, "resize", move || match dom::window_viewport(&win) {
        Ok(vp) => {
            if let Err(e) = backdrop.borrow_mut().resize(vp) {
                log::warn!("[resize] {}", e);
            }
        }
        Err(e) => log::warn!("[resize] {:?}", e),
    });
}

/// Pause on hidden pages (when motion preferences are respected) and restart
/// the frame loop when the controller says so.
pub fn wire_visibility(document: &web::Document, backdrop: SharedBackdrop, frames: FrameLoop) {
    let doc = document.clone();
    dom::add_listener(document, "visibilitychange", move || {
        let visible = !doc.hidden();
        let now = web::window().map(|w| dom::now_ms(&w)).unwrap_or(0.0);
        if backdrop.borrow_mut().visibility_changed(visible, now) {
            frames.request();
        }
    });
}
