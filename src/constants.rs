// Host-page contract for the web front-end.

// Id of the <canvas> the backdrop paints into; absent means do nothing.
pub const CANVAS_ID: &str = "ambient-bg";

// Truthy `window.__AMBIENT_BG_DISABLED__` turns the whole backdrop off.
pub const DISABLE_FLAG: &str = "__AMBIENT_BG_DISABLED__";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Config overrides are read from `data-<key>` attributes on the canvas.
pub const CONFIG_ATTR_PREFIX: &str = "data-";

#[inline]
pub fn config_attr(key: &str) -> String {
    format!("{}{}", CONFIG_ATTR_PREFIX, key)
}
