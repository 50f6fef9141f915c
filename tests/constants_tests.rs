// Host-side tests for the page contract constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use backdrop_core::config::CONFIG_KEYS;
use constants::*;

#[test]
fn config_attributes_are_data_attributes() {
    for key in CONFIG_KEYS {
        let attr = config_attr(key);
        assert!(attr.starts_with("data-"), "{}", attr);
        assert_eq!(&attr[CONFIG_ATTR_PREFIX.len()..], key);
        // HTML lowercases attribute names; keys must already be lowercase.
        assert_eq!(attr, attr.to_ascii_lowercase());
    }
}

#[test]
fn page_contract_names_are_stable() {
    assert_eq!(CANVAS_ID, "ambient-bg");
    assert_eq!(config_attr("blob-count"), "data-blob-count");
    assert!(REDUCED_MOTION_QUERY.contains("prefers-reduced-motion"));
    assert!(DISABLE_FLAG.starts_with("__") && DISABLE_FLAG.ends_with("__"));
}
