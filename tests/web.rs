//! Browser smoke test for the dashboard bindings; run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn session_starts_and_explores() {
    let first: serde_json::Value =
        serde_json::from_str(&galactic_wanderer::init_session(42, false)).unwrap();
    assert_eq!(first["player"]["credits"], 50);

    let explored: serde_json::Value = serde_json::from_str(&galactic_wanderer::explore()).unwrap();
    assert!(explored["fuel_used"].as_u64().is_some());
}
