mod api;
mod app;
mod components;
mod entity;
mod models;
mod pages;
mod state;
mod stats;
mod util;

use crate::app::App;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[allow(unused_imports)]
use wasm_bindgen::prelude::wasm_bindgen;

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use crate::api::{ApiClient, EnvConfig};
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn set_window_env(key: &str, value: &str) {
        let window = web_sys::window().expect("test runs in a browser");
        let env = js_sys::Object::new();
        js_sys::Reflect::set(&env, &key.into(), &value.into()).expect("set ENV key");
        js_sys::Reflect::set(&window, &"ENV".into(), &env).expect("set window.ENV");
    }

    fn clear_window_env() {
        let window = web_sys::window().expect("test runs in a browser");
        js_sys::Reflect::set(&window, &"ENV".into(), &JsValue::UNDEFINED).expect("clear window.ENV");
    }

    #[wasm_bindgen_test]
    fn window_env_api_url_wins() {
        set_window_env("API_URL", "https://gateway.example.edu/");
        assert_eq!(EnvConfig::new().api_url, "https://gateway.example.edu");
        assert_eq!(ApiClient::from_env().base_url, "https://gateway.example.edu");
        clear_window_env();
    }

    #[wasm_bindgen_test]
    fn lowercase_window_env_key_is_accepted() {
        set_window_env("api_url", "http://10.0.0.5:9999");
        assert_eq!(EnvConfig::new().api_url, "http://10.0.0.5:9999");
        clear_window_env();
    }

    #[wasm_bindgen_test]
    fn missing_window_env_falls_back() {
        clear_window_env();
        let expected = option_env!("API_BASE_URL")
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or_else(|| "http://localhost:9999".to_string());
        assert_eq!(EnvConfig::new().api_url, expected);
    }
}

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();
    tracing::info!("campus admin starting");
    mount_to_body(App);
}
