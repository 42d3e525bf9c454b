//! Host Page Globals
//!
//! Reads what the server-rendered template injects on `window`.

use wasm_bindgen::JsValue;
use web_sys::Window;

use playboard::{Config, ConfigError, HostContext};

/// Optional configuration object on `window`
pub const CONFIG_GLOBAL: &str = "playboardConfig";

pub const GAME_ID_GLOBAL: &str = "gameId";
pub const GAME_NAME_GLOBAL: &str = "gameName";

/// Configuration from `window.playboardConfig`, or defaults when absent
pub fn read_config(window: &Window) -> Result<Config, ConfigError> {
    let value = match js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return Ok(Config::default()),
    };

    let json = js_sys::JSON::stringify(&value)
        .map(String::from)
        .map_err(|e| ConfigError::Parse(format!("{:?}", e)))?;

    Config::from_json(&json)
}

/// `gameId` and `gameName` as injected by the template
pub fn read_host_context(window: &Window) -> HostContext {
    HostContext::new(
        global_string(window, GAME_ID_GLOBAL),
        global_string(window, GAME_NAME_GLOBAL),
    )
}

/// A global as a string; numbers are printed without a trailing `.0`
fn global_string(window: &Window, name: &str) -> Option<String> {
    let value = js_sys::Reflect::get(window, &JsValue::from_str(name)).ok()?;

    if let Some(text) = value.as_string() {
        return Some(text);
    }

    value.as_f64().map(|n| {
        if n.fract() == 0.0 && n.abs() < 1e15 {
            format!("{}", n as i64)
        } else {
            n.to_string()
        }
    })
}
