//! Console logging
//!
//! On wasm32 messages go straight to the browser console through `web_sys::console`.
//! On native targets (unit and integration tests) the macros compile down to a
//! `format_args!` so arguments stay type-checked but nothing is printed.
//!
//! Usage:
//! ```rust
//! use recipe_showcase::console_log;
//!
//! let count = 50;
//! console_log!("spawned {} particles", count);
//! ```

/// Log an informational line to the browser console.
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__web_sys::console::log_1(&$crate::__wasm_bindgen::JsValue::from(format!($($arg)*)));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Log a warning to the browser console.
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__web_sys::console::warn_1(&$crate::__wasm_bindgen::JsValue::from(format!($($arg)*)));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
