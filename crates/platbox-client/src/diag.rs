//! Console output for the platbox client.
//!
//! In the browser, `console_warn!` and `console_log!` format their arguments
//! and hand them to `console.warn`/`console.log`. Native builds, which only
//! run the app and renderer tests, type-check the format string and print
//! nothing.

#[cfg(target_family = "wasm")]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        web_sys::console::warn_1(&format!($($arg)*).into())
    };
}

#[cfg(not(target_family = "wasm"))]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        if false { let _ = format_args!($($arg)*); }
    };
}

#[cfg(target_family = "wasm")]
macro_rules! console_log {
    ($($arg:tt)*) => {
        web_sys::console::log_1(&format!($($arg)*).into())
    };
}

#[cfg(not(target_family = "wasm"))]
macro_rules! console_log {
    ($($arg:tt)*) => {
        if false { let _ = format_args!($($arg)*); }
    };
}

#[allow(unused_imports)]
pub(crate) use console_log;
pub(crate) use console_warn;
