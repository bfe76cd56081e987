//! Browser Logging
//!
//! Routes tracing output through the ring logger into the devtools console.

use ring_logger::{LevelFilter, LogRecord};
use tracing::Level;
use wasm_bindgen::JsValue;
use web_sys::console;

const LOG_CAPACITY: usize = 256;

fn console_sink(record: &LogRecord) {
    let line = JsValue::from_str(&record.render());
    match record.level {
        Level::ERROR => console::error_1(&line),
        Level::WARN => console::warn_1(&line),
        _ => console::log_1(&line),
    }
}

pub fn init() {
    if let Err(e) = ring_logger::init_logger(LOG_CAPACITY, LevelFilter::INFO, console_sink) {
        console::warn_1(&format!("[LOG] logger already installed: {}", e).into());
    }
}
