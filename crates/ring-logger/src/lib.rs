//! Ring Logger
//!
//! A `tracing` layer that keeps the newest log records in a fixed-size
//! circular buffer and hands each one to a [`LogSink`] as it arrives.
//!
//! In the browser the sink is the devtools console; in tests the buffer
//! alone is enough to assert on what was logged.

mod buffer;
mod layer;
mod record;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

pub use buffer::LogBuffer;
pub use layer::{LogSink, RingLayer};
pub use record::LogRecord;
pub use tracing_subscriber::filter::LevelFilter;

/// Install a global subscriber: records at or above `max_level` go to the
/// returned buffer (newest `capacity` kept) and to `sink`.
///
/// Fails if a global subscriber is already set.
pub fn init_logger(
    capacity: usize,
    max_level: LevelFilter,
    sink: impl LogSink,
) -> Result<LogBuffer, TryInitError> {
    let buffer = LogBuffer::new(capacity);
    tracing_subscriber::registry()
        .with(max_level)
        .with(RingLayer::new(buffer.clone()).with_sink(sink))
        .try_init()?;
    Ok(buffer)
}
