//! Domain Layer
//!
//! Task records, the filter tag and the store error type.
//! Nothing in here talks to the network.

mod error;
mod filter;
mod task;

pub use error::{StoreError, StoreResult};
pub use filter::FilterTag;
pub use task::{Task, TaskId};
