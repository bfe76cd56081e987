//! Gateway Layer
//!
//! The boundary to the remote task table. Each method is exactly one round
//! trip: no retry, no backoff, no timeout.

mod memory;
mod rest;

use async_trait::async_trait;

use crate::domain::{StoreResult, Task, TaskId};

pub use memory::{MemoryGateway, Operation};
pub use rest::RestGateway;

/// CRUD access to the task table.
///
/// Futures are not `Send`: in the browser everything runs on one thread
/// and the fetch API hands back `!Send` handles.
#[async_trait(?Send)]
pub trait TaskGateway {
    /// Every task, newest `created_at` first. No rows is `Ok(vec![])`.
    async fn list_all(&self) -> StoreResult<Vec<Task>>;

    /// Insert an open task; the store assigns id and created_at.
    async fn insert(&self, title: &str) -> StoreResult<()>;

    /// Overwrite the completed flag. An unknown id is not an error.
    async fn update(&self, id: &TaskId, completed: bool) -> StoreResult<()>;

    /// Remove the task. An unknown id is not an error.
    async fn delete(&self, id: &TaskId) -> StoreResult<()>;
}
