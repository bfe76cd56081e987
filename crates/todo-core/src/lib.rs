//! Todo Core
//!
//! Layered the same way as the page uses it:
//! - domain: task records, filter tag, store error
//! - gateway: access to the remote task table
//! - controller: local mirror of the table, fetch-after-write
//! - view: pure projection for rendering

pub mod config;
pub mod controller;
pub mod domain;
pub mod gateway;
pub mod view;

pub use config::StoreConfig;
pub use controller::{ListState, Outcome, SyncStrategy, TaskListController};
pub use domain::{FilterTag, StoreError, StoreResult, Task, TaskId};
pub use gateway::{MemoryGateway, RestGateway, TaskGateway};
pub use view::{project, TaskView};
