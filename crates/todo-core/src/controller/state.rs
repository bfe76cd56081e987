//! Controller State
//!
//! Client-local view state and the vocabulary controller operations report in.

use crate::domain::{FilterTag, Task};
use crate::view::{project, TaskView};

/// How local state follows the store after a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// Never patch locally: every successful write is followed by a full
    /// re-read of the table. Overlapping resyncs resolve last-response-wins.
    PessimisticFullResync,
}

/// What a controller operation ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The store call succeeded and local state followed it
    Applied,
    /// Nothing to do (blank draft, unknown id); no store call made
    Skipped,
    /// The store call failed; the error was logged and state kept
    Failed,
    /// The controller was torn down before or during the call
    Discarded,
}

/// Local mirror of the task table plus page-level flags
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListState {
    /// Same order as the store returned them
    pub tasks: Vec<Task>,
    /// Uncommitted input text
    pub draft: String,
    pub filter: FilterTag,
    /// Set until the first fetch settles, successfully or not
    pub loading: bool,
    /// Set once the first render pass is done
    pub mounted: bool,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    pub fn view(&self) -> TaskView {
        project(&self.tasks, self.filter)
    }

    /// Whether data-dependent markup may render yet
    pub fn ready(&self) -> bool {
        self.mounted && !self.loading
    }
}
