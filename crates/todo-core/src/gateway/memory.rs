//! In-Memory Gateway
//!
//! Keeps the table in process. Honours the same contract as the REST
//! gateway and can be told to fail individual operations.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;

use super::TaskGateway;
use crate::domain::{StoreError, StoreResult, Task, TaskId};

/// Gateway operation, used for failure injection and call accounting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListAll,
    Insert,
    Update,
    Delete,
}

#[derive(Default)]
pub struct MemoryGateway {
    /// Newest first
    rows: RefCell<Vec<Task>>,
    next_id: Cell<u64>,
    failures: RefCell<HashMap<Operation, StoreError>>,
    calls: RefCell<Vec<Operation>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            ..Default::default()
        }
    }

    /// Start with `tasks` already stored, in the given (newest first) order
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let gateway = Self::new();
        let max_numeric = tasks
            .iter()
            .filter_map(|t| t.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        gateway.next_id.set(max_numeric + 1);
        *gateway.rows.borrow_mut() = tasks;
        gateway
    }

    /// Make the next call of `op` fail with `error`
    pub fn fail_next(&self, op: Operation, error: StoreError) {
        self.failures.borrow_mut().insert(op, error);
    }

    /// Current table contents, newest first
    pub fn rows(&self) -> Vec<Task> {
        self.rows.borrow().clone()
    }

    /// Every operation attempted so far, in order
    pub fn calls(&self) -> Vec<Operation> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self, op: Operation) -> usize {
        self.calls.borrow().iter().filter(|c| **c == op).count()
    }

    fn enter(&self, op: Operation) -> StoreResult<()> {
        self.calls.borrow_mut().push(op);
        match self.failures.borrow_mut().remove(&op) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl TaskGateway for MemoryGateway {
    async fn list_all(&self) -> StoreResult<Vec<Task>> {
        self.enter(Operation::ListAll)?;
        let mut rows = self.rows.borrow().clone();
        // stable: rows sharing a timestamp keep insertion order
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn insert(&self, title: &str) -> StoreResult<()> {
        self.enter(Operation::Insert)?;
        if title.is_empty() {
            return Err(StoreError::Rejected {
                status: 400,
                message: "title must not be empty".to_string(),
            });
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let task = Task::new(id.to_string(), title).with_created_at(Utc::now());
        self.rows.borrow_mut().insert(0, task);
        Ok(())
    }

    async fn update(&self, id: &TaskId, completed: bool) -> StoreResult<()> {
        self.enter(Operation::Update)?;
        if let Some(task) = self.rows.borrow_mut().iter_mut().find(|t| &t.id == id) {
            task.completed = completed;
        }
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> StoreResult<()> {
        self.enter(Operation::Delete)?;
        self.rows.borrow_mut().retain(|t| &t.id != id);
        Ok(())
    }
}
