//! List View Controller
//!
//! Owns the local task list, the draft and the filter. Every write goes
//! through the gateway and is followed by a full refresh (see
//! [`SyncStrategy::PessimisticFullResync`]); nothing is patched locally.
//!
//! Operations take `&self` and may overlap. No `RefCell` borrow is held
//! across an `.await`, so a second operation can start while the first is
//! in flight; whichever refresh lands last decides what is shown.

mod state;


use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, error, info, warn};

use crate::domain::{FilterTag, TaskId};
use crate::gateway::TaskGateway;
use crate::view::TaskView;

pub use state::{ListState, Outcome, SyncStrategy};

type Listener = Rc<dyn Fn()>;

struct Shared {
    state: RefCell<ListState>,
    /// Bumped by teardown; responses carrying an older value are dropped
    generation: Cell<u64>,
    torn_down: Cell<bool>,
    listeners: RefCell<Vec<Listener>>,
}

/// Generation observed when an operation started
#[derive(Debug, Clone, Copy)]
struct Ticket(u64);

pub struct TaskListController<G> {
    gateway: Rc<G>,
    shared: Rc<Shared>,
}

impl<G> Clone for TaskListController<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Rc::clone(&self.gateway),
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<G: TaskGateway> TaskListController<G> {
    pub const STRATEGY: SyncStrategy = SyncStrategy::PessimisticFullResync;

    pub fn new(gateway: G) -> Self {
        Self {
            gateway: Rc::new(gateway),
            shared: Rc::new(Shared {
                state: RefCell::new(ListState::new()),
                generation: Cell::new(0),
                torn_down: Cell::new(false),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    // ========================
    // Reads
    // ========================

    pub fn snapshot(&self) -> ListState {
        self.shared.state.borrow().clone()
    }

    /// Filtered list and counts, computed fresh from current state
    pub fn view(&self) -> TaskView {
        self.shared.state.borrow().view()
    }

    pub fn draft(&self) -> String {
        self.shared.state.borrow().draft.clone()
    }

    pub fn filter(&self) -> FilterTag {
        self.shared.state.borrow().filter
    }

    pub fn is_loading(&self) -> bool {
        self.shared.state.borrow().loading
    }

    pub fn is_mounted(&self) -> bool {
        self.shared.state.borrow().mounted
    }

    pub fn is_torn_down(&self) -> bool {
        self.shared.torn_down.get()
    }

    // ========================
    // Local transitions
    // ========================

    /// Call `listener` after every local state change
    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        self.shared.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Record that the first render pass is done
    pub fn mark_mounted(&self) {
        if self.is_mounted() || self.is_torn_down() {
            return;
        }
        self.update(|s| s.mounted = true);
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        if self.is_torn_down() {
            return;
        }
        let text = text.into();
        self.update(|s| s.draft = text);
    }

    pub fn set_filter(&self, tag: FilterTag) {
        if self.is_torn_down() || self.filter() == tag {
            return;
        }
        self.update(|s| s.filter = tag);
    }

    /// Stop applying responses. In-flight calls still complete against the
    /// store but their results are dropped.
    pub fn teardown(&self) {
        if self.shared.torn_down.replace(true) {
            return;
        }
        self.shared.generation.set(self.shared.generation.get() + 1);
        self.shared.listeners.borrow_mut().clear();
        debug!("task list controller torn down");
    }

    // ========================
    // Store round trips
    // ========================

    /// Replace the local list with the store's. On failure the previous
    /// list stays; `loading` clears either way.
    pub async fn refresh(&self) -> Outcome {
        let Some(ticket) = self.ticket() else {
            return Outcome::Discarded;
        };
        let result = self.gateway.list_all().await;
        if !self.is_current(ticket) {
            debug!("dropping task list response after teardown");
            return Outcome::Discarded;
        }

        match result {
            Ok(tasks) => {
                debug!(count = tasks.len(), "task list replaced");
                self.update(|s| {
                    s.tasks = tasks;
                    s.loading = false;
                });
                Outcome::Applied
            }
            Err(err) => {
                error!(error = %err, "failed to fetch tasks");
                self.update(|s| s.loading = false);
                Outcome::Failed
            }
        }
    }

    /// Insert the trimmed `draft`. A blank draft is ignored without a store
    /// call. On success the draft buffer is cleared; on failure it is kept.
    pub async fn add_task(&self, draft: &str) -> Outcome {
        let title = draft.trim();
        if title.is_empty() {
            return Outcome::Skipped;
        }
        let Some(ticket) = self.ticket() else {
            return Outcome::Discarded;
        };

        if let Err(err) = self.gateway.insert(title).await {
            error!(error = %err, title, "failed to insert task");
            return Outcome::Failed;
        }
        if !self.is_current(ticket) {
            return Outcome::Discarded;
        }
        info!(title, "task added");
        self.update(|s| s.draft.clear());
        self.refresh().await;
        Outcome::Applied
    }

    /// Submit whatever is in the draft buffer
    pub async fn add_draft(&self) -> Outcome {
        let draft = self.draft();
        self.add_task(&draft).await
    }

    /// Write the negation of the locally known completed flag
    pub async fn toggle_task(&self, id: &TaskId) -> Outcome {
        let known = self
            .shared
            .state
            .borrow()
            .tasks
            .iter()
            .find(|t| &t.id == id)
            .map(|t| t.completed);
        let Some(completed) = known else {
            warn!(task_id = %id, "toggle requested for a task not in the list");
            return Outcome::Skipped;
        };
        let Some(ticket) = self.ticket() else {
            return Outcome::Discarded;
        };

        if let Err(err) = self.gateway.update(id, !completed).await {
            error!(error = %err, task_id = %id, "failed to update task");
            return Outcome::Failed;
        }
        if !self.is_current(ticket) {
            return Outcome::Discarded;
        }
        self.refresh().await;
        Outcome::Applied
    }

    pub async fn delete_task(&self, id: &TaskId) -> Outcome {
        let Some(ticket) = self.ticket() else {
            return Outcome::Discarded;
        };

        if let Err(err) = self.gateway.delete(id).await {
            error!(error = %err, task_id = %id, "failed to delete task");
            return Outcome::Failed;
        }
        if !self.is_current(ticket) {
            return Outcome::Discarded;
        }
        self.refresh().await;
        Outcome::Applied
    }

    // ========================
    // Internals
    // ========================

    fn ticket(&self) -> Option<Ticket> {
        if self.is_torn_down() {
            debug!("ignoring store call on a torn down controller");
            return None;
        }
        Some(Ticket(self.shared.generation.get()))
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        !self.is_torn_down() && self.shared.generation.get() == ticket.0
    }

    fn update(&self, apply: impl FnOnce(&mut ListState)) {
        apply(&mut self.shared.state.borrow_mut());
        // snapshot so a listener may subscribe or read state
        let listeners: Vec<Listener> = self.shared.listeners.borrow().clone();
        for listener in listeners {
            listener();
        }
    }
}
