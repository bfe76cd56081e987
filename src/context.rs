//! Application Context
//!
//! The task list controller plus a version signal, shared via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::{FilterTag, ListState, RestGateway, TaskListController, TaskView};

pub type Controller = TaskListController<RestGateway>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Controller lives outside the reactive graph; it is not `Send`
    controller: StoredValue<Controller, LocalStorage>,
    /// Bumped by the controller after every state change
    version: ReadSignal<u32>,
}

impl AppContext {
    pub fn new(controller: StoredValue<Controller, LocalStorage>, version: ReadSignal<u32>) -> Self {
        Self { controller, version }
    }

    /// Current state; re-runs the caller whenever it changes
    pub fn state(&self) -> ListState {
        self.version.track();
        self.controller.with_value(|c| c.snapshot())
    }

    /// Filtered list and counts for this render
    pub fn view(&self) -> TaskView {
        self.version.track();
        self.controller.with_value(|c| c.view())
    }

    pub fn draft(&self) -> String {
        self.version.track();
        self.controller.with_value(|c| c.draft())
    }

    pub fn filter(&self) -> FilterTag {
        self.version.track();
        self.controller.with_value(|c| c.filter())
    }

    /// Mounted and first fetch settled
    pub fn ready(&self) -> bool {
        self.state().ready()
    }

    pub fn set_draft(&self, text: String) {
        self.controller.with_value(|c| c.set_draft(text));
    }

    pub fn set_filter(&self, tag: FilterTag) {
        self.controller.with_value(|c| c.set_filter(tag));
    }

    pub fn mark_mounted(&self) {
        self.controller.with_value(|c| c.mark_mounted());
    }

    /// Run a store round trip in the background
    pub fn run<F, Fut>(&self, op: F)
    where
        F: FnOnce(Controller) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        let controller = self.controller.get_value();
        spawn_local(op(controller));
    }

    /// Drop late responses once the page goes away
    pub fn teardown(&self) {
        self.controller.try_with_value(|c| c.teardown());
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
