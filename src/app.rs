//! Todo Frontend App
//!
//! Single page: entry form, filter bar, task list, counts.

use leptos::prelude::*;
use todo_core::config::{KEY_VAR, TABLE_VAR, URL_VAR};
use todo_core::{RestGateway, StoreConfig, TaskListController};

use crate::components::{FilterBar, NewTaskForm, TaskFooter, TaskList};
use crate::context::AppContext;

/// Store settings are baked in at build time; missing ones surface as a
/// store error on the first fetch.
fn store_config() -> StoreConfig {
    StoreConfig::from_lookup(|name| {
        let value = match name {
            URL_VAR => option_env!("TODO_STORE_URL"),
            KEY_VAR => option_env!("TODO_STORE_KEY"),
            TABLE_VAR => option_env!("TODO_STORE_TABLE"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

#[component]
pub fn App() -> impl IntoView {
    let (version, set_version) = signal(0u32);

    let controller = TaskListController::new(RestGateway::new(store_config()));
    controller.subscribe(move || set_version.update(|v| *v = v.wrapping_add(1)));
    let ctx = AppContext::new(StoredValue::new_local(controller), version);

    // Provide context to all children
    provide_context(ctx);

    // Effects run after the first render pass: only now may data-dependent
    // markup appear, and only now is the list fetched.
    Effect::new(move |_| {
        ctx.mark_mounted();
        ctx.run(|controller| async move {
            controller.refresh().await;
        });
    });

    on_cleanup(move || ctx.teardown());

    view! {
        <main class="app">
            <h1>"My Todos"</h1>

            <NewTaskForm />

            <FilterBar />

            <TaskList />

            <TaskFooter />
        </main>
    }
}
