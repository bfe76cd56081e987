//! Task List Component
//!
//! Renders the filtered list once the page is mounted and the first fetch
//! has settled.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::context::use_app_context;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show
            when=move || ctx.ready()
            fallback=|| view! { <p class="loading">"Loading..."</p> }
        >
            <Show
                when=move || !ctx.view().filtered.is_empty()
                fallback=|| view! { <p class="empty">"Nothing here"</p> }
            >
                <ul class="task-list">
                    <For
                        each=move || ctx.view().filtered
                        // every field that changes the row, so a toggle re-renders it
                        key=|task| (task.id.clone(), task.completed, task.title.clone())
                        children=move |task| view! { <TaskRow task=task /> }
                    />
                </ul>
            </Show>
        </Show>
    }
}
