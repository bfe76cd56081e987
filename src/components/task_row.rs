//! Task Row Component
//!
//! Checkbox, title and delete button for one task.

use leptos::prelude::*;
use todo_core::Task;

use crate::context::use_app_context;

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_app_context();

    let completed = task.completed;
    let toggle_id = task.id.clone();
    let delete_id = task.id.clone();

    view! {
        <li class=if completed { "task-row completed" } else { "task-row" }>
            <input
                type="checkbox"
                prop:checked=completed
                on:click=move |ev| {
                    // the box only changes once the store has
                    ev.prevent_default();
                    let id = toggle_id.clone();
                    ctx.run(|controller| async move {
                        controller.toggle_task(&id).await;
                    });
                }
            />

            <span class="task-title">{task.title}</span>

            <button class="delete-btn" on:click=move |_| {
                let id = delete_id.clone();
                ctx.run(|controller| async move {
                    controller.delete_task(&id).await;
                });
            }>"×"</button>
        </li>
    }
}
