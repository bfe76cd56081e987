//! New Task Form Component
//!
//! Text field plus submit button; blank input is ignored by the controller.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();

    let add_task = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ctx.run(|controller| async move {
            controller.add_draft().await;
        });
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                placeholder="Enter todo"
                prop:value=move || ctx.draft()
                on:input=move |ev| ctx.set_draft(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
