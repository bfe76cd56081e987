//! Filter Bar Component
//!
//! One button per filter tag; switching is local, no store call.

use leptos::prelude::*;
use todo_core::FilterTag;

use crate::context::use_app_context;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="filter-bar">
            {FilterTag::ALL.into_iter().map(|tag| {
                let is_selected = move || ctx.filter() == tag;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        data-filter=tag.as_str()
                        on:click=move |_| ctx.set_filter(tag)
                    >
                        {tag.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
