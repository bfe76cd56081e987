//! Task Footer Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Counts over the full list, whatever the filter
#[component]
pub fn TaskFooter() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show when=move || ctx.ready()>
            <p class="item-count">
                {move || {
                    let view = ctx.view();
                    format!(
                        "{} items, {} active, {} completed",
                        view.total_count,
                        view.active_count(),
                        view.completed_count
                    )
                }}
            </p>
        </Show>
    }
}
