//! UI Components
//!
//! Leptos components for the single task page.

mod filter_bar;
mod new_task_form;
mod task_footer;
mod task_list;
mod task_row;

pub use filter_bar::FilterBar;
pub use new_task_form::NewTaskForm;
pub use task_footer::TaskFooter;
pub use task_list::TaskList;
pub use task_row::TaskRow;
