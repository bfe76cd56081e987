//! Derived View
//!
//! Pure projection of the task list under a filter tag. Recomputed on every
//! render; nothing here is cached.

use crate::domain::{FilterTag, Task};

/// What the page shows for one render pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskView {
    /// Tasks visible under the active filter, in list order
    pub filtered: Vec<Task>,
    /// Length of the full list
    pub total_count: usize,
    /// Completed tasks across the full list, whatever the filter
    pub completed_count: usize,
}

impl TaskView {
    pub fn active_count(&self) -> usize {
        self.total_count - self.completed_count
    }
}

/// Project `tasks` through `filter`
pub fn project(tasks: &[Task], filter: FilterTag) -> TaskView {
    TaskView {
        filtered: tasks.iter().filter(|t| filter.matches(t)).cloned().collect(),
        total_count: tasks.len(),
        completed_count: tasks.iter().filter(|t| t.completed).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Task> {
        vec![
            Task::new("4", "walk dog"),
            Task::new("3", "pay rent").with_completed(true),
            Task::new("2", "call mum"),
            Task::new("1", "buy milk").with_completed(true),
        ]
    }

    fn ids(view: &TaskView) -> Vec<&str> {
        view.filtered.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_project_all() {
        let tasks = sample();
        let view = project(&tasks, FilterTag::All);
        assert_eq!(view.filtered, tasks);
    }

    #[test]
    fn test_project_active_and_completed() {
        let tasks = sample();
        assert_eq!(ids(&project(&tasks, FilterTag::Active)), vec!["4", "2"]);
        assert_eq!(ids(&project(&tasks, FilterTag::Completed)), vec!["3", "1"]);
    }

    #[test]
    fn test_counts_ignore_filter() {
        let tasks = sample();
        for tag in FilterTag::ALL {
            let view = project(&tasks, tag);
            assert_eq!(view.total_count, 4);
            assert_eq!(view.completed_count, 2);
            assert_eq!(view.active_count(), 2);
        }
    }

    #[test]
    fn test_active_and_completed_partition_the_list() {
        let tasks = sample();
        let active = project(&tasks, FilterTag::Active);
        let completed = project(&tasks, FilterTag::Completed);

        assert_eq!(active.filtered.len() + completed.filtered.len(), tasks.len());
        assert!(active.filtered.iter().all(|t| !t.completed));
        assert!(completed.filtered.iter().all(|t| t.completed));
    }

    #[test]
    fn test_empty_list() {
        let view = project(&[], FilterTag::Completed);
        assert_eq!(view, TaskView::default());
    }
}
