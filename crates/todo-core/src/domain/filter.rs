//! Filter Tag
//!
//! Three-valued selector for which tasks the list shows.

use serde::{Deserialize, Serialize};

use super::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterTag {
    /// Every task
    #[default]
    All,
    /// Tasks not yet completed
    Active,
    /// Completed tasks only
    Completed,
}

impl FilterTag {
    /// All tags in display order
    pub const ALL: [FilterTag; 3] = [FilterTag::All, FilterTag::Active, FilterTag::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterTag::All => "all",
            FilterTag::Active => "active",
            FilterTag::Completed => "completed",
        }
    }

    /// Button caption
    pub fn label(&self) -> &'static str {
        match self {
            FilterTag::All => "All",
            FilterTag::Active => "Active",
            FilterTag::Completed => "Completed",
        }
    }

    /// Whether `task` is visible under this tag
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            FilterTag::All => true,
            FilterTag::Active => !task.completed,
            FilterTag::Completed => task.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        let open = Task::new("1", "open");
        let done = Task::new("2", "done").with_completed(true);

        assert!(FilterTag::All.matches(&open) && FilterTag::All.matches(&done));
        assert!(FilterTag::Active.matches(&open));
        assert!(!FilterTag::Active.matches(&done));
        assert!(FilterTag::Completed.matches(&done));
        assert!(!FilterTag::Completed.matches(&open));
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(FilterTag::default(), FilterTag::All);
        assert_eq!(FilterTag::Completed.as_str(), "completed");
    }
}
