use crate::task::Task;
use serde::{Deserialize, Serialize};

/// Three-way view state controlling which tasks are displayed.
///
/// Process-local UI state; never persisted, resets to [`Filter::All`] on
/// every launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every task, in insertion order.
    #[default]
    All,
    /// Tasks not yet completed.
    Active,
    /// Completed tasks.
    Completed,
}

impl Filter {
    /// All variants in selector order.
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// String representation used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Whether the task belongs to this view.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }

    /// Next filter in the fixed all → active → completed cycle.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::All => Self::Active,
            Self::Active => Self::Completed,
            Self::Completed => Self::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::TaskId;

    fn task(completed: bool) -> Task {
        Task {
            id: TaskId(1),
            text: "task".into(),
            completed,
        }
    }

    #[test]
    fn all_matches_everything() {
        assert!(Filter::All.matches(&task(false)));
        assert!(Filter::All.matches(&task(true)));
    }

    #[test]
    fn active_and_completed_split_on_the_flag() {
        assert!(Filter::Active.matches(&task(false)));
        assert!(!Filter::Active.matches(&task(true)));
        assert!(Filter::Completed.matches(&task(true)));
        assert!(!Filter::Completed.matches(&task(false)));
    }

    #[test]
    fn cycle_visits_every_filter_and_wraps() {
        assert_eq!(Filter::All.cycled(), Filter::Active);
        assert_eq!(Filter::Active.cycled(), Filter::Completed);
        assert_eq!(Filter::Completed.cycled(), Filter::All);
    }

    #[test]
    fn config_names_are_lowercase() {
        for filter in Filter::ALL {
            let json = serde_json::to_string(&filter).expect("must serialize filter");
            assert_eq!(json, format!("\"{}\"", filter.as_str()));
        }
    }
}
