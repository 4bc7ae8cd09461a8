use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::Displayable;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ChecklistCategory {
    Profile,
    Setup,
    Features,
    BestPractices,
}

impl ChecklistCategory {
    pub const ALL: [ChecklistCategory; 4] = [
        ChecklistCategory::Profile,
        ChecklistCategory::Setup,
        ChecklistCategory::Features,
        ChecklistCategory::BestPractices,
    ];
}

impl fmt::Display for ChecklistCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChecklistCategory::Profile => "Profile",
            ChecklistCategory::Setup => "Setup",
            ChecklistCategory::Features => "Features",
            ChecklistCategory::BestPractices => "Best practices",
        };
        f.write_str(label)
    }
}

/// One onboarding task shown to a newly registered venue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    pub category: ChecklistCategory,
}

impl ChecklistItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: ChecklistCategory,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            completed: false,
            category,
        }
    }

    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}

impl Displayable for ChecklistItem {
    fn display_label(&self) -> String {
        let mark = if self.completed { "x" } else { " " };
        format!("[{}] {}", mark, self.title)
    }
}
