use serde::{Deserialize, Serialize};

use crate::domain::{ChecklistCategory, ChecklistItem};

/// Onboarding tasks for a newly registered venue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OnboardingChecklist {
    items: Vec<ChecklistItem>,
}

impl OnboardingChecklist {
    pub fn new(items: Vec<ChecklistItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&ChecklistItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: &str) -> Option<&mut ChecklistItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn items_in(&self, category: ChecklistCategory) -> Vec<&ChecklistItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
