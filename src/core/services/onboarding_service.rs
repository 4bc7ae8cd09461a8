use tracing::debug;

use crate::core::errors::{CoreError, CoreResult};
use crate::domain::ChecklistCategory;
use crate::ledger::OnboardingChecklist;
use crate::utils::percentage;

pub struct OnboardingService;

impl OnboardingService {
    /// Flips the completion flag of an item and returns its new value.
    pub fn toggle(checklist: &mut OnboardingChecklist, item_id: &str) -> CoreResult<bool> {
        let item = checklist
            .item_mut(item_id)
            .ok_or_else(|| CoreError::ChecklistItemNotFound(item_id.to_string()))?;
        item.completed = !item.completed;
        debug!(item_id, completed = item.completed, "checklist item toggled");
        Ok(item.completed)
    }

    /// Whole-number completion percentage; an empty checklist reports 0.
    pub fn completion_percentage(checklist: &OnboardingChecklist) -> f64 {
        percentage(
            checklist.completed_count() as f64,
            checklist.len() as f64,
            0,
        )
    }

    /// `(completed, total)` for one category.
    pub fn category_progress(
        checklist: &OnboardingChecklist,
        category: ChecklistCategory,
    ) -> (usize, usize) {
        let items = checklist.items_in(category);
        let done = items.iter().filter(|item| item.completed).count();
        (done, items.len())
    }
}
