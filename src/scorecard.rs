use crate::category::{Category, CATEGORY_COUNT};

pub const UPPER_BONUS_THRESHOLD: u32 = 63;
pub const UPPER_BONUS: u32 = 35;

/// Committed category scores. An entry, once set, is never replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scorecard {
    entries: [Option<u32>; CATEGORY_COUNT],
}

impl Scorecard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> Option<u32> {
        self.entries[category.index()]
    }

    pub fn is_committed(&self, category: Category) -> bool {
        self.get(category).is_some()
    }

    /// Stores `score` for an open category. Returns false, leaving the
    /// existing value in place, if the category was already committed.
    pub fn commit(&mut self, category: Category, score: u32) -> bool {
        let slot = &mut self.entries[category.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(score);
        true
    }

    pub fn committed_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.committed_count() == CATEGORY_COUNT
    }

    pub fn clear(&mut self) {
        self.entries = [None; CATEGORY_COUNT];
    }

    pub fn upper_subtotal(&self) -> u32 {
        Category::UPPER
            .iter()
            .filter_map(|&category| self.get(category))
            .sum()
    }

    pub fn upper_bonus(&self) -> u32 {
        if self.upper_subtotal() >= UPPER_BONUS_THRESHOLD {
            UPPER_BONUS
        } else {
            0
        }
    }

    pub fn remaining_to_bonus(&self) -> u32 {
        UPPER_BONUS_THRESHOLD.saturating_sub(self.upper_subtotal())
    }

    pub fn base_total(&self) -> u32 {
        self.entries.iter().flatten().sum()
    }

    pub fn grand_total(&self) -> u32 {
        self.base_total() + self.upper_bonus()
    }
}
