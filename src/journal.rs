use std::collections::BTreeSet;

use crate::datetime::DateKey;

/// What a toggle did. Removal of a marked day is never applied directly,
/// it first has to be confirmed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Marked,
    RemovalRequested,
    Ignored,
}

/// The set of marked dinner days plus the single removal awaiting
/// confirmation. Lives for the process only, nothing is persisted.
#[derive(Debug, Default)]
pub struct Journal {
    marked: BTreeSet<DateKey>,
    pending: Option<DateKey>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an unmarked day right away. A marked day is not unmarked here,
    /// the key is queued for removal until `confirm_removal` or
    /// `cancel_removal` resolves it. While a removal is queued further
    /// toggles are ignored.
    pub fn toggle(&mut self, key: DateKey) -> Toggle {
        if self.pending.is_some() {
            log::warn!("toggle of {} while a removal awaits confirmation", key);
            return Toggle::Ignored;
        }

        if self.marked.contains(&key) {
            log::debug!("queueing removal of {}", key);
            self.pending = Some(key);
            Toggle::RemovalRequested
        } else {
            log::debug!("marked {}", key);
            self.marked.insert(key);
            Toggle::Marked
        }
    }

    /// Applies the queued removal, if any. Always leaves the journal idle.
    pub fn confirm_removal(&mut self) -> Option<DateKey> {
        let key = self.pending.take();

        if let Some(ref key) = key {
            self.marked.remove(key);
            log::debug!("removed {}", key);
        }

        key
    }

    /// Drops the queued removal without touching the marked set.
    pub fn cancel_removal(&mut self) {
        self.pending = None;
    }

    pub fn is_marked(&self, key: &DateKey) -> bool {
        self.marked.contains(key)
    }

    pub fn pending_removal(&self) -> Option<DateKey> {
        self.pending
    }

    pub fn count_for_month(&self, year: i32, month: u32) -> usize {
        self.marked
            .iter()
            .filter(|key| key.in_month(year, month))
            .count()
    }

    pub fn len(&self) -> usize {
        self.marked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_toggle_marks_instantly() {
        let mut journal = Journal::new();
        let key = DateKey::new(2024, 3, 5);

        assert_eq!(journal.toggle(key), Toggle::Marked);
        assert!(journal.is_marked(&key));
        assert_eq!(journal.pending_removal(), None);
    }

    #[test]
    fn second_toggle_only_queues_the_removal() {
        let mut journal = Journal::new();
        let key = DateKey::new(2024, 3, 5);

        journal.toggle(key);
        assert_eq!(journal.toggle(key), Toggle::RemovalRequested);

        // still marked until the removal is confirmed
        assert!(journal.is_marked(&key));
        assert_eq!(journal.pending_removal(), Some(key));
    }

    #[test]
    fn confirm_applies_the_removal() {
        let mut journal = Journal::new();
        let key = DateKey::new(2024, 3, 5);

        journal.toggle(key);
        journal.toggle(key);

        assert_eq!(journal.confirm_removal(), Some(key));
        assert!(!journal.is_marked(&key));
        assert_eq!(journal.pending_removal(), None);
    }

    #[test]
    fn cancel_keeps_the_day_marked() {
        let mut journal = Journal::new();
        let key = DateKey::new(2024, 3, 5);

        journal.toggle(key);
        journal.toggle(key);
        journal.cancel_removal();

        assert!(journal.is_marked(&key));
        assert_eq!(journal.pending_removal(), None);
    }

    #[test]
    fn resolving_while_idle_is_a_noop() {
        let mut journal = Journal::new();
        journal.toggle(DateKey::new(2024, 3, 5));

        journal.cancel_removal();
        assert_eq!(journal.confirm_removal(), None);

        assert!(journal.is_marked(&DateKey::new(2024, 3, 5)));
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn toggles_are_ignored_while_a_removal_is_queued() {
        let mut journal = Journal::new();
        let first = DateKey::new(2024, 3, 5);
        let other = DateKey::new(2024, 3, 6);

        journal.toggle(first);
        journal.toggle(first);

        assert_eq!(journal.toggle(other), Toggle::Ignored);
        assert!(!journal.is_marked(&other));
        assert_eq!(journal.pending_removal(), Some(first));
    }

    #[test]
    fn toggle_round_trip_restores_membership() {
        let mut journal = Journal::new();
        let key = DateKey::new(2024, 3, 5);

        assert!(!journal.is_marked(&key));

        journal.toggle(key);
        journal.toggle(key);
        journal.confirm_removal();

        assert!(!journal.is_marked(&key));
        assert!(journal.is_empty());
    }

    #[test]
    fn count_ignores_other_months() {
        let mut journal = Journal::new();

        journal.toggle(DateKey::new(2024, 3, 5));
        journal.toggle(DateKey::new(2024, 3, 20));
        journal.toggle(DateKey::new(2024, 4, 5));
        journal.toggle(DateKey::new(2023, 3, 5));

        assert_eq!(journal.count_for_month(2024, 3), 2);
        assert_eq!(journal.count_for_month(2024, 4), 1);
        assert_eq!(journal.count_for_month(2023, 3), 1);
        assert_eq!(journal.count_for_month(2024, 5), 0);
    }
}
