use chrono::{Datelike, Local, NaiveDate};

use crate::config::Config;
use crate::datetime::{DateKey, MonthCursor};
use crate::grid::{self, DaySlot};
use crate::journal::{Journal, Toggle};

/// The whole application state behind the UI: the journal of marked days,
/// the displayed month, the in-month day selection and today's date. The
/// presentation layer dispatches intents into it and reads queries out of
/// it, it holds no state of its own.
pub struct Context {
    journal: Journal,
    displayed: MonthCursor,
    selected: u32,
    today: NaiveDate,
    cost_per_dinner: u32,
}

impl Context {
    pub fn new(config: &Config) -> Self {
        let today = Local::now().date_naive();

        Context {
            journal: Journal::new(),
            displayed: MonthCursor::from(today),
            selected: today.day(),
            today,
            cost_per_dinner: config.cost_per_dinner,
        }
    }

    pub fn with_month(mut self, cursor: MonthCursor) -> Self {
        self.displayed = cursor;
        self.selected = self.selected.min(cursor.days()).max(1);
        self
    }

    /// Refreshes the notion of "today", driven by the update tick.
    pub fn update(&mut self) {
        self.today = Local::now().date_naive();
    }

    /// A tap on a grid cell. Blank cells are a normal no-op.
    pub fn tap(&mut self, slot: DaySlot) -> Toggle {
        match slot.day() {
            Some(day) => self.journal.toggle(self.displayed.key_for(day)),
            None => Toggle::Ignored,
        }
    }

    /// Moves the displayed month one step in `direction` (< 0 is backwards),
    /// rolling over year boundaries. The day selection is clamped into the
    /// new month.
    pub fn navigate(&mut self, direction: i32) {
        self.displayed = if direction < 0 {
            self.displayed.pred()
        } else {
            self.displayed.succ()
        };
        self.selected = self.selected.min(self.displayed.days());
        log::debug!("displaying {}", self.displayed);
    }

    pub fn confirm_removal(&mut self) {
        if let Some(key) = self.journal.confirm_removal() {
            log::info!("dinner on {} removed", key);
        }
    }

    pub fn cancel_removal(&mut self) {
        self.journal.cancel_removal();
    }

    pub fn pending_removal(&self) -> Option<DateKey> {
        self.journal.pending_removal()
    }

    pub fn select_next_day(&mut self) {
        self.selected = (self.selected + 1).min(self.displayed.days());
    }

    pub fn select_prev_day(&mut self) {
        if self.selected > 1 {
            self.selected -= 1;
        }
    }

    pub fn select_next_week(&mut self) {
        self.selected = (self.selected + 7).min(self.displayed.days());
    }

    pub fn select_prev_week(&mut self) {
        self.selected = self.selected.saturating_sub(7).max(1);
    }

    pub fn select_today(&mut self) {
        self.displayed = MonthCursor::from(self.today);
        self.selected = self.today.day();
    }

    pub fn grid(&self) -> Vec<DaySlot> {
        grid::build_grid(self.displayed.year(), &self.displayed.month())
    }

    pub fn displayed(&self) -> MonthCursor {
        self.displayed
    }

    pub fn month_label(&self) -> String {
        self.displayed.to_string()
    }

    pub fn selected_day(&self) -> u32 {
        self.selected
    }

    pub fn selected_key(&self) -> DateKey {
        self.displayed.key_for(self.selected)
    }

    pub fn key_for(&self, day: u32) -> DateKey {
        self.displayed.key_for(day)
    }

    pub fn is_marked(&self, key: &DateKey) -> bool {
        self.journal.is_marked(key)
    }

    pub fn is_today(&self, key: &DateKey) -> bool {
        DateKey::from(self.today) == *key
    }

    pub fn monthly_count(&self) -> usize {
        self.journal
            .count_for_month(self.displayed.year(), self.displayed.number())
    }

    pub fn monthly_cost(&self) -> u64 {
        self.monthly_count() as u64 * u64::from(self.cost_per_dinner)
    }

    pub fn cost_per_dinner(&self) -> u32 {
        self.cost_per_dinner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;

    fn march_2024() -> Context {
        Context::new(&Config::default()).with_month(MonthCursor::new(Month::March, 2024))
    }

    #[test]
    fn marking_a_day_updates_the_aggregates() {
        let mut context = march_2024();

        context.tap(DaySlot::Day(5));

        assert!(context.is_marked(&DateKey::new(2024, 3, 5)));
        assert_eq!(context.monthly_count(), 1);
        assert_eq!(context.monthly_cost(), 70);
    }

    #[test]
    fn tapping_a_blank_cell_does_nothing() {
        let mut context = march_2024();

        assert_eq!(context.tap(DaySlot::Blank), Toggle::Ignored);
        assert_eq!(context.monthly_count(), 0);
        assert_eq!(context.pending_removal(), None);
    }

    #[test]
    fn removal_needs_confirmation() {
        let mut context = march_2024();

        context.tap(DaySlot::Day(5));
        context.tap(DaySlot::Day(5));

        assert_eq!(context.pending_removal(), Some(DateKey::new(2024, 3, 5)));
        assert!(context.is_marked(&DateKey::new(2024, 3, 5)));

        context.confirm_removal();

        assert!(!context.is_marked(&DateKey::new(2024, 3, 5)));
        assert_eq!(context.pending_removal(), None);
    }

    #[test]
    fn cancelled_removal_keeps_the_mark() {
        let mut context = march_2024();

        context.tap(DaySlot::Day(5));
        context.tap(DaySlot::Day(5));
        context.cancel_removal();

        assert!(context.is_marked(&DateKey::new(2024, 3, 5)));
        assert_eq!(context.pending_removal(), None);
    }

    #[test]
    fn aggregates_follow_the_displayed_month() {
        let mut context = march_2024();

        context.tap(DaySlot::Day(5));
        context.navigate(1);

        assert_eq!(context.month_label(), "April 2024");
        assert_eq!(context.monthly_count(), 0);
        assert_eq!(context.monthly_cost(), 0);

        context.navigate(-1);
        assert_eq!(context.monthly_count(), 1);
    }

    #[test]
    fn navigation_rolls_over_years() {
        let mut context =
            Context::new(&Config::default()).with_month(MonthCursor::new(Month::December, 2024));

        context.navigate(1);
        assert_eq!(context.displayed(), MonthCursor::new(Month::January, 2025));

        context.navigate(-1);
        assert_eq!(context.displayed(), MonthCursor::new(Month::December, 2024));
    }

    #[test]
    fn navigation_clamps_the_selection() {
        let mut context =
            Context::new(&Config::default()).with_month(MonthCursor::new(Month::March, 2024));

        for _ in 0..40 {
            context.select_next_day();
        }
        assert_eq!(context.selected_day(), 31);

        // March 31st has no counterpart in April
        context.navigate(1);
        assert_eq!(context.selected_day(), 30);
    }

    #[test]
    fn selection_stays_within_the_month() {
        let mut context = march_2024();

        for _ in 0..10 {
            context.select_prev_week();
        }
        assert_eq!(context.selected_day(), 1);

        context.select_prev_day();
        assert_eq!(context.selected_day(), 1);

        for _ in 0..10 {
            context.select_next_week();
        }
        assert_eq!(context.selected_day(), 31);
    }

    #[test]
    fn configured_rate_scales_the_cost() {
        let mut config = Config::default();
        config.cost_per_dinner = 55;

        let mut context = Context::new(&config).with_month(MonthCursor::new(Month::March, 2024));
        context.tap(DaySlot::Day(5));
        context.tap(DaySlot::Day(6));

        assert_eq!(context.monthly_cost(), 110);
    }
}
