use chrono::NaiveDate;

use crate::data::filter::{filter_observations, sample_timeframe};
use crate::data::model::{FilterCriteria, Observation, Timeframe};
use crate::theme::Theme;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// All edits go through the methods below, which apply the paired-input
/// correction rules and then synchronously recompute the displayed sequence.
/// The rules are deliberately asymmetric: editing a lower bound into
/// conflict self-heals the upper bound, while editing an upper bound into
/// conflict only sets the validation message and keeps the entered value.
#[derive(Default)]
pub struct AppState {
    /// Dataset as loaded at startup; read-only for the session.
    pub observations: Vec<Observation>,

    /// Current date/value bounds.
    pub criteria: FilterCriteria,

    /// Current sampling granularity.
    pub timeframe: Timeframe,

    /// Current presentation theme (does not affect the data pipeline).
    pub theme: Theme,

    /// Validation message for the filter inputs, shown but never blocking.
    pub error_message: Option<String>,

    /// Filtered and sampled sequence handed to the plot (cached).
    pub visible: Vec<Observation>,
}

impl AppState {
    pub fn new(observations: Vec<Observation>) -> Self {
        let mut state = Self {
            observations,
            ..Self::default()
        };
        state.refilter();
        state
    }

    /// Recompute the displayed sequence from the full dataset.
    pub fn refilter(&mut self) {
        let filtered = filter_observations(&self.observations, &self.criteria);
        self.visible = sample_timeframe(&filtered, self.timeframe);
    }

    pub fn set_timeframe(&mut self, timeframe: Timeframe) {
        self.timeframe = timeframe;
        self.refilter();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Start-date edit: a start on/after the current end auto-advances the
    /// end to the day after; otherwise any stale message is cleared.
    pub fn set_start_date(&mut self, start: Option<NaiveDate>) {
        self.criteria.start_date = start;
        match (start, self.criteria.end_date) {
            (Some(s), Some(e)) if s >= e => {
                // Saturates at the calendar limit instead of panicking.
                self.criteria.end_date = Some(s.succ_opt().unwrap_or(s));
            }
            _ => self.error_message = None,
        }
        self.refilter();
    }

    /// End-date edit: an end on/before the current start flags a message but
    /// keeps the entered value.
    pub fn set_end_date(&mut self, end: Option<NaiveDate>) {
        self.criteria.end_date = end;
        match (self.criteria.start_date, end) {
            (Some(s), Some(e)) if e <= s => {
                self.error_message = Some("End date must be later than start date".to_string());
            }
            _ => self.error_message = None,
        }
        self.refilter();
    }

    /// Min-value edit: a min at/above the current max auto-advances the max
    /// to min + 1; otherwise any stale message is cleared.
    pub fn set_min_value(&mut self, min: Option<f64>) {
        self.criteria.min_value = min;
        match (min, self.criteria.max_value) {
            (Some(lo), Some(hi)) if lo >= hi => {
                self.criteria.max_value = Some(lo + 1.0);
            }
            _ => self.error_message = None,
        }
        self.refilter();
    }

    /// Max-value edit: a max at/below the current min flags a message but
    /// keeps the entered value.
    pub fn set_max_value(&mut self, max: Option<f64>) {
        self.criteria.max_value = max;
        match (self.criteria.min_value, max) {
            (Some(lo), Some(hi)) if hi <= lo => {
                self.error_message = Some("Max value must be greater than min value".to_string());
            }
            _ => self.error_message = None,
        }
        self.refilter();
    }

    /// Reset all four bounds and the validation message in one step.
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.error_message = None;
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).expect("valid day")
    }

    fn state_with_days(n: u32) -> AppState {
        let observations = (0..n)
            .map(|i| Observation {
                timestamp: day(1 + i),
                value: (i as f64 + 1.0) * 10.0,
            })
            .collect();
        AppState::new(observations)
    }

    #[test]
    fn starts_in_weekly_mode_with_everything_visible() {
        let state = state_with_days(8);
        assert_eq!(state.timeframe, Timeframe::Weekly);
        // Positions 0 and 7 of the unfiltered sequence.
        assert_eq!(
            state.visible.iter().map(|o| o.timestamp).collect::<Vec<_>>(),
            vec![day(1), day(8)]
        );
    }

    #[test]
    fn start_date_conflict_advances_end_date() {
        let mut state = state_with_days(10);
        state.set_end_date(Some(day(5)));
        state.set_start_date(Some(day(5)));
        assert_eq!(state.criteria.start_date, Some(day(5)));
        assert_eq!(state.criteria.end_date, Some(day(6)));
    }

    #[test]
    fn start_date_without_conflict_clears_message() {
        let mut state = state_with_days(10);
        state.set_end_date(Some(day(8)));
        state.set_start_date(Some(day(9)));
        assert_eq!(state.criteria.end_date, Some(day(10)));
        state.set_start_date(Some(day(2)));
        assert!(state.error_message.is_none());
        assert_eq!(state.criteria.end_date, Some(day(10)));
    }

    #[test]
    fn start_date_conflict_leaves_error_message_untouched() {
        let mut state = state_with_days(10);
        state.set_end_date(Some(day(5)));
        state.set_min_value(Some(30.0));
        state.set_max_value(Some(30.0));
        assert!(state.error_message.is_some());

        // The self-healing branch advances the end date and nothing else.
        state.set_start_date(Some(day(5)));
        assert_eq!(state.criteria.end_date, Some(day(6)));
        assert!(state.error_message.is_some());
    }

    #[test]
    fn start_date_at_calendar_limit_saturates_end_date() {
        let mut state = state_with_days(5);
        state.set_end_date(Some(day(3)));
        state.set_start_date(Some(NaiveDate::MAX));
        assert_eq!(state.criteria.end_date, Some(NaiveDate::MAX));
    }

    #[test]
    fn end_date_conflict_sets_message_but_keeps_value() {
        let mut state = state_with_days(10);
        state.set_start_date(Some(day(5)));
        state.set_end_date(Some(day(3)));
        assert!(state.error_message.is_some());
        assert_eq!(state.criteria.end_date, Some(day(3)));
        // An inverted window shows an empty chart, never an error.
        assert!(state.visible.is_empty());
    }

    #[test]
    fn min_value_conflict_advances_max_value() {
        let mut state = state_with_days(10);
        state.set_max_value(Some(50.0));
        state.set_min_value(Some(50.0));
        assert_eq!(state.criteria.min_value, Some(50.0));
        assert_eq!(state.criteria.max_value, Some(51.0));
    }

    #[test]
    fn min_value_without_conflict_clears_message() {
        let mut state = state_with_days(10);
        state.set_min_value(Some(20.0));
        state.set_max_value(Some(10.0));
        assert!(state.error_message.is_some());
        state.set_min_value(Some(5.0));
        assert!(state.error_message.is_none());
    }

    #[test]
    fn min_value_conflict_leaves_error_message_untouched() {
        let mut state = state_with_days(10);
        state.set_max_value(Some(50.0));
        state.set_start_date(Some(day(5)));
        state.set_end_date(Some(day(3)));
        assert!(state.error_message.is_some());

        // The self-healing branch advances the max and nothing else.
        state.set_min_value(Some(50.0));
        assert_eq!(state.criteria.max_value, Some(51.0));
        assert!(state.error_message.is_some());
    }

    #[test]
    fn max_value_conflict_sets_message_but_keeps_value() {
        let mut state = state_with_days(10);
        state.set_min_value(Some(30.0));
        state.set_max_value(Some(30.0));
        assert!(state.error_message.is_some());
        assert_eq!(state.criteria.max_value, Some(30.0));
    }

    #[test]
    fn clear_filters_resets_everything_at_once() {
        let mut state = state_with_days(10);
        state.set_start_date(Some(day(5)));
        state.set_end_date(Some(day(2)));
        state.set_min_value(Some(10.0));
        state.set_max_value(Some(5.0));
        assert!(state.error_message.is_some());

        state.clear_filters();
        assert_eq!(state.criteria, FilterCriteria::default());
        assert!(state.error_message.is_none());
        // Weekly over the untouched 10-day sequence: positions 0 and 7.
        assert_eq!(state.visible.len(), 2);
    }

    #[test]
    fn filter_edits_move_the_sampling_boundary() {
        let mut state = state_with_days(20);
        let before: Vec<_> = state.visible.iter().map(|o| o.timestamp).collect();
        assert_eq!(before, vec![day(1), day(8), day(15)]);

        state.set_start_date(Some(day(4)));
        let after: Vec<_> = state.visible.iter().map(|o| o.timestamp).collect();
        assert_eq!(after, vec![day(4), day(11), day(18)]);
    }

    #[test]
    fn timeframe_change_recomputes_view() {
        let mut state = state_with_days(20);
        state.set_timeframe(Timeframe::Daily);
        assert_eq!(state.visible.len(), 20);
        state.set_timeframe(Timeframe::Monthly);
        assert_eq!(state.visible.len(), 1);
    }

    #[test]
    fn theme_toggle_does_not_touch_data() {
        let mut state = state_with_days(10);
        let before = state.visible.clone();
        state.toggle_theme();
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.visible, before);
        state.toggle_theme();
        assert_eq!(state.theme, Theme::Light);
    }
}
