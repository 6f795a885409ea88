use chrono::NaiveDate;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Observation – one row of the dataset
// ---------------------------------------------------------------------------

/// A single timestamp/value pair. Immutable once loaded; the sequence keeps
/// its load order (assumed chronological, never verified).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Observation {
    pub timestamp: NaiveDate,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// FilterCriteria – user-specified bounds
// ---------------------------------------------------------------------------

/// Date and value bounds narrowing the displayed observations.
/// All fields optional; an absent bound is unbounded on that side.
///
/// Advisory UI state only: the filter computes on whatever bounds it is
/// given and does no cross-field validation. The edit methods on
/// [`crate::state::AppState`] own the paired-input correction rules.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterCriteria {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
}

// ---------------------------------------------------------------------------
// Timeframe – aggregation granularity
// ---------------------------------------------------------------------------

/// Which observations are displayed: all of them, or every 7th / 30th by
/// position in the filtered sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Timeframe {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [Timeframe::Daily, Timeframe::Weekly, Timeframe::Monthly];

    /// Sampling stride over the filtered sequence.
    pub fn stride(self) -> usize {
        match self {
            Timeframe::Daily => 1,
            Timeframe::Weekly => 7,
            Timeframe::Monthly => 30,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Timeframe::Daily => "Daily",
            Timeframe::Weekly => "Weekly",
            Timeframe::Monthly => "Monthly",
        }
    }
}
