//! # Stay Range
//!
//! Turns the date picker's two nullable endpoints into a count of nights.
//!
//! ## Nights Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  start   end      nights                                                │
//! │  ─────   ─────    ──────                                                │
//! │  None    *        0                                                     │
//! │  *       None     0                                                     │
//! │  10/18   10/21    3                                                     │
//! │  10/18   10/18    0                                                     │
//! │  10/18 00:00      10/19 06:00   → 1.25 days → 2 (partial days round up)│
//! │  10/21   10/18    -3  (inverted, see `validate`)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Check-in / check-out pair, either end possibly unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StayRange {
    #[ts(as = "Option<String>")]
    pub start: Option<NaiveDateTime>,
    #[ts(as = "Option<String>")]
    pub end: Option<NaiveDateTime>,
}

impl StayRange {
    pub const fn new(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
        StayRange { start, end }
    }

    /// Builds a range from calendar dates, each taken at midnight.
    pub fn from_dates(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        StayRange {
            start: start.map(|d| d.and_time(NaiveTime::MIN)),
            end: end.map(|d| d.and_time(NaiveTime::MIN)),
        }
    }

    /// True when both endpoints are set.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Nights of stay: `ceil((end - start) / 1 day)`, or 0 if either end is unset.
    ///
    /// The result is NOT clamped; an inverted range gives a negative count.
    /// Call [`StayRange::validate`] to reject that case.
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use pureun_core::StayRange;
    ///
    /// let start = NaiveDate::from_ymd_opt(2024, 10, 18);
    /// let end = NaiveDate::from_ymd_opt(2024, 10, 21);
    /// assert_eq!(StayRange::from_dates(start, end).nights(), 3);
    /// assert_eq!(StayRange::from_dates(start, None).nights(), 0);
    /// ```
    pub fn nights(&self) -> i64 {
        match (self.start, self.end) {
            (Some(start), Some(end)) => ceil_days((end - start).num_milliseconds()),
            _ => 0,
        }
    }

    /// Rejects a range whose end precedes its start.
    pub fn validate(&self) -> CoreResult<()> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if end < start => Err(CoreError::InvalidRange { start, end }),
            _ => Ok(()),
        }
    }

    /// Check-in calendar date, if set.
    pub fn check_in(&self) -> Option<NaiveDate> {
        self.start.map(|dt| dt.date())
    }

    /// Check-out calendar date, if set.
    pub fn check_out(&self) -> Option<NaiveDate> {
        self.end.map(|dt| dt.date())
    }
}

// Rust integer division truncates toward zero, which is already the ceiling
// for negative quotients.
fn ceil_days(millis: i64) -> i64 {
    let days = millis / MILLIS_PER_DAY;
    if millis % MILLIS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, d).unwrap()
    }

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        day(d).and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_unset_endpoints_give_zero_nights() {
        assert_eq!(StayRange::default().nights(), 0);
        assert_eq!(StayRange::from_dates(Some(day(18)), None).nights(), 0);
        assert_eq!(StayRange::from_dates(None, Some(day(21))).nights(), 0);
    }

    #[test]
    fn test_whole_days() {
        assert_eq!(StayRange::from_dates(Some(day(18)), Some(day(21))).nights(), 3);
        assert_eq!(StayRange::from_dates(Some(day(18)), Some(day(19))).nights(), 1);
        assert_eq!(StayRange::from_dates(Some(day(18)), Some(day(18))).nights(), 0);
    }

    #[test]
    fn test_partial_day_rounds_up() {
        let range = StayRange::new(Some(at(18, 0, 0)), Some(at(19, 6, 0)));
        assert_eq!(range.nights(), 2);

        let range = StayRange::new(Some(at(18, 15, 0)), Some(at(18, 15, 1)));
        assert_eq!(range.nights(), 1);
    }

    #[test]
    fn test_inverted_range_is_negative_and_invalid() {
        let range = StayRange::from_dates(Some(day(21)), Some(day(18)));
        assert_eq!(range.nights(), -3);
        assert!(matches!(
            range.validate(),
            Err(CoreError::InvalidRange { .. })
        ));

        // -1.5 days rounds toward the ceiling, -1
        let range = StayRange::new(Some(at(20, 12, 0)), Some(at(19, 0, 0)));
        assert_eq!(range.nights(), -1);
    }

    #[test]
    fn test_validate_accepts_open_and_forward_ranges() {
        assert!(StayRange::default().validate().is_ok());
        assert!(StayRange::from_dates(Some(day(21)), None).validate().is_ok());
        assert!(StayRange::from_dates(Some(day(18)), Some(day(18)))
            .validate()
            .is_ok());
    }

    #[test]
    fn test_nights_monotonic_in_end() {
        let start = at(18, 15, 0);
        let mut previous = i64::MIN;
        for hours in (0..24 * 10).step_by(5) {
            let end = start + chrono::Duration::hours(hours);
            let nights = StayRange::new(Some(start), Some(end)).nights();
            assert!(nights >= previous, "nights decreased at +{hours}h");
            previous = nights;
        }
    }

    #[test]
    fn test_check_in_check_out_dates() {
        let range = StayRange::new(Some(at(18, 15, 0)), Some(at(21, 11, 0)));
        assert_eq!(range.check_in(), Some(day(18)));
        assert_eq!(range.check_out(), Some(day(21)));
        assert!(range.is_complete());
    }
}
