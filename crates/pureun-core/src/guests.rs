//! # Guest Count
//!
//! A guest counter bounded to `[1, max]`, where `max` comes from the
//! product's `maxPeople` and may be absent (no upper bound).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Fewest guests a booking can have.
pub const MIN_GUESTS: u32 = 1;

/// Bounded guest counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GuestCount {
    count: u32,
    max: Option<u32>,
}

impl GuestCount {
    /// One guest, limited to `max` (zero is read as "no limit").
    pub fn new(max: Option<u32>) -> Self {
        GuestCount {
            count: MIN_GUESTS,
            max: max.filter(|m| *m >= MIN_GUESTS),
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn max(&self) -> Option<u32> {
        self.max
    }

    /// Applies `delta` and clamps to `[1, max]`.
    ///
    /// ```rust
    /// use pureun_core::GuestCount;
    ///
    /// let mut guests = GuestCount::new(Some(4));
    /// assert_eq!(guests.change(-5), 1);
    /// assert_eq!(guests.change(10), 4);
    /// ```
    pub fn change(&mut self, delta: i64) -> u32 {
        let upper = self.max.map_or(i64::from(u32::MAX), i64::from);
        let next = i64::from(self.count).saturating_add(delta);
        // upper >= MIN_GUESTS is guaranteed by `new`
        self.count = next.clamp(i64::from(MIN_GUESTS), upper) as u32;
        self.count
    }

    /// Back to one guest.
    pub fn reset(&mut self) {
        self.count = MIN_GUESTS;
    }

    pub fn can_increase(&self) -> bool {
        self.max.map_or(true, |max| self.count < max)
    }

    pub fn can_decrease(&self) -> bool {
        self.count > MIN_GUESTS
    }
}

impl Default for GuestCount {
    fn default() -> Self {
        GuestCount::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_bounds() {
        let mut guests = GuestCount::new(Some(4));
        assert_eq!(guests.count(), 1);
        assert_eq!(guests.change(-5), 1);
        assert_eq!(guests.change(10), 4);
        assert_eq!(guests.change(-1), 3);
    }

    #[test]
    fn test_stepwise_buttons() {
        let mut guests = GuestCount::new(Some(2));
        assert!(!guests.can_decrease());
        assert!(guests.can_increase());

        guests.change(1);
        guests.change(1);
        assert_eq!(guests.count(), 2);
        assert!(!guests.can_increase());
        assert!(guests.can_decrease());
    }

    #[test]
    fn test_unbounded_without_max() {
        let mut guests = GuestCount::default();
        assert_eq!(guests.change(1_000), 1_001);
        assert!(guests.can_increase());
    }

    #[test]
    fn test_zero_max_is_unbounded() {
        let mut guests = GuestCount::new(Some(0));
        assert_eq!(guests.max(), None);
        assert_eq!(guests.change(7), 8);
    }

    #[test]
    fn test_huge_negative_delta_floors_at_one() {
        let mut guests = GuestCount::new(None);
        guests.change(5);
        assert_eq!(guests.change(i64::MIN), 1);
    }

    #[test]
    fn test_huge_positive_delta_without_max_saturates() {
        let mut guests = GuestCount::new(None);
        assert_eq!(guests.change(i64::MAX), u32::MAX);
    }

    #[test]
    fn test_reset() {
        let mut guests = GuestCount::new(Some(6));
        guests.change(3);
        guests.reset();
        assert_eq!(guests.count(), 1);
    }
}
