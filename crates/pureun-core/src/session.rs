//! # Booking Session
//!
//! All mutable state of one visit to a product's booking view.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Booking Session Lifecycle                            │
//! │                                                                         │
//! │  navigate to /ReservationPayment/:product                              │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  product + catalog loaded ──► BookingSession::new()                    │
//! │                                 • stay: unset                          │
//! │                                 • ledger: empty                        │
//! │                                 • guests: 1                            │
//! │                                 • image: main                          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  set_date_range / select_option / increase / decrease /                │
//! │  change_guest_count / select_image      (each runs to completion)      │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  breakdown() ──► re-render                                             │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  navigate away ──► session dropped                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session is owned by exactly one caller and mutated through
//! `&mut self`; there is no process-wide state.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::CoreResult;
use crate::guests::GuestCount;
use crate::ledger::{LedgerChange, OptionLedger};
use crate::money::Money;
use crate::pricing::{self, PriceBreakdown};
use crate::stay::StayRange;
use crate::types::{OptionCatalog, ProductDetails};
use crate::validation::validate_check_in;

#[derive(Debug, Clone)]
pub struct BookingSession {
    product: ProductDetails,
    catalog: OptionCatalog,
    stay: StayRange,
    ledger: OptionLedger,
    guests: GuestCount,
    selected_image: usize,
    earliest_check_in: Option<NaiveDate>,
}

impl BookingSession {
    /// Starts a fresh session for `product`.
    pub fn new(product: ProductDetails, catalog: OptionCatalog) -> Self {
        let guests = GuestCount::new(product.guest_limit());
        BookingSession {
            product,
            catalog,
            stay: StayRange::default(),
            ledger: OptionLedger::new(),
            guests,
            selected_image: 0,
            earliest_check_in: None,
        }
    }

    /// Rejects check-in dates before `earliest` from now on.
    pub fn with_earliest_check_in(mut self, earliest: NaiveDate) -> Self {
        self.earliest_check_in = Some(earliest);
        self
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    /// Replaces the stay range and returns the new night count.
    ///
    /// An inverted range, or a check-in before the earliest bookable day,
    /// is rejected and the previous range is kept.
    pub fn set_date_range(
        &mut self,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> CoreResult<i64> {
        let candidate = StayRange::new(start, end);
        candidate.validate()?;
        if let Some(earliest) = self.earliest_check_in {
            validate_check_in(&candidate, earliest)?;
        }
        self.stay = candidate;
        Ok(self.stay.nights())
    }

    /// [`BookingSession::set_date_range`] for calendar dates.
    pub fn set_dates(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> CoreResult<i64> {
        let range = StayRange::from_dates(start, end);
        self.set_date_range(range.start, range.end)
    }

    pub fn select_option(&mut self, name: &str) -> LedgerChange {
        self.ledger.select_option(name, &self.catalog)
    }

    pub fn increase(&mut self, name: &str) -> LedgerChange {
        self.ledger.increase(name)
    }

    pub fn decrease(&mut self, name: &str) -> LedgerChange {
        self.ledger.decrease(name)
    }

    pub fn change_guest_count(&mut self, delta: i64) -> u32 {
        self.guests.change(delta)
    }

    /// Shows gallery slot `index`. Empty or out-of-range slots are ignored.
    pub fn select_image(&mut self, index: usize) -> bool {
        if self.product.images.get(index).is_some() {
            self.selected_image = index;
            true
        } else {
            false
        }
    }

    // -------------------------------------------------------------------------
    // Derived state
    // -------------------------------------------------------------------------

    pub fn nights(&self) -> i64 {
        self.stay.nights()
    }

    pub fn breakdown(&self) -> PriceBreakdown {
        pricing::quote(self.nights(), self.product.nightly_price, &self.ledger)
    }

    pub fn grand_total(&self) -> Money {
        pricing::grand_total(self.nights(), self.product.nightly_price, &self.ledger)
    }

    /// True once at least one option is selected.
    pub fn has_options(&self) -> bool {
        !self.ledger.is_empty()
    }

    /// True once both check-in and check-out are picked.
    pub fn has_date_range(&self) -> bool {
        self.stay.is_complete()
    }

    pub fn selected_image_url(&self) -> Option<&str> {
        self.product.images.get(self.selected_image)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn product(&self) -> &ProductDetails {
        &self.product
    }

    pub fn catalog(&self) -> &OptionCatalog {
        &self.catalog
    }

    pub fn stay(&self) -> &StayRange {
        &self.stay
    }

    pub fn ledger(&self) -> &OptionLedger {
        &self.ledger
    }

    pub fn guests(&self) -> &GuestCount {
        &self.guests
    }

    pub fn selected_image(&self) -> usize {
        self.selected_image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::types::{OptionItem, ProductImages};

    fn product() -> ProductDetails {
        ProductDetails {
            name: "A-1 데크".to_string(),
            nightly_price: Money::from_won(100_000),
            max_guests: Some(4),
            images: ProductImages {
                main_image_url: Some("/img/main.jpg".to_string()),
                sub_image_url: Some("/img/1.jpg".to_string()),
                sub_image_url_2: None,
                sub_image_url_3: Some("/img/3.jpg".to_string()),
            },
        }
    }

    fn session() -> BookingSession {
        BookingSession::new(
            product(),
            OptionCatalog::new(vec![
                OptionItem::new("불멍 세트", Money::from_won(20_000)),
                OptionItem::new("숯불 세트", Money::from_won(15_000)),
            ]),
        )
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, d).unwrap()
    }

    #[test]
    fn test_fresh_session() {
        let s = session();
        assert_eq!(s.nights(), 0);
        assert!(!s.has_date_range());
        assert!(!s.has_options());
        assert_eq!(s.guests().count(), 1);
        assert_eq!(s.selected_image_url(), Some("/img/main.jpg"));
        assert!(s.grand_total().is_zero());
    }

    #[test]
    fn test_full_booking_flow_total() {
        let mut s = session();
        assert_eq!(s.set_dates(Some(day(18)), Some(day(21))).unwrap(), 3);
        s.select_option("불멍 세트");
        s.select_option("불멍 세트");

        let breakdown = s.breakdown();
        assert_eq!(breakdown.nights, 3);
        assert_eq!(breakdown.grand_total, Money::from_won(340_000));
        assert_eq!(s.grand_total(), breakdown.grand_total);
        assert!(s.has_options());
        assert!(s.has_date_range());
    }

    #[test]
    fn test_inverted_range_rejected_and_previous_kept() {
        let mut s = session();
        s.set_dates(Some(day(18)), Some(day(20))).unwrap();

        let err = s.set_dates(Some(day(21)), Some(day(18))).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRange { .. }));
        assert_eq!(s.nights(), 2);
    }

    #[test]
    fn test_partial_range_pick() {
        let mut s = session();
        assert_eq!(s.set_dates(Some(day(18)), None).unwrap(), 0);
        assert!(!s.has_date_range());
    }

    #[test]
    fn test_earliest_check_in_enforced() {
        let mut s = session().with_earliest_check_in(day(19));

        assert!(matches!(
            s.set_dates(Some(day(18)), Some(day(20))),
            Err(CoreError::CheckInInPast { .. })
        ));
        assert_eq!(s.set_dates(Some(day(19)), Some(day(20))).unwrap(), 1);
    }

    #[test]
    fn test_guest_clamp_uses_product_limit() {
        let mut s = session();
        assert_eq!(s.change_guest_count(-5), 1);
        assert_eq!(s.change_guest_count(10), 4);
    }

    #[test]
    fn test_guest_count_independent_of_options() {
        let mut s = session();
        for _ in 0..6 {
            s.select_option("숯불 세트");
        }
        assert_eq!(s.change_guest_count(1), 2);
        assert_eq!(s.ledger().count("숯불 세트"), 6);
    }

    #[test]
    fn test_select_image() {
        let mut s = session();
        assert!(s.select_image(3));
        assert_eq!(s.selected_image_url(), Some("/img/3.jpg"));

        // Empty slot and out of range are ignored
        assert!(!s.select_image(2));
        assert!(!s.select_image(9));
        assert_eq!(s.selected_image(), 3);
    }

    #[test]
    fn test_unknown_option_noop() {
        let mut s = session();
        assert_eq!(s.increase("nonexistent"), LedgerChange::Unchanged);
        assert_eq!(s.select_option("nonexistent"), LedgerChange::Unchanged);
        assert!(s.ledger().is_empty());
    }
}
