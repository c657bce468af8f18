//! # Booking Summary
//!
//! The derived state the booking view renders after every action.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  A-1 데크                                                      │
//! │  3박 2024. 10. 18. (금) ~ 2024. 10. 21. (월)      300,000원   │
//! │  체크인 15:00 / 체크아웃 11:00            [-]  2명  [+]        │
//! │  ────────────────────────────────────────────────────────────  │
//! │  불멍 세트                   [-] 2개 [+]           40,000원    │
//! │  총 가격: 340,000원                                            │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use pureun_core::{BookingSession, LineItem, Money};
use serde::Serialize;
use ts_rs::TS;

use crate::config::BookingConfig;

/// One option row with its formatted total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SummaryLine {
    pub name: String,
    pub count: u32,
    pub unit_price: Money,
    pub line_total: Money,
    pub line_total_label: String,
}

/// Everything the booking view needs for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub product_name: String,
    pub selected_image: Option<String>,
    pub option_names: Vec<String>,

    pub nights: i64,
    pub has_date_range: bool,
    /// `3박 2024. 10. 18. (금) ~ 2024. 10. 21. (월)`; only when nights > 0.
    pub stay_line: Option<String>,
    pub check_in_time: String,
    pub check_out_time: String,

    pub product_subtotal: Money,
    pub product_subtotal_label: String,

    pub has_options: bool,
    pub lines: Vec<SummaryLine>,
    pub options_subtotal: Money,
    pub grand_total: Money,
    pub grand_total_label: String,

    pub guest_count: u32,
    pub max_guests: Option<u32>,
    pub can_add_guest: bool,
    pub can_remove_guest: bool,
}

impl BookingSummary {
    pub fn build(session: &BookingSession, config: &BookingConfig) -> Self {
        let breakdown = session.breakdown();
        let stay = session.stay();

        let stay_line = match (breakdown.nights > 0, stay.check_in(), stay.check_out()) {
            (true, Some(check_in), Some(check_out)) => Some(format!(
                "{}박 {} ~ {}",
                breakdown.nights,
                config.format_stay_date(check_in),
                config.format_stay_date(check_out)
            )),
            _ => None,
        };

        let lines = breakdown
            .lines
            .iter()
            .map(|line| summary_line(line, config))
            .collect();

        let guests = session.guests();

        BookingSummary {
            product_name: session.product().name.clone(),
            selected_image: session.selected_image_url().map(str::to_string),
            option_names: session.catalog().iter().map(|o| o.name.clone()).collect(),
            nights: breakdown.nights,
            has_date_range: session.has_date_range(),
            stay_line,
            check_in_time: config.check_in_time.clone(),
            check_out_time: config.check_out_time.clone(),
            product_subtotal: breakdown.product_subtotal,
            product_subtotal_label: config.format_currency(breakdown.product_subtotal),
            has_options: session.has_options(),
            lines,
            options_subtotal: breakdown.options_subtotal,
            grand_total: breakdown.grand_total,
            grand_total_label: config.format_currency(breakdown.grand_total),
            guest_count: guests.count(),
            max_guests: guests.max(),
            can_add_guest: guests.can_increase(),
            can_remove_guest: guests.can_decrease(),
        }
    }
}

fn summary_line(line: &LineItem, config: &BookingConfig) -> SummaryLine {
    SummaryLine {
        name: line.name.clone(),
        count: line.count,
        unit_price: line.unit_price,
        line_total: line.line_total,
        line_total_label: config.format_currency(line.line_total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pureun_core::{OptionCatalog, OptionItem, ProductDetails};

    fn session() -> BookingSession {
        BookingSession::new(
            ProductDetails {
                name: "A-1 데크".to_string(),
                nightly_price: Money::from_won(100_000),
                max_guests: Some(4),
                ..Default::default()
            },
            OptionCatalog::new(vec![
                OptionItem::new("불멍 세트", Money::from_won(20_000)),
                OptionItem::new("숯불 세트", Money::from_won(15_000)),
            ]),
        )
    }

    #[test]
    fn test_summary_of_full_booking() {
        let mut s = session();
        s.set_dates(
            NaiveDate::from_ymd_opt(2024, 10, 18),
            NaiveDate::from_ymd_opt(2024, 10, 21),
        )
        .unwrap();
        s.select_option("불멍 세트");
        s.increase("불멍 세트");
        s.change_guest_count(1);

        let summary = BookingSummary::build(&s, &BookingConfig::default());

        assert_eq!(summary.nights, 3);
        assert_eq!(
            summary.stay_line.as_deref(),
            Some("3박 2024. 10. 18. (금) ~ 2024. 10. 21. (월)")
        );
        assert_eq!(summary.product_subtotal_label, "300,000원");
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines[0].line_total_label, "40,000원");
        assert_eq!(summary.grand_total, Money::from_won(340_000));
        assert_eq!(summary.grand_total_label, "340,000원");
        assert_eq!(summary.guest_count, 2);
        assert_eq!(summary.max_guests, Some(4));
        assert!(summary.has_options);
        assert!(summary.has_date_range);
        assert_eq!(summary.option_names, ["불멍 세트", "숯불 세트"]);
    }

    #[test]
    fn test_no_stay_line_without_nights() {
        let mut s = session();
        let day = NaiveDate::from_ymd_opt(2024, 10, 18);
        s.set_dates(day, day).unwrap();

        let summary = BookingSummary::build(&s, &BookingConfig::default());
        assert!(summary.has_date_range);
        assert_eq!(summary.nights, 0);
        assert!(summary.stay_line.is_none());
        assert!(!summary.has_options);
        assert!(!summary.can_remove_guest);
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = BookingSummary::build(&session(), &BookingConfig::default());
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["productName"], "A-1 데크");
        assert_eq!(json["grandTotalLabel"], "0원");
        assert_eq!(json["checkInTime"], "15:00");
        assert!(json["stayLine"].is_null());
    }
}
