//! # Booking Configuration
//!
//! Display and policy settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PUREUN_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use chrono::{Datelike, Local, NaiveDate, Weekday};
use pureun_core::Money;
use serde::{Deserialize, Serialize};

/// Booking view configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfig {
    /// Unit appended to formatted amounts ("원")
    pub currency_unit: String,

    /// Check-in time shown next to the stay dates
    pub check_in_time: String,

    /// Check-out time shown next to the stay dates
    pub check_out_time: String,

    /// Reject check-in dates before today (the picker's minimum date)
    pub reject_past_check_in: bool,
}

impl Default for BookingConfig {
    /// ## Default Values
    /// - Currency unit: 원
    /// - Check-in 15:00, check-out 11:00
    /// - Past check-in rejected
    fn default() -> Self {
        BookingConfig {
            currency_unit: "원".to_string(),
            check_in_time: "15:00".to_string(),
            check_out_time: "11:00".to_string(),
            reject_past_check_in: true,
        }
    }
}

impl BookingConfig {
    /// Creates a new BookingConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PUREUN_CURRENCY_UNIT`: Override currency unit
    /// - `PUREUN_CHECK_IN`: Override check-in time (e.g., "14:00")
    /// - `PUREUN_CHECK_OUT`: Override check-out time
    /// - `PUREUN_REJECT_PAST_CHECK_IN`: "false" / "0" to allow past dates
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`BookingConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = BookingConfig::default();

        if let Some(unit) = lookup("PUREUN_CURRENCY_UNIT") {
            config.currency_unit = unit;
        }

        if let Some(time) = lookup("PUREUN_CHECK_IN") {
            config.check_in_time = time;
        }

        if let Some(time) = lookup("PUREUN_CHECK_OUT") {
            config.check_out_time = time;
        }

        if let Some(flag) = lookup("PUREUN_REJECT_PAST_CHECK_IN") {
            match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => config.reject_past_check_in = true,
                "0" | "false" | "no" => config.reject_past_check_in = false,
                other => tracing::warn!(value = other, "Ignoring PUREUN_REJECT_PAST_CHECK_IN"),
            }
        }

        config
    }

    /// Earliest bookable check-in, if past dates are rejected.
    pub fn earliest_check_in(&self) -> Option<NaiveDate> {
        self.reject_past_check_in
            .then(|| Local::now().date_naive())
    }

    /// Formats an amount as `340,000원`.
    ///
    /// ## Example
    /// ```rust
    /// use pureun_booking::BookingConfig;
    /// use pureun_core::Money;
    ///
    /// let config = BookingConfig::default();
    /// assert_eq!(config.format_currency(Money::from_won(340_000)), "340,000원");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!("{}{}", amount.grouped(), self.currency_unit)
    }

    /// Formats a stay date the way ko-KR locales print it: `2024. 10. 18. (금)`.
    pub fn format_stay_date(&self, date: NaiveDate) -> String {
        format!(
            "{}. {:02}. {:02}. ({})",
            date.year(),
            date.month(),
            date.day(),
            weekday_label(date.weekday())
        )
    }
}

fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "월",
        Weekday::Tue => "화",
        Weekday::Wed => "수",
        Weekday::Thu => "목",
        Weekday::Fri => "금",
        Weekday::Sat => "토",
        Weekday::Sun => "일",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_format_currency() {
        let config = BookingConfig::default();
        assert_eq!(config.format_currency(Money::from_won(340_000)), "340,000원");
        assert_eq!(config.format_currency(Money::zero()), "0원");
        assert_eq!(config.format_currency(Money::from_won(1_500_000)), "1,500,000원");
    }

    #[test]
    fn test_format_stay_date() {
        let config = BookingConfig::default();
        let date = NaiveDate::from_ymd_opt(2024, 10, 18).unwrap();
        assert_eq!(config.format_stay_date(date), "2024. 10. 18. (금)");

        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(config.format_stay_date(date), "2025. 01. 05. (일)");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PUREUN_CURRENCY_UNIT", " KRW"),
            ("PUREUN_CHECK_IN", "14:00"),
            ("PUREUN_REJECT_PAST_CHECK_IN", "false"),
        ]
        .into_iter()
        .collect();

        let config = BookingConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.currency_unit, " KRW");
        assert_eq!(config.check_in_time, "14:00");
        assert_eq!(config.check_out_time, "11:00");
        assert!(!config.reject_past_check_in);
        assert_eq!(config.earliest_check_in(), None);
        assert_eq!(config.format_currency(Money::from_won(20_000)), "20,000 KRW");
    }

    #[test]
    fn test_unparseable_flag_keeps_default() {
        let config = BookingConfig::from_lookup(|key| {
            (key == "PUREUN_REJECT_PAST_CHECK_IN").then(|| "maybe".to_string())
        });
        assert!(config.reject_past_check_in);
        assert!(config.earliest_check_in().is_some());
    }
}
