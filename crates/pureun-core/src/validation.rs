//! # Validation Module
//!
//! Checks on catalog data and stay dates before they reach a session.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Date picker (frontend)                                       │
//! │  ├── range-select mode, minimum date = today                            │
//! │  └── immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── catalog items: name present, price not negative, names unique     │
//! │  └── stay: check-in not before the earliest bookable day               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: BookingSession                                               │
//! │  └── inverted ranges rejected (StayRange::validate)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::stay::StayRange;
use crate::types::{OptionCatalog, OptionItem};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest option name accepted from the catalog.
pub const MAX_OPTION_NAME_LEN: usize = 100;

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates one catalog option.
///
/// ## Rules
/// - Name must not be empty (empty is the dropdown placeholder)
/// - Name at most 100 characters
/// - Unit price must not be negative (zero is allowed: free items)
///
/// ```rust
/// use pureun_core::validation::validate_option_item;
/// use pureun_core::{Money, OptionItem};
///
/// assert!(validate_option_item(&OptionItem::new("불멍 세트", Money::from_won(20_000))).is_ok());
/// assert!(validate_option_item(&OptionItem::new("", Money::from_won(20_000))).is_err());
/// assert!(validate_option_item(&OptionItem::new("장작", Money::from_won(-1))).is_err());
/// ```
pub fn validate_option_item(item: &OptionItem) -> ValidationResult<()> {
    let name = item.name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "optionName".to_string(),
        });
    }

    if name.chars().count() > MAX_OPTION_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "optionName".to_string(),
            max: MAX_OPTION_NAME_LEN,
        });
    }

    if item.unit_price.is_negative() {
        return Err(ValidationError::Negative {
            field: "optionPrice".to_string(),
        });
    }

    Ok(())
}

/// Builds a catalog from raw items, dropping invalid and duplicate ones.
///
/// Names are stored trimmed and compared trimmed; the first occurrence of a
/// name wins. Rejected items are returned alongside the catalog so the
/// caller can report them.
pub fn sanitize_catalog(items: Vec<OptionItem>) -> (OptionCatalog, Vec<ValidationError>) {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(items.len());
    let mut rejected = Vec::new();

    for mut item in items {
        if let Err(err) = validate_option_item(&item) {
            rejected.push(err);
            continue;
        }
        item.name = item.name.trim().to_string();
        if !seen.insert(item.name.clone()) {
            rejected.push(ValidationError::Duplicate {
                field: "optionName".to_string(),
                value: item.name,
            });
            continue;
        }
        kept.push(item);
    }

    (OptionCatalog::new(kept), rejected)
}

// =============================================================================
// Stay Validators
// =============================================================================

/// Checks that the stay does not start before `earliest`.
///
/// An unset start always passes.
pub fn validate_check_in(range: &StayRange, earliest: NaiveDate) -> CoreResult<()> {
    match range.check_in() {
        Some(start) if start < earliest => Err(CoreError::CheckInInPast { start, earliest }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_validate_option_item() {
        assert!(validate_option_item(&OptionItem::new("숯불 세트", Money::from_won(15_000))).is_ok());
        assert!(validate_option_item(&OptionItem::new("무료 담요", Money::zero())).is_ok());

        assert!(matches!(
            validate_option_item(&OptionItem::new("   ", Money::from_won(1))),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_option_item(&OptionItem::new("가".repeat(101), Money::from_won(1))),
            Err(ValidationError::TooLong { max: 100, .. })
        ));
        assert!(matches!(
            validate_option_item(&OptionItem::new("장작", Money::from_won(-500))),
            Err(ValidationError::Negative { .. })
        ));
    }

    #[test]
    fn test_sanitize_catalog_drops_bad_and_duplicate_items() {
        let (catalog, rejected) = sanitize_catalog(vec![
            OptionItem::new("불멍 세트", Money::from_won(20_000)),
            OptionItem::new("", Money::from_won(1_000)),
            OptionItem::new("불멍 세트", Money::from_won(25_000)),
            OptionItem::new("숯불 세트", Money::from_won(15_000)),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.find("불멍 세트").map(|o| o.unit_price),
            Some(Money::from_won(20_000))
        );
        assert_eq!(rejected.len(), 2);
        assert!(matches!(rejected[1], ValidationError::Duplicate { .. }));
    }

    #[test]
    fn test_sanitize_catalog_trims_names() {
        let (catalog, rejected) = sanitize_catalog(vec![
            OptionItem::new(" 불멍 세트", Money::from_won(20_000)),
            OptionItem::new("불멍 세트 ", Money::from_won(25_000)),
            OptionItem::new("불멍 세트", Money::from_won(30_000)),
        ]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.find("불멍 세트").map(|o| o.unit_price),
            Some(Money::from_won(20_000))
        );
        assert_eq!(rejected.len(), 2);
        assert!(rejected
            .iter()
            .all(|err| matches!(err, ValidationError::Duplicate { value, .. } if value == "불멍 세트")));
    }

    #[test]
    fn test_validate_check_in() {
        let today = NaiveDate::from_ymd_opt(2024, 10, 19).unwrap();
        let yesterday = today.pred_opt().unwrap();
        let tomorrow = today.succ_opt().unwrap();

        assert!(validate_check_in(&StayRange::default(), today).is_ok());
        assert!(validate_check_in(&StayRange::from_dates(Some(today), None), today).is_ok());
        assert!(validate_check_in(&StayRange::from_dates(Some(tomorrow), None), today).is_ok());
        assert!(matches!(
            validate_check_in(&StayRange::from_dates(Some(yesterday), Some(tomorrow)), today),
            Err(CoreError::CheckInInPast { .. })
        ));
    }
}
