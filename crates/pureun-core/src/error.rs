//! # Error Types
//!
//! Domain-specific error types for pureun-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pureun-core errors (this file)                                        │
//! │  ├── CoreError        - Booking rule violations (inverted range, ...)  │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  pureun-booking errors (separate crate)                                │
//! │  └── BookingError     - Load / payment failures, wraps CoreError       │
//! │                                                                         │
//! │  Flow: CoreError → BookingError → ErrorResponse                        │
//! │        ValidationError → warn! (catalog item dropped at load)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! The ledger and guest mutators are total: an unknown option name or an
//! oversized guest delta is a no-op or a clamp, never an `Err`.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core booking rule errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Check-out is before check-in.
    ///
    /// ## When This Occurs
    /// ```text
    /// set_date_range(2024-10-20, 2024-10-18)
    ///      │
    ///      ▼
    /// StayRange::validate ← end < start
    ///      │
    ///      ▼
    /// InvalidRange { .. }   (previous range is kept)
    /// ```
    #[error("Check-out {end} is before check-in {start}")]
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// Check-in falls before the earliest bookable day.
    #[error("Check-in {start} is before the earliest bookable date {earliest}")]
    CheckInInPast {
        start: NaiveDate,
        earliest: NaiveDate,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation of catalog data before it reaches a session.
/// Offending items are dropped and reported, never returned to the caller.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Duplicate value (e.g., two catalog options with the same name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
