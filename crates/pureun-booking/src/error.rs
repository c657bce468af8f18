//! # Booking Error Type
//!
//! Errors returned by the booking controller, and the serialisable shape
//! the view receives.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Booking View                       │
//! │                                                                         │
//! │  Controller call                                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Page not ready? ──── BookingError::Loading / Unavailable ──┐          │
//! │         │                                                    │          │
//! │         ▼                                                    ▼          │
//! │  Core rule broken? ── BookingError::Core(InvalidRange) ─► ErrorResponse │
//! │         │                                                    ▲          │
//! │         ▼                                                    │          │
//! │  Payment failed? ──── BookingError::Payment ─────────────────┘          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Success ─────────────────────────────────────────────────────────────► │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unknown option names and out-of-range guest deltas never reach this
//! type: the core treats them as no-ops and clamps.

use pureun_core::CoreError;
use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

use crate::payment::PaymentError;

#[derive(Debug, Error)]
pub enum BookingError {
    /// Product details are still being fetched.
    #[error("Booking page is still loading")]
    Loading,

    /// Product details could not be fetched.
    #[error("Product details not available: {product}")]
    Unavailable { product: String },

    /// The reservation was already paid for.
    #[error("Reservation {reservation_id} is already confirmed")]
    AlreadyConfirmed { reservation_id: String },

    /// `reserve` was called without a stay of at least one night.
    #[error("Select check-in and check-out dates first")]
    NoStaySelected,

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Payment(#[from] PaymentError),
}

pub type BookingResult<T> = Result<T, BookingError>;

/// Machine-readable error codes for the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    Loading,
    DataUnavailable,
    AlreadyConfirmed,
    NoStaySelected,
    InvalidRange,
    CheckInInPast,
    PaymentError,
}

/// What the view receives when a call fails.
///
/// ```json
/// { "code": "INVALID_RANGE", "message": "Check-out ... is before check-in ..." }
/// ```
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

impl BookingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            BookingError::Loading => ErrorCode::Loading,
            BookingError::Unavailable { .. } => ErrorCode::DataUnavailable,
            BookingError::AlreadyConfirmed { .. } => ErrorCode::AlreadyConfirmed,
            BookingError::NoStaySelected => ErrorCode::NoStaySelected,
            BookingError::Core(CoreError::InvalidRange { .. }) => ErrorCode::InvalidRange,
            BookingError::Core(CoreError::CheckInInPast { .. }) => ErrorCode::CheckInInPast,
            BookingError::Payment(_) => ErrorCode::PaymentError,
        }
    }
}

impl From<&BookingError> for ErrorResponse {
    fn from(err: &BookingError) -> Self {
        if let BookingError::Payment(PaymentError::Transport(detail)) = err {
            // Provider internals stay in the log
            tracing::error!(%detail, "Payment provider unreachable");
            return ErrorResponse {
                code: err.code(),
                message: "Payment provider unavailable".to_string(),
            };
        }

        ErrorResponse {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_codes() {
        assert_eq!(BookingError::Loading.code(), ErrorCode::Loading);
        assert_eq!(
            BookingError::Unavailable {
                product: "Z-9".to_string()
            }
            .code(),
            ErrorCode::DataUnavailable
        );
        assert_eq!(
            BookingError::from(PaymentError::Cancelled).code(),
            ErrorCode::PaymentError
        );
    }

    #[test]
    fn test_core_error_maps_to_invalid_range() {
        let start = NaiveDate::from_ymd_opt(2024, 10, 21)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 10, 18)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let err = BookingError::from(CoreError::InvalidRange { start, end });

        let response = ErrorResponse::from(&err);
        assert_eq!(response.code, ErrorCode::InvalidRange);
        assert!(response.message.starts_with("Check-out 2024-10-18"));
    }

    #[test]
    fn test_past_check_in_code() {
        let start = NaiveDate::from_ymd_opt(2024, 10, 18).unwrap();
        let earliest = NaiveDate::from_ymd_opt(2024, 10, 19).unwrap();
        let err = BookingError::from(CoreError::CheckInInPast { start, earliest });

        let json = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(json["code"], "CHECK_IN_IN_PAST");
    }

    #[test]
    fn test_response_serialization() {
        let response = ErrorResponse::from(&BookingError::NoStaySelected);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["code"], "NO_STAY_SELECTED");
        assert_eq!(json["message"], "Select check-in and check-out dates first");
    }

    #[test]
    fn test_transport_detail_hidden() {
        let err = BookingError::from(PaymentError::Transport("10.0.0.7:443 refused".to_string()));
        let response = ErrorResponse::from(&err);
        assert_eq!(response.message, "Payment provider unavailable");
    }
}
