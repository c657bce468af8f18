//! # Payment Collaborator
//!
//! The payment dialog is a black box: it receives the computed total and
//! the selection, and reports success or failure.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  예약하기 ──► ReservationRequest ──► PaymentGateway::confirm            │
//! │                                            │                            │
//! │                        ┌───────────────────┴──────────────┐             │
//! │                        ▼                                  ▼             │
//! │                  Ok(PaymentReceipt)                Err(PaymentError)    │
//! │                  page → Confirmed                  stay on booking view │
//! │                                                    (state kept intact)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use pureun_core::{LedgerEntry, Money, StayRange};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;
use uuid::Uuid;

/// Everything the payment dialog needs to charge for a stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    #[ts(as = "String")]
    pub id: Uuid,
    pub product: String,
    pub stay: StayRange,
    pub selection: Vec<LedgerEntry>,
    pub guest_count: u32,
    pub grand_total: Money,
}

/// Proof of a successful payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    #[ts(as = "String")]
    pub reservation_id: Uuid,
    pub approval_code: String,
    pub amount: Money,
}

/// Payment failures.
#[derive(Debug, Clone, Error)]
pub enum PaymentError {
    /// The payer closed the dialog.
    #[error("Payment was cancelled")]
    Cancelled,

    /// The provider refused the charge.
    #[error("Payment declined: {reason}")]
    Declined { reason: String },

    /// The provider could not be reached.
    #[error("Payment provider unavailable: {0}")]
    Transport(String),
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn confirm(&self, request: &ReservationRequest) -> Result<PaymentReceipt, PaymentError>;
}

/// Gateway that approves every request. Used by the quote binary.
#[derive(Debug, Clone, Default)]
pub struct ApproveAll;

#[async_trait]
impl PaymentGateway for ApproveAll {
    async fn confirm(&self, request: &ReservationRequest) -> Result<PaymentReceipt, PaymentError> {
        Ok(PaymentReceipt {
            reservation_id: request.id,
            approval_code: format!("OK-{}", request.id.simple()),
            amount: request.grand_total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pureun_core::StayRange;

    fn request() -> ReservationRequest {
        ReservationRequest {
            id: Uuid::new_v4(),
            product: "A-1 데크".to_string(),
            stay: StayRange::from_dates(
                NaiveDate::from_ymd_opt(2024, 10, 18),
                NaiveDate::from_ymd_opt(2024, 10, 21),
            ),
            selection: vec![LedgerEntry {
                name: "불멍 세트".to_string(),
                count: 2,
                unit_price: Money::from_won(20_000),
            }],
            guest_count: 2,
            grand_total: Money::from_won(340_000),
        }
    }

    #[tokio::test]
    async fn test_approve_all_echoes_amount() {
        let request = request();
        let receipt = ApproveAll.confirm(&request).await.unwrap();

        assert_eq!(receipt.reservation_id, request.id);
        assert_eq!(receipt.amount, Money::from_won(340_000));
        assert!(receipt.approval_code.starts_with("OK-"));
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let json = serde_json::to_value(request()).unwrap();
        assert_eq!(json["guestCount"], 2);
        assert_eq!(json["grandTotal"], 340_000);
        assert_eq!(json["selection"][0]["count"], 2);
    }
}
