//! # pureun-booking: Booking Page Orchestration
//!
//! Wires the pure pricing logic in `pureun-core` to its collaborators: the
//! catalog API that supplies product details and options, and the payment
//! dialog that charges for the stay.
//!
//! ## Module Organization
//! ```text
//! pureun_booking/
//! ├── lib.rs          ◄─── You are here (exports & tracing setup)
//! ├── controller.rs   ◄─── Page lifecycle and user actions
//! ├── summary.rs      ◄─── Derived state rendered by the view
//! ├── source.rs       ◄─── CatalogSource trait + in-memory catalog
//! ├── payment.rs      ◄─── PaymentGateway trait + reservation types
//! ├── config.rs       ◄─── Display and policy settings
//! ├── error.rs        ◄─── Error type for controller calls
//! └── bin/quote.rs    ◄─── Command-line walkthrough of one booking
//! ```
//!
//! ## Collaborators
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────────────┐    ┌────────────────────┐    ┌─────────────────┐ │
//! │  │  CatalogSource   │───►│ BookingController  │───►│ PaymentGateway  │ │
//! │  │                  │    │                    │    │                 │ │
//! │  │  • details       │    │  • BookingSession  │    │  • confirm      │ │
//! │  │  • options       │    │  • BookingConfig   │    │                 │ │
//! │  └──────────────────┘    └─────────┬──────────┘    └─────────────────┘ │
//! │                                    │                                    │
//! │                                    ▼                                    │
//! │                          BookingSummary (view)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod payment;
pub mod source;
pub mod summary;

pub use config::BookingConfig;
pub use controller::{BookingController, PageState, PageStatus};
pub use error::{BookingError, BookingResult, ErrorCode, ErrorResponse};
pub use payment::{ApproveAll, PaymentError, PaymentGateway, PaymentReceipt, ReservationRequest};
pub use source::{CatalogSource, InMemoryCatalog, SourceError};
pub use summary::{BookingSummary, SummaryLine};

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=pureun_booking=trace` - Trace the controller only
/// - Default: INFO, with DEBUG for pureun crates
///
/// Returns `false` when a global subscriber was already installed; the
/// existing one is kept and told about it.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pureun_core=debug,pureun_booking=debug"));

    match tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(error = %err, "Tracing subscriber already installed");
            false
        }
    }
}
