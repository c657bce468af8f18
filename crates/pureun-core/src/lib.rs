//! # pureun-core: Pure Pricing Logic for Pureun Camp Booking
//!
//! This crate computes what a camping reservation costs. It contains the
//! booking view's derived-state logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Pureun Booking Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Booking View (web)                           │   │
//! │  │   Date picker ──► Option dropdown ──► Guests ──► 예약하기       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 pureun-booking (controller)                     │   │
//! │  │    load, set_date_range, select_option, reserve, ...           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pureun-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  stay   │ │ ledger  │ │ pricing │ │ guests  │ │ session │  │   │
//! │  │   │ nights  │ │ options │ │ totals  │ │ clamp   │ │  owner  │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO CLOCK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`stay`] - Nights of stay from a nullable date range
//! - [`ledger`] - Selected options with per-option counts
//! - [`pricing`] - Grand total and line items
//! - [`guests`] - Guest count bounded by the product limit
//! - [`session`] - The per-visit state object tying the above together
//! - [`types`] - Product details and the option catalog
//! - [`money`] - Integer won amounts
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog and stay checks
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pureun_core::{BookingSession, Money, OptionCatalog, OptionItem, ProductDetails};
//!
//! let product = ProductDetails {
//!     name: "A-1 데크".to_string(),
//!     nightly_price: Money::from_won(100_000),
//!     max_guests: Some(4),
//!     ..Default::default()
//! };
//! let catalog = OptionCatalog::new(vec![OptionItem::new("불멍 세트", Money::from_won(20_000))]);
//!
//! let mut session = BookingSession::new(product, catalog);
//! session
//!     .set_dates(NaiveDate::from_ymd_opt(2024, 10, 18), NaiveDate::from_ymd_opt(2024, 10, 21))
//!     .unwrap();
//! session.select_option("불멍 세트");
//! session.increase("불멍 세트");
//!
//! assert_eq!(session.grand_total(), Money::from_won(340_000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod guests;
pub mod ledger;
pub mod money;
pub mod pricing;
pub mod session;
pub mod stay;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use guests::GuestCount;
pub use ledger::{LedgerChange, LedgerEntry, OptionLedger};
pub use money::Money;
pub use pricing::{LineItem, PriceBreakdown};
pub use session::BookingSession;
pub use stay::StayRange;
pub use types::*;
