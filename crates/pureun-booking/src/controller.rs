//! # Booking Controller
//!
//! Drives one booking view: loads the product, owns its session, and hands
//! the result to the payment collaborator.
//!
//! ## Page Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Booking Page Lifecycle                               │
//! │                                                                         │
//! │  ┌──────────┐  load()  ┌──────────┐  reserve() ok  ┌───────────┐       │
//! │  │ Loading  │─────────►│  Ready   │───────────────►│ Confirmed │       │
//! │  └──────────┘          └──────────┘                └───────────┘       │
//! │       │                  │      ▲                                       │
//! │       │ product fetch    │      │ set_date_range, select_option,        │
//! │       │ failed / empty   └──────┘ increase, decrease,                   │
//! │       ▼                           change_guest_count, select_image,     │
//! │  ┌─────────────┐                  reserve() failed                      │
//! │  │ Unavailable │                                                        │
//! │  └─────────────┘                                                        │
//! │                                                                         │
//! │  load() on another product drops the old session and starts over.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::NaiveDate;
use pureun_core::validation::sanitize_catalog;
use pureun_core::{BookingSession, LedgerChange};
use serde::Serialize;
use tracing::{debug, info, warn};
use ts_rs::TS;
use uuid::Uuid;

use crate::config::BookingConfig;
use crate::error::{BookingError, BookingResult};
use crate::payment::{PaymentGateway, PaymentReceipt, ReservationRequest};
use crate::source::CatalogSource;
use crate::summary::BookingSummary;

/// Where the page is in its lifecycle.
#[derive(Debug, Clone)]
pub enum PageState {
    Loading,
    Unavailable,
    Ready(Box<BookingSession>),
    Confirmed(PaymentReceipt),
}

/// [`PageState`] without its payload, for the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PageStatus {
    Loading,
    Unavailable,
    Ready,
    Confirmed,
}

impl PageState {
    pub fn status(&self) -> PageStatus {
        match self {
            PageState::Loading => PageStatus::Loading,
            PageState::Unavailable => PageStatus::Unavailable,
            PageState::Ready(_) => PageStatus::Ready,
            PageState::Confirmed(_) => PageStatus::Confirmed,
        }
    }
}

pub struct BookingController {
    source: Arc<dyn CatalogSource>,
    payment: Arc<dyn PaymentGateway>,
    config: BookingConfig,
    product: String,
    state: PageState,
}

impl BookingController {
    pub fn new(
        source: Arc<dyn CatalogSource>,
        payment: Arc<dyn PaymentGateway>,
        config: BookingConfig,
    ) -> Self {
        BookingController {
            source,
            payment,
            config,
            product: String::new(),
            state: PageState::Loading,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn status(&self) -> PageStatus {
        self.state.status()
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    /// Fetches product details and the option catalog and starts a new session.
    ///
    /// ## Failure Handling
    /// - product fetch failed or returned nothing → `Unavailable`
    /// - option catalog fetch failed → session starts with an empty catalog
    /// - invalid or duplicate options are dropped with a warning
    pub async fn load(&mut self, product: &str) -> PageStatus {
        info!(product, "Loading booking page");
        self.product = product.to_string();
        self.state = PageState::Loading;

        let (details, options) = tokio::join!(
            self.source.fetch_product_details(product),
            self.source.fetch_option_catalog()
        );

        let details = match details {
            Ok(Some(details)) => details,
            Ok(None) => {
                warn!(product, "Product details are undefined");
                self.state = PageState::Unavailable;
                return self.status();
            }
            Err(err) => {
                warn!(product, error = %err, "Error fetching product details");
                self.state = PageState::Unavailable;
                return self.status();
            }
        };

        let options = options.unwrap_or_else(|err| {
            warn!(error = %err, "Error fetching options, continuing without add-ons");
            Vec::new()
        });
        let (catalog, rejected) = sanitize_catalog(options);
        for reason in &rejected {
            warn!(%reason, "Dropped catalog option");
        }

        let mut session = BookingSession::new(details, catalog);
        if let Some(earliest) = self.config.earliest_check_in() {
            session = session.with_earliest_check_in(earliest);
        }

        info!(
            product,
            nightly_price = %session.product().nightly_price,
            options = session.catalog().len(),
            "Booking page ready"
        );
        self.state = PageState::Ready(Box::new(session));
        self.status()
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    pub fn set_date_range(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> BookingResult<BookingSummary> {
        let session = self.session_mut()?;
        let nights = session.set_dates(start, end)?;
        debug!(?start, ?end, nights, "set_date_range");
        self.summary()
    }

    pub fn select_option(&mut self, name: &str) -> BookingResult<BookingSummary> {
        let change = self.session_mut()?.select_option(name);
        log_change("select_option", name, change);
        self.summary()
    }

    pub fn increase(&mut self, name: &str) -> BookingResult<BookingSummary> {
        let change = self.session_mut()?.increase(name);
        log_change("increase", name, change);
        self.summary()
    }

    pub fn decrease(&mut self, name: &str) -> BookingResult<BookingSummary> {
        let change = self.session_mut()?.decrease(name);
        log_change("decrease", name, change);
        self.summary()
    }

    pub fn change_guest_count(&mut self, delta: i64) -> BookingResult<BookingSummary> {
        let guests = self.session_mut()?.change_guest_count(delta);
        debug!(delta, guests, "change_guest_count");
        self.summary()
    }

    pub fn select_image(&mut self, index: usize) -> BookingResult<BookingSummary> {
        self.session_mut()?.select_image(index);
        self.summary()
    }

    // -------------------------------------------------------------------------
    // Derived state
    // -------------------------------------------------------------------------

    pub fn summary(&self) -> BookingResult<BookingSummary> {
        Ok(BookingSummary::build(self.session()?, &self.config))
    }

    pub fn session(&self) -> BookingResult<&BookingSession> {
        match &self.state {
            PageState::Ready(session) => Ok(session.as_ref()),
            other => Err(not_ready(other, &self.product)),
        }
    }

    // -------------------------------------------------------------------------
    // Payment
    // -------------------------------------------------------------------------

    /// Sends the reservation to the payment collaborator.
    ///
    /// On success the page moves to `Confirmed`. On failure it stays `Ready`
    /// with dates, options and guests untouched so the guest can retry.
    pub async fn reserve(&mut self) -> BookingResult<PaymentReceipt> {
        let request = {
            let session = self.session()?;
            if session.nights() <= 0 {
                return Err(BookingError::NoStaySelected);
            }
            ReservationRequest {
                id: Uuid::new_v4(),
                product: self.product.clone(),
                stay: *session.stay(),
                selection: session.ledger().entries().to_vec(),
                guest_count: session.guests().count(),
                grand_total: session.grand_total(),
            }
        };

        info!(
            reservation_id = %request.id,
            product = %request.product,
            grand_total = %request.grand_total,
            "Requesting payment"
        );

        match self.payment.confirm(&request).await {
            Ok(receipt) => {
                info!(reservation_id = %receipt.reservation_id, "Payment confirmed");
                self.state = PageState::Confirmed(receipt.clone());
                Ok(receipt)
            }
            Err(err) => {
                warn!(reservation_id = %request.id, error = %err, "Payment failed");
                Err(err.into())
            }
        }
    }

    fn session_mut(&mut self) -> BookingResult<&mut BookingSession> {
        match &mut self.state {
            PageState::Ready(session) => Ok(session.as_mut()),
            other => Err(not_ready(other, &self.product)),
        }
    }
}

fn not_ready(state: &PageState, product: &str) -> BookingError {
    match state {
        PageState::Loading => BookingError::Loading,
        PageState::Confirmed(receipt) => BookingError::AlreadyConfirmed {
            reservation_id: receipt.reservation_id.to_string(),
        },
        PageState::Unavailable | PageState::Ready(_) => BookingError::Unavailable {
            product: product.to_string(),
        },
    }
}

fn log_change(action: &str, option: &str, change: LedgerChange) {
    if change.is_change() {
        debug!(action, option, ?change, "Option ledger updated");
    } else {
        debug!(action, option, "Option ledger unchanged");
    }
}
