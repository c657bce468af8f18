//! # Price Aggregator
//!
//! Derives the booking total from nights, the nightly rate and the ledger.
//!
//! ```text
//! product_subtotal = nights × nightly_price
//! options_subtotal = Σ count × unit_price
//! grand_total      = product_subtotal + options_subtotal
//! ```
//!
//! Nothing here is stored; a [`PriceBreakdown`] is recomputed on every
//! state change and thrown away after rendering.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ledger::{LedgerEntry, OptionLedger};
use crate::money::Money;

/// One option row as the booking view shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    pub count: u32,
    pub unit_price: Money,
    pub line_total: Money,
}

impl From<&LedgerEntry> for LineItem {
    fn from(entry: &LedgerEntry) -> Self {
        LineItem {
            name: entry.name.clone(),
            count: entry.count,
            unit_price: entry.unit_price,
            line_total: entry.line_total(),
        }
    }
}

/// Derived totals for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub nights: i64,
    pub nightly_price: Money,
    pub product_subtotal: Money,
    pub lines: Vec<LineItem>,
    pub options_subtotal: Money,
    pub grand_total: Money,
}

/// Computes the breakdown. Pure: same inputs, same output.
///
/// ```rust
/// use pureun_core::{pricing, Money, OptionCatalog, OptionItem, OptionLedger};
///
/// let catalog = OptionCatalog::new(vec![OptionItem::new("불멍 세트", Money::from_won(20_000))]);
/// let mut ledger = OptionLedger::new();
/// ledger.select_option("불멍 세트", &catalog);
/// ledger.increase("불멍 세트");
///
/// let breakdown = pricing::quote(3, Money::from_won(100_000), &ledger);
/// assert_eq!(breakdown.product_subtotal.won(), 300_000);
/// assert_eq!(breakdown.options_subtotal.won(), 40_000);
/// assert_eq!(breakdown.grand_total.won(), 340_000);
/// ```
pub fn quote(nights: i64, nightly_price: Money, ledger: &OptionLedger) -> PriceBreakdown {
    let product_subtotal = nightly_price.multiply_quantity(nights);
    let lines: Vec<LineItem> = ledger.entries().iter().map(LineItem::from).collect();
    let options_subtotal: Money = lines.iter().map(|line| line.line_total).sum();

    PriceBreakdown {
        nights,
        nightly_price,
        product_subtotal,
        lines,
        options_subtotal,
        grand_total: product_subtotal + options_subtotal,
    }
}

/// Just the grand total, without building line items.
pub fn grand_total(nights: i64, nightly_price: Money, ledger: &OptionLedger) -> Money {
    nightly_price.multiply_quantity(nights) + ledger.subtotal()
}
