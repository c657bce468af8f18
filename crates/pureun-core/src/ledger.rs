//! # Option Ledger
//!
//! The guest's current selection of add-on options with per-option counts.
//!
//! ## Ledger Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Option Ledger Operations                             │
//! │                                                                         │
//! │  UI Action              Ledger Call            Ledger Change            │
//! │  ─────────              ───────────            ─────────────            │
//! │                                                                         │
//! │  Pick from dropdown ───► select_option() ────► insert {1, price}       │
//! │                                                 or count += 1           │
//! │                                                                         │
//! │  Click "+" ────────────► increase() ─────────► count += 1              │
//! │                                                                         │
//! │  Click "-" ────────────► decrease() ─────────► count -= 1              │
//! │                                                 or remove at 1          │
//! │                                                                         │
//! │  Unknown / empty name ─► any of the above ───► Unchanged (no fault)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Entries are unique by option name
//! - Every entry has `count >= 1`; a decrement from 1 removes the entry
//! - Entries keep the order in which they were first selected
//! - `unit_price` is frozen from the catalog at first selection

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::OptionCatalog;

/// One selected option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub name: String,
    pub count: u32,
    /// Catalog price at the time the option was first selected.
    pub unit_price: Money,
}

impl LedgerEntry {
    /// `count × unit_price`.
    pub fn line_total(&self) -> Money {
        self.unit_price * self.count
    }
}

/// What a ledger mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerChange {
    /// New entry with count 1.
    Added,
    /// Existing entry's count went up.
    Incremented,
    /// Existing entry's count went down but stays >= 1.
    Decremented,
    /// Entry dropped after a decrement from 1.
    Removed,
    /// Nothing happened (empty or unknown name).
    Unchanged,
}

impl LedgerChange {
    pub fn is_change(&self) -> bool {
        !matches!(self, LedgerChange::Unchanged)
    }
}

/// Ordered selection of options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionLedger {
    entries: Vec<LedgerEntry>,
}

impl OptionLedger {
    pub fn new() -> Self {
        OptionLedger::default()
    }

    /// Selects an option from the catalog dropdown.
    ///
    /// ## Behavior
    /// - Empty name (the "옵션 선택" placeholder): no-op
    /// - Already selected: count += 1 (same as [`OptionLedger::increase`])
    /// - Not yet selected and in catalog: added with count 1 at catalog price
    /// - Not in catalog: no-op
    ///
    /// ```rust
    /// use pureun_core::{LedgerChange, Money, OptionCatalog, OptionItem, OptionLedger};
    ///
    /// let catalog = OptionCatalog::new(vec![OptionItem::new("숯불 세트", Money::from_won(15_000))]);
    /// let mut ledger = OptionLedger::new();
    ///
    /// assert_eq!(ledger.select_option("숯불 세트", &catalog), LedgerChange::Added);
    /// assert_eq!(ledger.select_option("숯불 세트", &catalog), LedgerChange::Incremented);
    /// assert_eq!(ledger.count("숯불 세트"), 2);
    /// ```
    pub fn select_option(&mut self, name: &str, catalog: &OptionCatalog) -> LedgerChange {
        if name.is_empty() {
            return LedgerChange::Unchanged;
        }

        if let Some(entry) = self.entry_mut(name) {
            entry.count = entry.count.saturating_add(1);
            return LedgerChange::Incremented;
        }

        match catalog.find(name) {
            Some(option) => {
                self.entries.push(LedgerEntry {
                    name: option.name.clone(),
                    count: 1,
                    unit_price: option.unit_price,
                });
                LedgerChange::Added
            }
            None => LedgerChange::Unchanged,
        }
    }

    /// Bumps the count of an already selected option.
    pub fn increase(&mut self, name: &str) -> LedgerChange {
        match self.entry_mut(name) {
            Some(entry) => {
                entry.count = entry.count.saturating_add(1);
                LedgerChange::Incremented
            }
            None => LedgerChange::Unchanged,
        }
    }

    /// Lowers the count of a selected option, removing it at 1.
    pub fn decrease(&mut self, name: &str) -> LedgerChange {
        let Some(index) = self.entries.iter().position(|e| e.name == name) else {
            return LedgerChange::Unchanged;
        };

        if self.entries[index].count > 1 {
            self.entries[index].count -= 1;
            LedgerChange::Decremented
        } else {
            self.entries.remove(index);
            LedgerChange::Removed
        }
    }

    /// Drops every selection.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Count for `name`, 0 if not selected.
    pub fn count(&self, name: &str) -> u32 {
        self.get(name).map_or(0, |e| e.count)
    }

    pub fn get(&self, name: &str) -> Option<&LedgerEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Entries in first-selected order.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Σ `count × unit_price` over all entries.
    pub fn subtotal(&self) -> Money {
        self.entries.iter().map(LedgerEntry::line_total).sum()
    }

    fn entry_mut(&mut self, name: &str) -> Option<&mut LedgerEntry> {
        self.entries.iter_mut().find(|e| e.name == name)
    }
}
