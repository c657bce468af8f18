//! # Domain Types
//!
//! Reference data the booking engine reads but never mutates.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌─────────────────────┐                     │
//! │  │   ProductDetails    │   │   OptionCatalog     │                     │
//! │  │  ─────────────────  │   │  ─────────────────  │                     │
//! │  │  name               │   │  Vec<OptionItem>    │                     │
//! │  │  nightly_price      │   │   ├─ name (key)     │                     │
//! │  │  max_guests         │   │   └─ unit_price     │                     │
//! │  │  images (4 urls)    │   └─────────────────────┘                     │
//! │  └─────────────────────┘                                               │
//! │                                                                         │
//! │  Both are fetched once per booking session and treated as read-only    │
//! │  snapshots for the session's lifetime.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Names
//! The remote API speaks camelCase with its own field names (`price`,
//! `maxPeople`, `optionName`, ...). The serde renames below map them onto
//! the domain names used in this crate.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Images
// =============================================================================

/// Number of gallery slots a product page shows.
pub const GALLERY_SLOTS: usize = 4;

/// The four gallery images of a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductImages {
    #[serde(default)]
    pub main_image_url: Option<String>,
    #[serde(default)]
    pub sub_image_url: Option<String>,
    #[serde(default, rename = "subImageUrl2")]
    pub sub_image_url_2: Option<String>,
    #[serde(default, rename = "subImageUrl3")]
    pub sub_image_url_3: Option<String>,
}

impl ProductImages {
    /// Returns the gallery in display order, main image first.
    pub fn slots(&self) -> [Option<&str>; GALLERY_SLOTS] {
        [
            self.main_image_url.as_deref(),
            self.sub_image_url.as_deref(),
            self.sub_image_url_2.as_deref(),
            self.sub_image_url_3.as_deref(),
        ]
    }

    /// Returns the image URL at `index`, if that slot is filled.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots().get(index).copied().flatten()
    }
}

// =============================================================================
// Product Details
// =============================================================================

/// A bookable camping site as delivered by the catalog.
///
/// ## Missing Fields
/// Partially populated records must never fault the calculator:
/// - no `price` (or `null`) → nightly price of zero
/// - no `maxPeople` (or zero) → no guest limit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    /// Display name of the site.
    #[serde(default)]
    pub name: String,

    /// Price per night.
    #[serde(default, rename = "price", deserialize_with = "null_as_zero")]
    pub nightly_price: Money,

    /// Maximum number of guests, infants included.
    #[serde(default, rename = "maxPeople")]
    pub max_guests: Option<u32>,

    /// Gallery images.
    #[serde(flatten)]
    pub images: ProductImages,
}

impl ProductDetails {
    /// Returns the effective guest limit; `None` means unbounded.
    ///
    /// A limit of zero is treated as "not set" rather than "nobody".
    ///
    /// ```rust
    /// use pureun_core::ProductDetails;
    ///
    /// let mut product = ProductDetails::default();
    /// assert_eq!(product.guest_limit(), None);
    ///
    /// product.max_guests = Some(0);
    /// assert_eq!(product.guest_limit(), None);
    ///
    /// product.max_guests = Some(4);
    /// assert_eq!(product.guest_limit(), Some(4));
    /// ```
    pub fn guest_limit(&self) -> Option<u32> {
        self.max_guests.filter(|max| *max > 0)
    }
}

// =============================================================================
// Options
// =============================================================================

/// A purchasable add-on (firewood set, charcoal set, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OptionItem {
    /// Unique key within the catalog.
    #[serde(rename = "optionName")]
    pub name: String,

    /// Price per unit; missing or `null` is zero.
    #[serde(default, rename = "optionPrice", deserialize_with = "null_as_zero")]
    pub unit_price: Money,
}

impl OptionItem {
    pub fn new(name: impl Into<String>, unit_price: Money) -> Self {
        OptionItem {
            name: name.into(),
            unit_price,
        }
    }
}

/// Ordered, read-only list of selectable options.
///
/// Lookups return the first item with a matching name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionCatalog {
    items: Vec<OptionItem>,
}

impl OptionCatalog {
    pub fn new(items: Vec<OptionItem>) -> Self {
        OptionCatalog { items }
    }

    /// Finds an option by name.
    pub fn find(&self, name: &str) -> Option<&OptionItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Iterates options in catalog order (the dropdown order).
    pub fn iter(&self) -> impl Iterator<Item = &OptionItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<OptionItem> for OptionCatalog {
    fn from_iter<I: IntoIterator<Item = OptionItem>>(iter: I) -> Self {
        OptionCatalog::new(iter.into_iter().collect())
    }
}

/// Reads an amount that the API may send as `null`.
fn null_as_zero<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Money>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Unit Tests
// =============================================================================
