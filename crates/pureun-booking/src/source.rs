//! # Catalog Source
//!
//! Where product details and the option catalog come from.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BookingController::load("A-1 데크")                                    │
//! │        │                                                                │
//! │        ├──► fetch_product_details("A-1 데크")  ─┐                       │
//! │        │                                        ├─ run concurrently     │
//! │        └──► fetch_option_catalog()            ─┘                       │
//! │                                                                         │
//! │  Each is called once per session; the controller keeps the last        │
//! │  value delivered.                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use pureun_core::{Money, OptionItem, ProductDetails, ProductImages};
use thiserror::Error;

/// Catalog fetch failures.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The remote could not be reached or answered with an error.
    #[error("Catalog request failed: {0}")]
    Transport(String),

    /// The payload did not match the expected shape.
    #[error("Catalog payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Remote catalog API.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Details of one product. `Ok(None)` means the API answered with nothing.
    async fn fetch_product_details(&self, product: &str)
        -> Result<Option<ProductDetails>, SourceError>;

    /// Every selectable option, in dropdown order.
    async fn fetch_option_catalog(&self) -> Result<Vec<OptionItem>, SourceError>;
}

/// Catalog held in memory, keyed by product name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: HashMap<String, ProductDetails>,
    options: Vec<OptionItem>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        InMemoryCatalog::default()
    }

    pub fn with_product(mut self, product: ProductDetails) -> Self {
        self.products.insert(product.name.clone(), product);
        self
    }

    pub fn with_option(mut self, option: OptionItem) -> Self {
        self.options.push(option);
        self
    }

    /// Loads products and options from the API's JSON shapes.
    pub fn from_json(products_json: &str, options_json: &str) -> Result<Self, SourceError> {
        let products: Vec<ProductDetails> = serde_json::from_str(products_json)?;
        let options: Vec<OptionItem> = serde_json::from_str(options_json)?;

        Ok(InMemoryCatalog {
            products: products
                .into_iter()
                .map(|p| (p.name.clone(), p))
                .collect(),
            options,
        })
    }

    /// Two deck sites and the two standard fire sets.
    pub fn seeded() -> Self {
        InMemoryCatalog::new()
            .with_product(ProductDetails {
                name: "A-1 데크".to_string(),
                nightly_price: Money::from_won(100_000),
                max_guests: Some(4),
                images: ProductImages {
                    main_image_url: Some("/images/a1-main.jpg".to_string()),
                    sub_image_url: Some("/images/a1-sub1.jpg".to_string()),
                    sub_image_url_2: Some("/images/a1-sub2.jpg".to_string()),
                    sub_image_url_3: Some("/images/a1-sub3.jpg".to_string()),
                },
            })
            .with_product(ProductDetails {
                name: "B-2 카라반".to_string(),
                nightly_price: Money::from_won(150_000),
                max_guests: Some(6),
                images: ProductImages {
                    main_image_url: Some("/images/b2-main.jpg".to_string()),
                    ..Default::default()
                },
            })
            .with_option(OptionItem::new("불멍 세트", Money::from_won(20_000)))
            .with_option(OptionItem::new("숯불 세트", Money::from_won(15_000)))
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn fetch_product_details(
        &self,
        product: &str,
    ) -> Result<Option<ProductDetails>, SourceError> {
        Ok(self.products.get(product).cloned())
    }

    async fn fetch_option_catalog(&self) -> Result<Vec<OptionItem>, SourceError> {
        Ok(self.options.clone())
    }
}
