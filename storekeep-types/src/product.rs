//! Product metadata as delivered by the remote catalog.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// How a product is sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    Consumable,
    #[default]
    NonConsumable,
    AutoRenewable,
    NonRenewing,
}

impl ProductKind {
    /// Returns true for both subscription kinds.
    #[must_use]
    pub fn is_subscription(self) -> bool {
        matches!(self, Self::AutoRenewable | Self::NonRenewing)
    }
}

/// Display attributes of a store product.
///
/// Records are treated as immutable snapshots: a cache replaces a record
/// wholesale and never patches individual fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductRecord {
    /// The product's own identifier.
    pub id: ProductId,
    /// Localized title.
    pub title: String,
    /// Localized description.
    #[serde(default)]
    pub description: String,
    /// Price as the raw decimal string reported by the store.
    pub price: String,
    /// ISO 4217 currency code of `price`.
    pub currency_code: String,
    /// Product kind.
    #[serde(default)]
    pub kind: ProductKind,
}

impl ProductRecord {
    /// Creates a non-consumable record with an empty description.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: impl Into<String>,
        currency_code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            price: price.into(),
            currency_code: currency_code.into(),
            kind: ProductKind::default(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the product kind.
    #[must_use]
    pub fn with_kind(mut self, kind: ProductKind) -> Self {
        self.kind = kind;
        self
    }
}
