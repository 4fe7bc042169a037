use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a persisted [`Product`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a product in the catalog.
///
/// # Persistence
/// `id` is `None` until the store has persisted the product for the first time,
/// after which it never changes. `active` controls catalog visibility and is set
/// by the service, never by client input.
///
/// This struct implements the [`Entity`](crate::framework::Entity) trait so that a
/// [`ResourceActor`](crate::framework::ResourceActor) can own the records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock_quantity: u32,
    pub active: bool,
}

impl Product {
    /// Creates a product that has not been persisted yet.
    ///
    /// # Arguments
    /// * `name` - Product name
    /// * `description` - Free-form description
    /// * `price` - Unit price
    /// * `stock_quantity` - Available stock
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        stock_quantity: u32,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            price,
            stock_quantity,
            active: true,
        }
    }

    /// Builds a new, unpersisted product from client input. New products are
    /// always active.
    pub fn from_dto(dto: ProductDto) -> Self {
        Self::new(dto.name, dto.description, dto.price, dto.stock_quantity)
    }

    /// Overwrites the client-settable fields. `id` and `active` are left alone.
    pub fn apply_dto(&mut self, dto: ProductDto) {
        self.name = dto.name;
        self.description = dto.description;
        self.price = dto.price;
        self.stock_quantity = dto.stock_quantity;
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Client-facing payload for creating and updating products.
///
/// Field-level validation happens before this reaches the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock_quantity: u32,
}

impl ProductDto {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        stock_quantity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            stock_quantity,
        }
    }
}

// Lossy: id and active are server-controlled.
impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            stock_quantity: product.stock_quantity,
        }
    }
}
