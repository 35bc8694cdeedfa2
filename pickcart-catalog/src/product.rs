use async_trait::async_trait;
use pickcart_shared::GridLocation;
use serde::{Deserialize, Serialize};

/// A catalog entry as served by the warehouse.
///
/// The id is server-assigned and immutable. Grid locations are unique across
/// the catalog; the server enforces this and the client only surfaces the
/// resulting conflict error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub location: GridLocation,
}

/// A product without its id: the transient edit buffer submitted to the
/// create and update endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub location: GridLocation,
}

/// Read access to the live catalog.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch the full current catalog. Server order is preserved; an empty
    /// list is a valid success, distinct from any error. Safe to re-invoke.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Transport failure or a non-success status while loading the catalog.
    #[error("Failed to load products.")]
    Unavailable { detail: String },

    /// A success status whose body did not decode as a product list.
    #[error("Received an unreadable product list.")]
    Malformed { detail: String },
}
