use crate::product::ProductDraft;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Field-keyed messages returned by the catalog and account collaborators
/// when a form post is rejected.
pub type FieldErrors = BTreeMap<String, String>;

/// Field names the collaborators are known to key their messages under.
pub mod fields {
    pub const NAME: &str = "name";
    pub const QUANTITY: &str = "quantity";
    pub const PRICE: &str = "price";
    pub const LOCATION: &str = "location";
    pub const LOCATION_OCCUPIED: &str = "locationOccupied";
    pub const AUTHENTICATION: &str = "authentication";

    /// Keys the client itself fills in, never the server.
    pub const GENERAL: &str = "general";
    pub const SUCCESS: &str = "success";
}

/// Mutation access to the catalog collaborator.
///
/// These calls carry no retry, no caching, and no client-side validation;
/// the server owns all catalog rules, including grid-cell occupancy.
#[async_trait]
pub trait CatalogEditor: Send + Sync {
    async fn create_product(&self, draft: &ProductDraft) -> Result<(), FormError>;

    async fn update_product(&self, id: i64, draft: &ProductDraft) -> Result<(), FormError>;

    async fn delete_product(&self, id: i64) -> Result<(), FormError>;
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    /// The server rejected the form with messages keyed by field name.
    #[error("Form rejected by the server.")]
    Rejected(FieldErrors),

    /// The target product no longer exists.
    #[error("Product not found.")]
    NotFound,

    /// Transport failure or an unreadable error body.
    #[error("Network error. Please try again.")]
    Network { detail: String },
}
