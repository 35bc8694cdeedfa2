pub mod gateway;
pub mod models;
pub mod selection;

pub use gateway::{submit_order, OrderGateway};
pub use models::{MissingItem, OrderItem, OrderResult};
pub use selection::QuantitySelection;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum OrderError {
    /// Raised locally, before any network call, when the normalized
    /// selection contains no items.
    #[error("Order must contain at least one item.")]
    Empty,

    /// Transport failure, unexpected status, or an error body that is not a
    /// recognizable order failure. Never conflated with a business
    /// rejection, which arrives as [`models::OrderResult::Failure`].
    #[error("Network error. Please try again.")]
    Network { detail: String },
}
