use crate::models::{OrderItem, OrderResult};
use crate::selection::QuantitySelection;
use crate::OrderError;
use async_trait::async_trait;

/// Submission access to the order collaborator.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submit already-normalized order lines.
    ///
    /// A business rejection (insufficient stock) is an `Ok` value carrying
    /// [`OrderResult::Failure`]; `Err` is reserved for transport-level
    /// problems.
    async fn place_order(&self, items: &[OrderItem]) -> Result<OrderResult, OrderError>;
}

/// Normalize a selection and submit it.
///
/// An empty normalized selection short-circuits with
/// [`OrderError::Empty`] and never reaches the gateway.
pub async fn submit_order(
    gateway: &dyn OrderGateway,
    selection: &QuantitySelection,
) -> Result<OrderResult, OrderError> {
    let items = selection.normalized_items()?;
    gateway.place_order(&items).await
}
