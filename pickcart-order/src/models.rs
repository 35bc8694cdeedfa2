use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of an order request: a product and the quantity to pick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: i64,
    pub quantity: u32,
}

/// Shortfall detail for one rejected line: the requested quantity exceeded
/// what the warehouse holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MissingItem {
    pub product_name: String,
    pub requested: u32,
    pub available: u32,
}

impl fmt::Display for MissingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} — requested: {}, available: {}",
            self.product_name, self.requested, self.available
        )
    }
}

/// Terminal outcome of a submitted order.
///
/// Tagged by the wire `status` field so consumers branch on the variant,
/// never on field presence. `Failure` is a business outcome delivered over a
/// successful transport; it is not an error in the `Result` sense.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status")]
pub enum OrderResult {
    #[serde(rename = "SUCCESS", rename_all = "camelCase")]
    Success { order_id: i64, message: String },

    #[serde(rename = "FAIL", rename_all = "camelCase")]
    Failure {
        message: String,
        /// May be empty even on failure (generic rejection).
        #[serde(default)]
        missing_items: Vec<MissingItem>,
    },
}

impl OrderResult {
    pub fn is_success(&self) -> bool {
        matches!(self, OrderResult::Success { .. })
    }

    /// The placed order's identifier, when there is one.
    pub fn order_id(&self) -> Option<i64> {
        match self {
            OrderResult::Success { order_id, .. } => Some(*order_id),
            OrderResult::Failure { .. } => None,
        }
    }
}
