use pickcart_order::{submit_order, OrderError, OrderGateway, OrderResult, QuantitySelection};
use std::sync::Arc;
use tracing::info;

/// State behind the order form: the editable quantity selection, the
/// in-flight flag that disables the submit control, and the terminal outcome
/// of the last submission.
///
/// The selection is cleared only on a successful placement; a business
/// rejection or a network error leaves it intact so the user can correct
/// and resubmit.
pub struct OrderFlow {
    gateway: Arc<dyn OrderGateway>,
    selection: QuantitySelection,
    in_flight: bool,
    last_result: Option<OrderResult>,
    last_error: Option<OrderError>,
}

impl OrderFlow {
    pub fn new(gateway: Arc<dyn OrderGateway>) -> Self {
        Self {
            gateway,
            selection: QuantitySelection::new(),
            in_flight: false,
            last_result: None,
            last_error: None,
        }
    }

    /// Record the quantity typed for a product. Last write wins.
    pub fn set_quantity(&mut self, product_id: i64, quantity: u32) {
        self.selection.set_quantity(product_id, quantity);
    }

    pub fn selection(&self) -> &QuantitySelection {
        &self.selection
    }

    /// True while a submission is outstanding; the submit control stays
    /// disabled meanwhile. Cooperative guard, not a lock.
    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Submit the current selection. Returns true only when the order was
    /// placed. Every path ends in a terminal, renderable state and clears
    /// the in-flight flag.
    pub async fn submit(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.last_result = None;
        self.last_error = None;

        let placed = match submit_order(self.gateway.as_ref(), &self.selection).await {
            Ok(result) => {
                let placed = result.is_success();
                if placed {
                    info!("Order {} placed", result.order_id().unwrap_or_default());
                    self.selection.clear();
                }
                self.last_result = Some(result);
                placed
            }
            Err(error) => {
                self.last_error = Some(error);
                false
            }
        };

        self.in_flight = false;
        placed
    }

    /// Identifier of the last successfully placed order.
    pub fn order_id(&self) -> Option<i64> {
        self.last_result.as_ref().and_then(OrderResult::order_id)
    }

    pub fn last_result(&self) -> Option<&OrderResult> {
        self.last_result.as_ref()
    }

    pub fn last_error(&self) -> Option<&OrderError> {
        self.last_error.as_ref()
    }

    /// Shortfall lines of the last business rejection, one per missing item,
    /// in server-given order.
    pub fn shortfall_lines(&self) -> Vec<String> {
        match &self.last_result {
            Some(OrderResult::Failure { missing_items, .. }) => {
                missing_items.iter().map(|item| item.to_string()).collect()
            }
            _ => Vec::new(),
        }
    }
}
