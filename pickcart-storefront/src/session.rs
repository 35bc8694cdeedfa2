use crate::order_flow::OrderFlow;
use crate::tracking::TrackingFlow;
use pickcart_order::OrderGateway;
use pickcart_route::RoutePlanner;
use std::sync::Arc;

/// One customer's storefront session: the order form first, bot tracking
/// after a successful placement.
///
/// The order identifier flows one way, from the order flow into a fresh
/// tracking flow. Each successful placement replaces the tracking flow
/// wholesale, so an identifier is never reused across distinct orders.
pub struct Session {
    order: OrderFlow,
    planner: Arc<dyn RoutePlanner>,
    tracking: Option<TrackingFlow>,
}

impl Session {
    pub fn new(gateway: Arc<dyn OrderGateway>, planner: Arc<dyn RoutePlanner>) -> Self {
        Self {
            order: OrderFlow::new(gateway),
            planner,
            tracking: None,
        }
    }

    pub fn order(&self) -> &OrderFlow {
        &self.order
    }

    pub fn order_mut(&mut self) -> &mut OrderFlow {
        &mut self.order
    }

    /// Submit the current selection; on success, open tracking for the new
    /// order id.
    pub async fn submit_order(&mut self) -> bool {
        let placed = self.order.submit().await;

        if placed {
            if let Some(order_id) = self.order.order_id() {
                self.tracking = Some(TrackingFlow::new(Arc::clone(&self.planner), order_id));
            }
        }

        placed
    }

    /// The tracking panel, present only after a successful placement.
    pub fn tracking(&self) -> Option<&TrackingFlow> {
        self.tracking.as_ref()
    }

    pub fn tracking_mut(&mut self) -> Option<&mut TrackingFlow> {
        self.tracking.as_mut()
    }
}
