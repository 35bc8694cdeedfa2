use pickcart_route::render::render_route_line;
use pickcart_route::{DispatchMode, RouteError, RoutePlan, RoutePlanner};
use std::sync::Arc;
use tracing::info;

/// State behind the bot-tracking panel for one placed order.
///
/// Route responses are request-scoped: each fetch replaces whatever was
/// shown before, and a response is applied only if it belongs to the most
/// recently issued request. An overlapping older request that resolves late
/// is discarded silently, so the panel never flickers back to stale plans.
pub struct TrackingFlow {
    planner: Arc<dyn RoutePlanner>,
    order_id: i64,
    issued: u64,
    applied: u64,
    routes: Option<Vec<RoutePlan>>,
    error: Option<RouteError>,
}

impl TrackingFlow {
    pub fn new(planner: Arc<dyn RoutePlanner>, order_id: i64) -> Self {
        Self {
            planner,
            order_id,
            issued: 0,
            applied: 0,
            routes: None,
            error: None,
        }
    }

    pub fn order_id(&self) -> i64 {
        self.order_id
    }

    /// True while the latest issued request has not settled; the collect
    /// controls stay disabled meanwhile.
    pub fn is_loading(&self) -> bool {
        self.applied < self.issued
    }

    /// Stamp a new request and clear the displayed outcome. The returned
    /// token must be handed back to [`apply`](Self::apply) with the
    /// response it belongs to.
    pub fn begin_request(&mut self) -> u64 {
        self.issued += 1;
        self.routes = None;
        self.error = None;
        self.issued
    }

    /// Apply a settled response. Returns false (and changes nothing) when a
    /// newer request has been issued since `token` was stamped.
    pub fn apply(
        &mut self,
        token: u64,
        outcome: Result<Vec<RoutePlan>, RouteError>,
    ) -> bool {
        if token != self.issued {
            info!("Discarding stale route response for order {}", self.order_id);
            return false;
        }

        self.applied = token;
        match outcome {
            Ok(plans) => self.routes = Some(plans),
            Err(error) => self.error = Some(error),
        }
        true
    }

    /// Request routes in the given dispatch mode and apply the outcome.
    pub async fn collect(&mut self, mode: DispatchMode) {
        let token = self.begin_request();
        let outcome = self.planner.fetch_routes(self.order_id, mode).await;
        self.apply(token, outcome);
    }

    pub fn routes(&self) -> Option<&[RoutePlan]> {
        self.routes.as_deref()
    }

    pub fn error(&self) -> Option<&RouteError> {
        self.error.as_ref()
    }

    /// Display lines for the current plans, one per route, in server order.
    pub fn route_lines(&self) -> Vec<String> {
        match &self.routes {
            Some(plans) => plans
                .iter()
                .enumerate()
                .map(|(index, plan)| render_route_line(plan, index))
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pickcart_shared::GridLocation;

    struct FixedPlanner {
        outcome: Result<Vec<RoutePlan>, RouteError>,
    }

    #[async_trait]
    impl RoutePlanner for FixedPlanner {
        async fn fetch_routes(
            &self,
            _order_id: i64,
            _mode: DispatchMode,
        ) -> Result<Vec<RoutePlan>, RouteError> {
            self.outcome.clone()
        }
    }

    fn planner(outcome: Result<Vec<RoutePlan>, RouteError>) -> Arc<dyn RoutePlanner> {
        Arc::new(FixedPlanner { outcome })
    }

    fn bot_route() -> RoutePlan {
        RoutePlan {
            route_name: "Bot-1".to_string(),
            visited_locations: vec![GridLocation::new(0, 0), GridLocation::new(1, 1)],
        }
    }

    #[tokio::test]
    async fn test_collect_renders_route_lines() {
        let mut flow = TrackingFlow::new(planner(Ok(vec![bot_route()])), 42);

        flow.collect(DispatchMode::Single).await;

        assert_eq!(
            flow.route_lines(),
            vec!["Route for Bot-1: (0, 0) ➡️ (1, 1)".to_string()]
        );
        assert!(flow.error().is_none());
        assert!(!flow.is_loading());
    }

    #[tokio::test]
    async fn test_no_routes_surfaces_message_not_blank_screen() {
        let mut flow = TrackingFlow::new(planner(Err(RouteError::NoRoutes)), 42);

        flow.collect(DispatchMode::Parallel).await;

        assert!(flow.routes().is_none());
        assert_eq!(
            flow.error().unwrap().to_string(),
            "No routes found for the given order ID."
        );
        assert!(!flow.is_loading());
    }

    #[tokio::test]
    async fn test_fetch_error_carries_body_message() {
        let mut flow = TrackingFlow::new(
            planner(Err(RouteError::Fetch("Order 42 not found".to_string()))),
            42,
        );

        flow.collect(DispatchMode::Single).await;

        assert_eq!(flow.error().unwrap().to_string(), "Order 42 not found");
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut flow = TrackingFlow::new(planner(Err(RouteError::NoRoutes)), 42);

        let first = flow.begin_request();
        let second = flow.begin_request();

        // The newer request settles first.
        assert!(flow.apply(second, Ok(vec![bot_route()])));
        assert_eq!(flow.route_lines().len(), 1);

        // The older one resolves late and must change nothing.
        assert!(!flow.apply(first, Err(RouteError::NoRoutes)));
        assert_eq!(flow.route_lines().len(), 1);
        assert!(flow.error().is_none());
    }

    #[test]
    fn test_loading_until_latest_applies() {
        let mut flow = TrackingFlow::new(planner(Err(RouteError::NoRoutes)), 42);

        let first = flow.begin_request();
        let second = flow.begin_request();
        assert!(flow.is_loading());

        // A stale settle does not end the loading state.
        flow.apply(first, Err(RouteError::NoRoutes));
        assert!(flow.is_loading());

        flow.apply(second, Ok(vec![bot_route()]));
        assert!(!flow.is_loading());
    }

    #[test]
    fn test_new_request_clears_previous_outcome() {
        let mut flow = TrackingFlow::new(planner(Err(RouteError::NoRoutes)), 42);

        let token = flow.begin_request();
        flow.apply(token, Ok(vec![bot_route()]));
        assert!(flow.routes().is_some());

        flow.begin_request();
        assert!(flow.routes().is_none());
        assert!(flow.error().is_none());
    }
}
