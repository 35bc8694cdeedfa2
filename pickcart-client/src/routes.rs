use crate::wire::RouteDto;
use crate::ApiClient;
use async_trait::async_trait;
use pickcart_route::{DispatchMode, RouteError, RoutePlan, RoutePlanner};
use tracing::info;

/// Fallback when a failed response carries no body text.
const FETCH_FALLBACK: &str = "Failed to fetch routes";

/// Fallback when the transport itself fails or the payload is undecodable.
const LOAD_FALLBACK: &str = "Error loading the routes.";

impl ApiClient {
    /// `GET /routes?orderId=..&collectInParallel=..` for a placed order.
    ///
    /// The order id must come from a prior successful placement; an unknown
    /// id is the server's to reject. Plans are returned verbatim, waypoints
    /// in server-given traversal order.
    pub async fn fetch_routes(
        &self,
        order_id: i64,
        mode: DispatchMode,
    ) -> Result<Vec<RoutePlan>, RouteError> {
        info!(
            "Fetching routes for order {} (parallel: {})",
            order_id,
            mode.collect_in_parallel()
        );

        let response = self
            .http()
            .get(self.url("/routes"))
            .query(&route_query(order_id, mode))
            .send()
            .await
            .map_err(|e| RouteError::Fetch(e.to_string()))?;

        let ok = response.status().is_success();
        let body = response
            .text()
            .await
            .map_err(|e| RouteError::Fetch(e.to_string()))?;

        classify_route_response(ok, &body)
    }
}

#[async_trait]
impl RoutePlanner for ApiClient {
    async fn fetch_routes(
        &self,
        order_id: i64,
        mode: DispatchMode,
    ) -> Result<Vec<RoutePlan>, RouteError> {
        ApiClient::fetch_routes(self, order_id, mode).await
    }
}

/// Query parameters for the route request. The dispatch mode collapses to
/// its wire boolean only here.
fn route_query(order_id: i64, mode: DispatchMode) -> [(&'static str, String); 2] {
    [
        ("orderId", order_id.to_string()),
        ("collectInParallel", mode.collect_in_parallel().to_string()),
    ]
}

/// Sort a settled `GET /routes` exchange into the route taxonomy.
///
/// A 2xx with an empty array is the semantic "no routes" outcome, kept
/// distinct from transport errors; a non-2xx surfaces its body text when it
/// has one.
fn classify_route_response(ok: bool, body: &str) -> Result<Vec<RoutePlan>, RouteError> {
    if !ok {
        let message = if body.is_empty() {
            FETCH_FALLBACK.to_string()
        } else {
            body.to_string()
        };
        return Err(RouteError::Fetch(message));
    }

    let routes: Vec<RouteDto> =
        serde_json::from_str(body).map_err(|_| RouteError::Fetch(LOAD_FALLBACK.to_string()))?;

    if routes.is_empty() {
        return Err(RouteError::NoRoutes);
    }

    Ok(routes.into_iter().map(RoutePlan::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pickcart_shared::GridLocation;

    #[test]
    fn test_single_mode_requests_parallel_false() {
        let query = route_query(42, DispatchMode::Single);
        assert_eq!(query[0], ("orderId", "42".to_string()));
        assert_eq!(query[1], ("collectInParallel", "false".to_string()));
    }

    #[test]
    fn test_parallel_mode_requests_parallel_true() {
        let query = route_query(42, DispatchMode::Parallel);
        assert_eq!(query[1], ("collectInParallel", "true".to_string()));
    }

    #[test]
    fn test_non_empty_response_is_returned_verbatim() {
        let body = r#"[{"routeName":"Bot-1","visitedLocations":[[0,0],[1,1]]}]"#;
        let plans = classify_route_response(true, body).unwrap();

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].route_name, "Bot-1");
        assert_eq!(
            plans[0].visited_locations,
            vec![GridLocation::new(0, 0), GridLocation::new(1, 1)]
        );
    }

    #[test]
    fn test_empty_array_is_no_routes_not_a_crash() {
        let result = classify_route_response(true, "[]");
        assert_eq!(result, Err(RouteError::NoRoutes));
        assert_eq!(
            RouteError::NoRoutes.to_string(),
            "No routes found for the given order ID."
        );
    }

    #[test]
    fn test_failed_response_surfaces_body_text() {
        let result = classify_route_response(false, "Order 42 not found");
        assert_eq!(result, Err(RouteError::Fetch("Order 42 not found".to_string())));
    }

    #[test]
    fn test_failed_response_without_body_gets_fallback() {
        let result = classify_route_response(false, "");
        assert_eq!(result, Err(RouteError::Fetch(FETCH_FALLBACK.to_string())));
    }

    #[test]
    fn test_undecodable_payload_is_fetch_error() {
        let result = classify_route_response(true, "not json");
        assert_eq!(result, Err(RouteError::Fetch(LOAD_FALLBACK.to_string())));
    }
}
