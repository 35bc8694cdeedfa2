use crate::RouteError;
use async_trait::async_trait;
use pickcart_shared::GridLocation;

/// How pickbots divide the collection work for one order.
///
/// Kept as a two-value enum internally; the wire boolean exists only at the
/// query-string boundary so call sites cannot invert it by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    /// One bot visits every item location in sequence.
    Single,
    /// The work is partitioned across multiple bots.
    Parallel,
}

impl DispatchMode {
    /// Wire encoding of the mode: the `collectInParallel` query flag.
    pub fn collect_in_parallel(self) -> bool {
        matches!(self, DispatchMode::Parallel)
    }
}

/// One bot's path for an order: a display name and the grid cells it visits,
/// in traversal order.
///
/// The waypoint sequence is server-given and must never be reordered or
/// deduplicated. An empty sequence is a legal plan (the bot visits nothing)
/// and renders as its own marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePlan {
    /// May be empty; rendering then falls back to a positional label.
    pub route_name: String,
    pub visited_locations: Vec<GridLocation>,
}

/// Route-plan access to the routing collaborator.
#[async_trait]
pub trait RoutePlanner: Send + Sync {
    /// Request plans for a placed order. The id is not validated here; an
    /// unknown id is rejected by the collaborator and surfaced as an error.
    /// Repeat calls may yield different plans if the server recomputes.
    async fn fetch_routes(
        &self,
        order_id: i64,
        mode: DispatchMode,
    ) -> Result<Vec<RoutePlan>, RouteError>;
}
