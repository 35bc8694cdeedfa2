pub mod models;
pub mod render;

pub use models::{DispatchMode, RoutePlan, RoutePlanner};
pub use render::render_route_line;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RouteError {
    /// A successful response that carried no routes at all. Distinct from a
    /// plan with zero waypoints, which is a renderable route.
    #[error("No routes found for the given order ID.")]
    NoRoutes,

    /// Transport failure or a non-success status. The message comes from the
    /// response body when one is present, else a generic fallback.
    #[error("{0}")]
    Fetch(String),
}
