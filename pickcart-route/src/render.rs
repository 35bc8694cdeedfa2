use crate::models::RoutePlan;

/// Marker shown for a plan that visits no locations. Never an empty string,
/// so a zero-waypoint route stays visible in the listing.
pub const NO_LOCATIONS_MARKER: &str = "❌ No locations found.";

/// Display label for the plan at `index` (0-based): the server-given name,
/// or a 1-based positional fallback when the name is absent.
pub fn route_label(plan: &RoutePlan, index: usize) -> String {
    if plan.route_name.is_empty() {
        format!("Route {}", index + 1)
    } else {
        plan.route_name.clone()
    }
}

/// Waypoints joined in visiting order, e.g. `(0, 0) ➡️ (1, 1)`.
pub fn format_waypoints(plan: &RoutePlan) -> String {
    if plan.visited_locations.is_empty() {
        return NO_LOCATIONS_MARKER.to_string();
    }

    plan.visited_locations
        .iter()
        .map(|location| location.to_string())
        .collect::<Vec<_>>()
        .join(" ➡️ ")
}

/// Full display line for one plan.
pub fn render_route_line(plan: &RoutePlan, index: usize) -> String {
    format!("Route for {}: {}", route_label(plan, index), format_waypoints(plan))
}
