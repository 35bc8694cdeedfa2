//! Wire DTOs: the shapes the server actually speaks, kept out of the domain
//! crates. camelCase renames and the pair-encoded grid cells live here only.

use pickcart_order::OrderItem;
use pickcart_route::RoutePlan;
use pickcart_shared::GridLocation;
use serde::{Deserialize, Serialize};

/// Body of `POST /orders`.
#[derive(Debug, Serialize)]
pub(crate) struct OrderRequest<'a> {
    pub items: &'a [OrderItem],
}

/// One element of the `GET /routes` response array. Locations arrive as
/// `[x, y]` pairs here, unlike the product contract's `{x, y}` objects.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RouteDto {
    #[serde(default)]
    pub route_name: String,
    #[serde(default)]
    pub visited_locations: Vec<[i32; 2]>,
}

impl From<RouteDto> for RoutePlan {
    fn from(dto: RouteDto) -> Self {
        RoutePlan {
            route_name: dto.route_name,
            visited_locations: dto
                .visited_locations
                .into_iter()
                .map(GridLocation::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_request_wire_shape() {
        let items = vec![OrderItem {
            product_id: 1,
            quantity: 3,
        }];
        let json = serde_json::to_value(OrderRequest { items: &items }).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"items": [{"productId": 1, "quantity": 3}]})
        );
    }

    #[test]
    fn test_route_dto_decodes_pair_locations() {
        let body = r#"{"routeName":"Bot-1","visitedLocations":[[0,0],[1,1]]}"#;
        let plan: RoutePlan = serde_json::from_str::<RouteDto>(body).unwrap().into();

        assert_eq!(plan.route_name, "Bot-1");
        assert_eq!(
            plan.visited_locations,
            vec![GridLocation::new(0, 0), GridLocation::new(1, 1)]
        );
    }

    #[test]
    fn test_route_dto_tolerates_missing_name() {
        let body = r#"{"visitedLocations":[]}"#;
        let plan: RoutePlan = serde_json::from_str::<RouteDto>(body).unwrap().into();

        assert!(plan.route_name.is_empty());
        assert!(plan.visited_locations.is_empty());
    }
}
