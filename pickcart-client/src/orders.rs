use crate::wire::OrderRequest;
use crate::ApiClient;
use async_trait::async_trait;
use pickcart_order::{OrderError, OrderGateway, OrderItem, OrderResult};
use tracing::{info, warn};

impl ApiClient {
    /// `POST /orders` with already-normalized lines.
    ///
    /// A rejected order with a recognizable failure body comes back as
    /// `Ok(OrderResult::Failure)`; everything else non-2xx is a network
    /// error. Callers are expected to guard against double submission
    /// themselves (a busy flag), not this client.
    pub async fn place_order(&self, items: &[OrderItem]) -> Result<OrderResult, OrderError> {
        info!("Submitting order with {} item(s)", items.len());

        let response = self
            .http()
            .post(self.url("/orders"))
            .json(&OrderRequest { items })
            .send()
            .await
            .map_err(|e| OrderError::Network {
                detail: e.to_string(),
            })?;

        let ok = response.status().is_success();
        let body = response.text().await.map_err(|e| OrderError::Network {
            detail: e.to_string(),
        })?;

        let result = classify_order_response(ok, &body);
        if let Err(OrderError::Network { detail }) = &result {
            warn!("Order submission failed: {}", detail);
        }
        result
    }
}

#[async_trait]
impl OrderGateway for ApiClient {
    async fn place_order(&self, items: &[OrderItem]) -> Result<OrderResult, OrderError> {
        ApiClient::place_order(self, items).await
    }
}

/// Sort a settled `POST /orders` exchange into the order taxonomy.
///
/// - 2xx with a tagged body is a terminal result, either variant.
/// - non-2xx with a FAIL-tagged body is a business rejection, not an error.
/// - anything else (unstructured body, SUCCESS tag on an error status,
///   undecodable JSON) is a network error.
fn classify_order_response(ok: bool, body: &str) -> Result<OrderResult, OrderError> {
    match serde_json::from_str::<OrderResult>(body) {
        Ok(result) if ok => Ok(result),
        Ok(result @ OrderResult::Failure { .. }) => Ok(result),
        Ok(OrderResult::Success { .. }) => Err(OrderError::Network {
            detail: "success payload on an error status".to_string(),
        }),
        Err(e) => Err(OrderError::Network {
            detail: format!("unrecognized order response: {e}"),
        }),
    }
}
