use crate::ApiClient;
use async_trait::async_trait;
use pickcart_catalog::{
    CatalogEditor, CatalogError, CatalogProvider, FieldErrors, FormError, Product, ProductDraft,
};
use tracing::{info, warn};

impl ApiClient {
    /// `GET /products`: the full current catalog, server order preserved.
    /// An empty catalog is a valid success.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .http()
            .get(self.url("/products"))
            .send()
            .await
            .map_err(|e| CatalogError::Unavailable {
                detail: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            warn!("Catalog fetch rejected with status {}", status);
            return Err(CatalogError::Unavailable {
                detail: format!("status {status}"),
            });
        }

        response
            .json::<Vec<Product>>()
            .await
            .map_err(|e| CatalogError::Malformed {
                detail: e.to_string(),
            })
    }

    /// `POST /products`.
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<(), FormError> {
        info!("Creating product '{}'", draft.name);
        let response = self
            .http()
            .post(self.url("/products"))
            .json(draft)
            .send()
            .await
            .map_err(network)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(network)?;
        classify_form_response(status, &body)
    }

    /// `PUT /products/{id}`.
    pub async fn update_product(&self, id: i64, draft: &ProductDraft) -> Result<(), FormError> {
        info!("Updating product {}", id);
        let response = self
            .http()
            .put(self.url(&format!("/products/{id}")))
            .json(draft)
            .send()
            .await
            .map_err(network)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(network)?;
        classify_form_response(status, &body)
    }

    /// `DELETE /products/{id}`.
    pub async fn delete_product(&self, id: i64) -> Result<(), FormError> {
        info!("Deleting product {}", id);
        let response = self
            .http()
            .delete(self.url(&format!("/products/{id}")))
            .send()
            .await
            .map_err(network)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(network)?;
        classify_form_response(status, &body)
    }
}

#[async_trait]
impl CatalogProvider for ApiClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        ApiClient::fetch_products(self).await
    }
}

#[async_trait]
impl CatalogEditor for ApiClient {
    async fn create_product(&self, draft: &ProductDraft) -> Result<(), FormError> {
        ApiClient::create_product(self, draft).await
    }

    async fn update_product(&self, id: i64, draft: &ProductDraft) -> Result<(), FormError> {
        ApiClient::update_product(self, id, draft).await
    }

    async fn delete_product(&self, id: i64) -> Result<(), FormError> {
        ApiClient::delete_product(self, id).await
    }
}

fn network(e: reqwest::Error) -> FormError {
    FormError::Network {
        detail: e.to_string(),
    }
}

/// Sort a settled form post into the form taxonomy. Rejections carry the
/// server's field-keyed messages verbatim; an unreadable error body is a
/// network error, not an empty rejection.
pub(crate) fn classify_form_response(status: u16, body: &str) -> Result<(), FormError> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    if status == 404 {
        return Err(FormError::NotFound);
    }

    match serde_json::from_str::<FieldErrors>(body) {
        Ok(errors) => Err(FormError::Rejected(errors)),
        Err(_) => Err(FormError::Network {
            detail: format!("status {status}: {body}"),
        }),
    }
}
