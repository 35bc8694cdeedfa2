use pickcart_catalog::{CatalogError, CatalogProvider, Product};
use std::sync::Arc;

/// Read-only product listing backing the order form.
///
/// Holds the latest snapshot only; refreshing replaces it wholesale. An
/// empty catalog is a valid loaded state, distinct from a load error.
pub struct CatalogView {
    provider: Arc<dyn CatalogProvider>,
    products: Vec<Product>,
    error: Option<CatalogError>,
    loaded: bool,
}

impl CatalogView {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self {
            provider,
            products: Vec::new(),
            error: None,
            loaded: false,
        }
    }

    /// Fetch the current catalog. Safe to call again at any time; a failed
    /// refresh keeps the previous snapshot but surfaces the error.
    pub async fn refresh(&mut self) -> bool {
        match self.provider.fetch_products().await {
            Ok(products) => {
                self.products = products;
                self.error = None;
                self.loaded = true;
                true
            }
            Err(error) => {
                self.error = Some(error);
                false
            }
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn error(&self) -> Option<&CatalogError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pickcart_shared::GridLocation;

    struct FixedProvider {
        outcome: Result<Vec<Product>, CatalogError>,
    }

    #[async_trait]
    impl CatalogProvider for FixedProvider {
        async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
            self.outcome.clone()
        }
    }

    fn milk() -> Product {
        Product {
            id: 1,
            name: "Milk".to_string(),
            quantity: 2,
            price: 1.5,
            location: GridLocation::new(0, 0),
        }
    }

    #[tokio::test]
    async fn test_refresh_replaces_snapshot() {
        let mut view = CatalogView::new(Arc::new(FixedProvider {
            outcome: Ok(vec![milk()]),
        }));

        assert!(view.refresh().await);
        assert_eq!(view.products().len(), 1);
        assert!(view.is_loaded());
        assert!(view.error().is_none());
    }

    #[tokio::test]
    async fn test_empty_catalog_is_a_valid_load() {
        let mut view = CatalogView::new(Arc::new(FixedProvider { outcome: Ok(vec![]) }));

        assert!(view.refresh().await);
        assert!(view.products().is_empty());
        assert!(view.is_loaded());
        assert!(view.error().is_none());
    }

    #[tokio::test]
    async fn test_failed_refresh_surfaces_error() {
        let mut view = CatalogView::new(Arc::new(FixedProvider {
            outcome: Err(CatalogError::Unavailable {
                detail: "status 500".to_string(),
            }),
        }));

        assert!(!view.refresh().await);
        assert!(!view.is_loaded());
        assert_eq!(view.error().unwrap().to_string(), "Failed to load products.");
    }
}
