use pickcart_catalog::forms::fields;
use pickcart_catalog::{CatalogEditor, FieldErrors, FormError, ProductDraft};
use std::sync::Arc;

/// State behind the staff product-management forms.
///
/// After each mutation the form shows either a success line or the server's
/// field-keyed messages; both live in the same map, keyed the way the
/// collaborator keys them, so the form fields can pick out their own errors.
pub struct ProductFormFlow {
    editor: Arc<dyn CatalogEditor>,
    message: FieldErrors,
    is_error: bool,
}

impl ProductFormFlow {
    pub fn new(editor: Arc<dyn CatalogEditor>) -> Self {
        Self {
            editor,
            message: FieldErrors::new(),
            is_error: false,
        }
    }

    pub async fn create(&mut self, draft: &ProductDraft) -> bool {
        let outcome = self.editor.create_product(draft).await;
        self.settle(outcome, "Successfully created product!".to_string())
    }

    pub async fn update(&mut self, id: i64, draft: &ProductDraft) -> bool {
        let outcome = self.editor.update_product(id, draft).await;
        self.settle(outcome, "Successfully updated product!".to_string())
    }

    pub async fn delete(&mut self, id: i64) -> bool {
        let outcome = self.editor.delete_product(id).await;
        self.settle(
            outcome,
            format!("Successfully deleted product with ID: {id}"),
        )
    }

    pub fn message(&self) -> &FieldErrors {
        &self.message
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    fn settle(&mut self, outcome: Result<(), FormError>, success: String) -> bool {
        self.message.clear();
        match outcome {
            Ok(()) => {
                self.message.insert(fields::SUCCESS.to_string(), success);
                self.is_error = false;
                true
            }
            Err(FormError::Rejected(errors)) => {
                self.message = errors;
                self.is_error = true;
                false
            }
            Err(error @ (FormError::NotFound | FormError::Network { .. })) => {
                self.message
                    .insert(fields::GENERAL.to_string(), error.to_string());
                self.is_error = true;
                false
            }
        }
    }
}
