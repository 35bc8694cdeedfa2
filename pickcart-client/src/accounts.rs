//! Account collaborator: login and registration form posts. External to the
//! core protocol; carried so the error taxonomy stays aligned with the
//! field-keyed bodies the rest of the client speaks.

use crate::catalog::classify_form_response;
use crate::ApiClient;
use pickcart_catalog::FormError;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration form as posted by the sign-up page. The admin code travels
/// only when the admin role is requested.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub username: String,
    pub password: String,
    pub matching_password: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_code: Option<String>,
}

impl ApiClient {
    /// `POST /api/auth/login`.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), FormError> {
        info!("Logging in '{}'", credentials.username);
        self.post_form("/api/auth/login", credentials).await
    }

    /// `POST /api/auth/registration`.
    pub async fn register(&self, form: &RegistrationForm) -> Result<(), FormError> {
        info!("Registering '{}'", form.username);
        self.post_form("/api/auth/registration", form).await
    }

    async fn post_form<T: Serialize + Sync>(&self, path: &str, form: &T) -> Result<(), FormError> {
        let response = self
            .http()
            .post(self.url(path))
            .json(form)
            .send()
            .await
            .map_err(|e| FormError::Network {
                detail: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| FormError::Network {
            detail: e.to_string(),
        })?;
        classify_form_response(status, &body)
    }
}
