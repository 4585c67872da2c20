use gloo::net::http::Request;
use shared::auth::{describe_identity_error, IdentityErrorBody, SignInRequest, SignInResponse};
use shared::{AuthConfig, AuthError};

/// Client for the hosted identity provider's password sign-in
#[derive(Clone, PartialEq)]
pub struct IdentityClient {
    config: AuthConfig,
}

impl IdentityClient {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub async fn sign_in_with_password(&self, request: &SignInRequest) -> Result<SignInResponse, AuthError> {
        let response = Request::post(&self.config.sign_in_url())
            .json(request)
            .map_err(|e| AuthError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if response.ok() {
            return response
                .json::<SignInResponse>()
                .await
                .map_err(|e| AuthError::Decode(e.to_string()));
        }

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        match serde_json::from_str::<IdentityErrorBody>(&text) {
            Ok(body) => Err(AuthError::Rejected(describe_identity_error(&body.error.message))),
            Err(_) => Err(AuthError::Decode(format!("status {}", status))),
        }
    }
}
