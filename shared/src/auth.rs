//! Email/password sign-in against the hosted identity provider.
//!
//! The provider keeps the session; this side only validates the form,
//! shapes the sign-in call and turns provider error codes into text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful ✅";
pub const DEFAULT_IDENTITY_ENDPOINT: &str = "https://identitytoolkit.googleapis.com";

fn default_identity_endpoint() -> String {
    DEFAULT_IDENTITY_ENDPOINT.to_string()
}

/// Authentication project the login page signs in against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    pub api_key: String,
    #[serde(default)]
    pub auth_domain: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default = "default_identity_endpoint")]
    pub identity_endpoint: String,
}

impl AuthConfig {
    pub fn sign_in_url(&self) -> String {
        format!(
            "{}/v1/accounts:signInWithPassword?key={}",
            self.identity_endpoint.trim_end_matches('/'),
            self.api_key
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Email is required")]
    MissingEmail,
    #[error("Password is required")]
    MissingPassword,
    #[error("Sign-in is not configured for this page")]
    NotConfigured,
    /// The provider answered and refused the credentials
    #[error("{0}")]
    Rejected(String),
    #[error("Could not encode sign-in request: {0}")]
    Serialize(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response from sign-in service: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<SignInRequest, AuthError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(AuthError::MissingEmail);
        }
        if self.password.is_empty() {
            return Err(AuthError::MissingPassword);
        }
        Ok(SignInRequest {
            email: email.to_string(),
            password: self.password.clone(),
            return_secure_token: true,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    pub return_secure_token: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub local_id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub id_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdentityErrorBody {
    pub error: IdentityErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdentityErrorDetail {
    #[serde(default)]
    pub code: u16,
    pub message: String,
}

/// Human text for a provider error message.
///
/// Messages look like `CODE` or `CODE : extra detail`.
pub fn describe_identity_error(message: &str) -> String {
    let (code, detail) = match message.split_once(" : ") {
        Some((code, detail)) => (code.trim(), Some(detail.trim())),
        None => (message.trim(), None),
    };
    let text = match code {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            "Invalid email or password."
        }
        "INVALID_EMAIL" => "The email address is badly formatted.",
        "USER_DISABLED" => "This account has been disabled.",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "Too many failed attempts. Please try again later.",
        "MISSING_PASSWORD" => "Password is required.",
        _ => return detail.map_or_else(|| code.to_string(), |d| format!("{code}: {d}")),
    };
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AuthConfig {
        serde_json::from_str(r#"{"api_key": "key-123", "project_id": "finance"}"#).unwrap()
    }

    #[test]
    fn test_config_defaults_endpoint() {
        let config = config();
        assert_eq!(config.identity_endpoint, DEFAULT_IDENTITY_ENDPOINT);
        assert_eq!(
            config.sign_in_url(),
            "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key=key-123"
        );
    }

    #[test]
    fn test_custom_endpoint_trailing_slash() {
        let mut config = config();
        config.identity_endpoint = "http://localhost:9099/identitytoolkit.googleapis.com/".to_string();
        assert_eq!(
            config.sign_in_url(),
            "http://localhost:9099/identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key=key-123"
        );
    }

    #[test]
    fn test_form_requires_both_fields() {
        let form = LoginForm { email: " ".to_string(), password: "secret".to_string() };
        assert_eq!(form.validate(), Err(AuthError::MissingEmail));

        let form = LoginForm { email: "a@b.co".to_string(), password: String::new() };
        assert_eq!(form.validate(), Err(AuthError::MissingPassword));
    }

    #[test]
    fn test_sign_in_request_wire_format() {
        let form = LoginForm { email: " a@b.co ".to_string(), password: "secret".to_string() };
        let json = serde_json::to_value(form.validate().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "a@b.co", "password": "secret", "returnSecureToken": true})
        );
    }

    #[test]
    fn test_error_body_decoding() {
        let body: IdentityErrorBody = serde_json::from_str(
            r#"{"error": {"code": 400, "message": "INVALID_LOGIN_CREDENTIALS", "errors": []}}"#,
        )
        .unwrap();
        assert_eq!(body.error.code, 400);
        assert_eq!(describe_identity_error(&body.error.message), "Invalid email or password.");
    }

    #[test]
    fn test_describe_unknown_and_detailed_codes() {
        assert_eq!(
            describe_identity_error("TOO_MANY_ATTEMPTS_TRY_LATER : Access disabled"),
            "Too many failed attempts. Please try again later."
        );
        assert_eq!(describe_identity_error("OPERATION_NOT_ALLOWED"), "OPERATION_NOT_ALLOWED");
        assert_eq!(
            describe_identity_error("WEAK_PASSWORD : Password should be at least 6 characters"),
            "WEAK_PASSWORD: Password should be at least 6 characters"
        );
    }

    #[test]
    fn test_encoding_failure_is_not_reported_as_network() {
        let err = AuthError::Serialize("key must be a string".to_string());
        assert_eq!(err.to_string(), "Could not encode sign-in request: key must be a string");
        assert_ne!(err, AuthError::Network("key must be a string".to_string()));
    }
}
