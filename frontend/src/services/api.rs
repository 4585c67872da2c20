use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::config::join_url;
use shared::{
    AddTransactionRequest, AddTransactionResponse, ApiError, CategoriesResponse, CreatePayeeRequest,
    CreatePayeeResponse, ManageSubcategoryOutcome, ManageSubcategoryRequest, ManageSubcategoryResponse, PayeeId,
    SetPayeeRequest, TransactionId,
};

/// API client for communicating with the finance backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client that talks to the hosting origin
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Add or delete a subcategory.
    ///
    /// Rejections come back with a non-2xx status and a normal body, so the
    /// status is returned alongside the decoded message.
    pub async fn manage_subcategory(
        &self,
        request: &ManageSubcategoryRequest,
    ) -> Result<ManageSubcategoryOutcome, ApiError> {
        let response = Request::post(&self.url("/api/manage-subcategory"))
            .header("Accept", "application/json")
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let accepted = response.ok();
        let body = read_json::<ManageSubcategoryResponse>(response).await?;
        Ok(ManageSubcategoryOutcome { accepted, body })
    }

    /// Assign a payee to a transaction
    pub async fn set_transaction_payee(
        &self,
        transaction_id: TransactionId,
        payee_id: PayeeId,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!("/api/transactions/{}/set-payee", transaction_id));

        let response = Request::post(&url)
            .json(&SetPayeeRequest { payee_id })
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        ensure_ok(response).await
    }

    /// Get every category for the add-transaction form
    pub async fn get_categories(&self) -> Result<CategoriesResponse, ApiError> {
        let response = Request::get(&self.url("/api/categories"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response).await
    }

    pub async fn create_payee(&self, name: String) -> Result<CreatePayeeResponse, ApiError> {
        let response = Request::post(&self.url("/api/payees"))
            .json(&CreatePayeeRequest { name })
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response).await
    }

    pub async fn delete_payee(&self, payee_id: PayeeId) -> Result<(), ApiError> {
        let response = Request::delete(&self.url(&format!("/api/payees/{}", payee_id)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        ensure_ok(response).await
    }

    /// Add a transaction. A failure body (`success: false`) is returned as
    /// `Ok` even when the status is an error.
    pub async fn add_transaction(&self, request: &AddTransactionRequest) -> Result<AddTransactionResponse, ApiError> {
        let response = Request::post(&self.url("/api/add-transaction"))
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a JSON body regardless of status; fall back to a server error
/// carrying the raw text when a failed response is not the expected shape.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    match serde_json::from_str::<T>(&text) {
        Ok(data) => Ok(data),
        Err(_) if !ok => Err(ApiError::Server {
            status,
            message: text,
        }),
        Err(e) => Err(e.into()),
    }
}

async fn ensure_ok(response: Response) -> Result<(), ApiError> {
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(ApiError::Server { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_default_client_uses_origin_relative_paths() {
        let client = ApiClient::default();
        assert_eq!(client.url("/api/categories"), "/api/categories");
    }

    #[wasm_bindgen_test]
    fn test_custom_base_url_is_joined_once() {
        let client = ApiClient::with_base_url("http://localhost:5000/".to_string());
        assert_eq!(client.url("/api/payees"), "http://localhost:5000/api/payees");
    }
}
