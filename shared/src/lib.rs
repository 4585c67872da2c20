use serde::{Deserialize, Serialize};

pub mod add_transaction;
pub mod auth;
pub mod config;
pub mod error;
pub mod flash;
pub mod payees;
pub mod picker;
pub mod sidebar;
pub mod subcategories;
pub mod table;
pub mod theme;
pub mod view;

pub use add_transaction::{AddTransactionForm, FormField, FormValidationError};
pub use auth::{AuthConfig, AuthError, LoginForm};
pub use config::{ConfigError, PageConfig, PageKind};
pub use error::ApiError;
pub use flash::{FlashBoard, FlashLevel, FlashMessage};
pub use payees::PayeeCache;
pub use picker::{DropdownAnchor, PayeePicker, PickerEntry, PickerToken};
pub use sidebar::SidebarState;
pub use subcategories::{SubcategoryBoard, SubcategoryGroup};
pub use table::{TableEffect, TableEvent, TransactionsTable};
pub use theme::{Theme, ThemePreference};

pub type PayeeId = i64;
pub type TransactionId = i64;
pub type CategoryId = i64;

/// Counterparty attached to a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payee {
    pub id: PayeeId,
    pub name: String,
}

/// Budget category as returned by `GET /api/categories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Parent budgeting group, lowercase on the wire (e.g. "needs")
    pub main_category: String,
}

/// One row of the server-rendered transactions table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRow {
    pub id: TransactionId,
    /// Transaction date (YYYY-MM-DD)
    pub date: String,
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub payee_id: Option<PayeeId>,
    #[serde(default)]
    pub payee_name: Option<String>,
}

/// Transition requested from the subcategory manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubcategoryAction {
    Add,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManageSubcategoryRequest {
    pub action: SubcategoryAction,
    pub category: String,
    pub subcategory_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManageSubcategoryResponse {
    /// Notification level reported by the server ("success", "error", ...)
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// Response body plus whether the HTTP status was a success.
///
/// The subcategory endpoint reports rejections with a non-2xx status but
/// still carries a message worth showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManageSubcategoryOutcome {
    pub accepted: bool,
    pub body: ManageSubcategoryResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetPayeeRequest {
    pub payee_id: PayeeId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub success: bool,
    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePayeeRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePayeeResponse {
    pub success: bool,
    #[serde(default)]
    pub payee: Option<Payee>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddTransactionRequest {
    pub description: String,
    pub amount: f64,
    pub category_id: CategoryId,
    pub payee_id: Option<PayeeId>,
    /// Transaction date (YYYY-MM-DD)
    pub transaction_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddTransactionResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<TransactionId>,
    #[serde(default)]
    pub category_spent: Option<f64>,
    #[serde(default)]
    pub category_available: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subcategory_action_wire_format() {
        let request = ManageSubcategoryRequest {
            action: SubcategoryAction::Delete,
            category: "food".to_string(),
            subcategory_name: "coffee".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"action": "delete", "category": "food", "subcategory_name": "coffee"})
        );
    }

    #[test]
    fn test_add_transaction_request_serializes_null_payee() {
        let request = AddTransactionRequest {
            description: "Groceries".to_string(),
            amount: 42.5,
            category_id: 3,
            payee_id: None,
            transaction_date: "2025-06-01".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["payee_id"], serde_json::Value::Null);
        assert_eq!(json["category_id"], 3);
        assert_eq!(json["transaction_date"], "2025-06-01");
    }

    #[test]
    fn test_add_transaction_response_tolerates_missing_fields() {
        let response: AddTransactionResponse =
            serde_json::from_str(r#"{"success": false, "error": "Category not found"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Category not found"));
        assert_eq!(response.transaction_id, None);

        let response: AddTransactionResponse = serde_json::from_str(
            r#"{"success": true, "transaction_id": 17, "category_spent": 120.0, "category_available": 30.0, "flash": null}"#,
        )
        .unwrap();
        assert!(response.success);
        assert_eq!(response.transaction_id, Some(17));
    }

    #[test]
    fn test_categories_response_without_list() {
        let response: CategoriesResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!response.success);
        assert!(response.categories.is_empty());
    }

    #[test]
    fn test_transaction_row_optional_payee() {
        let row: TransactionRow = serde_json::from_str(
            r#"{"id": 5, "date": "2025-06-02", "description": "Rent", "amount": -900.0}"#,
        )
        .unwrap();
        assert_eq!(row.payee_id, None);
        assert_eq!(row.payee_name, None);
        assert_eq!(row.category, None);
    }
}
