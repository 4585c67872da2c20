//! Add-transaction form state and validation.

use chrono::NaiveDate;
use thiserror::Error;

use crate::{AddTransactionRequest, CategoryId, PayeeId};

pub const SAVE_LABEL: &str = "Add Transaction";
pub const SAVING_LABEL: &str = "Adding...";
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";
pub const SAVE_FAILED_RETRY_MESSAGE: &str = "Failed to add transaction. Please try again.";

/// Validation failures caught before any request is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormValidationError {
    #[error("Description is required")]
    MissingDescription,
    #[error("Amount must be a non-zero number, got {0:?}")]
    InvalidAmount(String),
    #[error("Category must be selected, got {0:?}")]
    InvalidCategory(String),
    #[error("Date is required")]
    MissingDate,
    #[error("Date must be YYYY-MM-DD, got {0:?}")]
    InvalidDate(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Description,
    Amount,
    Category,
    Payee,
    Date,
}

/// Raw input values, exactly as typed or selected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddTransactionForm {
    pub description: String,
    pub amount: String,
    pub category_id: String,
    pub payee_id: String,
    pub transaction_date: String,
}

impl AddTransactionForm {
    pub fn with_date(today: &str) -> Self {
        Self {
            transaction_date: today.to_string(),
            ..Self::default()
        }
    }

    /// Clear every field and put the default date back.
    pub fn reset(&mut self, today: &str) {
        *self = Self::with_date(today);
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Description => self.description = value,
            FormField::Amount => self.amount = value,
            FormField::Category => self.category_id = value,
            FormField::Payee => self.payee_id = value,
            FormField::Date => self.transaction_date = value,
        }
    }

    pub fn validate(&self) -> Result<AddTransactionRequest, FormValidationError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(FormValidationError::MissingDescription);
        }

        let amount = parse_amount(&self.amount)
            .ok_or_else(|| FormValidationError::InvalidAmount(self.amount.clone()))?;

        let category_id = parse_category(&self.category_id)
            .ok_or_else(|| FormValidationError::InvalidCategory(self.category_id.clone()))?;

        let date = self.transaction_date.trim();
        if date.is_empty() {
            return Err(FormValidationError::MissingDate);
        }
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| FormValidationError::InvalidDate(date.to_string()))?;

        Ok(AddTransactionRequest {
            description: description.to_string(),
            amount,
            category_id,
            payee_id: parse_payee(&self.payee_id),
            transaction_date: date.to_string(),
        })
    }
}

/// Zero, NaN and infinities are all treated as "no amount".
fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value != 0.0)
}

fn parse_category(raw: &str) -> Option<CategoryId> {
    raw.trim().parse::<CategoryId>().ok().filter(|id| *id != 0)
}

fn parse_payee(raw: &str) -> Option<PayeeId> {
    raw.trim().parse::<PayeeId>().ok()
}

/// Alert text for a `success: false` answer
pub fn server_failure_message(error: Option<&str>) -> String {
    format!("Failed to add transaction: {}", error.unwrap_or("Unknown error"))
}
