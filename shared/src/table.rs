//! Transactions table workflow as an event → effect dispatch table.
//!
//! [`TransactionsTable::dispatch`] applies a UI or completion event to the
//! state and returns the effects the caller must run: HTTP calls, alerts,
//! a page reload, console logging. Effects that finish produce new events
//! (`*Finished`, `CategoriesLoaded`) which are dispatched in turn.
//!
//! Completion events are applied even if the modal or dropdown that started
//! them has since closed, because the server already committed the change.
//! Picker tokens keep a late set-payee response from closing a dropdown
//! opened after it.

use crate::add_transaction::{
    server_failure_message, AddTransactionForm, FormField, REQUIRED_FIELDS_MESSAGE, SAVE_FAILED_RETRY_MESSAGE,
    SAVE_LABEL, SAVING_LABEL,
};
use crate::error::ApiError;
use crate::payees::{normalize_payee_name, PayeeCache};
use crate::picker::{DropdownAnchor, PayeePicker, PickerEntry, PickerToken};
use crate::{
    AddTransactionRequest, AddTransactionResponse, CategoriesResponse, Category, CreatePayeeResponse, Payee, PayeeId,
    TransactionId, TransactionRow,
};

const ADD_PAYEE_FAILED_MESSAGE: &str = "Could not add payee. Please try again.";
const DELETE_PAYEE_FAILED_MESSAGE: &str = "Could not delete payee. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    PayeeCellClicked {
        transaction_id: TransactionId,
        anchor: DropdownAnchor,
    },
    /// Click anywhere outside the open dropdown
    PickerDismissed,
    PickerEntrySelected {
        token: PickerToken,
        entry: PickerEntry,
    },
    PayeeAssignFinished {
        token: PickerToken,
        transaction_id: TransactionId,
        payee: Payee,
        result: Result<(), ApiError>,
    },

    ManagePayeesOpened,
    ManagePayeesClosed,
    NewPayeeNameChanged(String),
    AddPayeeRequested,
    PayeeCreateFinished(Result<CreatePayeeResponse, ApiError>),
    DeletePayeeRequested(PayeeId),
    PayeeDeleteFinished {
        payee_id: PayeeId,
        result: Result<(), ApiError>,
    },

    AddTransactionOpened,
    CategoriesLoaded(Result<CategoriesResponse, ApiError>),
    AddTransactionClosed,
    FormFieldChanged {
        field: FormField,
        value: String,
    },
    SaveTransactionRequested,
    SaveTransactionFinished(Result<AddTransactionResponse, ApiError>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableEffect {
    AssignPayee {
        token: PickerToken,
        transaction_id: TransactionId,
        payee: Payee,
    },
    CreatePayee {
        name: String,
    },
    DeletePayee {
        payee_id: PayeeId,
    },
    LoadCategories,
    SubmitTransaction(AddTransactionRequest),
    /// Blocking alert dialog
    Alert(String),
    ReloadPage,
    LogError(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManagePayeesModal {
    pub open: bool,
    pub new_name: String,
    /// Inline error from the last add/delete
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddTransactionModal {
    pub open: bool,
    pub form: AddTransactionForm,
    pub categories: Vec<Category>,
    pub saving: bool,
}

impl AddTransactionModal {
    pub fn save_label(&self) -> &'static str {
        if self.saving {
            SAVING_LABEL
        } else {
            SAVE_LABEL
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionsTable {
    rows: Vec<TransactionRow>,
    payees: PayeeCache,
    picker: PayeePicker,
    manage: ManagePayeesModal,
    add: AddTransactionModal,
    /// Default transaction date (YYYY-MM-DD)
    today: String,
}

impl TransactionsTable {
    pub fn new(rows: Vec<TransactionRow>, payees: Vec<Payee>, today: impl Into<String>) -> Self {
        let today = today.into();
        Self {
            rows,
            payees: PayeeCache::new(payees),
            picker: PayeePicker::default(),
            manage: ManagePayeesModal::default(),
            add: AddTransactionModal {
                form: AddTransactionForm::with_date(&today),
                ..AddTransactionModal::default()
            },
            today,
        }
    }

    pub fn rows(&self) -> &[TransactionRow] {
        &self.rows
    }

    pub fn row(&self, id: TransactionId) -> Option<&TransactionRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn payees(&self) -> &PayeeCache {
        &self.payees
    }

    pub fn picker(&self) -> &PayeePicker {
        &self.picker
    }

    pub fn manage_modal(&self) -> &ManagePayeesModal {
        &self.manage
    }

    pub fn add_modal(&self) -> &AddTransactionModal {
        &self.add
    }

    pub fn dispatch(&mut self, event: TableEvent) -> Vec<TableEffect> {
        match event {
            TableEvent::PayeeCellClicked { transaction_id, anchor } => {
                self.picker.open(transaction_id, anchor);
                Vec::new()
            }
            TableEvent::PickerDismissed => {
                self.picker.close();
                Vec::new()
            }
            TableEvent::PickerEntrySelected { token, entry } => self.select_entry(token, entry),
            TableEvent::PayeeAssignFinished {
                token,
                transaction_id,
                payee,
                result,
            } => self.finish_assign(token, transaction_id, payee, result),

            TableEvent::ManagePayeesOpened => {
                self.picker.close();
                self.manage.open = true;
                self.manage.error = None;
                Vec::new()
            }
            TableEvent::ManagePayeesClosed => {
                self.manage.open = false;
                Vec::new()
            }
            TableEvent::NewPayeeNameChanged(name) => {
                self.manage.new_name = name;
                self.manage.error = None;
                Vec::new()
            }
            TableEvent::AddPayeeRequested => match normalize_payee_name(&self.manage.new_name) {
                Some(name) => vec![TableEffect::CreatePayee { name }],
                None => Vec::new(),
            },
            TableEvent::PayeeCreateFinished(result) => self.finish_create(result),
            TableEvent::DeletePayeeRequested(payee_id) => vec![TableEffect::DeletePayee { payee_id }],
            TableEvent::PayeeDeleteFinished { payee_id, result } => match result {
                Ok(()) => {
                    self.payees.remove(payee_id);
                    Vec::new()
                }
                Err(e) => {
                    self.manage.error = Some(DELETE_PAYEE_FAILED_MESSAGE.to_string());
                    vec![TableEffect::LogError(format!("Failed to delete payee {payee_id}: {e}"))]
                }
            },

            TableEvent::AddTransactionOpened => {
                self.add.open = true;
                vec![TableEffect::LoadCategories]
            }
            TableEvent::CategoriesLoaded(result) => match result {
                Ok(response) if response.success => {
                    self.add.categories = response.categories;
                    Vec::new()
                }
                Ok(_) => Vec::new(),
                Err(e) => vec![TableEffect::LogError(format!("Failed to load categories: {e}"))],
            },
            TableEvent::AddTransactionClosed => {
                self.add.open = false;
                Vec::new()
            }
            TableEvent::FormFieldChanged { field, value } => {
                self.add.form.set(field, value);
                Vec::new()
            }
            TableEvent::SaveTransactionRequested => self.request_save(),
            TableEvent::SaveTransactionFinished(result) => self.finish_save(result),
        }
    }

    fn select_entry(&mut self, token: PickerToken, entry: PickerEntry) -> Vec<TableEffect> {
        match entry {
            PickerEntry::ManagePayees => {
                if self.picker.close_if_current(token) {
                    self.manage.open = true;
                    self.manage.error = None;
                }
                Vec::new()
            }
            PickerEntry::Payee { id, name } => match self.picker.take_selection(token) {
                Some(transaction_id) => vec![TableEffect::AssignPayee {
                    token,
                    transaction_id,
                    payee: self.payees.get(id).cloned().unwrap_or(Payee { id, name }),
                }],
                None => Vec::new(),
            },
        }
    }

    fn finish_assign(
        &mut self,
        token: PickerToken,
        transaction_id: TransactionId,
        payee: Payee,
        result: Result<(), ApiError>,
    ) -> Vec<TableEffect> {
        self.picker.close_if_current(token);
        match result {
            Ok(()) => {
                if let Some(row) = self.rows.iter_mut().find(|r| r.id == transaction_id) {
                    row.payee_id = Some(payee.id);
                    row.payee_name = Some(payee.name);
                }
                Vec::new()
            }
            Err(e) => vec![TableEffect::LogError(format!(
                "Failed to set payee for transaction {transaction_id}: {e}"
            ))],
        }
    }

    fn finish_create(&mut self, result: Result<CreatePayeeResponse, ApiError>) -> Vec<TableEffect> {
        match result {
            Ok(CreatePayeeResponse {
                success: true,
                payee: Some(payee),
                ..
            }) => {
                self.payees.insert(payee);
                self.manage.new_name.clear();
                self.manage.error = None;
                Vec::new()
            }
            Ok(response) => {
                self.manage.error = Some(response.error.unwrap_or_else(|| ADD_PAYEE_FAILED_MESSAGE.to_string()));
                Vec::new()
            }
            Err(e) => {
                self.manage.error = Some(ADD_PAYEE_FAILED_MESSAGE.to_string());
                vec![TableEffect::LogError(format!("Failed to add payee: {e}"))]
            }
        }
    }

    fn request_save(&mut self) -> Vec<TableEffect> {
        if self.add.saving {
            return Vec::new();
        }
        match self.add.form.validate() {
            Ok(request) => {
                self.add.saving = true;
                vec![TableEffect::SubmitTransaction(request)]
            }
            Err(_) => vec![TableEffect::Alert(REQUIRED_FIELDS_MESSAGE.to_string())],
        }
    }

    fn finish_save(&mut self, result: Result<AddTransactionResponse, ApiError>) -> Vec<TableEffect> {
        self.add.saving = false;
        match result {
            Ok(response) if response.success => {
                self.add.open = false;
                self.add.form.reset(&self.today);
                vec![TableEffect::ReloadPage]
            }
            Ok(response) => vec![TableEffect::Alert(server_failure_message(response.error.as_deref()))],
            Err(e) => vec![
                TableEffect::LogError(format!("Error adding transaction: {e}")),
                TableEffect::Alert(SAVE_FAILED_RETRY_MESSAGE.to_string()),
            ],
        }
    }
}
