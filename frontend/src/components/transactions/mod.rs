pub mod add_transaction_modal;
pub mod manage_payees_modal;
pub mod payee_dropdown;
pub mod transaction_table;
pub mod transactions_page;

pub use add_transaction_modal::AddTransactionModal;
pub use manage_payees_modal::ManagePayeesModal;
pub use payee_dropdown::PayeeDropdown;
pub use transaction_table::TransactionTable;
pub use transactions_page::TransactionsPage;
