pub mod use_flash;
pub mod use_sidebar;
pub mod use_subcategories;
pub mod use_transactions_table;
