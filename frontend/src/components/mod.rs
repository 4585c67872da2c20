pub mod flash_container;
pub mod layout;
pub mod login_page;
pub mod subcategory_manager;
pub mod theme_selector;
pub mod transactions;

pub use flash_container::FlashContainer;
pub use layout::PageLayout;
pub use login_page::LoginPage;
pub use subcategory_manager::SubcategoryManager;
pub use theme_selector::ThemeSelector;
pub use transactions::TransactionsPage;
