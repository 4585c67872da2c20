pub mod api;
pub mod date_utils;
pub mod identity;
pub mod logging;
pub mod page;
pub mod storage;
