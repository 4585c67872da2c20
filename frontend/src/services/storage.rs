//! Raw string access to `window.localStorage`.
//!
//! Values are stored unquoted (`"true"`, `"dark"`) so pages served without
//! this client read the same keys. gloo's typed `get`/`set` would JSON-encode
//! them, so only its raw handle is used.

use gloo::storage::{LocalStorage, Storage};

pub fn get_item(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok().flatten()
}

/// Returns false when the browser refused the write.
pub fn set_item(key: &str, value: &str) -> bool {
    LocalStorage::raw().set_item(key, value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_values_are_stored_unquoted() {
        let key = "finance-storage-test";
        assert!(set_item(key, "true"));
        assert_eq!(get_item(key).as_deref(), Some("true"));
        assert_eq!(LocalStorage::raw().get_item(key).unwrap().as_deref(), Some("true"));

        LocalStorage::delete(key);
        assert_eq!(get_item(key), None);
    }
}
