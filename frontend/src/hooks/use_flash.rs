use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use shared::flash::FLASH_DISMISS_MS;
use shared::{FlashBoard, FlashLevel, FlashMessage};

pub struct UseFlashResult {
    pub messages: Vec<FlashMessage>,
    pub actions: UseFlashActions,
}

#[derive(Clone, PartialEq)]
pub struct UseFlashActions {
    pub show: Callback<(FlashLevel, String)>,
    pub dismiss: Callback<u64>,
}

/// Wait out the display time, then drop the banner. Returns false when it
/// was already closed by hand.
pub async fn expire_after_delay(board: Rc<RefCell<FlashBoard>>, id: u64) -> bool {
    TimeoutFuture::new(FLASH_DISMISS_MS).await;
    board.borrow_mut().dismiss(id)
}

/// Dismissible banners that also clear themselves after a few seconds
#[hook]
pub fn use_flash() -> UseFlashResult {
    let board = use_mut_ref(FlashBoard::default);
    let update = use_force_update();

    let dismiss = {
        let board = board.clone();
        let update = update.clone();
        use_callback((), move |id: u64, _| {
            if board.borrow_mut().dismiss(id) {
                update.force_update();
            }
        })
    };

    let show = {
        let board = board.clone();
        let update = update.clone();
        use_callback((), move |(level, message): (FlashLevel, String), _| {
            let id = board.borrow_mut().push(level, message);
            update.force_update();

            let board = board.clone();
            let update = update.clone();
            spawn_local(async move {
                if expire_after_delay(board, id).await {
                    update.force_update();
                }
            });
        })
    };

    let messages = board.borrow().messages().to_vec();

    UseFlashResult {
        messages,
        actions: UseFlashActions { show, dismiss },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_flash_expires_after_dismiss_delay() {
        let board = Rc::new(RefCell::new(FlashBoard::default()));
        let id = board.borrow_mut().push(FlashLevel::Success, "Subcategory added.".to_string());
        assert_eq!(board.borrow().messages().len(), 1);

        assert!(expire_after_delay(board.clone(), id).await);
        assert!(board.borrow().messages().is_empty());
    }

    #[wasm_bindgen_test]
    async fn test_closed_flash_is_not_expired_twice() {
        let board = Rc::new(RefCell::new(FlashBoard::default()));
        let id = board.borrow_mut().push(FlashLevel::Danger, "Not allowed".to_string());
        board.borrow_mut().dismiss(id);

        assert!(!expire_after_delay(board.clone(), id).await);
    }
}
