use yew::prelude::*;
use shared::sidebar::SIDEBAR_STORAGE_KEY;
use shared::SidebarState;
use crate::services::logging::Logger;
use crate::services::storage;

pub struct UseSidebarResult {
    pub state: SidebarState,
    pub toggle: Callback<MouseEvent>,
}

/// Sidebar collapsed flag, restored from and persisted to local storage
#[hook]
pub fn use_sidebar() -> UseSidebarResult {
    let state = use_state(|| SidebarState::from_stored(storage::get_item(SIDEBAR_STORAGE_KEY).as_deref()));

    let toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *state;
            next.toggle();
            if !storage::set_item(SIDEBAR_STORAGE_KEY, next.storage_value()) {
                Logger::warn_with_component("sidebar", "Could not persist sidebar state");
            }
            state.set(next);
        })
    };

    UseSidebarResult {
        state: *state,
        toggle,
    }
}
