use std::collections::HashMap;
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::subcategories::build_request;
use shared::{SubcategoryAction, SubcategoryBoard, SubcategoryGroup};
use crate::hooks::use_flash::UseFlashActions;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

pub struct UseSubcategoriesResult {
    pub groups: Vec<SubcategoryGroup>,
    /// Text typed in each list's "add" input, by category
    pub drafts: HashMap<String, String>,
    pub actions: UseSubcategoriesActions,
}

#[derive(Clone, PartialEq)]
pub struct UseSubcategoriesActions {
    pub on_draft_change: Callback<(String, String)>,
    pub submit: Callback<(SubcategoryAction, String, String)>,
}

#[hook]
pub fn use_subcategories(
    api_client: &ApiClient,
    groups: &[SubcategoryGroup],
    flash: &UseFlashActions,
) -> UseSubcategoriesResult {
    let board = use_mut_ref(|| SubcategoryBoard::new(groups.to_vec()));
    let update = use_force_update();

    let on_draft_change = {
        let board = board.clone();
        let update = update.clone();
        use_callback((), move |(category, value): (String, String), _| {
            board.borrow_mut().set_draft(&category, value);
            update.force_update();
        })
    };

    let submit = {
        let board = board.clone();
        let update = update.clone();
        let api_client = api_client.clone();
        let show_flash = flash.show.clone();

        use_callback((), move |(action, category, name): (SubcategoryAction, String, String), _| {
            let request = match build_request(action, &category, &name) {
                Ok(request) => request,
                Err(e) => {
                    Logger::warn_with_component("subcategories", &e.to_string());
                    return;
                }
            };

            let board = board.clone();
            let update = update.clone();
            let api_client = api_client.clone();
            let show_flash = show_flash.clone();

            spawn_local(async move {
                let result = api_client.manage_subcategory(&request).await;
                if let Err(e) = &result {
                    gloo::console::error!("An error occurred:", e.to_string());
                }

                let flash = board.borrow_mut().handle_response(&request, &result);
                update.force_update();
                show_flash.emit(flash);
            });
        })
    };

    let (groups, drafts) = {
        let board = board.borrow();
        (board.groups().to_vec(), board.drafts().clone())
    };

    UseSubcategoriesResult {
        groups,
        drafts,
        actions: UseSubcategoriesActions { on_draft_change, submit },
    }
}
