use yew::prelude::*;
use web_sys::HtmlInputElement;
use shared::subcategories::EMPTY_PLACEHOLDER;
use shared::{SubcategoryAction, SubcategoryGroup};
use super::flash_container::FlashContainer;
use crate::hooks::use_flash::use_flash;
use crate::hooks::use_subcategories::use_subcategories;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct SubcategoryManagerProps {
    pub api_client: ApiClient,
    pub groups: Vec<SubcategoryGroup>,
}

/// Plan settings: add and delete subcategories under each main category
#[function_component(SubcategoryManager)]
pub fn subcategory_manager(props: &SubcategoryManagerProps) -> Html {
    let flash = use_flash();
    let subcategories = use_subcategories(&props.api_client, &props.groups, &flash.actions);
    let actions = subcategories.actions.clone();

    html! {
        <section class="plan-settings-section">
            <FlashContainer messages={flash.messages.clone()} on_dismiss={flash.actions.dismiss.clone()} />

            {for subcategories.groups.iter().map(|group| {
                let draft = subcategories.drafts.get(&group.category).cloned().unwrap_or_default();

                let on_add = {
                    let submit = actions.submit.clone();
                    let category = group.category.clone();
                    let draft = draft.clone();
                    Callback::from(move |e: SubmitEvent| {
                        e.prevent_default();
                        submit.emit((SubcategoryAction::Add, category.clone(), draft.clone()));
                    })
                };

                let on_input = {
                    let on_draft_change = actions.on_draft_change.clone();
                    let category = group.category.clone();
                    Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        on_draft_change.emit((category.clone(), input.value()));
                    })
                };

                html! {
                    <div class="card subcategory-card" key={group.category.clone()}>
                        <h3 class="card-title">{group.heading()}</h3>

                        <ul id={group.list_dom_id()} class="list-group">
                            {if group.shows_placeholder() {
                                html! {
                                    <li class="list-group-item text-muted empty-list-item">{EMPTY_PLACEHOLDER}</li>
                                }
                            } else {
                                html! {
                                    {for group.subcategories.iter().map(|name| subcategory_row(group, name, &actions.submit))}
                                }
                            }}
                        </ul>

                        <form class="add-subcategory-form" onsubmit={on_add}>
                            <input
                                type="text"
                                name="subcategory_name"
                                class="form-control"
                                placeholder="New subcategory"
                                value={draft}
                                oninput={on_input}
                                required=true
                            />
                            <button type="submit" name="add_subcategory" class="btn btn-primary btn-sm">
                                {"Add"}
                            </button>
                        </form>
                    </div>
                }
            })}
        </section>
    }
}

fn subcategory_row(
    group: &SubcategoryGroup,
    name: &str,
    submit: &Callback<(SubcategoryAction, String, String)>,
) -> Html {
    let on_delete = {
        let submit = submit.clone();
        let category = group.category.clone();
        let name = name.to_string();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit((SubcategoryAction::Delete, category.clone(), name.clone()));
        })
    };

    html! {
        <li
            key={name.to_string()}
            id={group.item_dom_id(name)}
            class="list-group-item d-flex justify-content-between align-items-center subcategory-item"
        >
            {name}
            <form class="delete-form" onsubmit={on_delete}>
                <button type="submit" name="delete_subcategory" class="btn btn-danger btn-sm delete-btn" aria-label="Delete">
                    <i class="bx bx-trash"></i>
                </button>
            </form>
        </li>
    }
}
