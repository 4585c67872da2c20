use yew::prelude::*;
use web_sys::HtmlInputElement;
use shared::table::ManagePayeesModal as ManagePayeesState;
use shared::view::MANAGE_PAYEES_LABEL;
use shared::{PayeeCache, TableEvent};

#[derive(Properties, PartialEq)]
pub struct ManagePayeesModalProps {
    pub state: ManagePayeesState,
    pub payees: PayeeCache,
    pub dispatch: Callback<TableEvent>,
}

#[function_component(ManagePayeesModal)]
pub fn manage_payees_modal(props: &ManagePayeesModalProps) -> Html {
    if !props.state.open {
        return html! {};
    }

    let on_close = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(TableEvent::ManagePayeesClosed))
    };

    let on_backdrop_click = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            dispatch.emit(TableEvent::ManagePayeesClosed);
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_name_input = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatch.emit(TableEvent::NewPayeeNameChanged(input.value()));
        })
    };

    let on_add = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatch.emit(TableEvent::AddPayeeRequested);
        })
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div id="managePayeesModal" class="modal manage-payees-modal" onclick={on_modal_click}>
                <div class="modal-header">
                    <h2>
                        {MANAGE_PAYEES_LABEL}
                        <span class="badge badge-secondary payee-count">{props.payees.len().to_string()}</span>
                    </h2>
                    <button type="button" class="close-button" onclick={on_close.clone()}>{"×"}</button>
                </div>

                <div class="modal-body">
                    <ul id="payeesList" class="list-group">
                        {if props.payees.is_empty() {
                            html! { <li class="list-group-item text-muted">{"No payees yet."}</li> }
                        } else {
                            html! {}
                        }}
                        {for props.payees.iter().map(|payee| {
                            let on_delete = {
                                let dispatch = props.dispatch.clone();
                                let payee_id = payee.id;
                                Callback::from(move |_: MouseEvent| {
                                    dispatch.emit(TableEvent::DeletePayeeRequested(payee_id));
                                })
                            };
                            html! {
                                <li
                                    key={payee.id}
                                    class="list-group-item d-flex justify-content-between align-items-center"
                                >
                                    {&payee.name}
                                    <button
                                        type="button"
                                        class="btn btn-sm btn-danger"
                                        data-id={payee.id.to_string()}
                                        onclick={on_delete}
                                    >
                                        {"×"}
                                    </button>
                                </li>
                            }
                        })}
                    </ul>

                    <form class="add-payee-form" onsubmit={on_add}>
                        <input
                            type="text"
                            id="newPayeeName"
                            class="form-control"
                            placeholder="New payee name"
                            value={props.state.new_name.clone()}
                            oninput={on_name_input}
                        />
                        <button type="submit" id="addPayeeBtn" class="btn btn-primary">{"Add"}</button>
                    </form>

                    {if let Some(error) = props.state.error.clone() {
                        html! { <div class="error-message">{error}</div> }
                    } else {
                        html! {}
                    }}
                </div>

                <div class="modal-actions">
                    <button type="button" class="cancel-button" onclick={on_close}>{"Close"}</button>
                </div>
            </div>
        </div>
    }
}
