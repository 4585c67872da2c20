use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use shared::table::AddTransactionModal as AddTransactionState;
use shared::view::{category_options, payee_options, SelectOption};
use shared::{FormField, PayeeCache, TableEvent};

#[derive(Properties, PartialEq)]
pub struct AddTransactionModalProps {
    pub state: AddTransactionState,
    pub payees: PayeeCache,
    pub dispatch: Callback<TableEvent>,
}

fn field_input(dispatch: &Callback<TableEvent>, field: FormField) -> Callback<Event> {
    let dispatch = dispatch.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        dispatch.emit(TableEvent::FormFieldChanged { field, value: input.value() });
    })
}

fn field_select(dispatch: &Callback<TableEvent>, field: FormField) -> Callback<Event> {
    let dispatch = dispatch.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        dispatch.emit(TableEvent::FormFieldChanged { field, value: select.value() });
    })
}

fn render_options(options: Vec<SelectOption>, selected: &str) -> Html {
    html! {
        {for options.into_iter().map(|option| {
            let is_selected = option.value == selected;
            html! {
                <option value={option.value} selected={is_selected}>{option.label}</option>
            }
        })}
    }
}

#[function_component(AddTransactionModal)]
pub fn add_transaction_modal(props: &AddTransactionModalProps) -> Html {
    if !props.state.open {
        return html! {};
    }

    let saving = props.state.saving;
    let form = &props.state.form;

    let on_cancel = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(TableEvent::AddTransactionClosed))
    };

    let on_backdrop_click = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if !saving {
                dispatch.emit(TableEvent::AddTransactionClosed);
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_submit = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatch.emit(TableEvent::SaveTransactionRequested);
        })
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div id="addTransactionModal" class="modal add-transaction-modal" onclick={on_modal_click}>
                <h3 class="modal-title">{"Add Transaction"}</h3>

                <form id="addTransactionForm" class="add-transaction-form" onsubmit={on_submit} novalidate=true>
                    <div class="form-group">
                        <label for="transactionDescription">{"Description"}</label>
                        <input
                            id="transactionDescription"
                            type="text"
                            class="form-control"
                            value={form.description.clone()}
                            onchange={field_input(&props.dispatch, FormField::Description)}
                            disabled={saving}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="transactionAmount">{"Amount"}</label>
                        <input
                            id="transactionAmount"
                            type="number"
                            step="0.01"
                            class="form-control"
                            value={form.amount.clone()}
                            onchange={field_input(&props.dispatch, FormField::Amount)}
                            disabled={saving}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="transactionCategory">{"Category"}</label>
                        <select
                            id="transactionCategory"
                            class="form-control"
                            onchange={field_select(&props.dispatch, FormField::Category)}
                            disabled={saving}
                            required=true
                        >
                            {render_options(category_options(&props.state.categories), &form.category_id)}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="transactionPayee">{"Payee"}</label>
                        <select
                            id="transactionPayee"
                            class="form-control"
                            onchange={field_select(&props.dispatch, FormField::Payee)}
                            disabled={saving}
                        >
                            {render_options(payee_options(&props.payees), &form.payee_id)}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="transactionDate">{"Date"}</label>
                        <input
                            id="transactionDate"
                            type="date"
                            class="form-control"
                            value={form.transaction_date.clone()}
                            onchange={field_input(&props.dispatch, FormField::Date)}
                            disabled={saving}
                            required=true
                        />
                    </div>

                    <div class="modal-actions">
                        <button
                            id="saveTransactionBtn"
                            type="submit"
                            class="btn btn-primary"
                            disabled={saving}
                        >
                            {props.state.save_label()}
                        </button>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            onclick={on_cancel}
                            disabled={saving}
                        >
                            {"Cancel"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use gloo::timers::future::TimeoutFuture;
    use gloo::utils::{body, document};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlFormElement;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_empty_form_submit_reaches_save_handler() {
        let root = document().create_element("div").unwrap();
        body().append_child(&root).unwrap();

        let events = Rc::new(RefCell::new(Vec::new()));
        let dispatch = {
            let events = events.clone();
            Callback::from(move |event: TableEvent| events.borrow_mut().push(event))
        };
        let props = AddTransactionModalProps {
            state: AddTransactionState {
                open: true,
                ..AddTransactionState::default()
            },
            payees: PayeeCache::default(),
            dispatch,
        };
        let _app = yew::Renderer::<AddTransactionModal>::with_root_and_props(root, props).render();
        TimeoutFuture::new(10).await;

        let form: HtmlFormElement = document()
            .get_element_by_id("addTransactionForm")
            .unwrap()
            .dyn_into()
            .unwrap();
        assert!(form.no_validate());

        // Empty required fields must still hand the submit to the dispatcher,
        // which answers with the "fill in all required fields" alert.
        form.request_submit().unwrap();
        TimeoutFuture::new(10).await;
        assert!(events.borrow().contains(&TableEvent::SaveTransactionRequested));
    }
}
