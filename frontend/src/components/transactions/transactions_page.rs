use yew::prelude::*;
use shared::view::MANAGE_PAYEES_LABEL;
use shared::{DropdownAnchor, PageConfig, TableEvent, TransactionId};
use super::{AddTransactionModal, ManagePayeesModal, PayeeDropdown, TransactionTable};
use crate::hooks::use_transactions_table::{use_transactions_table, UseTransactionsTableResult};
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct TransactionsPageProps {
    pub api_client: ApiClient,
    pub config: PageConfig,
}

#[function_component(TransactionsPage)]
pub fn transactions_page(props: &TransactionsPageProps) -> Html {
    let UseTransactionsTableResult { table, dispatch } =
        use_transactions_table(&props.api_client, &props.config);

    let on_payee_cell_click = {
        let dispatch = dispatch.clone();
        Callback::from(move |(transaction_id, anchor): (TransactionId, DropdownAnchor)| {
            dispatch.emit(TableEvent::PayeeCellClicked { transaction_id, anchor });
        })
    };

    let on_manage_payees = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(TableEvent::ManagePayeesOpened))
    };

    let on_add_transaction = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(TableEvent::AddTransactionOpened))
    };

    html! {
        <section id="transactionsTable" class="transactions-section">
            <div class="transactions-toolbar">
                <button id="managePayeesBtn" type="button" class="btn btn-secondary" onclick={on_manage_payees}>
                    {MANAGE_PAYEES_LABEL}
                </button>
                <button id="addTransactionBtn" type="button" class="btn btn-primary" onclick={on_add_transaction}>
                    {"Add Transaction"}
                </button>
            </div>

            <TransactionTable rows={table.rows().to_vec()} on_payee_cell_click={on_payee_cell_click} />

            {if let Some(open) = table.picker().current() {
                html! {
                    <PayeeDropdown
                        token={open.token}
                        anchor={open.anchor}
                        payees={table.payees().payees().to_vec()}
                        dispatch={dispatch.clone()}
                    />
                }
            } else {
                html! {}
            }}

            <ManagePayeesModal
                state={table.manage_modal().clone()}
                payees={table.payees().clone()}
                dispatch={dispatch.clone()}
            />

            <AddTransactionModal
                state={table.add_modal().clone()}
                payees={table.payees().clone()}
                dispatch={dispatch}
            />
        </section>
    }
}
