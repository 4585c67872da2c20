use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::{PageConfig, TableEffect, TableEvent, TransactionsTable};
use crate::services::api::ApiClient;
use crate::services::date_utils::get_current_date;
use crate::services::logging::Logger;
use crate::services::page;

pub struct UseTransactionsTableResult {
    pub table: TransactionsTable,
    pub dispatch: Callback<TableEvent>,
}

/// Runs the table's effects and feeds their results back in as events.
#[derive(Clone)]
struct Dispatcher {
    table: Rc<RefCell<TransactionsTable>>,
    api_client: ApiClient,
    update: UseForceUpdateHandle,
}

impl Dispatcher {
    fn dispatch(&self, event: TableEvent) {
        let effects = self.table.borrow_mut().dispatch(event);
        self.update.force_update();
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: TableEffect) {
        match effect {
            TableEffect::AssignPayee { token, transaction_id, payee } => {
                let this = self.clone();
                spawn_local(async move {
                    let result = this.api_client.set_transaction_payee(transaction_id, payee.id).await;
                    this.dispatch(TableEvent::PayeeAssignFinished {
                        token,
                        transaction_id,
                        payee,
                        result,
                    });
                });
            }
            TableEffect::CreatePayee { name } => {
                let this = self.clone();
                spawn_local(async move {
                    let result = this.api_client.create_payee(name).await;
                    this.dispatch(TableEvent::PayeeCreateFinished(result));
                });
            }
            TableEffect::DeletePayee { payee_id } => {
                let this = self.clone();
                spawn_local(async move {
                    let result = this.api_client.delete_payee(payee_id).await;
                    this.dispatch(TableEvent::PayeeDeleteFinished { payee_id, result });
                });
            }
            TableEffect::LoadCategories => {
                let this = self.clone();
                spawn_local(async move {
                    let result = this.api_client.get_categories().await;
                    this.dispatch(TableEvent::CategoriesLoaded(result));
                });
            }
            TableEffect::SubmitTransaction(request) => {
                let this = self.clone();
                spawn_local(async move {
                    let result = this.api_client.add_transaction(&request).await;
                    this.dispatch(TableEvent::SaveTransactionFinished(result));
                });
            }
            TableEffect::Alert(message) => page::alert(&message),
            TableEffect::ReloadPage => page::reload(),
            TableEffect::LogError(message) => Logger::error_with_component("transactions", &message),
        }
    }
}

/// Owns the transactions page state: rows, payee cache, dropdown and modals
#[hook]
pub fn use_transactions_table(api_client: &ApiClient, config: &PageConfig) -> UseTransactionsTableResult {
    let table = use_mut_ref(|| {
        TransactionsTable::new(config.transactions.clone(), config.payees.clone(), get_current_date())
    });
    let update = use_force_update();

    let dispatch = {
        let dispatcher = Dispatcher {
            table: table.clone(),
            api_client: api_client.clone(),
            update,
        };
        use_callback((), move |event: TableEvent, _| dispatcher.dispatch(event))
    };

    let snapshot = table.borrow().clone();

    UseTransactionsTableResult {
        table: snapshot,
        dispatch,
    }
}
