use yew::prelude::*;
use web_sys::Element;
use shared::view::{amount_class, format_amount, payee_cell_text};
use shared::{DropdownAnchor, TransactionId, TransactionRow};

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub rows: Vec<TransactionRow>,
    /// Fired with the clicked row and a position just below its payee cell
    pub on_payee_cell_click: Callback<(TransactionId, DropdownAnchor)>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    html! {
        <div class="table-container">
            <table class="transactions-table">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Description"}</th>
                        <th>{"Category"}</th>
                        <th>{"Payee"}</th>
                        <th>{"Amount"}</th>
                    </tr>
                </thead>
                <tbody>
                    {if props.rows.is_empty() {
                        html! {
                            <tr>
                                <td colspan="5" class="empty-state">{"No transactions yet."}</td>
                            </tr>
                        }
                    } else {
                        html! {
                            {for props.rows.iter().map(|row| {
                                let on_click = {
                                    let on_payee_cell_click = props.on_payee_cell_click.clone();
                                    let transaction_id = row.id;
                                    Callback::from(move |e: MouseEvent| {
                                        e.stop_propagation();
                                        if let Some(anchor) = anchor_below_cell(&e) {
                                            on_payee_cell_click.emit((transaction_id, anchor));
                                        }
                                    })
                                };

                                html! {
                                    <tr key={row.id} data-transaction-id={row.id.to_string()}>
                                        <td class="date">{&row.date}</td>
                                        <td class="description">{&row.description}</td>
                                        <td class="category">{row.category.clone().unwrap_or_default()}</td>
                                        <td class="payee-cell" onclick={on_click}>
                                            {payee_cell_text(row)}
                                        </td>
                                        <td class={amount_class(row.amount)}>{format_amount(row.amount)}</td>
                                    </tr>
                                }
                            })}
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// Page coordinates of the bottom-left corner of the clicked payee cell
fn anchor_below_cell(e: &MouseEvent) -> Option<DropdownAnchor> {
    let target: Element = e.target_dyn_into()?;
    let cell = target.closest("td.payee-cell").ok().flatten()?;
    let rect = cell.get_bounding_client_rect();
    let window = gloo::utils::window();

    Some(DropdownAnchor::below(
        rect.bottom(),
        rect.left(),
        window.scroll_x().unwrap_or(0.0),
        window.scroll_y().unwrap_or(0.0),
    ))
}
