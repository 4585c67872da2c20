use yew::prelude::*;
use gloo::events::EventListener;
use shared::view::MANAGE_PAYEES_LABEL;
use shared::{DropdownAnchor, Payee, PickerEntry, PickerToken, TableEvent};

#[derive(Properties, PartialEq)]
pub struct PayeeDropdownProps {
    pub token: PickerToken,
    pub anchor: DropdownAnchor,
    pub payees: Vec<Payee>,
    pub dispatch: Callback<TableEvent>,
}

/// Floating payee list opened from a transaction's payee cell.
///
/// Any click that reaches the document closes it. Payee cells stop their
/// click from bubbling, so clicking another row reopens the list there.
#[function_component(PayeeDropdown)]
pub fn payee_dropdown(props: &PayeeDropdownProps) -> Html {
    {
        let dispatch = props.dispatch.clone();
        use_effect_with(props.token, move |_| {
            let listener = EventListener::new(&gloo::utils::document(), "click", move |_| {
                dispatch.emit(TableEvent::PickerDismissed);
            });
            move || drop(listener)
        });
    }

    let on_menu_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let select = |entry: PickerEntry| {
        let dispatch = props.dispatch.clone();
        let token = props.token;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            dispatch.emit(TableEvent::PickerEntrySelected {
                token,
                entry: entry.clone(),
            });
        })
    };

    html! {
        <div class="dropdown-menu show payee-dropdown" style={props.anchor.style()} onclick={on_menu_click}>
            {for props.payees.iter().map(|payee| {
                let on_click = select(PickerEntry::Payee {
                    id: payee.id,
                    name: payee.name.clone(),
                });
                html! {
                    <a
                        key={payee.id}
                        href="#"
                        class="dropdown-item"
                        data-payee-id={payee.id.to_string()}
                        onclick={on_click}
                    >
                        {&payee.name}
                    </a>
                }
            })}
            <div class="dropdown-divider"></div>
            <a href="#" class="dropdown-item manage-payees-item" onclick={select(PickerEntry::ManagePayees)}>
                {MANAGE_PAYEES_LABEL}
            </a>
        </div>
    }
}
