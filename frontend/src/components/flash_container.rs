use yew::prelude::*;
use shared::FlashMessage;

#[derive(Properties, PartialEq)]
pub struct FlashContainerProps {
    pub messages: Vec<FlashMessage>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(FlashContainer)]
pub fn flash_container(props: &FlashContainerProps) -> Html {
    html! {
        <div id="flash-container" class="flash-container">
            {for props.messages.iter().map(|flash| {
                let on_close = {
                    let on_dismiss = props.on_dismiss.clone();
                    let id = flash.id;
                    Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
                };

                html! {
                    <div key={flash.id} class={flash.level.css_class()} role="alert">
                        {&flash.message}
                        <button type="button" class="close" aria-label="Close" onclick={on_close}>
                            <span aria-hidden="true">{"×"}</span>
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
