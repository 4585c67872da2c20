use std::str::FromStr;
use yew::prelude::*;
use web_sys::HtmlSelectElement;
use shared::ThemePreference;
use crate::services::logging::Logger;
use crate::services::page;

/// Display settings: pick light, dark, or follow the time of day
#[function_component(ThemeSelector)]
pub fn theme_selector() -> Html {
    let preference = use_state(page::stored_theme_preference);

    let on_change = {
        let preference = preference.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match ThemePreference::from_str(&select.value()) {
                Ok(chosen) => {
                    page::save_theme_preference(chosen);
                    preference.set(chosen);
                }
                Err(e) => Logger::warn_with_component("theme", &e.to_string()),
            }
        })
    };

    html! {
        <div class="card display-settings-card">
            <div class="form-group">
                <label for="theme-select">{"Theme"}</label>
                <select id="theme-select" name="theme" class="form-control" onchange={on_change}>
                    {for ThemePreference::ALL.iter().map(|option| html! {
                        <option value={option.as_str()} selected={*option == *preference}>
                            {option.label()}
                        </option>
                    })}
                </select>
            </div>
        </div>
    }
}
