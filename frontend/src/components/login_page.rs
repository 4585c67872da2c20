use yew::prelude::*;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;
use shared::auth::LOGIN_SUCCESS_MESSAGE;
use shared::{AuthConfig, AuthError, LoginForm};
use crate::services::identity::IdentityClient;
use crate::services::logging::Logger;
use crate::services::page;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    /// Identity provider settings; `None` when the page was served without them
    pub auth: Option<AuthConfig>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error_message = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error_message = error_message.clone();
        let is_submitting = is_submitting.clone();
        let auth = props.auth.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form = LoginForm {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let request = match form.validate() {
                Ok(request) => request,
                Err(e) => {
                    error_message.set(Some(e.to_string()));
                    return;
                }
            };
            let Some(config) = auth.clone() else {
                error_message.set(Some(AuthError::NotConfigured.to_string()));
                return;
            };

            let client = IdentityClient::new(config);
            let error_message = error_message.clone();
            let is_submitting = is_submitting.clone();

            is_submitting.set(true);
            error_message.set(None);

            spawn_local(async move {
                match client.sign_in_with_password(&request).await {
                    Ok(user) => {
                        Logger::info_with_component("login", &format!("Signed in as {}", user.email));
                        page::alert(LOGIN_SUCCESS_MESSAGE);
                    }
                    Err(e) => {
                        Logger::warn_with_component("login", &e.to_string());
                        error_message.set(Some(e.to_string()));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <div class="login-container">
            <form id="login-form" class="login-form" onsubmit={on_submit}>
                <h2 class="login-title">{"Sign in"}</h2>

                {if let Some(error) = (*error_message).clone() {
                    html! {
                        <div class="alert alert-danger login-error">{error}</div>
                    }
                } else {
                    html! {}
                }}

                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input
                        id="email"
                        type="email"
                        class="form-control"
                        value={(*email).clone()}
                        onchange={on_email_change}
                        disabled={*is_submitting}
                        required=true
                        autofocus=true
                    />
                </div>

                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input
                        id="password"
                        type="password"
                        class="form-control"
                        value={(*password).clone()}
                        onchange={on_password_change}
                        disabled={*is_submitting}
                        required=true
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                    {if *is_submitting { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
