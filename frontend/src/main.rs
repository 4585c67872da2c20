use yew::prelude::*;
use shared::{PageConfig, PageKind};

mod components;
mod hooks;
mod services;

use components::{LoginPage, PageLayout, SubcategoryManager, ThemeSelector, TransactionsPage};
use services::api::ApiClient;
use services::logging::Logger;
use services::page;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: PageConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = &props.config;
    let api_client = use_memo(config.api_base_url.clone(), |base_url| {
        ApiClient::with_base_url(base_url.clone())
    });

    match config.page {
        PageKind::Login => html! {
            <LoginPage auth={config.auth.clone()} />
        },
        PageKind::Transactions => html! {
            <PageLayout title="Transactions">
                <TransactionsPage api_client={(*api_client).clone()} config={config.clone()} />
            </PageLayout>
        },
        PageKind::PlanSettings => html! {
            <PageLayout title="Plan Settings">
                <SubcategoryManager
                    api_client={(*api_client).clone()}
                    groups={config.subcategory_groups.clone()}
                />
            </PageLayout>
        },
        PageKind::DisplaySettings => html! {
            <PageLayout title="Display Settings">
                <ThemeSelector />
            </PageLayout>
        },
    }
}

fn main() {
    let theme = page::apply_initial_theme();
    let config = page::load_page_config();
    Logger::debug_with_component(
        "app",
        &format!("Rendering {:?} page with {} theme", config.page, theme.as_str()),
    );

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
