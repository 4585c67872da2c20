use yew::prelude::*;
use crate::hooks::use_sidebar::use_sidebar;

#[derive(Properties, PartialEq)]
pub struct PageLayoutProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Page shell with the collapsible sidebar
#[function_component(PageLayout)]
pub fn page_layout(props: &PageLayoutProps) -> Html {
    let sidebar = use_sidebar();

    html! {
        <div id="page-body" class={classes!("page-body", sidebar.state.body_class())}>
            <aside class="sidebar">
                <button
                    id="sidebar-toggle"
                    type="button"
                    class="sidebar-toggle"
                    aria-label="Toggle sidebar"
                    aria-expanded={(!sidebar.state.is_collapsed()).to_string()}
                    onclick={sidebar.toggle}
                >
                    {"☰"}
                </button>
                <nav class="sidebar-nav">
                    <a href="/" class="sidebar-link">{"Transactions"}</a>
                    <a href="/plan-settings" class="sidebar-link">{"Plan Settings"}</a>
                    <a href="/display-settings" class="sidebar-link">{"Display Settings"}</a>
                </nav>
            </aside>

            <main class="main">
                <div class="container">
                    <h1 class="page-title">{props.title.clone()}</h1>
                    {props.children.clone()}
                </div>
            </main>
        </div>
    }
}
