use leptos::prelude::*;

use crate::routes::routes::paths;

/// Dashboard chrome: sidebar navigation plus a content area.
///
/// Plain anchors: the router intercepts same-origin navigation.
#[component]
pub fn DashboardLayout(
    #[prop(optional)] title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="dashboard">
            <nav class="sidebar">
                <a href=paths::DASHBOARD>"Overview"</a>
                <a href=paths::CALCULATOR>"Calculator"</a>
                <a href=paths::PRODUCTS>"Products"</a>
                <a href=paths::ORDERS>"Orders"</a>
                <a href=paths::LOGOUT>"Logout"</a>
            </nav>
            <main class="content">
                {(!title.is_empty()).then(|| view! { <h1>{title}</h1> })}
                {children()}
            </main>
        </div>
    }
}
