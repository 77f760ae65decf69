use leptos::prelude::*;

use crate::routes::routes::paths;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <p>"E-commerce, login to use calculator"</p>
            <a class="btn-primary" href=paths::LOGIN>
                "Login"
            </a>
        </section>
    }
}
