use leptos::prelude::*;

use crate::layout::DashboardLayout;
use crate::routes::routes::paths;

#[component]
pub fn OverviewPage() -> impl IntoView {
    view! {
        <DashboardLayout>
            <section class="hero">
                <a class="btn-primary" href=paths::PRODUCTS>
                    "Simulate"
                </a>
            </section>
        </DashboardLayout>
    }
}
