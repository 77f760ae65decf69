use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::catalog::order::ui::OrdersPage;
use crate::catalog::product::ui::{CalculatorPage, ProductsPage};
use crate::system::auth::context::AuthProvider;
use crate::system::pages::{HomePage, LoginPage, LogoutPage, OverviewPage, SignupPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <Router>
                <Routes fallback=|| view! { <p>"Not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/auth/login") view=LoginPage />
                    <Route path=path!("/auth/signup") view=SignupPage />
                    <Route path=path!("/api/auth/logout") view=LogoutPage />
                    <Route path=path!("/dashboard") view=OverviewPage />
                    <Route path=path!("/dashboard/calculator") view=CalculatorPage />
                    <Route path=path!("/dashboard/products") view=ProductsPage />
                    <Route path=path!("/dashboard/orders") view=OrdersPage />
                </Routes>
            </Router>
        </AuthProvider>
    }
}
