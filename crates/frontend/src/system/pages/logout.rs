use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::routes::routes::paths;
use crate::system::auth::{context::use_auth, context::AuthState, storage};

/// Clears the session and returns to the home page.
#[component]
pub fn LogoutPage() -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        storage::clear_token();
        set_auth_state.set(AuthState::default());
        navigate(paths::HOME, NavigateOptions::default());
    });

    view! { <p>"Signing out..."</p> }
}
