//! Parent landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Destination of a successful parent login. Guarded: an empty session
//! redirects to `/login`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::login_flow::{RouterNavigator, sign_out};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());

    let greeting = move || {
        session.with(|state| {
            state
                .user()
                .and_then(|user| user.display_name().map(str::to_owned))
                .unwrap_or_else(|| "Parent".to_owned())
        })
    };

    let navigator = RouterNavigator(navigate);
    let on_logout = move |_| sign_out(&session, &navigator);

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <span class="home-page__brand">"Sats Jar"</span>
                <button class="login-button login-button--outline" type="button" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <h1>"Welcome, " {greeting}</h1>
            <p class="home-page__subtitle">"Manage your family's savings jars."</p>
        </div>
    }
}
