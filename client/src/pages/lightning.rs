//! Child landing page for Lightning payments into the jar.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::login_flow::{RouterNavigator, sign_out};

#[component]
pub fn LightningPaymentPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());

    let saver_name = move || {
        session.with(|state| {
            state
                .user()
                .and_then(|user| user.display_name().map(str::to_owned))
                .unwrap_or_else(|| "Saver".to_owned())
        })
    };

    let navigator = RouterNavigator(navigate);
    let on_logout = move |_| sign_out(&session, &navigator);

    view! {
        <div class="lightning-page">
            <header class="lightning-page__header">
                <span>{saver_name} "'s Jar"</span>
                <button class="login-button login-button--outline" type="button" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <h1>"Lightning Payment"</h1>
            <p>"Add sats to your jar with a Lightning payment."</p>
        </div>
    }
}
