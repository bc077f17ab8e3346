//! Child login form: jar ID + PIN.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ApiConfig;
use crate::net::types::LoginCredentials;
use crate::state::login::BusyGuard;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

#[component]
pub fn ChildLoginForm(on_back: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let jar_id = RwSignal::new(String::new());
    let child_pin = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(guard) = BusyGuard::acquire(busy) else {
            return;
        };
        let credentials = LoginCredentials::child(jar_id.get_untracked(), child_pin.get_untracked());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigator = crate::util::login_flow::RouterNavigator(navigate.clone());
            leptos::task::spawn_local(async move {
                let _guard = guard;
                let effects = crate::util::login_flow::LoginEffects {
                    sessions: &session,
                    notifications: &toasts,
                    navigator: &navigator,
                };
                let transport = crate::net::transport::BrowserTransport;
                let _ = crate::util::login_flow::submit_login(&transport, &api, &effects, credentials).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (guard, credentials, &api, session, toasts, &navigate);
        }
    };

    view! {
        <div class="login-page__child">
            <button class="login-back" type="button" on:click=move |_| on_back.run(())>
                "Back"
            </button>
            <div class="login-card login-card--child">
                <h2 class="login-card__title">"Kid's Login Zone"</h2>
                <h3 class="login-card__greeting">"Hello, Saver!"</h3>
                <p class="login-card__subtitle">"Log in to see your savings jar"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="jar-id">"Your Jar ID"</label>
                    <input
                        id="jar-id"
                        class="login-input"
                        type="text"
                        placeholder="Enter your Jar ID here"
                        prop:value=move || jar_id.get()
                        on:input=move |ev| jar_id.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="child-pin">"Your Secret PIN"</label>
                    <input
                        id="child-pin"
                        class="login-input"
                        type="password"
                        placeholder="Enter your PIN here"
                        prop:value=move || child_pin.get()
                        on:input=move |ev| child_pin.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Opening your jar..." } else { "Let's Go!" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
