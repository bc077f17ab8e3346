//! Parent login form: phone number + PIN.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::api_status::ApiStatusLine;
use crate::config::ApiConfig;
use crate::net::types::LoginCredentials;
use crate::state::login::BusyGuard;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

#[component]
pub fn ParentLoginForm(on_child_login: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let phone_number = RwSignal::new(String::new());
    let pin = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(guard) = BusyGuard::acquire(busy) else {
            return;
        };
        let credentials = LoginCredentials::parent(phone_number.get_untracked(), pin.get_untracked());

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
        <div class="login-card login-card--parent">
            <div class="login-card__brand">"Sats Jar"</div>
            <p class="login-card__subtitle">"Welcome back, Parent"</p>
            <form class="login-form" on:submit=on_submit>
                <label class="login-label" for="phone">"Phone Number"</label>
                <input
                    id="phone"
                    class="login-input"
                    type="tel"
                    placeholder="+254712345678"
                    prop:value=move || phone_number.get()
                    on:input=move |ev| phone_number.set(event_target_value(&ev))
                />
                <p class="login-hint">"Enter the phone number registered with your account"</p>
                <label class="login-label" for="pin">"PIN"</label>
                <input
                    id="pin"
                    class="login-input"
                    type="password"
                    placeholder="Enter your PIN"
                    prop:value=move || pin.get()
                    on:input=move |ev| pin.set(event_target_value(&ev))
                />
                <ApiStatusLine/>
                <button class="login-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Login as Parent" }}
                </button>
            </form>
            <div class="login-divider"></div>
            <button
                class="login-button login-button--outline"
                type="button"
                on:click=move |_| on_child_login.run(())
            >
                "Child Login"
                <span class="login-badge">"For Kids"</span>
            </button>
        </div>
    }
}
