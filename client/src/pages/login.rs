//! Login page switching between the parent and child forms.

use leptos::prelude::*;

use crate::components::child_login_form::ChildLoginForm;
use crate::components::parent_login_form::ParentLoginForm;
use crate::state::login::LoginMode;

#[component]
pub fn LoginPage() -> impl IntoView {
    let mode = RwSignal::new(LoginMode::Parent);
    let show_child = Callback::new(move |()| mode.set(LoginMode::Child));
    let show_parent = Callback::new(move |()| mode.set(LoginMode::Parent));

    view! {
        <div class="login-page">
            {move || match mode.get() {
                LoginMode::Parent => view! { <ParentLoginForm on_child_login=show_child/> }.into_any(),
                LoginMode::Child => view! { <ChildLoginForm on_back=show_parent/> }.into_any(),
            }}
        </div>
    }
}
