//! Connectivity indicator for the parent login view.
//!
//! The probe runs once when the component first renders in the browser and
//! only updates the text; it never gates submission.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::api::ApiStatus;

fn status_class(status: &ApiStatus) -> &'static str {
    match status {
        ApiStatus::Checking => "api-status api-status--checking",
        ApiStatus::Connected => "api-status api-status--ok",
        ApiStatus::Failed { .. } | ApiStatus::Error(_) => "api-status api-status--error",
    }
}

#[component]
pub fn ApiStatusLine() -> impl IntoView {
    let api = expect_context::<ApiConfig>();
    let status = RwSignal::new(ApiStatus::Checking);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::probe_health(&crate::net::transport::BrowserTransport, &api).await;
        let _ = status.try_set(result);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = api;

    view! {
        <div class=move || status.with(status_class)>{move || status.with(ApiStatus::label)}</div>
    }
}
