//! Info check page mounted at `/info`.
//!
//! Loads `/api/info` once on mount and shows the payload or the failure.

#[cfg(test)]
#[path = "info_test.rs"]
mod info_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::nav_bar::NavBar;
use crate::components::user_info_card::UserInfoCard;
use crate::net::types::RequestFailed;

/// User-facing text for a failed info request.
pub(crate) fn failure_message(err: &RequestFailed) -> String {
    if err.is_unauthorized() {
        "You are not signed in.".to_owned()
    } else {
        format!("Could not load your info ({err}).")
    }
}

/// Failure notice with a login link for unauthorized answers.
#[component]
pub fn InfoFailure(error: RequestFailed) -> impl IntoView {
    let show_login = error.is_unauthorized();
    view! {
        <div class="info-failure">
            <p class="info-failure__message">{failure_message(&error)}</p>
            <Show when=move || show_login>
                <A href="/login">"Log in"</A>
            </Show>
        </div>
    }
}

#[component]
pub fn CheckInfoPage() -> impl IntoView {
    let info = LocalResource::new(|| crate::net::api::fetch_info());

    view! {
        <div class="info-page">
            <NavBar/>
            <h1>"My info"</h1>
            <Suspense fallback=move || view! { <p>"Loading info..."</p> }>
                {move || {
                    info.get()
                        .map(|result| match result {
                            Ok(resp) => view! { <UserInfoCard info=resp/> }.into_any(),
                            Err(error) => view! { <InfoFailure error=error/> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
