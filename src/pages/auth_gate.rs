//! Entry page mounted at `/`.
//!
//! Placeholder only: no session check and no redirect happen here.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn AuthGatePage() -> impl IntoView {
    view! {
        <div class="auth-gate">
            <h1>"Social Network"</h1>
            <div class="auth-gate__actions">
                <A href="/login">"Log in"</A>
                <A href="/register">"Register"</A>
                <A href="/home">"Go to the forum"</A>
            </div>
        </div>
    }
}
