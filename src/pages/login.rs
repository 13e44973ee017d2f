//! Login page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>"Log in"</h1>
            <p>"Sign in to join the conversation."</p>
            <p class="login-page__alt">
                "No account yet? "
                <A href="/register">"Register"</A>
            </p>
        </div>
    }
}
