//! Registration page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="register-page">
            <h1>"Register"</h1>
            <p>"Create an account to post and comment."</p>
            <p class="register-page__alt">
                "Already registered? "
                <A href="/login">"Log in"</A>
            </p>
        </div>
    }
}
