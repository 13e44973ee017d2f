//! Forum page mounted at `/home`.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;

#[component]
pub fn ForumPage() -> impl IntoView {
    view! {
        <div class="forum-page">
            <NavBar/>
            <h1>"Forum"</h1>
        </div>
    }
}
