//! Top navigation built from the route table.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{PageId, routes};

/// Links to every routed page except the auth gate at `/`.
#[component]
pub fn NavBar() -> impl IntoView {
    let links = routes()
        .iter()
        .filter(|r| r.page != PageId::AuthGate)
        .map(|r| {
            view! {
                <A href=r.path attr:class="nav-bar__link">
                    {r.page.title()}
                </A>
            }
        })
        .collect::<Vec<_>>();

    view! { <nav class="nav-bar">{links}</nav> }
}
