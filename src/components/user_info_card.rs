//! Card rendering a user-info payload.
//!
//! Uses the typed `UserInfo` view when the payload has the backend's shape
//! and falls back to pretty-printed JSON otherwise.

use leptos::prelude::*;

use crate::net::types::InfoResponse;

#[component]
pub fn UserInfoCard(info: InfoResponse) -> impl IntoView {
    match info.user_info() {
        Some(user) => view! {
            <dl class="user-info">
                <dt>"Username"</dt>
                <dd>{user.username}</dd>
                <dt>"Email"</dt>
                <dd>{user.email}</dd>
                <dt>"First name"</dt>
                <dd>{user.firstname}</dd>
                <dt>"Last name"</dt>
                <dd>{user.lastname}</dd>
                <dt>"Date of birth"</dt>
                <dd>{user.date}</dd>
                <dt>"Bio"</dt>
                <dd>{user.bio}</dd>
            </dl>
        }
        .into_any(),
        None => view! { <pre class="user-info user-info--raw">{format!("{:#}", *info)}</pre> }.into_any(),
    }
}
