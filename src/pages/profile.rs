//! Profile page mounted at `/profile`.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use super::info::InfoFailure;
use crate::components::nav_bar::NavBar;
use crate::components::user_info_card::UserInfoCard;
use crate::net::types::InfoResponse;

/// Heading for the profile: the user's name, or a generic title when the
/// payload is not a user record.
pub(crate) fn profile_heading(info: &InfoResponse) -> String {
    info.user_info()
        .map_or_else(|| "Profile".to_owned(), |user| user.display_name())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let info = LocalResource::new(|| crate::net::api::fetch_info());

    view! {
        <div class="profile-page">
            <NavBar/>
            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    info.get()
                        .map(|result| match result {
                            Ok(resp) => {
                                let heading = profile_heading(&resp);
                                view! {
                                    <section class="profile-page__body">
                                        <h1>{heading}</h1>
                                        <UserInfoCard info=resp/>
                                    </section>
                                }
                                    .into_any()
                            }
                            Err(error) => view! { <InfoFailure error=error/> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
