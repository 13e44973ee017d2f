//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    auth_gate::AuthGatePage, forum::ForumPage, info::CheckInfoPage, login::LoginPage, profile::ProfilePage,
    register::RegisterPage,
};
use crate::routes::{PageId, ROUTE_COUNT};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Routes `App` mounts below. Growing the table fails this until a
/// `<Route>` is added for the new entry.
pub(crate) const MOUNTED_ROUTES: usize = 6;
const _: () = assert!(ROUTE_COUNT == MOUNTED_ROUTES, "every routes::ROUTES entry needs a <Route> in App");

/// Root application component.
///
/// Lists one `<Route>` per `routes::ROUTES` entry by hand; segments come
/// from `PageId::segment`, and the count is checked against the table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Social Network"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment(PageId::UserLogin.segment()) view=LoginPage/>
                <Route path=StaticSegment(PageId::UserRegister.segment()) view=RegisterPage/>
                <Route path=StaticSegment(PageId::AuthGate.segment()) view=AuthGatePage/>
                <Route path=StaticSegment(PageId::CheckInfo.segment()) view=CheckInfoPage/>
                <Route path=StaticSegment(PageId::ForumPage.segment()) view=ForumPage/>
                <Route path=StaticSegment(PageId::ProfilePage.segment()) view=ProfilePage/>
            </Routes>
        </Router>
    }
}
