//! Static route table: URL path to page identifier.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` mounts one `leptos_router` route per entry here, so this table
//! is the single list of navigable paths. Matching itself belongs to the
//! router; `lookup` exists for code that needs the same answer outside it.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Page-level component a route mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    UserLogin,
    UserRegister,
    AuthGate,
    CheckInfo,
    ForumPage,
    ProfilePage,
}

impl PageId {
    /// Human-readable label for navigation links.
    pub const fn title(self) -> &'static str {
        match self {
            Self::UserLogin => "Log in",
            Self::UserRegister => "Register",
            Self::AuthGate => "Start",
            Self::CheckInfo => "My info",
            Self::ForumPage => "Forum",
            Self::ProfilePage => "Profile",
        }
    }

    /// Router segment for this page (its path without the leading `/`).
    pub const fn segment(self) -> &'static str {
        match self {
            Self::UserLogin => "login",
            Self::UserRegister => "register",
            Self::AuthGate => "",
            Self::CheckInfo => "info",
            Self::ForumPage => "home",
            Self::ProfilePage => "profile",
        }
    }
}

/// One binding of a literal path to a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub page: PageId,
}

/// Number of table entries. `app::App` asserts this at compile time.
pub const ROUTE_COUNT: usize = 6;

pub static ROUTES: [Route; ROUTE_COUNT] = [
    Route { path: "/login", page: PageId::UserLogin },
    Route { path: "/register", page: PageId::UserRegister },
    Route { path: "/", page: PageId::AuthGate },
    Route { path: "/info", page: PageId::CheckInfo },
    Route { path: "/home", page: PageId::ForumPage },
    Route { path: "/profile", page: PageId::ProfilePage },
];

pub fn routes() -> &'static [Route] {
    &ROUTES
}

/// Exact-match lookup; first entry wins. Unregistered paths yield `None`.
pub fn lookup(path: &str) -> Option<PageId> {
    ROUTES.iter().find(|r| r.path == path).map(|r| r.page)
}
