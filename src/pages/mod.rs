//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! One page per `routes::PageId`. Pages are mount targets only: login,
//! registration and forum behavior live on the backend and are not driven
//! from here. The info and profile pages read `/api/info`.

pub mod auth_gate;
pub mod forum;
pub mod info;
pub mod login;
pub mod profile;
pub mod register;
