//! Reusable UI components shared by pages.

pub mod nav_bar;
pub mod user_info_card;
