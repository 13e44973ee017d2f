//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs requests, `config` says where they go and whether cookies
//! ride along, and `types` defines the payload and error schema.

pub mod api;
pub mod config;
pub mod types;
