//! Case-management dashboard for a legal practice.
//!
//! Server-rendered pages over an external case backend: the backend owns
//! cases, users and the status workflow; this crate signs users in, shows
//! cases grouped by status and turns form submissions into backend calls.

pub mod auth;
pub mod backend;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod templates_structs;
