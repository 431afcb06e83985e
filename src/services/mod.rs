//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the business logic so route handlers can stay focused
//! on protocol translation and auth plumbing.

pub mod auth;
pub mod progress;
pub mod quiz;
pub mod session;
pub mod tutor;
