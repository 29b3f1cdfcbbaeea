//! Core types and calendar utilities for dayplan.
//!
//! This crate is shared by dayplan-server and the dayplan CLI:
//! - `event` for the event record and its wire format
//! - `validation` and `overlap` for checking a candidate event before it is saved
//! - `date_grid` and `holiday` for laying out week and month views
//! - `search`, `notification` and `form` for the front-end workflows
//! - `repository` for the event store behind the REST API

pub mod config;
pub mod constants;
pub mod date_grid;
pub mod error;
pub mod event;
pub mod form;
pub mod holiday;
pub mod notification;
pub mod overlap;
pub mod repository;
pub mod search;
pub mod validation;

// Re-export the event types at crate root for convenience
pub use event::*;
