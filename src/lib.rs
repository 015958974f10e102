//! Commit Kit - front-end support for a Git client.
//!
//! This library provides the commit-list filtering DSL (`author:alice`,
//! `sha:abc,def`) and the focus-aware keyboard shortcut bindings used by
//! the client's commit views.

pub mod commit;
pub mod config;
pub mod error;
pub mod filters;
pub mod logging;
pub mod shortcuts;
