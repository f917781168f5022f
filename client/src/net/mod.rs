//! Networking modules for the content proxy.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the per-page collection queries against the site server and
//! `types` defines the shared CMS record schema.

pub mod api;
pub mod types;
