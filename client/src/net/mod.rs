//! Networking modules for the query endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the JSON contract and error taxonomy, `api` performs the
//! request.

pub mod api;
pub mod types;
