//! Networking for the chat endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the transport seam and its HTTP implementation; `types` defines
//! the wire schema and the error taxonomy.

pub mod api;
pub mod types;
