//! Shared types for the product catalogue client.
//!
//! Everything here is target independent: wire DTOs, normalized records
//! and the rules that turn vendor envelopes into them.

pub mod domain;
pub mod shared;
