//! Shared domain types for vetchat.
//!
//! This crate contains the types exchanged with the screening chat service
//! and the client's own domain types: wire envelopes, conversation status,
//! configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod conversation;
pub mod error;
pub mod protocol;
