//! Session state and dispatch logic for vetchat.
//!
//! This crate owns the shared state the two client loops cooperate on: the
//! conversation id assigned by the server and the stop-only running flag.
//! It depends only on `vetchat-types` -- never on the WebSocket transport
//! or any terminal IO.

pub mod dispatch;
pub mod session;

pub use dispatch::ServerUpdate;
pub use session::Session;
