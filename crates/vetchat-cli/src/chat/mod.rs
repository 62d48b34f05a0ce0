//! Interactive screening chat session.
//!
//! This module implements the full client loop: the WebSocket receiver
//! task streaming server output to the terminal, the async readline input
//! loop with slash commands, and the driver that wires the two together
//! over shared session state. Entry point: `loop_runner::run_chat`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
