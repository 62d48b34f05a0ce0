//! Receiver-side dispatch: one inbound envelope in, one render update out.
//!
//! `Session::apply` is the state machine of the receiver loop. It mutates
//! session state (conversation id capture, running flag) and returns a
//! [`ServerUpdate`] describing what to show the user. Rendering itself is
//! left to the caller so the transitions stay unit-testable.

use vetchat_types::conversation::ConversationStatus;
use vetchat_types::protocol::ServerEnvelope;

use crate::session::Session;

/// What the receiver loop should render after applying one envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerUpdate {
    /// Partial assistant text; print without a trailing newline.
    Chunk(String),

    /// Conversation flow-state change, rendered as a status line.
    Status(String),

    /// Server-reported failure; the session keeps running.
    Error(String),

    /// The conversation is over.
    Ended {
        message: Option<String>,
        status: Option<String>,
    },

    /// Frame with a tag this client does not recognize.
    Unrecognized(String),
}

impl Session {
    /// Apply one inbound envelope to the session.
    ///
    /// Captures the conversation id from `greeting` and `status_update`
    /// frames that carry one, and stops the session on a `DONE` status or a
    /// `conversation_end`. After this returns, callers should check
    /// [`Session::is_running`] before reading the next frame.
    pub fn apply(&self, envelope: ServerEnvelope) -> ServerUpdate {
        match envelope {
            ServerEnvelope::Greeting {
                message,
                conversation_id,
            } => {
                if let Some(id) = conversation_id {
                    self.set_conversation_id(&id);
                }
                ServerUpdate::Chunk(message)
            }

            ServerEnvelope::Message { message, .. } => ServerUpdate::Chunk(message),

            ServerEnvelope::StatusUpdate {
                status,
                conversation_id,
            } => {
                if let Some(id) = conversation_id {
                    self.set_conversation_id(&id);
                }
                if status
                    .parse::<ConversationStatus>()
                    .is_ok_and(ConversationStatus::is_done)
                {
                    self.stop();
                }
                ServerUpdate::Status(status)
            }

            ServerEnvelope::Error { error } => ServerUpdate::Error(error),

            ServerEnvelope::ConversationEnd { message, status } => {
                self.stop();
                ServerUpdate::Ended { message, status }
            }

            ServerEnvelope::Unknown { kind } => ServerUpdate::Unrecognized(kind),
        }
    }
}
