use thiserror::Error;

/// Errors decoding an inbound frame.
///
/// An unrecognized `type` tag is NOT an error (it parses to
/// `ServerEnvelope::Unknown`); these cover structurally broken frames only.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed frame: {0}")]
    Malformed(String),

    #[error("frame has no 'type' tag")]
    MissingKind,

    #[error("invalid '{kind}' payload: {reason}")]
    Decode { kind: String, reason: String },
}

/// Errors composing an outbound request from session state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no active conversation")]
    NoActiveConversation,
}
