//! Wire envelopes for the screening chat protocol.
//!
//! The client and server exchange JSON text frames over one persistent
//! WebSocket connection. Every frame is a single envelope tagged by a
//! `type` field; payload keys are camelCase on the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProtocolError;

/// Requests the client sends to the server.
///
/// These are the only outbound shapes in the protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEnvelope {
    /// Open a new screening conversation for a user/job pair.
    #[serde(rename_all = "camelCase")]
    StartConversation { user_id: String, job_id: String },

    /// Send one chat message within an active conversation.
    #[serde(rename_all = "camelCase")]
    SendMessage {
        conversation_id: String,
        message: String,
    },

    /// End the active conversation.
    #[serde(rename_all = "camelCase")]
    EndConversation { conversation_id: String },
}

/// Inbound envelope type tags the client knows how to handle.
const KNOWN_KINDS: [&str; 5] = [
    "greeting",
    "message",
    "status_update",
    "error",
    "conversation_end",
];

fn default_error_text() -> String {
    "Unknown error".to_string()
}

/// Frames the server streams back to the client.
///
/// `greeting` and `message` carry partial assistant text meant to be
/// concatenated across frames. A tag outside [`KNOWN_KINDS`] parses to
/// [`ServerEnvelope::Unknown`] so the caller can warn and keep reading;
/// only structurally broken frames are errors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEnvelope {
    /// Streamed greeting chunk; the first one usually carries the
    /// conversation id assigned by the server.
    #[serde(rename_all = "camelCase")]
    Greeting {
        #[serde(default)]
        message: String,
        #[serde(default)]
        conversation_id: Option<String>,
    },

    /// Streamed assistant message chunk.
    #[serde(rename_all = "camelCase")]
    Message {
        #[serde(default)]
        message: String,
        #[serde(default)]
        conversation_id: Option<String>,
    },

    /// Conversation flow-state change.
    #[serde(rename_all = "camelCase")]
    StatusUpdate {
        #[serde(default)]
        status: String,
        #[serde(default)]
        conversation_id: Option<String>,
    },

    /// Server-side failure report.
    Error {
        #[serde(default = "default_error_text")]
        error: String,
    },

    /// The conversation is over; carries an optional closing message and
    /// final status.
    ConversationEnd {
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        status: Option<String>,
    },

    /// A well-formed frame with a tag this client does not recognize.
    #[serde(skip)]
    Unknown { kind: String },
}

impl ServerEnvelope {
    /// Parse one inbound text frame.
    ///
    /// Distinguishes three cases: a known envelope, a well-formed frame
    /// with an unrecognized tag (returned as [`ServerEnvelope::Unknown`]),
    /// and a malformed frame ([`ProtocolError`]).
    pub fn parse(frame: &str) -> Result<Self, ProtocolError> {
        let value: Value =
            serde_json::from_str(frame).map_err(|err| ProtocolError::Malformed(err.to_string()))?;

        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(ProtocolError::MissingKind)?
            .to_string();

        if !KNOWN_KINDS.contains(&kind.as_str()) {
            return Ok(ServerEnvelope::Unknown { kind });
        }

        serde_json::from_value(value).map_err(|err| ProtocolError::Decode {
            kind,
            reason: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_conversation_wire_format() {
        let envelope = ClientEnvelope::StartConversation {
            user_id: "u1".to_string(),
            job_id: "j1".to_string(),
        };
        let json = serde_json::to_string(&envelope).unwrap();
        assert_eq!(
            json,
            r#"{"type":"start_conversation","userId":"u1","jobId":"j1"}"#
        );
    }

    #[test]
    fn test_send_message_wire_format() {
        let envelope = ClientEnvelope::SendMessage {
            conversation_id: "c1".to_string(),
            message: "I have 5 years of experience".to_string(),
        };
        let json = serde_json::to_string(&envelope).unwrap();
        assert_eq!(
            json,
            r#"{"type":"send_message","conversationId":"c1","message":"I have 5 years of experience"}"#
        );
    }

    #[test]
    fn test_end_conversation_wire_format() {
        let envelope = ClientEnvelope::EndConversation {
            conversation_id: "c1".to_string(),
        };
        let json = serde_json::to_string(&envelope).unwrap();
        assert_eq!(json, r#"{"type":"end_conversation","conversationId":"c1"}"#);
    }

    #[test]
    fn test_client_envelope_roundtrip() {
        let envelopes = [
            ClientEnvelope::StartConversation {
                user_id: "u1".to_string(),
                job_id: "j1".to_string(),
            },
            ClientEnvelope::SendMessage {
                conversation_id: "c1".to_string(),
                message: "hello".to_string(),
            },
            ClientEnvelope::EndConversation {
                conversation_id: "c1".to_string(),
            },
        ];
        for envelope in envelopes {
            let json = serde_json::to_string(&envelope).unwrap();
            let parsed: ClientEnvelope = serde_json::from_str(&json).unwrap();
            assert_eq!(envelope, parsed);
        }
    }

    #[test]
    fn test_parse_greeting_with_conversation_id() {
        let envelope =
            ServerEnvelope::parse(r#"{"type":"greeting","message":"Hi ","conversationId":"c1"}"#)
                .unwrap();
        assert_eq!(
            envelope,
            ServerEnvelope::Greeting {
                message: "Hi ".to_string(),
                conversation_id: Some("c1".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_message_without_conversation_id() {
        let envelope = ServerEnvelope::parse(r#"{"type":"message","message":"there"}"#).unwrap();
        assert_eq!(
            envelope,
            ServerEnvelope::Message {
                message: "there".to_string(),
                conversation_id: None,
            }
        );
    }

    #[test]
    fn test_parse_message_defaults_empty_chunk() {
        let envelope = ServerEnvelope::parse(r#"{"type":"message"}"#).unwrap();
        assert_eq!(
            envelope,
            ServerEnvelope::Message {
                message: String::new(),
                conversation_id: None,
            }
        );
    }

    #[test]
    fn test_parse_status_update() {
        let envelope =
            ServerEnvelope::parse(r#"{"type":"status_update","status":"DONE","conversationId":"c1"}"#)
                .unwrap();
        assert_eq!(
            envelope,
            ServerEnvelope::StatusUpdate {
                status: "DONE".to_string(),
                conversation_id: Some("c1".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_error_defaults_text() {
        let envelope = ServerEnvelope::parse(r#"{"type":"error"}"#).unwrap();
        assert_eq!(
            envelope,
            ServerEnvelope::Error {
                error: "Unknown error".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_conversation_end() {
        let envelope = ServerEnvelope::parse(
            r#"{"type":"conversation_end","message":"Good luck!","status":"DONE"}"#,
        )
        .unwrap();
        assert_eq!(
            envelope,
            ServerEnvelope::ConversationEnd {
                message: Some("Good luck!".to_string()),
                status: Some("DONE".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_unknown_kind_preserves_tag() {
        let envelope = ServerEnvelope::parse(r#"{"type":"foo"}"#).unwrap();
        assert_eq!(
            envelope,
            ServerEnvelope::Unknown {
                kind: "foo".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_need_follow_up_is_unknown() {
        // Emitted by some server versions; this client does not handle it.
        let envelope = ServerEnvelope::parse(r#"{"type":"need_follow_up"}"#).unwrap();
        assert_eq!(
            envelope,
            ServerEnvelope::Unknown {
                kind: "need_follow_up".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = ServerEnvelope::parse("not json").unwrap_err();
        assert!(matches!(err, ProtocolError::Malformed(_)));
    }

    #[test]
    fn test_parse_rejects_missing_type() {
        let err = ServerEnvelope::parse(r#"{"message":"hi"}"#).unwrap_err();
        assert!(matches!(err, ProtocolError::MissingKind));
    }

    #[test]
    fn test_parse_rejects_non_string_type() {
        let err = ServerEnvelope::parse(r#"{"type":42}"#).unwrap_err();
        assert!(matches!(err, ProtocolError::MissingKind));
    }

    #[test]
    fn test_parse_rejects_bad_payload_for_known_kind() {
        let err = ServerEnvelope::parse(r#"{"type":"greeting","message":42}"#).unwrap_err();
        assert!(matches!(err, ProtocolError::Decode { .. }));
    }
}
