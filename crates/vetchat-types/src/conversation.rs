//! Conversation flow states reported by the screening server.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Flow state of a screening conversation.
///
/// The server reports these in `status_update` frames as SCREAMING_SNAKE
/// strings. Only `DONE` carries behavioral meaning for the client (it ends
/// the session); other values are display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConversationStatus {
    Pending,
    Start,
    OnReq,
    OnJobQuestions,
    Done,
}

impl ConversationStatus {
    /// Whether this status ends the conversation.
    pub fn is_done(self) -> bool {
        matches!(self, ConversationStatus::Done)
    }
}

impl fmt::Display for ConversationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversationStatus::Pending => write!(f, "PENDING"),
            ConversationStatus::Start => write!(f, "START"),
            ConversationStatus::OnReq => write!(f, "ON_REQ"),
            ConversationStatus::OnJobQuestions => write!(f, "ON_JOB_QUESTIONS"),
            ConversationStatus::Done => write!(f, "DONE"),
        }
    }
}

impl FromStr for ConversationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(ConversationStatus::Pending),
            "START" => Ok(ConversationStatus::Start),
            "ON_REQ" => Ok(ConversationStatus::OnReq),
            "ON_JOB_QUESTIONS" => Ok(ConversationStatus::OnJobQuestions),
            "DONE" => Ok(ConversationStatus::Done),
            other => Err(format!("invalid conversation status: '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for status in [
            ConversationStatus::Pending,
            ConversationStatus::Start,
            ConversationStatus::OnReq,
            ConversationStatus::OnJobQuestions,
            ConversationStatus::Done,
        ] {
            let s = status.to_string();
            let parsed: ConversationStatus = s.parse().unwrap();
            assert_eq!(status, parsed);
        }
    }

    #[test]
    fn test_status_serde() {
        let status = ConversationStatus::OnJobQuestions;
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, "\"ON_JOB_QUESTIONS\"");
        let parsed: ConversationStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ConversationStatus::OnJobQuestions);
    }

    #[test]
    fn test_only_done_is_done() {
        assert!(ConversationStatus::Done.is_done());
        assert!(!ConversationStatus::Pending.is_done());
        assert!(!ConversationStatus::OnReq.is_done());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!("NOT_A_STATUS".parse::<ConversationStatus>().is_err());
        // Parsing is exact: the wire format is upper-case.
        assert!("done".parse::<ConversationStatus>().is_err());
    }
}
