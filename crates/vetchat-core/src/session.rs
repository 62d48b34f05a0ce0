//! Shared session state for the input and receiver loops.
//!
//! A `Session` is a cheaply cloneable handle: one clone lives in the
//! receiver task, one in the input loop. The conversation id is written by
//! the receiver path and read by the sender path; the running flag is a
//! cancellation token either loop may trip, and neither can reset.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio_util::sync::CancellationToken;

use vetchat_types::error::SessionError;
use vetchat_types::protocol::ClientEnvelope;

/// Shared state of one client session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<SessionInner>,
}

#[derive(Debug, Default)]
struct SessionInner {
    /// Conversation id assigned by the server. Set from inbound frames,
    /// overwritten by later values, never cleared.
    conversation_id: Mutex<Option<String>>,
    /// Stop-only running flag shared by both loops.
    shutdown: CancellationToken,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The conversation id, if the server has assigned one yet.
    pub fn conversation_id(&self) -> Option<String> {
        self.lock_conversation_id().clone()
    }

    /// Record the conversation id reported by the server.
    ///
    /// Later values overwrite earlier ones; there is no way to clear it.
    pub(crate) fn set_conversation_id(&self, id: &str) {
        *self.lock_conversation_id() = Some(id.to_string());
    }

    fn lock_conversation_id(&self) -> MutexGuard<'_, Option<String>> {
        self.inner
            .conversation_id
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether the session is still live.
    pub fn is_running(&self) -> bool {
        !self.inner.shutdown.is_cancelled()
    }

    /// Flip the running flag to stopped. Idempotent.
    pub fn stop(&self) {
        self.inner.shutdown.cancel();
    }

    /// Resolves once the session has been stopped, from either loop.
    pub async fn stopped(&self) {
        self.inner.shutdown.cancelled().await;
    }

    /// The opening request for a user/job pair. Always valid.
    pub fn start_request(&self, user_id: &str, job_id: &str) -> ClientEnvelope {
        ClientEnvelope::StartConversation {
            user_id: user_id.to_string(),
            job_id: job_id.to_string(),
        }
    }

    /// Compose a chat message request.
    ///
    /// Fails without touching the network when no conversation id has been
    /// assigned yet.
    pub fn message_request(&self, text: &str) -> Result<ClientEnvelope, SessionError> {
        let conversation_id = self
            .conversation_id()
            .ok_or(SessionError::NoActiveConversation)?;
        Ok(ClientEnvelope::SendMessage {
            conversation_id,
            message: text.to_string(),
        })
    }

    /// Compose an end-conversation request, gated the same way as
    /// [`Session::message_request`].
    pub fn end_request(&self) -> Result<ClientEnvelope, SessionError> {
        let conversation_id = self
            .conversation_id()
            .ok_or(SessionError::NoActiveConversation)?;
        Ok(ClientEnvelope::EndConversation { conversation_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_no_conversation() {
        let session = Session::new();
        assert!(session.conversation_id().is_none());
        assert!(session.is_running());
    }

    #[test]
    fn test_conversation_id_overwrites_and_never_clears() {
        let session = Session::new();
        session.set_conversation_id("c1");
        assert_eq!(session.conversation_id().as_deref(), Some("c1"));

        // Most recent value wins.
        session.set_conversation_id("c2");
        assert_eq!(session.conversation_id().as_deref(), Some("c2"));
    }

    #[test]
    fn test_stop_is_idempotent_and_visible_to_clones() {
        let session = Session::new();
        let other = session.clone();
        session.stop();
        session.stop();
        assert!(!session.is_running());
        assert!(!other.is_running());
    }

    #[test]
    fn test_start_request_carries_exact_ids() {
        let session = Session::new();
        let envelope = session.start_request("u1", "j1");
        assert_eq!(
            envelope,
            ClientEnvelope::StartConversation {
                user_id: "u1".to_string(),
                job_id: "j1".to_string(),
            }
        );
    }

    #[test]
    fn test_message_request_rejected_without_conversation() {
        let session = Session::new();
        assert_eq!(
            session.message_request("hello"),
            Err(SessionError::NoActiveConversation)
        );
    }

    #[test]
    fn test_end_request_rejected_without_conversation() {
        let session = Session::new();
        assert_eq!(session.end_request(), Err(SessionError::NoActiveConversation));
    }

    #[test]
    fn test_requests_scoped_to_active_conversation() {
        let session = Session::new();
        session.set_conversation_id("c1");

        assert_eq!(
            session.message_request("I can start Monday").unwrap(),
            ClientEnvelope::SendMessage {
                conversation_id: "c1".to_string(),
                message: "I can start Monday".to_string(),
            }
        );
        assert_eq!(
            session.end_request().unwrap(),
            ClientEnvelope::EndConversation {
                conversation_id: "c1".to_string(),
            }
        );
    }
}
