use log::{debug, info, warn};

use crate::engine::llm_client::ChatError;
use crate::model::message::ChatMessage;

pub const GREETING: &str =
    "Hello! I'm your SportSync Assistant. How can I help you find a court today?";
pub const EMPTY_REPLY: &str = "Connection error. Please try again.";
pub const OFFLINE_FALLBACK: &str = "I'm currently offline. Please use our manual booking below.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub seq: u64,
    pub text: String,
}

/// Transcript plus the single outstanding request, if any.
///
/// Only one request may be in flight. Replies are matched on their
/// sequence number, so a late reply to an abandoned request is dropped
/// instead of landing out of order.
#[derive(Debug, Clone)]
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
    pending: Option<u64>,
    next_seq: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self {
            transcript: vec![ChatMessage::assistant(GREETING)],
            pending: None,
            next_seq: 1,
        }
    }
}

impl ChatSession {
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Records the user's message and returns the request to send, or
    /// `None` for blank input or while a reply is still outstanding.
    pub fn submit(&mut self, input: &str) -> Option<ChatRequest> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        if let Some(seq) = self.pending {
            debug!("Chat send refused; request {} still in flight", seq);
            return None;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending = Some(seq);
        self.transcript.push(ChatMessage::user(text));
        info!("Chat request {} submitted ({} chars)", seq, text.len());

        Some(ChatRequest {
            seq,
            text: text.to_string(),
        })
    }

    /// Applies a reply. Returns false if it was stale and dropped.
    pub fn receive(&mut self, seq: u64, result: Result<String, ChatError>) -> bool {
        if self.pending != Some(seq) {
            debug!("Dropping stale chat reply {} (pending {:?})", seq, self.pending);
            return false;
        }
        self.pending = None;

        let text = match result {
            Ok(reply) if reply.trim().is_empty() => EMPTY_REPLY.to_string(),
            Ok(reply) => reply,
            Err(e) => {
                warn!("Chat request {} failed: {}", seq, e);
                OFFLINE_FALLBACK.to_string()
            }
        };

        self.transcript.push(ChatMessage::assistant(text));
        true
    }

    /// Forget the outstanding request; its reply will be dropped.
    pub fn abandon(&mut self) {
        if let Some(seq) = self.pending.take() {
            info!("Chat request {} abandoned", seq);
            self.transcript.push(ChatMessage::assistant(OFFLINE_FALLBACK));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::message::ChatRole;

    fn last(session: &ChatSession) -> &ChatMessage {
        session.transcript().last().unwrap()
    }

    #[test]
    fn starts_with_greeting() {
        let s = ChatSession::default();
        assert_eq!(s.transcript(), &[ChatMessage::assistant(GREETING)]);
        assert!(!s.is_loading());
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut s = ChatSession::default();
        assert!(s.submit("   \n").is_none());
        assert_eq!(s.transcript().len(), 1);
        assert!(!s.is_loading());
    }

    #[test]
    fn success_appends_reply() {
        let mut s = ChatSession::default();
        let req = s.submit("hi").unwrap();
        assert!(s.is_loading());
        assert_eq!(last(&s), &ChatMessage::user("hi"));

        assert!(s.receive(req.seq, Ok("Hello there".into())));
        assert_eq!(last(&s), &ChatMessage::assistant("Hello there"));
        assert!(!s.is_loading());
    }

    #[test]
    fn empty_reply_uses_placeholder() {
        let mut s = ChatSession::default();
        let req = s.submit("hi").unwrap();
        s.receive(req.seq, Ok("  ".into()));
        assert_eq!(last(&s).text, EMPTY_REPLY);
    }

    #[test]
    fn failure_appends_fallback_and_clears_loading() {
        let mut s = ChatSession::default();
        let req = s.submit("hi").unwrap();
        s.receive(req.seq, Err(ChatError::Status(429)));

        assert_eq!(last(&s).role, ChatRole::Assistant);
        assert_eq!(last(&s).text, OFFLINE_FALLBACK);
        assert!(!s.is_loading());
    }

    #[test]
    fn second_send_waits_for_first_reply() {
        let mut s = ChatSession::default();
        let first = s.submit("one").unwrap();
        assert!(s.submit("two").is_none());

        s.receive(first.seq, Ok("reply one".into()));
        let second = s.submit("two").unwrap();
        assert!(second.seq > first.seq);
    }

    #[test]
    fn stale_reply_after_abandon_is_dropped() {
        let mut s = ChatSession::default();
        let first = s.submit("one").unwrap();
        s.abandon();
        let len = s.transcript().len();

        let second = s.submit("two").unwrap();
        assert!(!s.receive(first.seq, Ok("late".into())));
        assert_eq!(s.transcript().len(), len + 1);

        assert!(s.receive(second.seq, Ok("fresh".into())));
        assert_eq!(last(&s).text, "fresh");
    }
}
