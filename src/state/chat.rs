//! Chat panel state machine: `Idle` ⇄ `AwaitingReply`.
//!
//! Each accepted submit produces a [`PendingTurn`] tagged with the session's
//! generation. `reset` bumps the generation, so a reply that lands after a
//! reset no longer matches and is dropped instead of appended.

use crate::api::gemini::{AssistantAdapter, AssistantReply, TextGenerator};
use crate::api::models::ChatMessage;
use dioxus::logger::tracing::debug;

pub const WELCOME_GREETING: &str = "Welcome to Toxicfy. I'm the Toxic AI. What kind of garbage music are you into today? I'm here to judge you and maybe give a recommendation if I'm feeling generous.";
pub const RESET_GREETING: &str = "Back for more abuse? Fine. What do you want?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPhase {
    Idle,
    AwaitingReply,
}

/// A dispatched request: the transcript to send and the generation it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTurn {
    pub generation: u64,
    pub transcript: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletedTurn {
    pub generation: u64,
    pub reply: AssistantReply,
}

impl PendingTurn {
    pub async fn dispatch<G: TextGenerator>(self, adapter: &AssistantAdapter<G>) -> CompletedTurn {
        let reply = adapter.send(&self.transcript).await;
        CompletedTurn {
            generation: self.generation,
            reply,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
    phase: ChatPhase,
    generation: u64,
    last_failure: Option<String>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            transcript: vec![ChatMessage::assistant(WELCOME_GREETING)],
            phase: ChatPhase::Idle,
            generation: 0,
            last_failure: None,
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn phase(&self) -> ChatPhase {
        self.phase
    }

    pub fn is_awaiting(&self) -> bool {
        self.phase == ChatPhase::AwaitingReply
    }

    /// Why the most recent reply was a fallback, if it was one.
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    /// Rejects blank text and anything submitted while a reply is outstanding.
    pub fn submit(&mut self, text: &str) -> Option<PendingTurn> {
        if self.is_awaiting() || text.trim().is_empty() {
            return None;
        }

        self.transcript.push(ChatMessage::user(text));
        self.phase = ChatPhase::AwaitingReply;
        Some(PendingTurn {
            generation: self.generation,
            transcript: self.transcript.clone(),
        })
    }

    /// Appends the reply unless it belongs to a generation that was reset away.
    pub fn resolve(&mut self, turn: CompletedTurn) -> bool {
        if turn.generation != self.generation || !self.is_awaiting() {
            debug!(
                turn = turn.generation,
                current = self.generation,
                "dropping stale assistant reply"
            );
            return false;
        }

        self.last_failure = turn.reply.failure;
        self.transcript.push(turn.reply.message);
        self.phase = ChatPhase::Idle;
        true
    }

    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.transcript = vec![ChatMessage::assistant(RESET_GREETING)];
        self.phase = ChatPhase::Idle;
        self.last_failure = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::gemini::test_support::ScriptedGenerator;
    use crate::api::gemini::CHAT_ERROR_FALLBACK;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn adapter(generator: ScriptedGenerator) -> AssistantAdapter<ScriptedGenerator> {
        AssistantAdapter::new(generator, 1_000)
    }

    #[test]
    fn starts_idle_with_the_welcome_greeting() {
        let chat = ChatSession::new();
        assert_eq!(chat.phase(), ChatPhase::Idle);
        assert_eq!(chat.transcript(), &[ChatMessage::assistant(WELCOME_GREETING)]);
    }

    #[test]
    fn blank_submissions_are_ignored() {
        let mut chat = ChatSession::new();
        assert!(chat.submit("").is_none());
        assert!(chat.submit("  \n\t").is_none());
        assert_eq!(chat.transcript().len(), 1);
        assert_eq!(chat.phase(), ChatPhase::Idle);
    }

    #[test]
    fn submit_appends_and_hands_over_the_full_transcript() {
        let mut chat = ChatSession::new();
        let turn = chat.submit("recommend me something").unwrap();
        assert_eq!(chat.phase(), ChatPhase::AwaitingReply);
        assert_eq!(turn.transcript, chat.transcript());
        assert_eq!(
            turn.transcript.last(),
            Some(&ChatMessage::user("recommend me something"))
        );
    }

    #[tokio::test]
    async fn second_submit_is_rejected_until_the_reply_lands() {
        let mut chat = ChatSession::new();
        let turn = chat.submit("first").unwrap();
        assert!(chat.submit("second").is_none());
        assert_eq!(chat.transcript().len(), 2);

        let done = turn.dispatch(&adapter(ScriptedGenerator::ok("reply"))).await;
        assert!(chat.resolve(done));
        assert_eq!(chat.phase(), ChatPhase::Idle);
        assert_eq!(chat.transcript().len(), 3);
        assert_eq!(chat.transcript()[2], ChatMessage::assistant("reply"));

        let turn = chat.submit("second").unwrap();
        let done = turn.dispatch(&adapter(ScriptedGenerator::ok("again"))).await;
        chat.resolve(done);
        let assistant_replies = chat.transcript()[1..]
            .iter()
            .filter(|message| !message.is_user())
            .count();
        assert_eq!(assistant_replies, 2);
    }

    #[tokio::test]
    async fn reply_after_reset_is_discarded() {
        let mut chat = ChatSession::new();
        let turn = chat.submit("hello?").unwrap();
        chat.reset();

        let done = turn.dispatch(&adapter(ScriptedGenerator::ok("too late"))).await;
        assert!(!chat.resolve(done));
        assert_eq!(chat.transcript(), &[ChatMessage::assistant(RESET_GREETING)]);
        assert_eq!(chat.phase(), ChatPhase::Idle);
    }

    #[tokio::test]
    async fn stale_reply_cannot_complete_a_newer_turn() {
        let mut chat = ChatSession::new();
        let stale = chat.submit("old").unwrap();
        chat.reset();
        let fresh = chat.submit("new").unwrap();

        let stale_done = stale.dispatch(&adapter(ScriptedGenerator::ok("old reply"))).await;
        assert!(!chat.resolve(stale_done));
        assert!(chat.is_awaiting());

        let fresh_done = fresh.dispatch(&adapter(ScriptedGenerator::ok("new reply"))).await;
        assert!(chat.resolve(fresh_done));
        assert_eq!(
            chat.transcript(),
            &[
                ChatMessage::assistant(RESET_GREETING),
                ChatMessage::user("new"),
                ChatMessage::assistant("new reply"),
            ]
        );
    }

    #[tokio::test]
    async fn failing_backend_still_returns_to_idle_with_one_fallback() {
        let mut chat = ChatSession::new();
        let turn = chat.submit("test").unwrap();
        let done = turn
            .dispatch(&adapter(ScriptedGenerator::failing("offline")))
            .await;
        assert!(chat.resolve(done));

        assert_eq!(chat.phase(), ChatPhase::Idle);
        assert_eq!(chat.transcript().len(), 3);
        assert_eq!(
            chat.transcript()[2],
            ChatMessage::assistant(CHAT_ERROR_FALLBACK)
        );
        assert_eq!(chat.last_failure(), Some("offline"));
    }

    #[tokio::test]
    async fn hung_backend_cannot_wedge_the_session() {
        let mut chat = ChatSession::new();
        let turn = chat.submit("anyone?").unwrap();
        let done = turn
            .dispatch(&AssistantAdapter::new(ScriptedGenerator::hung(), 10))
            .await;
        assert!(chat.resolve(done));
        assert!(!chat.is_awaiting());
    }

    #[tokio::test]
    async fn reset_while_awaiting_reopens_input() {
        let chat = Rc::new(RefCell::new(ChatSession::new()));
        let turn = chat.borrow_mut().submit("first").unwrap();
        chat.borrow_mut().reset();
        assert!(!chat.borrow().is_awaiting());

        let next = chat.borrow_mut().submit("after reset");
        assert!(next.is_some());

        let done = turn.dispatch(&adapter(ScriptedGenerator::ok("late"))).await;
        assert!(!chat.borrow_mut().resolve(done));
        assert_eq!(chat.borrow().transcript().len(), 2);
    }

    #[test]
    fn reset_clears_the_last_failure() {
        let mut chat = ChatSession::new();
        let turn = chat.submit("x").unwrap();
        chat.resolve(CompletedTurn {
            generation: turn.generation,
            reply: AssistantReply::fallback(CHAT_ERROR_FALLBACK, "down"),
        });
        assert!(chat.last_failure().is_some());
        chat.reset();
        assert!(chat.last_failure().is_none());
    }
}
