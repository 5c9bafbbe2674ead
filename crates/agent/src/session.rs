//! Chat session
//!
//! Owns the transcript for one conversation and paces bot replies behind a
//! simulated typing delay. At most one reply is outstanding at a time.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use uuid::Uuid;

use gplus_config::Settings;
use gplus_core::ChatMessage;

use crate::engine::ResponseEngine;
use crate::AgentError;

/// Session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Delay between a user message and the bot reply
    pub typing_delay: Duration,
    /// Event channel capacity
    pub event_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            typing_delay: Duration::from_millis(800),
            event_capacity: 64,
        }
    }
}

impl SessionConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            typing_delay: settings.typing_delay(),
            ..Self::default()
        }
    }
}

/// Session events
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A message was added to the transcript
    MessageAppended(ChatMessage),
    /// The typing indicator turned on or off
    TypingChanged(bool),
    /// Transcript reset to the welcome message
    Cleared,
}

struct SessionState {
    messages: Vec<ChatMessage>,
    awaiting_reply: bool,
    /// Bumped on every clear so stale replies can be recognized
    epoch: u64,
}

pub struct ChatSession {
    id: String,
    engine: Arc<ResponseEngine>,
    config: SessionConfig,
    state: Mutex<SessionState>,
    event_tx: broadcast::Sender<SessionEvent>,
}

impl ChatSession {
    /// New session whose transcript holds only the welcome message
    pub fn new(engine: Arc<ResponseEngine>, config: SessionConfig) -> Self {
        let (event_tx, _) = broadcast::channel(config.event_capacity.max(1));
        let welcome = engine.welcome_message();
        let id = Uuid::now_v7().to_string();

        tracing::debug!(session_id = %id, "Chat session started");

        Self {
            id,
            engine,
            config,
            state: Mutex::new(SessionState {
                messages: vec![welcome],
                awaiting_reply: false,
                epoch: 0,
            }),
            event_tx,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Subscribe to session events
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.event_tx.subscribe()
    }

    /// Transcript snapshot, oldest first
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.state.lock().messages.clone()
    }

    /// True while a reply is being "typed"
    pub fn is_awaiting_reply(&self) -> bool {
        self.state.lock().awaiting_reply
    }

    /// Append a user message and, after the typing delay, the bot reply
    ///
    /// Rejected with [`AgentError::ReplyPending`] while an earlier reply is
    /// outstanding. If the chat is cleared during the delay the reply is
    /// dropped and [`AgentError::SessionCleared`] is returned. Dropping the
    /// future before the delay ends keeps the user message, skips the reply
    /// and frees the session for the next send.
    pub async fn send_message(&self, text: &str) -> Result<ChatMessage, AgentError> {
        let epoch = {
            let mut state = self.state.lock();
            if state.awaiting_reply {
                tracing::debug!(session_id = %self.id, "Message rejected, reply pending");
                return Err(AgentError::ReplyPending);
            }

            let user = ChatMessage::user(text, self.engine.clock());
            state.messages.push(user.clone());
            state.awaiting_reply = true;
            self.emit(SessionEvent::MessageAppended(user));
            self.emit(SessionEvent::TypingChanged(true));
            state.epoch
        };

        let guard = PendingReply {
            session: self,
            epoch,
            armed: true,
        };
        tokio::time::sleep(self.config.typing_delay).await;
        guard.disarm();

        let reply = self.engine.process_user_message(text);

        let mut state = self.state.lock();
        if state.epoch != epoch {
            tracing::debug!(session_id = %self.id, "Chat cleared, dropping stale reply");
            return Err(AgentError::SessionCleared);
        }

        state.messages.push(reply.clone());
        state.awaiting_reply = false;
        self.emit(SessionEvent::MessageAppended(reply.clone()));
        self.emit(SessionEvent::TypingChanged(false));

        Ok(reply)
    }

    /// Reset the transcript to a fresh welcome message
    pub fn clear_chat(&self) {
        let welcome = self.engine.welcome_message();
        let mut state = self.state.lock();
        let was_typing = state.awaiting_reply;

        state.messages = vec![welcome.clone()];
        state.awaiting_reply = false;
        state.epoch += 1;

        self.emit(SessionEvent::Cleared);
        if was_typing {
            self.emit(SessionEvent::TypingChanged(false));
        }
        self.emit(SessionEvent::MessageAppended(welcome));

        tracing::debug!(session_id = %self.id, "Chat cleared");
    }

    fn emit(&self, event: SessionEvent) {
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }
}

/// Releases the awaiting flag if `send_message` is dropped mid-delay
struct PendingReply<'a> {
    session: &'a ChatSession,
    epoch: u64,
    armed: bool,
}

impl PendingReply<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for PendingReply<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.session.state.lock();
        if state.epoch != self.epoch || !state.awaiting_reply {
            return;
        }
        state.awaiting_reply = false;
        self.session.emit(SessionEvent::TypingChanged(false));
        tracing::debug!(session_id = %self.session.id, "Reply abandoned before delivery");
    }
}
