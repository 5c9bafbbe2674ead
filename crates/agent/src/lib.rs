//! Conversational response engine
//!
//! Features:
//! - Ordered keyword rule table with first-match-wins dispatch
//! - FAQ fallback and generic menu for unmatched input
//! - Chat session with simulated typing delay
//! - Price estimation from the model and accessory catalog

pub mod calculator;
pub mod engine;
pub mod faq;
pub mod rules;
pub mod session;
pub mod templates;

pub use calculator::{estimate_price, AccessorySelection, PriceEstimate, PriceLine};
pub use engine::{EngineReply, ReplySource, ResponseEngine};
pub use rules::{normalize, QuickReplies, ResponseRule, RuleCategory, RuleSet};
pub use session::{ChatSession, SessionConfig, SessionEvent};

use thiserror::Error;

/// Agent errors
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("A reply is still pending")]
    ReplyPending,

    #[error("Chat was cleared before the reply was ready")]
    SessionCleared,

    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("Configuration error: {0}")]
    Config(#[from] gplus_config::ConfigError),
}
