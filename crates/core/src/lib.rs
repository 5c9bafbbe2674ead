//! Core types for the GPlus elevator assistant
//!
//! This crate provides foundational types used across all other crates:
//! - Catalog reference data (models, accessories, FAQs, company info)
//! - Chat messages and roles
//! - Clock abstraction for deterministic greetings and timestamps
//! - Price formatting helpers (lakhs, thousands)
//! - Error types

pub mod catalog;
pub mod clock;
pub mod error;
pub mod format;
pub mod message;

pub use catalog::{
    AccessoryOption, CompanyInfo, DoorType, ElevatorModel, EnclosureType, FaqItem, QuickReplySet,
    QuoteRequest, Series, Tier,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use format::{format_lakhs, format_thousands};
pub use message::{ChatMessage, MessageRole};
