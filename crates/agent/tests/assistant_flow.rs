//! Integration tests for the assistant flow (knowledge base -> engine -> session)
//!
//! These tests drive a chat session the way a client would.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use gplus_agent::{
    estimate_price, ChatSession, ReplySource, ResponseEngine, RuleCategory, SessionConfig,
    SessionEvent,
};
use gplus_config::{KnowledgeBase, KnowledgeBaseManager, RuntimeEnvironment};
use gplus_core::{FixedClock, MessageRole};

fn session_with(manager: Arc<KnowledgeBaseManager>) -> ChatSession {
    let engine = ResponseEngine::with_manager(manager).with_clock(Arc::new(FixedClock::at_hour(15)));
    ChatSession::new(Arc::new(engine), SessionConfig::default())
}

/// Quick replies sent back as user messages lead somewhere sensible
#[tokio::test(start_paused = true)]
async fn test_quick_reply_walkthrough() {
    let session = session_with(Arc::new(KnowledgeBaseManager::default()));

    let welcome = session.messages().remove(0);
    assert!(welcome.content.starts_with("Good afternoon!"));
    assert_eq!(welcome.quick_replies()[0], "Products");

    let products = session.send_message("Products").await.unwrap();
    assert!(products.content.contains("G+2 Series"));

    let g2 = session.send_message("G+2 Series").await.unwrap();
    assert!(g2.content.starts_with("**G+2 Models**"));
    assert!(g2.content.contains("• G+2 Ultra - Manual Door + Glass (1 Side)\n  ₹7.20 Lakhs"));

    let menu = session.send_message("Back to Menu").await.unwrap();
    assert_eq!(menu.quick_replies(), welcome.quick_replies());

    let roles: Vec<_> = session.messages().iter().map(|m| m.role).collect();
    assert_eq!(roles.len(), 7);
    assert!(roles
        .iter()
        .skip(1)
        .step_by(2)
        .all(|role| *role == MessageRole::User));
}

/// Event stream mirrors the transcript
#[tokio::test(start_paused = true)]
async fn test_session_event_stream() {
    let session = session_with(Arc::new(KnowledgeBaseManager::default()));
    let mut events = session.subscribe();

    session.send_message("contact").await.unwrap();
    session.clear_chat();

    let mut seen = Vec::new();
    while let Ok(Ok(event)) = timeout(Duration::from_millis(10), events.recv()).await {
        seen.push(event);
    }

    assert!(matches!(seen[0], SessionEvent::MessageAppended(ref m) if m.content == "contact"));
    assert!(matches!(seen[1], SessionEvent::TypingChanged(true)));
    assert!(matches!(seen[2], SessionEvent::MessageAppended(ref m) if m.is_bot()));
    assert!(matches!(seen[3], SessionEvent::TypingChanged(false)));
    assert!(matches!(seen[4], SessionEvent::Cleared));
    assert!(matches!(seen[5], SessionEvent::MessageAppended(ref m) if m.is_bot()));
    assert_eq!(seen.len(), 6);
}

/// Knowledge base loaded from YAML drives responses and reloads in place
#[tokio::test(start_paused = true)]
async fn test_yaml_knowledge_base_reload() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    write!(
        file,
        r#"
company:
  name: Lift Co
  phone: ["+91 11111 11111"]
  email: hello@lift.example
  website: lift.example
faqs:
  - id: solar
    question: Can it run on solar power?
    answer: Yes, with an inverter.
    category: Technical
"#
    )
    .unwrap();

    let manager = Arc::new(
        KnowledgeBaseManager::load_or_default(file.path(), RuntimeEnvironment::Production).unwrap(),
    );
    let engine = ResponseEngine::with_manager(Arc::clone(&manager));

    let reply = engine.respond("run on solar");
    assert_eq!(reply.source, ReplySource::Faq { id: "solar".to_string() });
    assert!(reply.content.contains("Yes, with an inverter."));

    let contact = engine.respond("phone");
    assert!(contact.content.contains("📞 **Contact Lift Co**"));
    assert!(contact.content.contains("+91 11111 11111"));

    let kb = KnowledgeBase::default();
    kb.to_yaml_file(file.path()).unwrap();
    manager.reload().unwrap();

    let contact = engine.respond("phone");
    assert!(contact.content.contains("GPlus Elevator"));
    assert_eq!(
        engine.respond("cfm").source,
        ReplySource::Rule(RuleCategory::G2Models)
    );
}

/// Calculator and engine read the same catalog
#[test]
fn test_price_estimate_matches_listing() {
    let engine = ResponseEngine::new(KnowledgeBase::default());
    let kb = engine.knowledge();

    let estimate = estimate_price(&kb, "g2-classic-manual-glass1", &["floor-announcer"]).unwrap();
    assert_eq!(estimate.total, 645_000);

    let listing = engine.respond("g+2").content;
    assert!(listing.contains(&format!("{}\n  ₹6.40 Lakhs", estimate.model.name)));
}
