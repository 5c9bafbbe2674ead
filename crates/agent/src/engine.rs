//! Response engine
//!
//! Maps one user message to one bot message. Stateless between calls: each
//! call reads a fresh knowledge-base snapshot, so a reload takes effect on
//! the next message.

use std::sync::Arc;

use gplus_config::{KnowledgeBase, KnowledgeBaseManager};
use gplus_core::{ChatMessage, Clock, SystemClock};

use crate::faq::find_related_faq;
use crate::rules::{normalize, RuleCategory, RuleSet};
use crate::templates;

/// What produced a reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplySource {
    Rule(RuleCategory),
    Faq { id: String },
    Menu,
}

/// Reply content before it is wrapped into a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineReply {
    pub source: ReplySource,
    pub content: String,
    pub quick_replies: Vec<String>,
}

pub struct ResponseEngine {
    knowledge: Arc<KnowledgeBaseManager>,
    rules: RuleSet,
    clock: Arc<dyn Clock>,
}

impl ResponseEngine {
    /// Engine over a fixed knowledge base with the system clock
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self::with_manager(Arc::new(KnowledgeBaseManager::new(knowledge)))
    }

    /// Engine over a shared, reloadable knowledge base
    pub fn with_manager(knowledge: Arc<KnowledgeBaseManager>) -> Self {
        Self {
            knowledge,
            rules: RuleSet::default(),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn knowledge(&self) -> Arc<KnowledgeBase> {
        self.knowledge.snapshot()
    }

    /// Greeting shown at the start of every conversation
    pub fn welcome_message(&self) -> ChatMessage {
        let kb = self.knowledge.snapshot();
        let content = templates::welcome(&kb, self.clock.local_hour());
        ChatMessage::bot(content, self.clock.as_ref()).with_quick_replies(kb.initial_quick_replies())
    }

    /// Bot reply to one user message
    pub fn process_user_message(&self, text: &str) -> ChatMessage {
        let reply = self.respond(text);
        ChatMessage::bot(reply.content, self.clock.as_ref()).with_quick_replies(reply.quick_replies)
    }

    /// Resolve a reply without wrapping it into a message
    pub fn respond(&self, text: &str) -> EngineReply {
        let kb = self.knowledge.snapshot();
        let normalized = normalize(text);

        if let Some(rule) = self.rules.first_match(&normalized) {
            tracing::debug!(
                category = %rule.category,
                keyword = rule.matched_keyword(&normalized).unwrap_or_default(),
                "Matched response rule"
            );
            return EngineReply {
                source: ReplySource::Rule(rule.category),
                content: (rule.responder)(&kb),
                quick_replies: rule.quick_replies.resolve(&kb),
            };
        }

        if let Some(faq) = find_related_faq(&kb.faqs, &normalized) {
            tracing::debug!(faq = %faq.id, "No rule matched, answering from FAQ");
            return EngineReply {
                source: ReplySource::Faq { id: faq.id.clone() },
                content: templates::faq_answer(faq),
                quick_replies: kb.initial_quick_replies(),
            };
        }

        tracing::debug!("No rule or FAQ matched, showing menu");
        EngineReply {
            source: ReplySource::Menu,
            content: templates::generic_menu(&kb),
            quick_replies: kb.initial_quick_replies(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gplus_core::{FaqItem, FixedClock, MessageRole};

    fn engine() -> ResponseEngine {
        ResponseEngine::new(KnowledgeBase::default()).with_clock(Arc::new(FixedClock::at_hour(10)))
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_g2_keywords_share_quick_replies() {
        let engine = engine();
        let expected = strings(&["Calculate Price", "View G+1 Models", "Back to Menu"]);

        for input in ["g+2", "tell me about cfm", "your best seller?", "THREE FLOOR house"] {
            let reply = engine.respond(input);
            assert_eq!(reply.source, ReplySource::Rule(RuleCategory::G2Models), "{input}");
            assert_eq!(reply.quick_replies, expected, "{input}");
        }
    }

    #[test]
    fn test_priority_picks_earlier_category() {
        let engine = engine();
        let reply = engine.respond("show me products, what's your contact");
        assert_eq!(reply.source, ReplySource::Rule(RuleCategory::ProductOverview));
        assert_eq!(
            reply.quick_replies,
            strings(&["G+1 Series", "G+2 Series", "G+3 Series", "Classic vs Ultra", "Back to Menu"])
        );
    }

    #[test]
    fn test_idempotent_content() {
        let engine = engine();
        for input in ["pricing", "what about safety", "contact", "zzz"] {
            let first = engine.process_user_message(input);
            let second = engine.process_user_message(input);
            assert_eq!(first.content, second.content);
            assert_eq!(first.quick_replies, second.quick_replies);
            assert_ne!(first.id, second.id);
        }
    }

    #[test]
    fn test_empty_and_whitespace_show_menu() {
        let engine = engine();
        let initial = KnowledgeBase::default().initial_quick_replies();

        for input in ["", "   ", "\n\t"] {
            let reply = engine.respond(input);
            assert_eq!(reply.source, ReplySource::Menu);
            assert!(reply.content.starts_with("I'm here to help with GPlus Elevators!"));
            assert_eq!(reply.quick_replies, initial);
        }
    }

    #[test]
    fn test_case_and_padding_ignored() {
        let engine = engine();
        assert_eq!(
            engine.respond("  INSTALLATION  ").source,
            ReplySource::Rule(RuleCategory::Installation)
        );
    }

    #[test]
    fn test_welcome_greeting_by_hour() {
        for (hour, greeting) in [(9, "Good morning"), (14, "Good afternoon"), (20, "Good evening")] {
            let engine = ResponseEngine::new(KnowledgeBase::default())
                .with_clock(Arc::new(FixedClock::at_hour(hour)));
            let welcome = engine.welcome_message();
            assert_eq!(welcome.role, MessageRole::Bot);
            assert!(
                welcome
                    .content
                    .starts_with(&format!("{}! Welcome to GPlus Elevator 🏢", greeting)),
                "{}",
                welcome.content
            );
            assert_eq!(welcome.quick_replies(), KnowledgeBase::default().initial_quick_replies());
        }
    }

    #[test]
    fn test_faq_fallback_when_no_rule_matches() {
        let engine = engine();
        let reply = engine.respond("need a license");
        assert_eq!(reply.source, ReplySource::Faq { id: "license".to_string() });
        assert!(reply.content.starts_with("**Do I need a license for a home lift?**\n\n"));
        assert!(reply
            .content
            .ends_with("\n\nIs there anything else you would like to know?"));
    }

    #[test]
    fn test_faq_fallback_with_custom_rules() {
        let mut kb = KnowledgeBase::empty();
        kb.faqs.push(FaqItem {
            id: "warranty".to_string(),
            question: "What is the warranty period?".to_string(),
            answer: "2 years.".to_string(),
            category: "Maintenance".to_string(),
        });
        let engine = ResponseEngine::new(kb).with_rules(RuleSet::new(Vec::new()));

        let reply = engine.process_user_message("warranty period");
        assert_eq!(
            reply.content,
            "**What is the warranty period?**\n\n2 years.\n\nIs there anything else you would like to know?"
        );
        // No initial group in an empty knowledge base
        assert_eq!(reply.quick_replies, Some(Vec::new()));
    }

    #[test]
    fn test_warranty_claimed_by_maintenance_rule() {
        let engine = engine();
        assert_eq!(
            engine.respond("warranty period").source,
            ReplySource::Rule(RuleCategory::Maintenance)
        );
    }

    #[test]
    fn test_back_to_menu_uses_initial_group() {
        let engine = engine();
        let reply = engine.respond("Back to Menu");
        assert_eq!(reply.source, ReplySource::Rule(RuleCategory::BackToMenu));
        assert_eq!(reply.content, "What would you like to know about GPlus Elevators?");
        assert_eq!(reply.quick_replies, KnowledgeBase::default().initial_quick_replies());
    }

    #[test]
    fn test_view_quick_reply_hits_product_overview() {
        // "view" and "model" outrank the tier keywords
        let engine = engine();
        assert_eq!(
            engine.respond("View G+1 Models").source,
            ReplySource::Rule(RuleCategory::ProductOverview)
        );
    }

    #[test]
    fn test_detail_quick_replies_reach_their_topic() {
        let engine = engine();
        let expected = |label: &str| match label {
            "Classic vs Ultra" => RuleCategory::Comparison,
            "Calculate Price" => RuleCategory::Pricing,
            "Customization" => RuleCategory::Customization,
            "Enclosure Options" => RuleCategory::Enclosure,
            "Door Options" => RuleCategory::Door,
            "Back to Menu" => RuleCategory::BackToMenu,
            other => panic!("unexpected quick reply {other:?}"),
        };

        for input in ["technical specs", "cabin material", "door", "enclosure"] {
            for label in engine.respond(input).quick_replies {
                assert_eq!(
                    engine.respond(&label).source,
                    ReplySource::Rule(expected(&label)),
                    "{input} -> {label}"
                );
            }
        }
    }

    #[test]
    fn test_reload_visible_on_next_message() {
        let manager = Arc::new(KnowledgeBaseManager::default());
        let engine = ResponseEngine::with_manager(Arc::clone(&manager));

        let mut kb = KnowledgeBase::default();
        kb.company.email = "sales@example.com".to_string();
        manager.update(kb);

        assert!(engine.respond("email").content.contains("sales@example.com"));
    }

    #[test]
    fn test_empty_knowledge_base_degrades() {
        let engine = ResponseEngine::new(KnowledgeBase::empty());
        let reply = engine.respond("g+1");
        assert_eq!(reply.source, ReplySource::Rule(RuleCategory::G1Models));
        assert!(reply.content.contains("**Classic Series** (MS Cabin):\n"));
        assert_eq!(engine.respond("products").quick_replies, Vec::<String>::new());
    }
}
