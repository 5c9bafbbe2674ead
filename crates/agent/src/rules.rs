//! Keyword rule table
//!
//! An ordered list of `(category, keywords, responder, quick replies)`
//! records. A rule matches when the normalized input contains any of its
//! keywords as a substring; the first matching rule in table order wins.

use gplus_config::KnowledgeBase;
use gplus_core::QuickReplySet;

use crate::templates;

/// Renders a response body from the knowledge base
pub type Responder = fn(&KnowledgeBase) -> String;

/// Topic a rule answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    ProductOverview,
    G1Models,
    G2Models,
    G3Models,
    Pricing,
    Installation,
    TechnicalSpecs,
    Maintenance,
    Safety,
    CabinMaterial,
    Door,
    Enclosure,
    Customization,
    Faq,
    Contact,
    Quote,
    Comparison,
    BackToMenu,
}

impl RuleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCategory::ProductOverview => "product_overview",
            RuleCategory::G1Models => "g1_models",
            RuleCategory::G2Models => "g2_models",
            RuleCategory::G3Models => "g3_models",
            RuleCategory::Pricing => "pricing",
            RuleCategory::Installation => "installation",
            RuleCategory::TechnicalSpecs => "technical_specs",
            RuleCategory::Maintenance => "maintenance",
            RuleCategory::Safety => "safety",
            RuleCategory::CabinMaterial => "cabin_material",
            RuleCategory::Door => "door",
            RuleCategory::Enclosure => "enclosure",
            RuleCategory::Customization => "customization",
            RuleCategory::Faq => "faq",
            RuleCategory::Contact => "contact",
            RuleCategory::Quote => "quote",
            RuleCategory::Comparison => "comparison",
            RuleCategory::BackToMenu => "back_to_menu",
        }
    }
}

impl std::fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Suggestions attached to a rule's response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickReplies {
    /// Literal list
    Fixed(Vec<String>),
    /// Named group looked up in the knowledge base at response time
    Group(String),
}

impl QuickReplies {
    pub fn fixed(replies: &[&str]) -> Self {
        QuickReplies::Fixed(replies.iter().map(|r| r.to_string()).collect())
    }

    pub fn group(name: impl Into<String>) -> Self {
        QuickReplies::Group(name.into())
    }

    /// Resolve to a concrete list; a missing group yields an empty list
    pub fn resolve(&self, knowledge: &KnowledgeBase) -> Vec<String> {
        match self {
            QuickReplies::Fixed(replies) => replies.clone(),
            QuickReplies::Group(name) => knowledge.quick_replies.group_or_empty(name),
        }
    }
}

/// One entry of the rule table
#[derive(Clone)]
pub struct ResponseRule {
    pub category: RuleCategory,
    /// Lowercase trigger substrings
    pub keywords: Vec<String>,
    pub responder: Responder,
    pub quick_replies: QuickReplies,
}

impl ResponseRule {
    pub fn new(
        category: RuleCategory,
        keywords: &[&str],
        responder: Responder,
        quick_replies: QuickReplies,
    ) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            responder,
            quick_replies,
        }
    }

    /// True if `normalized` contains any non-empty keyword
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| !keyword.is_empty() && normalized.contains(keyword.as_str()))
    }

    /// First keyword found in `normalized`, in keyword order
    pub fn matched_keyword(&self, normalized: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|keyword| !keyword.is_empty() && normalized.contains(keyword))
    }
}

impl std::fmt::Debug for ResponseRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseRule")
            .field("category", &self.category)
            .field("keywords", &self.keywords)
            .field("quick_replies", &self.quick_replies)
            .finish_non_exhaustive()
    }
}

/// Ordered rule table, highest priority first
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<ResponseRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<ResponseRule>) -> Self {
        Self { rules }
    }

    /// First rule matching the normalized input
    pub fn first_match(&self, normalized: &str) -> Option<&ResponseRule> {
        self.rules.iter().find(|rule| rule.matches(normalized))
    }

    /// Categories in priority order
    pub fn categories(&self) -> Vec<RuleCategory> {
        self.rules.iter().map(|rule| rule.category).collect()
    }

    pub fn rules(&self) -> &[ResponseRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

/// Lowercase and trim; nothing else
pub fn normalize(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

/// The assistant's rule table
pub fn default_rules() -> Vec<ResponseRule> {
    use RuleCategory::*;

    vec![
        ResponseRule::new(
            ProductOverview,
            &["product", "model", "elevator", "lift", "view"],
            templates::product_overview,
            QuickReplies::group(QuickReplySet::PRODUCTS),
        ),
        ResponseRule::new(
            G1Models,
            &["g+1", "g1", "two floor", "2 floor"],
            templates::g1_models,
            QuickReplies::fixed(&["Calculate Price", "View G+2 Models", "Back to Menu"]),
        ),
        ResponseRule::new(
            G2Models,
            &["g+2", "g2", "three floor", "3 floor", "cfm", "best seller"],
            templates::g2_models,
            QuickReplies::fixed(&["Calculate Price", "View G+1 Models", "Back to Menu"]),
        ),
        ResponseRule::new(
            G3Models,
            &["g+3", "g3", "four floor", "4 floor"],
            templates::g3_models,
            QuickReplies::fixed(&["Calculate Price", "Request Quote", "Back to Menu"]),
        ),
        ResponseRule::new(
            Pricing,
            &["price", "cost", "budget", "calculate", "how much"],
            templates::pricing,
            QuickReplies::fixed(&["View Products", "Calculate Price", "Back to Menu"]),
        ),
        ResponseRule::new(
            Installation,
            &["install", "installation", "setup", "civil work"],
            templates::installation,
            QuickReplies::fixed(&["View Products", "Request Quote", "Back to Menu"]),
        ),
        ResponseRule::new(
            TechnicalSpecs,
            &["technical", "specification", "specs", "capacity", "speed", "motor", "dimension"],
            templates::technical_specs,
            QuickReplies::fixed(&["Classic vs Ultra", "Calculate Price", "Back to Menu"]),
        ),
        ResponseRule::new(
            Maintenance,
            &["maintenance", "amc", "service", "warranty"],
            templates::maintenance,
            QuickReplies::fixed(&["View AMC Packages", "Request Quote", "Back to Menu"]),
        ),
        ResponseRule::new(
            Safety,
            &["safe", "safety", "security", "emergency"],
            templates::safety,
            QuickReplies::fixed(&["View Products", "Request Quote", "Back to Menu"]),
        ),
        ResponseRule::new(
            CabinMaterial,
            &["cabin", "material", "steel", "ss304", "finish"],
            templates::cabin_material,
            QuickReplies::fixed(&["Classic vs Ultra", "Customization", "Back to Menu"]),
        ),
        ResponseRule::new(
            Door,
            &["door", "sliding", "swing"],
            templates::door,
            QuickReplies::fixed(&["Enclosure Options", "Calculate Price", "Back to Menu"]),
        ),
        ResponseRule::new(
            Enclosure,
            &["enclosure", "acp", "glass"],
            templates::enclosure,
            QuickReplies::fixed(&["Door Options", "Calculate Price", "Back to Menu"]),
        ),
        ResponseRule::new(
            Customization,
            &["custom", "design", "color", "colour", "accessory", "accessories"],
            templates::customization,
            QuickReplies::fixed(&["View Accessories", "Request Quote", "Back to Menu"]),
        ),
        ResponseRule::new(
            Faq,
            &["faq", "question", "help", "info"],
            templates::faq_overview,
            QuickReplies::fixed(&["Installation FAQs", "Pricing FAQs", "Safety FAQs", "Back to Menu"]),
        ),
        ResponseRule::new(
            Contact,
            &["contact", "phone", "email", "call", "reach"],
            templates::contact,
            QuickReplies::fixed(&["Request Quote", "View Products", "Back to Menu"]),
        ),
        ResponseRule::new(
            Quote,
            &["quote", "quotation", "estimate"],
            templates::quote,
            QuickReplies::fixed(&["Calculate Price", "Contact Us", "Back to Menu"]),
        ),
        ResponseRule::new(
            Comparison,
            &["compare", "difference", "classic vs ultra"],
            templates::comparison,
            QuickReplies::fixed(&["View Products", "Calculate Price", "Back to Menu"]),
        ),
        ResponseRule::new(
            BackToMenu,
            &["back", "menu", "main", "start"],
            templates::back_to_menu,
            QuickReplies::group(QuickReplySet::INITIAL),
        ),
    ]
}
