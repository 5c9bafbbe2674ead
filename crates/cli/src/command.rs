//! REPL command parsing

use gplus_core::Tier;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain text for the assistant
    Chat(String),
    Reset,
    /// Accessories empty means "use the current selection"
    Price {
        model: String,
        accessories: Vec<String>,
    },
    /// Toggle an accessory in the selection
    Select(String),
    /// All models, or one tier
    Models(Option<Tier>),
    Accessories,
    Reload,
    Help,
    Quit,
    /// Slash command that is not recognized, or one missing its argument
    Invalid(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Command::Chat(line.to_string());
        };

        let mut parts = rest.split_whitespace();
        match parts.next().unwrap_or_default() {
            "reset" | "clear" => Command::Reset,
            "price" => match parts.next() {
                Some(model) => Command::Price {
                    model: model.to_string(),
                    accessories: parts.map(str::to_string).collect(),
                },
                None => Command::Invalid("usage: /price <model-id> [accessory-id...]".to_string()),
            },
            "select" => match parts.next() {
                Some(id) => Command::Select(id.to_string()),
                None => Command::Invalid("usage: /select <accessory-id>".to_string()),
            },
            "models" => match parts.next().map(str::parse::<Tier>) {
                None => Command::Models(None),
                Some(Ok(tier)) => Command::Models(Some(tier)),
                Some(Err(e)) => Command::Invalid(e.to_string()),
            },
            "accessories" => Command::Accessories,
            "reload" => Command::Reload,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => Command::Invalid(format!("unknown command: /{}", other)),
        }
    }
}

pub const HELP: &str = "\
Commands:
  /reset                              start over with a fresh welcome
  /price <model-id> [accessory-id...] estimate a price (defaults to /select picks)
  /select <accessory-id>              add or remove an accessory
  /models [g+1|g+2|g+3]               list model ids, optionally one tier
  /accessories                        list accessory ids
  /reload                             reload the knowledge base file
  /quit                               exit
Anything else is sent to the assistant.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_chat() {
        assert_eq!(
            Command::parse("What is the price?"),
            Command::Chat("What is the price?".to_string())
        );
        assert_eq!(Command::parse(""), Command::Chat(String::new()));
    }

    #[test]
    fn test_price_with_accessories() {
        assert_eq!(
            Command::parse("/price g1-classic-manual-acp rf-password touch-screen"),
            Command::Price {
                model: "g1-classic-manual-acp".to_string(),
                accessories: vec!["rf-password".to_string(), "touch-screen".to_string()],
            }
        );
    }

    #[test]
    fn test_price_requires_model() {
        assert!(matches!(Command::parse("/price"), Command::Invalid(_)));
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(Command::parse("  /reset "), Command::Reset);
        assert_eq!(Command::parse("/models"), Command::Models(None));
        assert_eq!(Command::parse("/reload"), Command::Reload);
        assert_eq!(Command::parse("/exit"), Command::Quit);
        assert_eq!(
            Command::parse("/dance"),
            Command::Invalid("unknown command: /dance".to_string())
        );
    }

    #[test]
    fn test_models_by_tier() {
        assert_eq!(Command::parse("/models g+2"), Command::Models(Some(Tier::G2)));
        assert_eq!(Command::parse("/models G1"), Command::Models(Some(Tier::G1)));
        assert!(matches!(Command::parse("/models g+7"), Command::Invalid(_)));
    }

    #[test]
    fn test_select_accessory() {
        assert_eq!(
            Command::parse("/select fingerprint"),
            Command::Select("fingerprint".to_string())
        );
        assert!(matches!(Command::parse("/select"), Command::Invalid(_)));
    }
}
