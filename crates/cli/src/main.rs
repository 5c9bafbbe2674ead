//! GPlus Assistant terminal client
//!
//! Reads lines from stdin and prints the assistant's replies. Slash commands
//! reset the chat, price a configuration or reload the knowledge base.

mod command;

use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use gplus_agent::{
    estimate_price, AccessorySelection, AgentError, ChatSession, ResponseEngine, SessionConfig,
};
use gplus_config::{load_settings, KnowledgeBaseManager, Settings};
use gplus_core::{format_lakhs, format_thousands, ChatMessage};

use command::{Command, HELP};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Priority: env vars > config/{env}.yaml > config/default.yaml > defaults
    let env = std::env::var("GPLUS_ASSISTANT_ENV").ok();
    let config = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };

    init_tracing(&config);

    tracing::info!("Starting GPlus Assistant v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        environment = ?config.environment,
        config_path = env.as_deref().unwrap_or("default"),
        "Configuration loaded"
    );

    let knowledge = Arc::new(KnowledgeBaseManager::load_or_default(
        &config.assistant.knowledge_base_path,
        config.environment,
    )?);
    {
        let kb = knowledge.snapshot();
        tracing::info!(
            models = kb.models.len(),
            accessories = kb.accessories.len(),
            faqs = kb.faqs.len(),
            "Knowledge base ready"
        );
    }

    let engine = Arc::new(ResponseEngine::with_manager(Arc::clone(&knowledge)));
    let session = ChatSession::new(engine, SessionConfig::from_settings(&config));

    for message in session.messages() {
        print_bot(&message);
    }
    println!("(type /help for commands)");

    let mut selection = AccessorySelection::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Chat(text) => {
                println!("…");
                match session.send_message(&text).await {
                    Ok(reply) => print_bot(&reply),
                    Err(e @ AgentError::ReplyPending) | Err(e @ AgentError::SessionCleared) => {
                        println!("{}", e)
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            Command::Reset => {
                session.clear_chat();
                selection.clear();
                for message in session.messages() {
                    print_bot(&message);
                }
            }
            Command::Price { model, accessories } => {
                let kb = knowledge.snapshot();
                let picked = if accessories.is_empty() {
                    selection.ids()
                } else {
                    accessories.as_slice()
                };
                match estimate_price(&kb, &model, picked) {
                    Ok(estimate) => println!("{}\n", estimate.summary()),
                    Err(e) => println!("{}", e),
                }
            }
            Command::Select(id) => {
                let kb = knowledge.snapshot();
                if kb.find_accessory(&id).is_none() {
                    println!("unknown accessory: {}", id);
                } else {
                    let verb = if selection.toggle(&id) { "Added" } else { "Removed" };
                    if selection.is_empty() {
                        println!("{} {}. Nothing selected.", verb, id);
                    } else {
                        println!("{} {}. Selected: {}", verb, id, selection.ids().join(", "));
                    }
                }
            }
            Command::Models(tier) => {
                let kb = knowledge.snapshot();
                let models: Vec<_> = match tier {
                    Some(tier) => kb.models_by_tier(tier).collect(),
                    None => kb.models.iter().collect(),
                };
                if models.is_empty() {
                    println!("No models listed.");
                }
                for model in models {
                    println!("{:<28} ₹{}L  {}", model.id, format_lakhs(model.base_price), model.name);
                }
            }
            Command::Accessories => {
                let kb = knowledge.snapshot();
                for accessory in &kb.accessories {
                    println!(
                        "{:<18} +₹{}k  {}",
                        accessory.id,
                        format_thousands(accessory.price),
                        accessory.name
                    );
                }
            }
            Command::Reload => match knowledge.reload() {
                Ok(()) => println!("Knowledge base reloaded."),
                Err(e) => {
                    tracing::warn!(error = %e, "Knowledge base reload failed");
                    println!("Reload failed: {}", e);
                }
            },
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
            Command::Invalid(message) => println!("{}", message),
        }
    }

    tracing::info!(session_id = %session.id(), "Session ended");
    Ok(())
}

fn print_bot(message: &ChatMessage) {
    println!("\n{}\n", message.content);
    let replies = message.quick_replies();
    if !replies.is_empty() {
        println!("  [{}]\n", replies.join("] ["));
    }
}

/// Initialize tracing on stderr so logs stay out of the conversation
fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.observability.log_level;
        format!("gplus={}", level).into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if config.observability.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };
    subscriber.with(fmt_layer).init();
}
