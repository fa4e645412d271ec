//! Console command dispatch.
//!
//! The host exposes an administrative command channel: a textual command
//! line dispatched as if typed by a privileged operator. Dispatch returns a
//! boolean "was this recognized as a command" signal and nothing more; there
//! is deliberately no structured result, matching what a console channel can
//! actually promise.

use crate::error::HostError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Identity a command is dispatched under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandSender {
    /// The privileged server console. Carries a synthetic identity so
    /// handlers that need an actor id have one to attribute actions to.
    Console(Uuid),
}

impl CommandSender {
    /// A fresh console sender with a random identity.
    pub fn console() -> Self {
        Self::Console(Uuid::new_v4())
    }

    pub fn id(&self) -> Uuid {
        match self {
            Self::Console(id) => *id,
        }
    }
}

/// Handles a single command word.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Executes the command. `args` excludes the command word itself.
    async fn handle(&self, sender: CommandSender, args: &[&str]) -> Result<(), HostError>;
}

/// Dispatches textual command lines.
#[async_trait]
pub trait CommandDispatcher: Send + Sync {
    /// Dispatches a command line.
    ///
    /// Returns `Ok(true)` if the line named a registered command and its
    /// handler ran, `Ok(false)` if the line was empty or named no known
    /// command, and `Err` only when a handler itself failed.
    async fn dispatch(&self, sender: CommandSender, line: &str) -> Result<bool, HostError>;
}

/// Command dispatcher backed by a handler table keyed by command word.
pub struct CommandRouter {
    handlers: RwLock<HashMap<String, Arc<dyn CommandHandler>>>,
}

impl CommandRouter {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a handler for a command word. Later registrations under
    /// the same word replace earlier ones.
    pub async fn register(&self, command: &str, handler: Arc<dyn CommandHandler>) {
        let mut handlers = self.handlers.write().await;
        handlers.insert(command.to_ascii_lowercase(), handler);
    }

    /// Names of all registered command words.
    pub async fn command_words(&self) -> Vec<String> {
        let handlers = self.handlers.read().await;
        handlers.keys().cloned().collect()
    }
}

impl Default for CommandRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandDispatcher for CommandRouter {
    async fn dispatch(&self, sender: CommandSender, line: &str) -> Result<bool, HostError> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Ok(false);
        };
        let args: Vec<&str> = parts.collect();

        let handler = {
            let handlers = self.handlers.read().await;
            handlers.get(&word.to_ascii_lowercase()).cloned()
        };

        match handler {
            Some(handler) => {
                debug!("Dispatching console command '{}' ({} args)", word, args.len());
                handler.handle(sender, &args).await?;
                Ok(true)
            }
            None => {
                debug!("Unrecognized console command '{}'", word);
                Ok(false)
            }
        }
    }
}
