use tracing::Level;
use std::sync::Once;
use std::collections::VecDeque;

static INIT: Once = Once::new();

/// Prefixes every message with the labels it was built with, e.g.
/// `[Acme] [3/10] Summarizing`.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    prefixes: VecDeque<String>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            prefixes: VecDeque::new(),
        }
    }

    pub fn with_new_prefixes(mut self, prefix: String) -> Self {
        self.prefixes.clear();
        self.prefixes.push_back(prefix);
        self
    }

    pub fn with_prefix(&self, prefix: String) -> Self {
        let mut logger = self.clone();
        logger.prefixes.push_back(prefix);
        logger
    }

    fn prefixed(&self, message: &str) -> String {
        let prefix = self.prefixes.iter().map(|p| format!("[{}] ", p)).collect::<String>();
        format!("{}{}", prefix, message)
    }

    pub fn info(&self, message: &str) {
        tracing::info!("{}", self.prefixed(message));
    }

    pub fn debug(&self, message: &str) {
        tracing::debug!("{}", self.prefixed(message));
    }
}

pub fn init_logging(level: Level) -> Logger {
    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .init();
        });
    }
    Logger::new()
}
