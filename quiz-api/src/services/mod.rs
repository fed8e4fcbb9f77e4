use std::sync::Arc;

use crate::config::Config;

use self::question_bank::QuestionBank;
use self::session_store::SessionStore;

/// Shared application state handed to every handler. Owns the question
/// catalog and the session store; nothing here is a module-level global.
pub struct AppState {
    pub config: Config,
    pub bank: Arc<QuestionBank>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let bank = QuestionBank::load(config.question_bank_path.as_deref())?;
        if bank.is_empty() {
            anyhow::bail!("Question bank is empty");
        }
        tracing::info!("Question bank loaded with {} questions", bank.len());

        Ok(Self {
            config,
            bank: Arc::new(bank),
            sessions: SessionStore::new(),
        })
    }

    /// Builds state around an explicit catalog. Used by tests that need a
    /// deterministic bank.
    pub fn with_bank(config: Config, bank: QuestionBank) -> Self {
        Self {
            config,
            bank: Arc::new(bank),
            sessions: SessionStore::new(),
        }
    }
}

pub mod question_bank;
pub mod quiz_service;
pub mod session_store;
