use std::sync::Arc;

use crate::config::Config;
use crate::extraction::backend::{ResumeParser, RuleBasedParser};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable extraction backend. Default: RuleBasedParser.
    pub parser: Arc<dyn ResumeParser>,
}

impl AppState {
    pub fn new(config: Config, parser: Arc<dyn ResumeParser>) -> Self {
        Self { config, parser }
    }

    pub fn rule_based(config: Config) -> Self {
        Self::new(config, Arc::new(RuleBasedParser))
    }
}
