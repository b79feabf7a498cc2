use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Immutable process-wide configuration. The API credential is injected
    /// into the LLM client at construction and never read again after startup.
    #[allow(dead_code)]
    pub config: Config,
}
