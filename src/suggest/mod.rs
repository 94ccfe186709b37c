//! AI improvement suggestions.
//!
//! Defines the exchange with a text-generation model: the prompt built from an
//! audit report, and the parsing of the model's answer into a list of
//! suggestions. The model client is constructed by the caller and handed to a
//! `SuggestionEngine`; no client is created implicitly.

mod prompt;

use async_trait::async_trait;

use crate::config::DEFAULT_SUGGESTION_MODEL;
use crate::error_handling::SuggestionError;
use crate::report::AuditReport;

pub use prompt::{build_prompt, parse_suggestions};

/// Credentials and model selection for the suggestion client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionConfig {
    pub api_key: String,
    pub model: String,
}

impl SuggestionConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_SUGGESTION_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// A text-generation backend.
///
/// Object-safe, so engines can also hold a `Box<dyn SuggestionClient>`.
#[async_trait]
pub trait SuggestionClient: Send + Sync {
    /// Sends `prompt` to the model named in `config` and returns its raw answer.
    async fn complete(
        &self,
        config: &SuggestionConfig,
        prompt: &str,
    ) -> Result<String, SuggestionError>;
}

#[async_trait]
impl<C: SuggestionClient + ?Sized> SuggestionClient for Box<C> {
    async fn complete(
        &self,
        config: &SuggestionConfig,
        prompt: &str,
    ) -> Result<String, SuggestionError> {
        (**self).complete(config, prompt).await
    }
}

/// Produces suggestions for audit reports through an explicit client.
pub struct SuggestionEngine<C> {
    client: C,
    config: SuggestionConfig,
}

impl<C: SuggestionClient> SuggestionEngine<C> {
    pub fn new(client: C, config: SuggestionConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Asks the model for suggestions about `report`.
    ///
    /// # Errors
    ///
    /// - `SuggestionError::MissingApiKey` if the configured key is blank
    /// - any error returned by the client
    /// - `SuggestionError::EmptyResponse` if the answer holds no suggestion
    pub async fn suggest(&self, report: &AuditReport) -> Result<Vec<String>, SuggestionError> {
        if self.config.api_key.trim().is_empty() {
            return Err(SuggestionError::MissingApiKey);
        }

        let prompt = build_prompt(report);
        log::debug!(
            "Requesting suggestions from {} ({} prompt chars)",
            self.config.model,
            prompt.len()
        );
        let response = self.client.complete(&self.config, &prompt).await?;

        let suggestions = parse_suggestions(&response);
        if suggestions.is_empty() {
            return Err(SuggestionError::EmptyResponse);
        }
        Ok(suggestions)
    }

    /// Fills `report.suggestions`, leaving them empty if the exchange fails.
    pub async fn enrich(&self, mut report: AuditReport) -> AuditReport {
        match self.suggest(&report).await {
            Ok(suggestions) => report.suggestions = suggestions,
            Err(e) => log::warn!("No suggestions for '{}': {}", report.url, e),
        }
        report
    }
}
