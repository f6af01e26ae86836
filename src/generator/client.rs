//! HTTP client for the generation endpoint.

use super::prompt::build_prompt;
use super::schema::content_schema;
use super::validate::OutputValidator;
use crate::cache::{ContentKey, ContentStore};
use crate::config::GeneratorConfig;
use crate::error::{Error, ErrorContext, TransportError};
use crate::session::ContentSource;
use crate::types::{ContentRecord, Language};
use crate::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters for fetch outcomes.
#[derive(Debug, Clone, Default)]
pub struct GeneratorStats {
    pub hits: u64,
    pub misses: u64,
    pub failures: u64,
}

struct AtomicStats {
    hits: AtomicU64,
    misses: AtomicU64,
    failures: AtomicU64,
}

impl AtomicStats {
    fn new() -> Self {
        Self {
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            failures: AtomicU64::new(0),
        }
    }

    fn snapshot(&self) -> GeneratorStats {
        GeneratorStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }
}

/// Cached generator for structured service content.
///
/// Issues at most one request per distinct uncached `(topic, language)` key;
/// successful records are stored for the process lifetime, failures are not,
/// so a retry with the same key goes back to the network.
pub struct ContentGenerator {
    http: reqwest::Client,
    config: GeneratorConfig,
    store: Arc<dyn ContentStore>,
    validator: OutputValidator,
    stats: AtomicStats,
}

impl ContentGenerator {
    pub fn new(config: GeneratorConfig, store: Arc<dyn ContentStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .pool_idle_timeout(Some(std::time::Duration::from_secs(90)))
            .build()
            .map_err(TransportError::Http)?;

        Ok(Self {
            http,
            config,
            store,
            validator: OutputValidator::new(content_schema()),
            stats: AtomicStats::new(),
        })
    }

    /// Fetch content for a topic, from the store when possible.
    pub async fn fetch(
        &self,
        topic_id: &str,
        language: Language,
        topic_label: &str,
    ) -> Result<ContentRecord> {
        let key = ContentKey::new(topic_id, language);
        if let Some(record) = self.store.get(&key).await? {
            self.stats.hits.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(%key, "content store hit");
            return Ok(record);
        }

        self.stats.misses.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(%key, "content store miss, calling generation endpoint");
        match self.generate(topic_label, language).await {
            Ok(record) => {
                // Stored before the caller sees it, first write wins.
                self.store.insert(&key, &record).await?;
                Ok(record)
            }
            Err(e) => {
                self.stats.failures.fetch_add(1, Ordering::Relaxed);
                Err(e)
            }
        }
    }

    async fn generate(&self, topic_label: &str, language: Language) -> Result<ContentRecord> {
        let body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": build_prompt(topic_label, language) }],
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": content_schema(),
            },
        });

        let mut request = self.http.post(self.config.generate_url()?).json(&body);
        if let Some(ref api_key) = self.config.api_key {
            // Gemini-style endpoints take the key as a query parameter.
            request = request.query(&[("key", api_key.as_str())]);
        }

        let response = request.send().await.map_err(TransportError::Http)?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let envelope: serde_json::Value = response.json().await.map_err(TransportError::Http)?;

        // Gemini: { candidates: [{ content: { parts: [{ text }] } }] }
        let text = envelope
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::schema("response carries no candidate text"))?;

        let parsed: serde_json::Value = serde_json::from_str(text.trim())
            .map_err(|e| Error::schema(format!("candidate text is not valid JSON: {e}")))?;

        let errors = self.validator.validate(&parsed);
        if !errors.is_empty() {
            tracing::warn!(count = errors.len(), "generation response failed validation");
            let message = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(Error::schema_with_context(
                message,
                ErrorContext::new().with_field_path(errors[0].path.clone()),
            ));
        }

        let record: ContentRecord = serde_json::from_value(parsed)?;
        Ok(record)
    }

    pub fn stats(&self) -> GeneratorStats {
        self.stats.snapshot()
    }
}

#[async_trait]
impl ContentSource for ContentGenerator {
    async fn fetch(
        &self,
        topic_id: &str,
        language: Language,
        topic_label: &str,
    ) -> Result<ContentRecord> {
        ContentGenerator::fetch(self, topic_id, language, topic_label).await
    }
}
