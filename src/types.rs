//! Core type definitions shared across the pipeline.

use serde::{Deserialize, Serialize};

/// Languages the site serves content in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ru,
    Pl,
}

impl Language {
    /// The two-letter code used in cache keys and URLs.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::Pl => "pl",
        }
    }

    /// English display name, used when prompting the generator.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ru => "Russian",
            Language::Pl => "Polish",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            "pl" => Ok(Language::Pl),
            other => Err(crate::Error::configuration(format!(
                "unknown language code: {other:?}"
            ))),
        }
    }
}

/// One key feature of a service, as produced by the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

/// Structured service description returned by the generation endpoint.
///
/// Wire field names are camelCase to match the declared response schema.
/// Records are immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub title: String,
    pub detailed_description: String,
    pub features: Vec<Feature>,
    pub use_case: String,
}

/// Caller-facing request lifecycle, owned by the view, not the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Ready(ContentRecord),
    Failed(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, RequestState::Ready(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn language_codes_round_trip() {
        for lang in [Language::En, Language::Ru, Language::Pl] {
            assert_eq!(Language::from_str(lang.code()).unwrap(), lang);
        }
        assert!(Language::from_str("de").is_err());
    }

    #[test]
    fn language_serializes_as_lowercase_code() {
        assert_eq!(serde_json::to_string(&Language::Pl).unwrap(), "\"pl\"");
        assert_eq!(
            serde_json::from_str::<Language>("\"ru\"").unwrap(),
            Language::Ru
        );
    }

    #[test]
    fn record_deserializes_camel_case_fields() {
        let json = r#"{
            "title": "Web Apps, Expanded",
            "detailedDescription": "Modern web applications.",
            "features": [{"title": "SSR", "description": "Server-side rendering."}],
            "useCase": "A storefront."
        }"#;
        let record: ContentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.detailed_description, "Modern web applications.");
        assert_eq!(record.use_case, "A storefront.");
        assert_eq!(record.features.len(), 1);
    }
}
