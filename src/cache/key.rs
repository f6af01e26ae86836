//! Cache key for generated content.

use crate::types::Language;

/// Composite key identifying one cached generation result.
///
/// Keys are never merged or aliased. The canonical string form is
/// `"{topic_id}:{language_code}"`, which is also what shows up in logs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentKey {
    pub topic_id: String,
    pub language: Language,
}

impl ContentKey {
    pub fn new(topic_id: impl Into<String>, language: Language) -> Self {
        Self {
            topic_id: topic_id.into(),
            language,
        }
    }
}

impl std::fmt::Display for ContentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.topic_id, self.language)
    }
}
