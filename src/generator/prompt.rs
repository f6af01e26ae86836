//! Prompt construction for the generation endpoint.

use crate::types::Language;

/// Build the generation prompt for a service topic.
///
/// The wording matches the service pages: professional tone, aimed at
/// developers and tech managers, response constrained to the content schema.
pub fn build_prompt(topic_label: &str, language: Language) -> String {
    format!(
        "Generate detailed content for a technology service page.\n\
         The service is \"{topic_label}\".\n\
         The target audience is developers and tech managers.\n\
         The tone should be professional, informative, and slightly futuristic.\n\
         Provide the response in {lang}.\n\
         \n\
         Follow the JSON schema exactly.\n\
         - \"title\": A catchy, expanded title for the service.\n\
         - \"detailedDescription\": A 2-3 sentence paragraph explaining the service and its benefits.\n\
         - \"features\": An array of 3 key features. Each feature should have a \"title\" and a short \"description\".\n\
         - \"useCase\": A short paragraph describing a real-world use case for this service.",
        lang = language.display_name(),
    )
}
