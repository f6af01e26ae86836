//! # Structured Content Generation
//!
//! Fetches service descriptions from a Gemini-style `generateContent`
//! endpoint, constrained to the content-record schema, and memoizes
//! successes in a [`ContentStore`](crate::cache::ContentStore).
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`ContentGenerator`] | Cached HTTP client for the endpoint |
//! | [`build_prompt`] | Prompt parameterized by topic label and language |
//! | [`content_schema`] | The declared (and locally enforced) response schema |
//! | [`OutputValidator`] | Schema check run before anything is cached |
//!
//! Transport failures, non-JSON bodies, and schema mismatches all surface as
//! [`Error`](crate::Error) variants; none of them are cached, and none are
//! retried automatically.

mod client;
mod prompt;
mod schema;
mod validate;

pub use client::{ContentGenerator, GeneratorStats};
pub use prompt::build_prompt;
pub use schema::{content_schema, SchemaGenerator, FEATURE_COUNT};
pub use validate::{OutputValidator, ValidationError};
