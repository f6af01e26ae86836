//! # ucloud-content
//!
//! Content pipeline core for the U-Cloud 24 site. Two independent parts, no
//! shared state between them:
//!
//! - **Generator**: structured service descriptions fetched from a
//!   generation endpoint at most once per `(topic, language)` key and
//!   memoized for the process lifetime, observed by views as
//!   `Loading -> Ready | Failed`.
//! - **Markdown**: a pure renderer for blog articles, a line classifier with
//!   explicit block assembly.
//!
//! Presentation (routing, layout, translations) lives elsewhere and only
//! consumes what this crate returns.
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`generator`] | Cached structured-content generation |
//! | [`cache`] | Content store: keys and backends |
//! | [`session`] | Per-view request state with stale-response discard |
//! | [`articles`] | Raw article retrieval by slug |
//! | [`markdown`] | Markdown-to-HTML rendering |
//! | [`config`] | Generator configuration |
//! | [`types`] | Languages, records, request states |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ucloud_content::{
//!     ContentGenerator, ContentSession, GeneratorConfig, Language, MemoryStore,
//! };
//!
//! #[tokio::main]
//! async fn main() -> ucloud_content::Result<()> {
//!     let store = Arc::new(MemoryStore::new());
//!     let generator = Arc::new(ContentGenerator::new(GeneratorConfig::default(), store)?);
//!
//!     let session = ContentSession::new(generator);
//!     session.request("web", Language::En, "Web Apps").await;
//!     println!("{:?}", session.state());
//!     Ok(())
//! }
//! ```

pub mod articles;
pub mod cache;
pub mod config;
pub mod error;
pub mod generator;
pub mod markdown;
pub mod session;
pub mod types;

// Re-export main types for convenience
pub use articles::{ArticleStore, FsArticleStore, HttpArticleStore};
pub use cache::{ContentKey, ContentStore, MemoryStore, NullStore};
pub use config::GeneratorConfig;
pub use error::{Error, ErrorContext, TransportError};
pub use generator::{ContentGenerator, GeneratorStats};
pub use session::{ContentSession, ContentSource};
pub use types::{ContentRecord, Feature, Language, RequestState};

/// Result type alias for the library.
pub type Result<T> = std::result::Result<T, Error>;
