//! Raw article retrieval by slug.
//!
//! Blog pages fetch a Markdown document by slug and hand the text to
//! [`markdown::render`](crate::markdown::render). The source is a static
//! content location: a directory on disk, or the site's `/blog/` path over
//! HTTP. A missing document is a [`NotFound`](crate::Error::NotFound)
//! condition, not a transport failure.

use crate::error::{Error, TransportError};
use crate::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use url::Url;

/// Backend that resolves an article slug to raw Markdown text.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    async fn load(&self, slug: &str) -> Result<String>;
}

// Slugs are flat identifiers; anything that could walk the tree is treated
// as absent rather than rejected loudly.
fn valid_slug(slug: &str) -> bool {
    !slug.is_empty() && !slug.contains(['/', '\\']) && !slug.contains("..")
}

/// Reads `{root}/{slug}.md` from the local filesystem.
pub struct FsArticleStore {
    root: PathBuf,
}

impl FsArticleStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ArticleStore for FsArticleStore {
    async fn load(&self, slug: &str) -> Result<String> {
        if !valid_slug(slug) {
            return Err(Error::not_found(slug));
        }
        let path = self.root.join(format!("{slug}.md"));
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::not_found(slug)),
            Err(e) => Err(e.into()),
        }
    }
}

/// Fetches `{base_url}/{slug}.md` from a static content location over HTTP.
pub struct HttpArticleStore {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpArticleStore {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let mut base_url = Url::parse(base_url.as_ref())
            .map_err(|e| Error::configuration(format!("invalid article base URL: {e}")))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(TransportError::Http)?;
        Ok(Self { http, base_url })
    }
}

#[async_trait]
impl ArticleStore for HttpArticleStore {
    async fn load(&self, slug: &str) -> Result<String> {
        if !valid_slug(slug) {
            return Err(Error::not_found(slug));
        }
        let url = self
            .base_url
            .join(&format!("{slug}.md"))
            .map_err(|e| Error::configuration(format!("invalid article URL: {e}")))?;

        let response = self.http.get(url).send().await.map_err(TransportError::Http)?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::not_found(slug));
        }
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            }
            .into());
        }
        Ok(response.text().await.map_err(TransportError::Http)?)
    }
}
