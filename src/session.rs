//! Per-view request state with stale-response discard.

use crate::types::{ContentRecord, Language, RequestState};
use crate::Result;
use arc_swap::ArcSwap;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Source of content records for a session.
///
/// Seam for tests and alternative backends;
/// [`ContentGenerator`](crate::ContentGenerator) is the production
/// implementation.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(
        &self,
        topic_id: &str,
        language: Language,
        topic_label: &str,
    ) -> Result<ContentRecord>;
}

/// Observable request lifecycle for a single view.
///
/// Each call to [`request`](ContentSession::request) belongs to a generation;
/// a resolution arriving for a superseded generation is discarded, so the
/// observed state always reflects the most recently requested key. Last key
/// wins, not last response. There is no cancellation primitive: an abandoned
/// fetch simply resolves into the discard path.
///
/// The handle is cheap to clone; clones share state.
#[derive(Clone)]
pub struct ContentSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    source: Arc<dyn ContentSource>,
    state: ArcSwap<RequestState>,
    generation: AtomicU64,
    // Guards the generation check together with the state swap.
    transition: Mutex<()>,
}

impl ContentSession {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                source,
                state: ArcSwap::from_pointee(RequestState::Idle),
                generation: AtomicU64::new(0),
                transition: Mutex::new(()),
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> RequestState {
        self.inner.state.load().as_ref().clone()
    }

    /// Drive one fetch through `Loading -> Ready | Failed`.
    ///
    /// Callers that switch key mid-flight call `request` again (usually from
    /// a spawned task); the older resolution is discarded when it lands.
    pub async fn request(&self, topic_id: &str, language: Language, topic_label: &str) {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.apply(generation, RequestState::Loading);

        let next = match self.inner.source.fetch(topic_id, language, topic_label).await {
            Ok(record) => RequestState::Ready(record),
            Err(e) => RequestState::Failed(e.to_string()),
        };

        if !self.apply(generation, next) {
            tracing::debug!(topic_id, %language, generation, "discarding stale resolution");
        }
    }

    /// Swap in `next` unless `generation` has been superseded. Returns
    /// whether the transition was applied.
    fn apply(&self, generation: u64, next: RequestState) -> bool {
        let _guard = self.inner.transition.lock().unwrap();
        if self.inner.generation.load(Ordering::SeqCst) != generation {
            return false;
        }
        self.inner.state.store(Arc::new(next));
        true
    }
}
