//! ContentSession lifecycle and stale-response discard.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use ucloud_content::{
    ContentRecord, ContentSession, ContentSource, Error, Feature, Language, RequestState,
};

fn record(title: &str) -> ContentRecord {
    ContentRecord {
        title: title.into(),
        detailed_description: "desc".into(),
        features: vec![
            Feature {
                title: "a".into(),
                description: "x".into(),
            },
            Feature {
                title: "b".into(),
                description: "y".into(),
            },
            Feature {
                title: "c".into(),
                description: "z".into(),
            },
        ],
        use_case: "case".into(),
    }
}

/// Source whose latency depends on the topic, for racing requests.
struct DelayedSource;

#[async_trait]
impl ContentSource for DelayedSource {
    async fn fetch(
        &self,
        topic_id: &str,
        _language: Language,
        topic_label: &str,
    ) -> ucloud_content::Result<ContentRecord> {
        let delay = if topic_id == "slow" { 200 } else { 10 };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(record(topic_label))
    }
}

struct FailingSource;

#[async_trait]
impl ContentSource for FailingSource {
    async fn fetch(
        &self,
        _topic_id: &str,
        _language: Language,
        _topic_label: &str,
    ) -> ucloud_content::Result<ContentRecord> {
        Err(Error::schema("response carries no candidate text"))
    }
}

/// Source that fails on the first call and succeeds afterwards.
struct FlakySource {
    failed_once: std::sync::atomic::AtomicBool,
}

#[async_trait]
impl ContentSource for FlakySource {
    async fn fetch(
        &self,
        _topic_id: &str,
        _language: Language,
        topic_label: &str,
    ) -> ucloud_content::Result<ContentRecord> {
        if !self
            .failed_once
            .swap(true, std::sync::atomic::Ordering::SeqCst)
        {
            return Err(Error::schema("transient glitch"));
        }
        Ok(record(topic_label))
    }
}

#[tokio::test]
async fn request_moves_through_loading_to_ready() {
    let session = ContentSession::new(Arc::new(DelayedSource));
    assert_eq!(session.state(), RequestState::Idle);

    let background = session.clone();
    let task = tokio::spawn(async move {
        background.request("slow", Language::En, "Slow Topic").await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(session.state().is_loading());

    task.await.unwrap();
    match session.state() {
        RequestState::Ready(rec) => assert_eq!(rec.title, "Slow Topic"),
        other => panic!("unexpected state: {other:?}"),
    }
}

#[tokio::test]
async fn newest_key_wins_when_key_changes_mid_flight() {
    let session = ContentSession::new(Arc::new(DelayedSource));

    let slow = session.clone();
    let slow_task = tokio::spawn(async move {
        slow.request("slow", Language::En, "Slow Topic").await;
    });

    // Let the slow request enter Loading, then switch keys.
    tokio::time::sleep(Duration::from_millis(50)).await;
    session.request("fast", Language::Ru, "Fast Topic").await;
    slow_task.await.unwrap();

    match session.state() {
        RequestState::Ready(rec) => assert_eq!(rec.title, "Fast Topic"),
        other => panic!("stale resolution overwrote the state: {other:?}"),
    }
}

#[tokio::test]
async fn failure_surfaces_as_failed_with_a_reason() {
    let session = ContentSession::new(Arc::new(FailingSource));
    session.request("web", Language::En, "Web Apps").await;

    match session.state() {
        RequestState::Failed(reason) => {
            assert!(reason.contains("no candidate text"));
        }
        other => panic!("unexpected state: {other:?}"),
    }
}

#[tokio::test]
async fn a_failed_request_can_be_retried_on_the_same_session() {
    let session = ContentSession::new(Arc::new(FlakySource {
        failed_once: std::sync::atomic::AtomicBool::new(false),
    }));

    session.request("web", Language::En, "Web Apps").await;
    assert!(matches!(session.state(), RequestState::Failed(_)));

    session.request("web", Language::En, "Web Apps").await;
    match session.state() {
        RequestState::Ready(rec) => assert_eq!(rec.title, "Web Apps"),
        other => panic!("unexpected state: {other:?}"),
    }
}
