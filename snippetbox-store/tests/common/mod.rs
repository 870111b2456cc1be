//! Shared test suite for SnippetStore implementations
//!
//! Each backend runner provides a `Harness`; every check below starts from an
//! empty table.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Duration;
use snippetbox_store::{
    CallContext, Retention, SnippetContent, SnippetStore, SnippetTitle, LATEST_LIMIT,
};

#[async_trait]
pub trait Harness: Send + Sync {
    fn store(&self) -> &dyn SnippetStore;

    /// Insert a row whose expiry is already in the past.
    async fn insert_expired(&self, title: &str) -> i32;

    /// Empty the table and restart ids.
    async fn reset(&self);
}

pub async fn run_all_tests<H: Harness>(h: &H) {
    round_trip_keeps_title_content_and_window(h).await;
    retention_windows(h).await;
    get_unknown_id_is_no_record(h).await;
    get_expired_is_no_record(h).await;
    latest_is_capped_and_descending(h).await;
    latest_skips_expired(h).await;
    latest_on_empty_table_is_empty(h).await;
    latest_on_fully_expired_table_is_empty(h).await;
}

async fn insert(h: &impl Harness, title: &str, retention: Retention) -> i32 {
    h.store()
        .insert(
            &CallContext::background(),
            &SnippetTitle::new(title).unwrap(),
            &SnippetContent::new(format!("body of {title}")).unwrap(),
            retention,
        )
        .await
        .expect("insert failed")
}

fn assert_close(actual: Duration, expected: Duration) {
    let drift = (actual - expected).num_milliseconds().abs();
    assert!(drift < 1_000, "expected {expected}, got {actual}");
}

pub async fn round_trip_keeps_title_content_and_window(h: &impl Harness) {
    h.reset().await;
    let ctx = CallContext::background();

    let id = h
        .store()
        .insert(
            &ctx,
            &SnippetTitle::new("T").unwrap(),
            &SnippetContent::new("C").unwrap(),
            Retention::from_days_lenient(7),
        )
        .await
        .unwrap();

    let snippet = h.store().get_by_id(&ctx, id).await.unwrap();
    assert_eq!(snippet.id, id);
    assert_eq!(snippet.title, "T");
    assert_eq!(snippet.content, "C");
    assert_close(snippet.lifetime(), Duration::days(7));
}

pub async fn retention_windows(h: &impl Harness) {
    h.reset().await;
    let ctx = CallContext::background();

    let day = insert(h, "day", Retention::from_days_lenient(1)).await;
    let week = insert(h, "week", Retention::from_days_lenient(7)).await;
    let year = insert(h, "year", Retention::from_days_lenient(30)).await;

    let day = h.store().get_by_id(&ctx, day).await.unwrap();
    let week = h.store().get_by_id(&ctx, week).await.unwrap();
    let year = h.store().get_by_id(&ctx, year).await.unwrap();

    assert_close(day.lifetime(), Duration::days(1));
    assert_close(week.lifetime(), Duration::days(7));
    // Calendar year: 365 or 366 days depending on leap days in range
    let days = year.lifetime().num_days();
    assert!(days == 365 || days == 366, "year window was {days} days");
}

pub async fn get_unknown_id_is_no_record(h: &impl Harness) {
    h.reset().await;
    let ctx = CallContext::background();

    let err = h.store().get_by_id(&ctx, 4242).await.unwrap_err();
    assert!(err.is_no_record(), "got {err:?}");

    insert(h, "only", Retention::OneDay).await;
    let err = h.store().get_by_id(&ctx, 4242).await.unwrap_err();
    assert!(err.is_no_record(), "got {err:?}");
}

pub async fn get_expired_is_no_record(h: &impl Harness) {
    h.reset().await;
    let ctx = CallContext::background();

    let id = h.insert_expired("stale").await;
    let expired = h.store().get_by_id(&ctx, id).await.unwrap_err();
    let missing = h.store().get_by_id(&ctx, id + 1000).await.unwrap_err();

    assert!(expired.is_no_record(), "got {expired:?}");
    assert_eq!(expired.to_string(), missing.to_string());
}

pub async fn latest_is_capped_and_descending(h: &impl Harness) {
    h.reset().await;
    let ctx = CallContext::background();

    let mut ids = Vec::new();
    for i in 0..LATEST_LIMIT + 2 {
        ids.push(insert(h, &format!("snippet {i}"), Retention::SevenDays).await);
    }

    let latest = h.store().list_latest(&ctx).await.unwrap();
    assert_eq!(latest.len(), LATEST_LIMIT as usize);
    assert_eq!(latest[0].id, *ids.last().unwrap());
    assert!(latest.windows(2).all(|w| w[0].id > w[1].id));
}

pub async fn latest_skips_expired(h: &impl Harness) {
    h.reset().await;
    let ctx = CallContext::background();

    let a = insert(h, "a", Retention::OneDay).await;
    let stale_1 = h.insert_expired("stale 1").await;
    let b = insert(h, "b", Retention::OneYear).await;
    let stale_2 = h.insert_expired("stale 2").await;

    let latest = h.store().list_latest(&ctx).await.unwrap();
    let ids: Vec<i32> = latest.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![b, a]);
    assert!(!ids.contains(&stale_1) && !ids.contains(&stale_2));
}

pub async fn latest_on_empty_table_is_empty(h: &impl Harness) {
    h.reset().await;
    let latest = h
        .store()
        .list_latest(&CallContext::background())
        .await
        .expect("empty table is not an error");
    assert!(latest.is_empty());
}

pub async fn latest_on_fully_expired_table_is_empty(h: &impl Harness) {
    h.reset().await;
    for i in 0..3 {
        h.insert_expired(&format!("gone {i}")).await;
    }
    let latest = h
        .store()
        .list_latest(&CallContext::background())
        .await
        .expect("expired rows are not an error");
    assert!(latest.is_empty());
}
