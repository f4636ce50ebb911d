use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use super::{random_author, TestHarness};

#[tokio::test(flavor = "multi_thread")]
async fn test_create_list_delete_roundtrip() -> Result<()> {
    let harness = TestHarness::start().await?;
    let client = harness.http_client();

    let response = client
        .post(harness.url("/quotes"))
        .json(&json!({ "author": "Seneca", "quote": "Luck is what happens..." }))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await?;
    assert_eq!(created["id"], 1);
    assert_eq!(created["author"], "Seneca");
    assert_eq!(created["quote"], "Luck is what happens...");

    let response = client.get(harness.url("/quotes")).send().await?;
    assert_eq!(response.status(), StatusCode::OK);
    let quotes: Vec<Value> = response.json().await?;
    assert_eq!(quotes, vec![created]);

    let response = client.delete(harness.url("/quotes/1")).send().await?;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client.get(harness.url("/quotes")).send().await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await?, "[]");

    harness.shutdown().await
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_error_paths() -> Result<()> {
    let harness = TestHarness::start().await?;
    let client = harness.http_client();

    let response = client.delete(harness.url("/quotes/abc")).send().await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    assert_eq!(body["error"], "Bad Request");
    assert!(body["message"].is_string());

    let response = client.delete(harness.url("/quotes/999")).send().await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await?;
    assert_eq!(body["error"], "Not Found");

    harness.shutdown().await
}

#[tokio::test(flavor = "multi_thread")]
async fn test_random_and_author_filter() -> Result<()> {
    let harness = TestHarness::start().await?;
    let client = harness.http_client();

    let response = client.get(harness.url("/quotes/random")).send().await?;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let author = random_author("stoic");
    for text in ["first", "second"] {
        client
            .post(harness.url("/quotes"))
            .json(&json!({ "author": author, "quote": text }))
            .send()
            .await?
            .error_for_status()?;
    }
    client
        .post(harness.url("/quotes"))
        .json(&json!({ "author": "Someone Else", "quote": "third" }))
        .send()
        .await?
        .error_for_status()?;

    let response = client
        .get(harness.url("/quotes"))
        .query(&[("author", author.as_str())])
        .send()
        .await?;
    let quotes: Vec<Value> = response.json().await?;
    let texts: Vec<_> = quotes.iter().map(|q| q["quote"].clone()).collect();
    assert_eq!(texts, vec![json!("first"), json!("second")]);

    let response = client.get(harness.url("/quotes/random")).send().await?;
    assert_eq!(response.status(), StatusCode::OK);
    let picked: Value = response.json().await?;
    assert!(["first", "second", "third"].contains(&picked["quote"].as_str().unwrap_or_default()));

    harness.shutdown().await
}

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_creates_over_http() -> Result<()> {
    let harness = TestHarness::start().await?;

    let mut tasks = Vec::new();
    for n in 0..100 {
        let client = harness.http_client().clone();
        let url = harness.url("/quotes");
        tasks.push(tokio::spawn(async move {
            let response = client
                .post(url)
                .json(&json!({ "author": "Seneca", "quote": format!("quote {n}") }))
                .send()
                .await?;
            let created: Value = response.error_for_status()?.json().await?;
            anyhow::Ok(created["id"].as_u64().unwrap_or_default())
        }));
    }

    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await??);
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=100).collect::<Vec<u64>>());

    let quotes: Vec<Value> = harness
        .http_client()
        .get(harness.url("/quotes"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(quotes.len(), 100);

    harness.shutdown().await
}
