mod common;

use anyhow::Result;
use reqwest::StatusCode;

// These tests verify the probe surface: first-match key extraction from
// arbitrary posted payloads.

#[tokio::test]
async fn finds_nested_key() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let body = serde_json::json!({ "a": { "b": { "c": 5 } } });

    let res = client
        .post(format!("{}/api/probe/c", server.base_url))
        .json(&body)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK, "unexpected status: {}", res.status());

    let payload = res.json::<serde_json::Value>().await?;
    assert!(payload["success"].as_bool().unwrap_or(false), "success=false: {}", payload);
    assert_eq!(payload["data"]["found"], serde_json::json!(true));
    assert_eq!(payload["data"]["value"], serde_json::json!(5));

    Ok(())
}

#[tokio::test]
async fn missing_key_is_a_nominal_miss() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let body = serde_json::json!({ "a": 1 });

    let res = client
        .post(format!("{}/api/probe/z", server.base_url))
        .json(&body)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK, "unexpected status: {}", res.status());

    let payload = res.json::<serde_json::Value>().await?;
    assert!(payload["success"].as_bool().unwrap_or(false), "success=false: {}", payload);
    assert_eq!(payload["data"]["found"], serde_json::json!(false));
    assert!(payload["data"]["value"].is_null());

    Ok(())
}

#[tokio::test]
async fn top_level_key_beats_deeper_occurrences() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let body = serde_json::json!({
        "token": null,
        "nested": { "token": "deep" }
    });

    let res = client
        .post(format!("{}/api/probe/token", server.base_url))
        .json(&body)
        .send()
        .await?;

    let payload = res.json::<serde_json::Value>().await?;
    // A present null field is still a find
    assert_eq!(payload["data"]["found"], serde_json::json!(true));
    assert!(payload["data"]["value"].is_null());

    Ok(())
}
