use mockito::{Matcher, Server};
use receipt_chef::{
    gemini::{GeminiClient, GeminiConfig},
    recommend::{Catalog, Recommender},
    Error, ExtractionSource, IngredientExtractor,
};
use std::sync::Arc;

fn config_for(server: &Server) -> GeminiConfig {
    GeminiConfig {
        api_key: Some("test-key".to_string()),
        model: "test-model".to_string(),
        base_url: format!("{}/v1", server.url()),
        timeout_secs: 5,
    }
}

#[tokio::test]
async fn test_extract_ingredients_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/models/test-model:generateContent")
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::Regex("양파 1망".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"양파, 사과"}]}}]}"#)
        .create_async()
        .await;

    let client = GeminiClient::new(config_for(&server)).unwrap();
    let answer = client.extract_ingredients("양파 1망 2,990").await.unwrap();

    assert_eq!(answer, "양파, 사과");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_is_upstream_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/models/test-model:generateContent")
        .with_status(500)
        .with_body("internal")
        .create_async()
        .await;

    let client = GeminiClient::new(config_for(&server)).unwrap();
    let result = client.extract_ingredients("우유").await;

    assert!(matches!(result, Err(Error::Upstream(_))));
}

#[tokio::test]
async fn test_missing_candidates_is_upstream_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/models/test-model:generateContent")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"promptFeedback":{"blockReason":"OTHER"}}"#)
        .create_async()
        .await;

    let client = GeminiClient::new(config_for(&server)).unwrap();
    let result = client.extract_ingredients("우유").await;

    assert!(matches!(result, Err(Error::Upstream(_))));
}

#[tokio::test]
async fn test_recommender_falls_back_when_gemini_fails() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/models/test-model:generateContent")
        .with_status(503)
        .expect(1)
        .create_async()
        .await;

    let client = GeminiClient::new(config_for(&server)).unwrap();
    let recommender = Recommender::new(Catalog::builtin()).with_extractor(Arc::new(client));

    let result = recommender.recommend("계란 두 개 구매").await;

    // A single failed call, no retry
    mock.assert_async().await;
    assert_eq!(result.source, ExtractionSource::Naive);
    assert_eq!(result.ingredients.as_slice(), ["계란"]);
}

#[tokio::test]
async fn test_recommender_uses_gemini_answer() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/models/test-model:generateContent")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"사과, 양파\n"}]}}]}"#)
        .create_async()
        .await;

    let client = GeminiClient::new(config_for(&server)).unwrap();
    let recommender = Recommender::new(Catalog::builtin()).with_extractor(Arc::new(client));

    let result = recommender.recommend("사과 3,000 양파 2,000").await;
    assert_eq!(result.source, ExtractionSource::Ai);
    assert_eq!(result.ingredients.as_slice(), ["사과", "양파"]);
}
