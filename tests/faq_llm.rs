use ppc_trends::config::LlmConfig;
use ppc_trends::faq::FALLBACK_ANSWER;
use ppc_trends::{AnswerProvider, FaqResponder, GeminiProvider};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-pro:generateContent";

fn config(server: &MockServer) -> LlmConfig {
    LlmConfig {
        endpoint: format!("{}/", server.uri()),
        timeout_secs: 5,
        ..LlmConfig::default()
    }
}

fn reply(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn provider_posts_prompt_and_reads_candidate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(query_param("key", "test-key"))
        .and(body_json(json!({
            "contents": [{"parts": [{"text": "Answer this marketing question: What is CTR?"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("\nClick-through rate.  ")))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GeminiProvider::new(&config(&server), "test-key").unwrap();
    let faq = FaqResponder::new(Arc::new(provider));

    assert_eq!(faq.answer("What is CTR?").await, "Click-through rate.");
}

#[tokio::test]
async fn server_error_is_a_single_failed_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GeminiProvider::new(&config(&server), "test-key").unwrap();
    assert!(provider.generate("anything").await.is_err());
}

#[tokio::test]
async fn responder_hides_provider_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let faq = FaqResponder::new(Arc::new(GeminiProvider::new(&config(&server), "bad").unwrap()));
    assert_eq!(faq.answer("How do I lower CPC?").await, FALLBACK_ANSWER);
}

#[tokio::test]
async fn empty_candidates_fall_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let provider = GeminiProvider::new(&config(&server), "test-key").unwrap();
    let faq = FaqResponder::new(Arc::new(provider));
    assert_eq!(faq.answer("Anything?").await, FALLBACK_ANSWER);
}

#[test]
fn missing_key_disables_provider() {
    let config = LlmConfig {
        api_key_env: "PPC_TRENDS_TEST_KEY_THAT_IS_NEVER_SET".into(),
        ..LlmConfig::default()
    };
    assert!(GeminiProvider::from_env(&config).unwrap().is_none());
}
