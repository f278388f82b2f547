//! Slidecast Suggestion Service
//!
//! A small HTTP service that forwards a topic string to a hosted
//! chat-completions gateway and reshapes the reply into slide content
//! suggestions.
//!
//! ## Protocol
//!
//! ```json
//! POST /api/suggestions  { "topic": "Customer onboarding" }
//! 200                    { "suggestions": ["...", "...", "..."] }
//! 400                    { "error": "Topic is required" }
//! 500                    { "error": "..." }
//! ```

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use slidecast_core::{parse_suggestions, BoxFuture, SuggestError, SuggestionProvider};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

/// Gateway configuration, read from the environment.
#[derive(Debug, Clone)]
struct GatewayConfig {
    /// Bearer token for the gateway. Requests fail with 500 when unset.
    api_key: Option<String>,
    /// Chat-completions endpoint URL.
    url: String,
    /// Model identifier.
    model: String,
}

impl GatewayConfig {
    fn from_env() -> Self {
        Self {
            api_key: std::env::var("SLIDECAST_API_KEY").ok(),
            url: std::env::var("SLIDECAST_GATEWAY_URL")
                .unwrap_or_else(|_| "https://ai.gateway.lovable.dev/v1/chat/completions".into()),
            model: std::env::var("SLIDECAST_MODEL")
                .unwrap_or_else(|_| "google/gemini-2.5-flash".into()),
        }
    }
}

/// Chat-completions request payload.
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

/// The slice of the chat-completions reply we care about.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: String,
}

const SYSTEM_PROMPT: &str = "You are an AI assistant specialized in creating training and \
presentation content. Generate clear, concise, and actionable content for training materials.";

/// Suggestion provider backed by a hosted chat-completions gateway.
struct GatewayProvider {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl GatewayProvider {
    fn new(config: GatewayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn complete(&self, topic: &str) -> Result<String, SuggestError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| SuggestError::Gateway("SLIDECAST_API_KEY is not configured".into()))?;

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!(
                        "Generate 3 key training points or content suggestions for the \
                         following topic: \"{}\". Each point should be concise (1-2 sentences) \
                         and suitable for a presentation slide.",
                        topic
                    ),
                },
            ],
            temperature: 0.7,
        };

        let response = self
            .client
            .post(&self.config.url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SuggestError::Gateway(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("gateway error: {} {}", status, body);
            return Err(SuggestError::Gateway(format!("gateway returned {}", status)));
        }

        let reply: ChatResponse = response
            .json()
            .await
            .map_err(|e| SuggestError::Gateway(format!("invalid gateway reply: {}", e)))?;

        Ok(reply
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default())
    }
}

impl SuggestionProvider for GatewayProvider {
    fn generate(&self, topic: &str) -> BoxFuture<'_, Result<Vec<String>, SuggestError>> {
        let topic = topic.trim().to_string();
        Box::pin(async move {
            if topic.is_empty() {
                return Err(SuggestError::EmptyTopic);
            }
            let reply = self.complete(&topic).await?;
            Ok(parse_suggestions(&reply))
        })
    }
}

/// Shared application state.
struct AppState {
    provider: Arc<dyn SuggestionProvider + Send + Sync>,
}

/// Suggestion request body.
#[derive(Debug, Deserialize)]
struct SuggestRequest {
    #[serde(default)]
    topic: Option<String>,
}

/// Suggestion response body.
#[derive(Debug, Serialize, Deserialize)]
struct SuggestResponse {
    suggestions: Vec<String>,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
struct ErrorBody {
    error: String,
}

/// API error with an HTTP status.
#[derive(Debug)]
enum ApiError {
    BadRequest(String),
    Upstream(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SuggestError> for ApiError {
    fn from(err: SuggestError) -> Self {
        match err {
            SuggestError::EmptyTopic => ApiError::BadRequest("Topic is required".into()),
            SuggestError::Gateway(msg) => ApiError::Upstream(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) | ApiError::Upstream(msg) => (self.status(), msg.clone()),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slidecast_server=info,tower_http=info".into()),
        )
        .init();

    let config = GatewayConfig::from_env();
    if config.api_key.is_none() {
        error!("SLIDECAST_API_KEY is not set; suggestion requests will fail");
    }
    info!("using model {} via {}", config.model, config.url);

    let state = Arc::new(AppState {
        provider: Arc::new(GatewayProvider::new(config)),
    });

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 3030));
    info!("Slidecast suggestion service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/suggestions", post(suggestions))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Index page
async fn index() -> &'static str {
    "Slidecast Suggestion Service - POST /api/suggestions"
}

/// Health check
async fn health() -> &'static str {
    "ok"
}

/// Generate content suggestions for a topic.
async fn suggestions(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, ApiError> {
    let topic = match request.topic.as_deref().map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => return Err(ApiError::BadRequest("Topic is required".into())),
    };

    info!("generating suggestions for topic '{}'", topic);
    let suggestions = state.provider.generate(&topic).await?;
    Ok(Json(SuggestResponse { suggestions }))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Provider that replies with a canned result or error.
    struct StubProvider {
        reply: Result<Vec<String>, &'static str>,
    }

    impl SuggestionProvider for StubProvider {
        fn generate(&self, topic: &str) -> BoxFuture<'_, Result<Vec<String>, SuggestError>> {
            let topic = topic.to_string();
            Box::pin(async move {
                if topic.trim().is_empty() {
                    return Err(SuggestError::EmptyTopic);
                }
                match &self.reply {
                    Ok(lines) => Ok(lines.clone()),
                    Err(msg) => Err(SuggestError::Gateway(msg.to_string())),
                }
            })
        }
    }

    fn state_with(reply: Result<Vec<String>, &'static str>) -> Arc<AppState> {
        Arc::new(AppState {
            provider: Arc::new(StubProvider { reply }),
        })
    }

    #[tokio::test]
    async fn test_missing_topic_is_bad_request() {
        let state = state_with(Ok(vec![]));
        let result = suggestions(State(state), Json(SuggestRequest { topic: None })).await;

        let err = result.err().unwrap();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_blank_topic_is_bad_request() {
        let state = state_with(Ok(vec![]));
        let request = SuggestRequest {
            topic: Some("   ".into()),
        };
        let result = suggestions(State(state), Json(request)).await;

        assert_eq!(result.err().unwrap().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_suggestions_pass_through() {
        let canned = vec![
            "Open with the business problem, not the tool.".to_string(),
            "Show one workflow end to end before features.".to_string(),
        ];
        let state = state_with(Ok(canned.clone()));
        let request = SuggestRequest {
            topic: Some("Product demos".into()),
        };

        let Json(body) = suggestions(State(state), Json(request)).await.unwrap();
        assert_eq!(body.suggestions, canned);
    }

    #[tokio::test]
    async fn test_gateway_failure_is_internal_error() {
        let state = state_with(Err("gateway returned 429"));
        let request = SuggestRequest {
            topic: Some("Sales kickoff".into()),
        };
        let result = suggestions(State(state), Json(request)).await;

        assert_eq!(
            result.err().unwrap().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_chat_response_shape() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"1. First point"}}]}"#;
        let reply: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(reply.choices[0].message.content, "1. First point");

        // A reply with no choices maps to empty content, not an error.
        let empty: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.choices.is_empty());
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            error: "Topic is required".into(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"Topic is required"}"#);
    }
}
