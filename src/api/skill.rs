use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use calorie_skill::alexa::RequestEnvelope;

use crate::api::ApiResponse;
use crate::state::AppState;

/// POST /api/skill - 处理语音技能请求
pub async fn handle_skill_request(
    State(state): State<Arc<AppState>>,
    Json(envelope): Json<RequestEnvelope>,
) -> Response {
    tracing::info!(
        "Skill request applicationId={:?}, requestId={}",
        envelope.application_id(),
        envelope.request_id()
    );

    if !state.config.accepts_application(envelope.application_id()) {
        tracing::warn!("Rejected request from application {:?}", envelope.application_id());
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<()>::error(403, "Invalid Application ID")),
        )
            .into_response();
    }

    tracing::debug!("Incoming request: {:#?}", envelope);

    let response = state.skill.handle(&envelope);

    match serde_json::to_string_pretty(&response) {
        Ok(body) => tracing::debug!("Final response:\n{}", body),
        Err(e) => tracing::warn!("Failed to render response for logging: {}", e),
    }

    Json(response).into_response()
}

#[cfg(test)]
mod tests {
    use super::super::{router, test_support::app_state};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use calorie_skill::config::AppConfig;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn request(name: &str, slots: Value, attributes: Value) -> Request<Body> {
        let body = json!({
            "version": "1.0",
            "session": {
                "new": false,
                "sessionId": "session1234",
                "attributes": attributes,
                "application": {"applicationId": "amzn1.echo-sdk-ams.app.1234"}
            },
            "request": {
                "type": "IntentRequest",
                "requestId": "request5678",
                "intent": {"name": name, "slots": slots}
            }
        });
        Request::builder()
            .method("POST")
            .uri("/api/skill")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: axum::Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_search_and_continue() {
        let app = router(app_state(AppConfig::default()));

        let slots = json!({"FoodItem": {"name": "FoodItem", "value": "orange"}});
        let (status, first) = send(app.clone(), request("GetNutritionInfo", slots, json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["version"], "1.0");
        assert_eq!(first["response"]["shouldEndSession"], false);
        assert_eq!(first["sessionAttributes"]["resultLength"], 18);

        let attributes = first["sessionAttributes"].clone();
        let (status, more) = send(app, request("GetNextEventIntent", json!({}), attributes)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(more["response"]["shouldEndSession"], true);
        assert!(more.get("sessionAttributes").is_none());
        assert!(more["response"]["outputSpeech"]["ssml"]
            .as_str()
            .unwrap()
            .contains("Your search resulted in 18 food items"));
    }

    #[tokio::test]
    async fn test_rejects_other_application() {
        let mut config = AppConfig::default();
        config.skill.application_id = "amzn1.ask.skill.food".to_string();
        let app = router(app_state(config));

        let (status, body) = send(app, request("AMAZON.StopIntent", json!({}), json!({}))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["code"], 403);
    }

    #[tokio::test]
    async fn test_plain_text_speech() {
        let mut config = AppConfig::default();
        config.skill.ssml = false;
        let app = router(app_state(config));

        let (_, body) = send(app, request("AMAZON.StopIntent", json!({}), json!({}))).await;
        assert_eq!(body["response"]["outputSpeech"], json!({"type": "PlainText", "text": "Good Bye. "}));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let app = router(app_state(AppConfig::default()));
        let req = Request::builder()
            .method("POST")
            .uri("/api/skill")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"session": {}}"#))
            .unwrap();

        let (status, _) = send(app, req).await;
        assert!(status.is_client_error());
    }
}
