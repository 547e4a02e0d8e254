use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{
        fallback::{method_not_allowed, not_found},
        health::livez,
        items::{create_item, get_item, update_item},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/items", post(create_item))
        .route("/items/{item_id}", get(get_item).put(update_item))
        .route("/livez", get(livez))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use stash_core::record::Record;
    use tower::ServiceExt;

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    async fn seed(state: &AppState, item: Value) {
        let record: Record = item.as_object().cloned().unwrap();
        state.record_repo.put_record(&record).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_item() {
        let state = AppState::default();
        let app = create_app(state.clone());

        let response = app
            .oneshot(json_request(
                "POST",
                "/items",
                json!({"id": "test1", "value": "hello"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Item test1 created.");

        let stored = state.record_repo.get_record("test1").await.unwrap().unwrap();
        assert_eq!(stored["value"], "hello");
    }

    #[tokio::test]
    async fn test_create_then_get_returns_identical_map() {
        let app = create_app(AppState::default());
        let item = json!({"id": "full", "value": "v", "count": 3, "tags": ["x", "y"]});

        let response = app
            .clone()
            .oneshot(json_request("POST", "/items", item.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::builder().uri("/items/full").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, item);
    }

    #[tokio::test]
    async fn test_create_overwrites_existing_item() {
        let state = AppState::default();
        seed(&state, json!({"id": "dup", "value": "old", "stale": true})).await;
        let app = create_app(state.clone());

        let response = app
            .oneshot(json_request("POST", "/items", json!({"id": "dup", "value": "new"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let stored = state.record_repo.get_record("dup").await.unwrap().unwrap();
        assert_eq!(Value::Object(stored), json!({"id": "dup", "value": "new"}));
    }

    #[tokio::test]
    async fn test_create_missing_value_is_rejected() {
        let state = AppState::default();
        let app = create_app(state.clone());

        let response = app
            .oneshot(json_request("POST", "/items", json!({"id": "novalue"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["detail"], "Invalid item data");
        assert!(state.record_repo.get_record("novalue").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_missing_id_is_rejected() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(json_request("POST", "/items", json!({"value": "orphan"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["detail"], "Invalid item data");
    }

    #[tokio::test]
    async fn test_create_non_object_body_is_unprocessable() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(json_request("POST", "/items", json!(["id", "value"])))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body_json(response).await["detail"].is_string());
    }

    #[tokio::test]
    async fn test_create_without_content_type_is_parsed_as_json() {
        let state = AppState::default();
        let app = create_app(state.clone());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items")
                    .body(Body::from(r#"{"id": "bare", "value": "no header"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["message"], "Item bare created.");
        assert!(state.record_repo.get_record("bare").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_create_with_text_content_type_is_unprocessable() {
        let state = AppState::default();
        let app = create_app(state.clone());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items")
                    .header("Content-Type", "text/plain")
                    .body(Body::from(r#"{"id": "plain", "value": "v"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(state.record_repo.get_record("plain").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_malformed_json_is_unprocessable() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"id": "#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body_json(response).await["detail"].is_string());
    }

    #[tokio::test]
    async fn test_create_empty_key_is_backend_fault() {
        let state = AppState::default();
        let app = create_app(state.clone());

        let response = app
            .oneshot(json_request("POST", "/items", json!({"id": "", "value": "v"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["detail"], "Internal Server Error");
        assert!(state.record_repo.get_record("").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_item() {
        let state = AppState::default();
        seed(&state, json!({"id": "test2", "value": "initial"})).await;
        let app = create_app(state.clone());

        let response = app
            .oneshot(json_request("PUT", "/items/test2", json!({"value": "updated"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["message"], "Item test2 updated.");

        let stored = state.record_repo.get_record("test2").await.unwrap().unwrap();
        assert_eq!(Value::Object(stored), json!({"id": "test2", "value": "updated"}));
    }

    #[tokio::test]
    async fn test_update_keeps_unmentioned_attributes() {
        let state = AppState::default();
        seed(&state, json!({"id": "keep", "value": "a", "color": "blue"})).await;
        let app = create_app(state.clone());

        let response = app
            .oneshot(json_request("PUT", "/items/keep", json!({"size": 10})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let stored = state.record_repo.get_record("keep").await.unwrap().unwrap();
        assert_eq!(
            Value::Object(stored),
            json!({"id": "keep", "value": "a", "color": "blue", "size": 10})
        );
    }

    #[tokio::test]
    async fn test_update_missing_item_creates_it() {
        let state = AppState::default();
        let app = create_app(state.clone());

        let response = app
            .oneshot(json_request("PUT", "/items/ghost", json!({"value": "boo"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let stored = state.record_repo.get_record("ghost").await.unwrap().unwrap();
        assert_eq!(Value::Object(stored), json!({"id": "ghost", "value": "boo"}));
    }

    #[tokio::test]
    async fn test_update_key_attribute_is_backend_fault() {
        let state = AppState::default();
        seed(&state, json!({"id": "fixed", "value": "v"})).await;
        let app = create_app(state);

        let response = app
            .oneshot(json_request("PUT", "/items/fixed", json!({"id": "moved"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["detail"], "Internal Server Error");
    }

    #[tokio::test]
    async fn test_get_item() {
        let state = AppState::default();
        seed(&state, json!({"id": "test3", "value": "retrieve_me"})).await;
        let app = create_app(state);

        let response = app
            .oneshot(Request::builder().uri("/items/test3").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], "test3");
        assert_eq!(body["value"], "retrieve_me");
    }

    #[tokio::test]
    async fn test_get_item_not_found() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/items/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["detail"], "Item not found");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"detail": "Not Found"}));
    }

    #[tokio::test]
    async fn test_wrong_method_is_json_405() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/items/test3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            body_json(response).await,
            json!({"detail": "Method Not Allowed"})
        );
    }

    /// REST API (v1) event for `GET {path}` deployed under `stage`.
    fn rest_event(path: &str, stage: &str) -> String {
        json!({
            "resource": "/{proxy+}",
            "path": path,
            "httpMethod": "GET",
            "headers": {"Host": "abc123.execute-api.us-east-1.amazonaws.com"},
            "multiValueHeaders": {"Host": ["abc123.execute-api.us-east-1.amazonaws.com"]},
            "queryStringParameters": null,
            "multiValueQueryStringParameters": null,
            "pathParameters": {"proxy": path},
            "stageVariables": null,
            "requestContext": {
                "accountId": "123456789012",
                "resourceId": "abc123",
                "stage": stage,
                "requestId": "c6af9ac6-7b61-11e6-9a41-93e8deadbeef",
                "identity": {"sourceIp": "127.0.0.1"},
                "resourcePath": "/{proxy+}",
                "httpMethod": "GET",
                "apiId": "abc123",
                "path": format!("/{stage}{path}"),
                "protocol": "HTTP/1.1"
            },
            "body": null,
            "isBase64Encoded": false
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_lambda_rest_event_with_stage_reaches_item() {
        let state = AppState::default();
        seed(&state, json!({"id": "t1", "value": "staged"})).await;
        let request = lambda_http::request::from_str(&rest_event("/items/t1", "prod")).unwrap();

        let response = stash_lambda::handle(create_app(state), request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let lambda_http::Body::Text(text) = response.body() else {
            panic!("expected a text body, got {:?}", response.body());
        };
        let body: Value = serde_json::from_str(text).unwrap();
        assert_eq!(body, json!({"id": "t1", "value": "staged"}));
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
