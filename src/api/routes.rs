use crate::api::handlers::{games, openapi};
use crate::rpc::Tictactoe;
use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Open cross-origin policy: any origin, any header, no credentials
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::HEAD,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

/// HTTP/JSON routes over any implementation of the game service
pub fn create_router(service: Arc<dyn Tictactoe>) -> Router {
    Router::new()
        .route("/v1/games", post(games::create_game_handler))
        .route("/v1/games/:game_id", get(games::get_game_state_handler))
        .route("/v1/games/:game_id/moves", post(games::make_move_handler))
        .route("/openapi.json", get(openapi::get_openapi_json))
        .with_state(service)
        .layer(cors_layer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::TictactoeService;
    use crate::state::new_state;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(Arc::new(TictactoeService::new(new_state())))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn create_game(app: &Router) -> String {
        let (status, body) = send(app, post_json("/v1/games", json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        body["gameId"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_create_and_get_game() {
        let app = app();
        let game_id = create_game(&app).await;

        let request = Request::get(format!("/v1/games/{}", game_id))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ongoing", "board": vec![""; 9] }));
    }

    #[tokio::test]
    async fn test_play_to_a_win() {
        let app = app();
        let game_id = create_game(&app).await;
        let uri = format!("/v1/games/{}/moves", game_id);

        let mut last = Value::Null;
        for (row, col, player) in [(0, 0, "X"), (1, 1, "O"), (0, 1, "X"), (2, 2, "O"), (0, 2, "X")] {
            let (status, body) = send(
                &app,
                post_json(&uri, json!({ "row": row, "col": col, "player": player })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            last = body;
        }

        assert_eq!(
            last,
            json!({
                "status": "X_wins",
                "board": ["X", "X", "X", "", "O", "", "", "", "O"]
            })
        );
    }

    #[tokio::test]
    async fn test_errors_map_to_http_status() {
        let app = app();

        let request = Request::get("/v1/games/unknown").body(Body::empty()).unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "code": 5, "message": "game not found", "details": [] })
        );

        let move_body = json!({ "row": 0, "col": 0, "player": "X" });
        let (status, _) = send(&app, post_json("/v1/games/unknown/moves", move_body)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let game_id = create_game(&app).await;
        let uri = format!("/v1/games/{}/moves", game_id);
        let (status, body) = send(
            &app,
            post_json(&uri, json!({ "row": 5, "col": 0, "player": "X" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 3);
        assert_eq!(body["message"], "invalid move");
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_argument() {
        let app = app();
        let game_id = create_game(&app).await;

        let request = Request::post(format!("/v1/games/{}/moves", game_id))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"row\": \"zero\"}"))
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 3);
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let app = app();

        let preflight = Request::builder()
            .method(Method::OPTIONS)
            .uri("/v1/games")
            .header(header::ORIGIN, "http://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(preflight).await.unwrap();
        assert!(response.status().is_success());
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );

        let request = Request::post("/v1/games")
            .header(header::ORIGIN, "http://another.example")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_openapi_document_lists_routes() {
        let app = app();
        let request = Request::get("/openapi.json").body(Body::empty()).unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/v1/games"].is_object());
        assert!(body["paths"]["/v1/games/{game_id}/moves"].is_object());
    }
}
