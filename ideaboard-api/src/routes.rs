use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use ideaboard_app::domain::{validate_idea_text, Idea};
use ideaboard_app::store::StoreError;
use ideaboard_app::AppContext;
use ideaboard_errors::AppError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The REST surface under `/api`. Generic over the outer router's state so
/// it can be merged into the Leptos router.
pub fn api_router<S>(ctx: AppContext) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/api/health", get(health))
        .route("/api/ideas", get(list_ideas).post(create_idea))
        .route("/api/ideas/{id}/upvote", post(upvote_idea))
        .with_state(ctx)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "Idea Board API is running",
    })
}

async fn list_ideas(State(ctx): State<AppContext>) -> Result<Json<Vec<Idea>>, AppError> {
    let ideas = ctx.store.list().await.map_err(|e| {
        tracing::error!("Failed to list ideas: {e}");
        AppError::Store("Failed to fetch ideas".to_string())
    })?;

    Ok(Json(ideas))
}

#[derive(Deserialize)]
struct CreateIdeaRequest {
    // Option so an absent or null `text` reads as an empty submission
    // rather than a deserialization failure.
    text: Option<String>,
}

async fn create_idea(
    State(ctx): State<AppContext>,
    Json(request): Json<CreateIdeaRequest>,
) -> Result<(StatusCode, Json<Idea>), AppError> {
    let text = validate_idea_text(request.text.as_deref().unwrap_or_default())?;

    let idea = ctx.store.create(text).await.map_err(|e| {
        tracing::error!("Failed to create idea: {e}");
        AppError::Store("Failed to create idea".to_string())
    })?;

    Ok((StatusCode::CREATED, Json(idea)))
}

async fn upvote_idea(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<Idea>, AppError> {
    // A malformed id cannot name any idea, so it gets the same 404 as an
    // unknown one.
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(AppError::NotFound);
    };

    let idea = ctx.store.upvote(id).await.map_err(|e| match e {
        StoreError::NotFound(_) => AppError::NotFound,
        StoreError::Db(err) => {
            tracing::error!("Failed to upvote idea {id}: {err}");
            AppError::Store("Failed to upvote idea".to_string())
        }
    })?;

    Ok(Json(idea))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use ideaboard_app::infrastructure::memory::MemoryIdeaStore;
    use ideaboard_app::store::IdeaStore;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_router() -> Router {
        api_router(AppContext::new(IdeaStore::Memory(MemoryIdeaStore::new())))
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_empty(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let router = test_router();
        let (status, body) = send(&router, get_request("/api/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "status": "OK", "message": "Idea Board API is running" })
        );
    }

    #[tokio::test]
    async fn list_starts_empty() {
        let router = test_router();
        let (status, body) = send(&router, get_request("/api/ideas")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn create_returns_201_with_the_full_record() {
        let router = test_router();
        let (status, body) = send(
            &router,
            post_json("/api/ideas", json!({ "text": "Build a thing" })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["text"], "Build a thing");
        assert_eq!(body["upvotes"], 0);
        assert!(Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
        // Timestamps travel as ISO-8601 strings.
        assert!(body["created_at"].as_str().unwrap().contains('T'));
    }

    #[tokio::test]
    async fn create_trims_surrounding_whitespace() {
        let router = test_router();
        let (status, body) = send(
            &router,
            post_json("/api/ideas", json!({ "text": "  Build a thing  " })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["text"], "Build a thing");
    }

    #[tokio::test]
    async fn create_rejects_missing_text() {
        let router = test_router();
        let (status, body) = send(&router, post_json("/api/ideas", json!({}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Idea text is required" }));
    }

    #[tokio::test]
    async fn create_rejects_null_text() {
        let router = test_router();
        let (status, body) = send(&router, post_json("/api/ideas", json!({ "text": null }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Idea text is required" }));
    }

    #[tokio::test]
    async fn create_rejects_blank_text() {
        let router = test_router();
        for text in ["", "   "] {
            let (status, body) =
                send(&router, post_json("/api/ideas", json!({ "text": text }))).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({ "error": "Idea text is required" }));
        }
    }

    #[tokio::test]
    async fn create_rejects_over_length_text() {
        let router = test_router();
        let text = "x".repeat(281);
        let (status, body) = send(&router, post_json("/api/ideas", json!({ "text": text }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": "Idea text must be 280 characters or less" })
        );
    }

    #[tokio::test]
    async fn created_idea_appears_in_the_list() {
        let router = test_router();
        let (_, created) = send(
            &router,
            post_json("/api/ideas", json!({ "text": "Build a thing" })),
        )
        .await;

        let (status, body) = send(&router, get_request("/api/ideas")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["id"], created["id"]);
        assert_eq!(body[0]["text"], "Build a thing");
    }

    #[tokio::test]
    async fn upvote_increments_on_every_call() {
        let router = test_router();
        let (_, created) = send(
            &router,
            post_json("/api/ideas", json!({ "text": "vote for me" })),
        )
        .await;
        let uri = format!("/api/ideas/{}/upvote", created["id"].as_str().unwrap());

        let (status, body) = send(&router, post_empty(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["upvotes"], 1);

        let (status, body) = send(&router, post_empty(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["upvotes"], 2);
        assert_eq!(body["id"], created["id"]);

        let (_, listed) = send(&router, get_request("/api/ideas")).await;
        assert_eq!(listed[0]["upvotes"], 2);
    }

    #[tokio::test]
    async fn upvotes_drive_the_list_order() {
        let router = test_router();
        let (_, first) = send(&router, post_json("/api/ideas", json!({ "text": "first" }))).await;
        let (_, second) = send(&router, post_json("/api/ideas", json!({ "text": "second" }))).await;

        let uri = format!("/api/ideas/{}/upvote", first["id"].as_str().unwrap());
        send(&router, post_empty(&uri)).await;

        let (_, body) = send(&router, get_request("/api/ideas")).await;
        let ids: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|idea| idea["id"].clone())
            .collect();

        assert_eq!(ids, vec![first["id"].clone(), second["id"].clone()]);
    }

    #[tokio::test]
    async fn upvote_unknown_id_is_404() {
        let router = test_router();
        let uri = format!("/api/ideas/{}/upvote", Uuid::new_v4());
        let (status, body) = send(&router, post_empty(&uri)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Idea not found" }));
    }

    #[tokio::test]
    async fn upvote_malformed_id_is_404() {
        let router = test_router();
        let (status, body) = send(&router, post_empty("/api/ideas/not-a-uuid/upvote")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Idea not found" }));
    }
}
