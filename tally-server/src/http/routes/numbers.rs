//! Number submission endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use serde_json::Value;

use crate::db::{AcceptOutcome, LedgerRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Candidate;

/// Successful submission response
#[derive(Serialize)]
pub struct SubmitResponse {
    pub result: i64,
}

/// POST /numbers - validate a candidate and record it in the ledger
///
/// The body is inspected as a raw JSON value so the validation messages
/// stay under our control rather than the extractor's.
async fn submit_number(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let candidate = Candidate::from_json(&body)?;

    match LedgerRepo::new(&state.pool).accept(candidate).await? {
        AcceptOutcome::Accepted { next } => Ok(Json(SubmitResponse { result: next })),
        AcceptOutcome::Duplicate { value } => Err(ApiError::Conflict { value }),
    }
}

/// Number routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/numbers", post(submit_number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use sqlx::PgPool;
    use tower::util::ServiceExt;

    fn app(pool: PgPool) -> Router {
        router().with_state(Arc::new(AppState { pool }))
    }

    /// Pool that never connects; validation failures return before any query.
    fn lazy_pool() -> PgPool {
        PgPool::connect_lazy("postgres://localhost/tally_test").expect("lazy pool")
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/numbers")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .expect("request")
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_number_field() {
        let response = app(lazy_pool()).oneshot(post_json("{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Invalid input: Missing \"number\""})
        );
    }

    #[tokio::test]
    async fn non_integer_number() {
        let response = app(lazy_pool())
            .oneshot(post_json(r#"{"number": "a"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Invalid input: Number must be an integer."})
        );
    }

    #[tokio::test]
    async fn zero_is_out_of_range() {
        let response = app(lazy_pool())
            .oneshot(post_json(r#"{"number": 0}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Number out of range"})
        );
    }

    #[tokio::test]
    async fn negative_is_out_of_range() {
        let response = app(lazy_pool())
            .oneshot(post_json(r#"{"number": -3}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Number out of range"})
        );
    }

    // End-to-end flow against a real database:
    // DATABASE_URL=postgres://... cargo test -p tally-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn submission_flow() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool failed");
        crate::db::migrations::run(&pool).await.expect("migrations failed");
        sqlx::query("DELETE FROM numbers WHERE number BETWEEN 940000 AND 940010")
            .execute(&pool)
            .await
            .expect("cleanup failed");

        // Fresh value accepted, successor reported
        let response = app(pool.clone())
            .oneshot(post_json(r#"{"number": 940002}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({"result": 940003}));

        // Resubmission conflicts on the value itself
        let response = app(pool.clone())
            .oneshot(post_json(r#"{"number": 940002}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Number 940002 already exists."})
        );

        // The successor conflicts on its predecessor
        let response = app(pool.clone())
            .oneshot(post_json(r#"{"number": 940003}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Number 940002 already exists."})
        );

        sqlx::query("DELETE FROM numbers WHERE number BETWEEN 940000 AND 940010")
            .execute(&pool)
            .await
            .expect("cleanup failed");
    }
}
