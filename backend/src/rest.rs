use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use shared::ReserveRequest;
use tracing::{info, warn};

use crate::domain::{BookError, ReservationBook};

/// Application state shared across handlers
#[derive(Clone, Default)]
pub struct AppState {
    pub book: ReservationBook,
}

impl AppState {
    pub fn new(book: ReservationBook) -> Self {
        Self { book }
    }
}

impl BookError {
    fn status(&self) -> StatusCode {
        match self {
            BookError::EmptyName | BookError::InvalidDate(_) => StatusCode::BAD_REQUEST,
            BookError::AlreadyReserved(_) => StatusCode::CONFLICT,
        }
    }
}

/// Routes served by the development reservation service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reservations", get(list_reservations))
        .route("/reservations/reserve", post(reserve_day))
        .route("/health", get(health))
        .with_state(state)
}

/// Axum handler function for GET /reservations
async fn list_reservations(State(state): State<AppState>) -> impl IntoResponse {
    let reservations = state.book.list().await;
    info!("GET /reservations - {} days", reservations.len());
    (StatusCode::OK, Json(reservations))
}

/// Axum handler function for POST /reservations/reserve
async fn reserve_day(
    State(state): State<AppState>,
    Json(request): Json<ReserveRequest>,
) -> impl IntoResponse {
    info!("POST /reservations/reserve - date: {}", request.date);

    match state.book.reserve(&request).await {
        Ok(reservation) => (StatusCode::CREATED, Json(reservation)).into_response(),
        Err(e) => {
            warn!("Rejected reservation: {}", e);
            (e.status(), e.to_string()).into_response()
        }
    }
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request};
    use shared::Reservation;
    use tower::ServiceExt;

    fn reserve_request(name: &str, date: &str) -> Result<Request<Body>, Box<dyn std::error::Error>> {
        let body = ReserveRequest {
            name: name.to_string(),
            date: date.to_string(),
        };
        Ok(Request::builder()
            .uri("/reservations/reserve")
            .method(Method::POST)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?)
    }

    #[tokio::test]
    async fn test_reserve_then_list() -> Result<(), Box<dyn std::error::Error>> {
        let app = create_router(AppState::default());

        let response = app.clone().oneshot(reserve_request("Minji", "2024-10-20")?).await?;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let created: Reservation = serde_json::from_slice(&body)?;
        assert_eq!(created.date, "2024-10-20T00:00:00.000Z");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/reservations")
                    .method(Method::GET)
                    .body(Body::empty())?,
            )
            .await?;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let listed: Vec<Reservation> = serde_json::from_slice(&body)?;
        assert_eq!(listed, vec![created]);

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_day_conflicts() -> Result<(), Box<dyn std::error::Error>> {
        let app = create_router(AppState::default());

        let first = app.clone().oneshot(reserve_request("Minji", "2024-10-20")?).await?;
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = app.oneshot(reserve_request("Joon", "2024-10-20")?).await?;
        assert_eq!(second.status(), StatusCode::CONFLICT);

        Ok(())
    }

    #[tokio::test]
    async fn test_bad_requests_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let app = create_router(AppState::default());

        let bad_date = app.clone().oneshot(reserve_request("Minji", "not-a-date")?).await?;
        assert_eq!(bad_date.status(), StatusCode::BAD_REQUEST);

        let empty_name = app.oneshot(reserve_request("", "2024-10-20")?).await?;
        assert_eq!(empty_name.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    async fn test_health() -> Result<(), Box<dyn std::error::Error>> {
        let app = create_router(AppState::default());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty())?)
            .await?;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        assert_eq!(&body[..], b"ok");

        Ok(())
    }
}
