use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::NaiveDate;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    Availability,
    export::{self, EXPORT_FILE_NAME, EXPORT_MIME},
    planner::{GenerateSummary, Planner, PlannerError, PlannerSnapshot},
    view::{self, PlannerView, SummaryRow},
};

#[derive(Clone)]
pub struct AppState {
    planner: Arc<RwLock<Planner>>,
}

impl AppState {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(RwLock::new(planner)),
        }
    }

    pub fn with_shared(planner: Arc<RwLock<Planner>>) -> Self {
        Self { planner }
    }

    fn planner(&self) -> Arc<RwLock<Planner>> {
        self.planner.clone()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Invalid(String),
    Internal(String),
}

impl ApiError {
    fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }
}

impl From<PlannerError> for ApiError {
    fn from(value: PlannerError) -> Self {
        match value {
            PlannerError::UnknownAssociate(_) | PlannerError::UnknownWeek(_) => {
                ApiError::NotFound(value.to_string())
            }
            PlannerError::DuplicateAssociate(_) => ApiError::Invalid(value.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                let body = Json(ErrorBody {
                    error: "not_found",
                    message,
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
            ApiError::Invalid(message) => {
                let body = Json(ErrorBody {
                    error: "invalid_request",
                    message,
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::Internal(message) => {
                let body = Json(ErrorBody {
                    error: "internal_error",
                    message,
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct AvailabilityPayload {
    associate: String,
    week: NaiveDate,
    status: Availability,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/state", get(get_state))
        .route("/view", get(get_view))
        .route("/availability", put(update_availability))
        .route("/generate", post(generate_schedule))
        .route("/summary", get(get_summary))
        .route("/export", get(download_csv))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, planner: Planner) -> std::io::Result<()> {
    let state = AppState::new(planner);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn get_state(State(state): State<AppState>) -> Json<PlannerSnapshot> {
    let planner = state.planner();
    let snapshot = {
        let guard = planner.read();
        guard.snapshot()
    };
    Json(snapshot)
}

async fn get_view(State(state): State<AppState>) -> Json<PlannerView> {
    let planner = state.planner();
    let view = {
        let guard = planner.read();
        view::render(&guard.snapshot())
    };
    Json(view)
}

async fn update_availability(
    State(state): State<AppState>,
    Json(payload): Json<AvailabilityPayload>,
) -> Result<Json<PlannerSnapshot>, ApiError> {
    let planner = state.planner();
    {
        let mut guard = planner.write();
        guard
            .set_availability(&payload.associate, payload.week, payload.status)
            .map_err(ApiError::from)?;
    }
    let snapshot = {
        let guard = planner.read();
        guard.snapshot()
    };
    Ok(Json(snapshot))
}

async fn generate_schedule(State(state): State<AppState>) -> Json<GenerateSummary> {
    let planner = state.planner();
    let summary = {
        let mut guard = planner.write();
        guard.generate()
    };
    Json(summary)
}

async fn get_summary(State(state): State<AppState>) -> Json<Vec<SummaryRow>> {
    let planner = state.planner();
    let rows = {
        let guard = planner.read();
        guard
            .assignment_counts()
            .into_iter()
            .map(|(associate, weeks_assigned)| SummaryRow {
                associate,
                weeks_assigned,
            })
            .collect()
    };
    Json(rows)
}

async fn download_csv(State(state): State<AppState>) -> Result<Response, ApiError> {
    let planner = state.planner();
    let payload = {
        let guard = planner.read();
        export::schedule_csv(guard.weeks(), guard.schedule())
            .map_err(|err| ApiError::internal(err.to_string()))?
    };

    let headers = [
        (header::CONTENT_TYPE, EXPORT_MIME.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
        ),
    ];
    Ok((headers, payload).into_response())
}
