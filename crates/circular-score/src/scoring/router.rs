use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, warn};

use super::academic::{evaluate_academic, evaluate_academic_strict, AcademicRequest, CaseStudy};
use super::domain::ScoringError;
use super::mvp::{evaluate_mvp, evaluate_mvp_strict, list_archetypes, Archetype, MvpDimensionScores};

/// Whether out-of-range numbers are rejected before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    #[default]
    Permissive,
    Strict,
}

impl ValidationMode {
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Permissive
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CaseStudyEntry {
    pub(crate) case: CaseStudy,
    pub(crate) slug: &'static str,
    pub(crate) label: &'static str,
    pub(crate) request: AcademicRequest,
}

/// Router builder exposing both score variants over HTTP.
pub fn scoring_router(mode: ValidationMode) -> Router {
    Router::new()
        .route("/api/v1/academic/evaluate", post(academic_handler))
        .route("/api/v1/academic/cases", get(case_list_handler))
        .route("/api/v1/academic/cases/:case", get(case_handler))
        .route("/api/v1/mvp/evaluate", post(mvp_handler))
        .route("/api/v1/mvp/archetypes", get(archetype_list_handler))
        .route("/api/v1/mvp/archetypes/:name", get(archetype_handler))
        .with_state(mode)
}

fn rejection(error: ScoringError) -> Response {
    warn!(%error, "scoring request rejected");
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}

/// Body that never reached the scorer, such as an unknown solution type.
fn malformed(rejection: JsonRejection) -> Response {
    let message = rejection.body_text();
    warn!(error = %message, "scoring request body rejected");
    let payload = json!({ "error": message });
    (rejection.status(), axum::Json(payload)).into_response()
}

fn not_found(message: String) -> Response {
    let payload = json!({ "error": message });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

fn score_academic(mode: ValidationMode, request: &AcademicRequest) -> Response {
    let outcome = match mode {
        ValidationMode::Permissive => evaluate_academic(request),
        ValidationMode::Strict => evaluate_academic_strict(request),
    };

    match outcome {
        Ok(result) => {
            debug!(
                solution_type = %result.solution_type,
                composite = result.composite_score,
                band = ?result.band(),
                "academic evaluation"
            );
            (StatusCode::OK, axum::Json(result)).into_response()
        }
        Err(error) => rejection(error),
    }
}

fn score_mvp(mode: ValidationMode, scores: &MvpDimensionScores) -> Response {
    let outcome = match mode {
        ValidationMode::Permissive => Ok(evaluate_mvp(scores)),
        ValidationMode::Strict => evaluate_mvp_strict(scores),
    };

    match outcome {
        Ok(result) => {
            debug!(
                composite = result.composite_score,
                band = ?result.band(),
                "mvp evaluation"
            );
            (StatusCode::OK, axum::Json(result)).into_response()
        }
        Err(error) => rejection(error),
    }
}

pub(crate) async fn academic_handler(
    State(mode): State<ValidationMode>,
    payload: Result<axum::Json<AcademicRequest>, JsonRejection>,
) -> Response {
    match payload {
        Ok(axum::Json(request)) => score_academic(mode, &request),
        Err(rejection) => malformed(rejection),
    }
}

pub(crate) async fn case_list_handler() -> Response {
    let cases: Vec<CaseStudyEntry> = CaseStudy::ALL
        .into_iter()
        .map(|case| CaseStudyEntry {
            case,
            slug: case.slug(),
            label: case.label(),
            request: case.request(),
        })
        .collect();
    (StatusCode::OK, axum::Json(cases)).into_response()
}

pub(crate) async fn case_handler(
    State(mode): State<ValidationMode>,
    Path(case): Path<String>,
) -> Response {
    match case.parse::<CaseStudy>() {
        Ok(case) => score_academic(mode, &case.request()),
        Err(error) => not_found(error.to_string()),
    }
}

pub(crate) async fn mvp_handler(
    State(mode): State<ValidationMode>,
    payload: Result<axum::Json<MvpDimensionScores>, JsonRejection>,
) -> Response {
    match payload {
        Ok(axum::Json(scores)) => score_mvp(mode, &scores),
        Err(rejection) => malformed(rejection),
    }
}

pub(crate) async fn archetype_list_handler() -> Response {
    (StatusCode::OK, axum::Json(list_archetypes())).into_response()
}

pub(crate) async fn archetype_handler(
    State(mode): State<ValidationMode>,
    Path(name): Path<String>,
) -> Response {
    match name.parse::<Archetype>() {
        Ok(archetype) => score_mvp(mode, &archetype.scores()),
        Err(error) => not_found(error.to_string()),
    }
}
