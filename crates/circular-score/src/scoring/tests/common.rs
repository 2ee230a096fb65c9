use axum::response::Response;
use serde_json::Value;

use crate::scoring::academic::AcademicRequest;
use crate::scoring::domain::{BuildRatios, RPrincipleInputs, SolutionType};
use crate::scoring::router::{scoring_router, ValidationMode};

pub(super) const EPSILON: f64 = 1e-9;

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn old_build_request() -> AcademicRequest {
    AcademicRequest::new(SolutionType::OldBuild, 3)
        .with_build_ratios(BuildRatios::new(0.90, 1.00, 1.10))
        .with_old_build_score(1.0)
}

pub(super) fn new_build_request(reduce: f64, renew: f64, replace: f64) -> AcademicRequest {
    AcademicRequest::new(SolutionType::NewBuild, 3)
        .with_build_ratios(BuildRatios::baseline())
        .with_r_principles(RPrincipleInputs::complete(reduce, renew, replace))
}

pub(super) fn permissive_router() -> axum::Router {
    scoring_router(ValidationMode::Permissive)
}

pub(super) fn strict_router() -> axum::Router {
    scoring_router(ValidationMode::Strict)
}

pub(super) fn json_request(uri: &str, body: Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&body).expect("serialize body"),
        ))
        .expect("build request")
}

pub(super) fn get_request(uri: &str) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::get(uri)
        .body(axum::body::Body::empty())
        .expect("build request")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
