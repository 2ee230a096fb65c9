use circular_score::scoring::{Archetype, CaseStudy, SolutionType, ValidationMode};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) validation: ValidationMode,
}

pub(crate) fn parse_solution_type(raw: &str) -> Result<SolutionType, String> {
    raw.parse::<SolutionType>().map_err(|err| err.to_string())
}

pub(crate) fn parse_case_study(raw: &str) -> Result<CaseStudy, String> {
    raw.parse::<CaseStudy>().map_err(|err| err.to_string())
}

pub(crate) fn parse_archetype(raw: &str) -> Result<Archetype, String> {
    raw.parse::<Archetype>().map_err(|err| err.to_string())
}

/// Importance levels arrive as small integers; range checks belong to the
/// strict evaluator, not the argument parser.
pub(crate) fn parse_level(raw: &str) -> Result<u8, String> {
    raw.trim()
        .parse::<u8>()
        .map_err(|err| format!("failed to parse '{raw}' as a level ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsers_surface_library_messages() {
        assert_eq!(parse_solution_type("old-build"), Ok(SolutionType::OldBuild));
        let err = parse_solution_type("teardown").unwrap_err();
        assert!(err.contains("invalid solution type"));
        assert_eq!(parse_case_study("cs1"), Ok(CaseStudy::Cs1NoBuild));
        assert_eq!(parse_archetype("Reuse"), Ok(Archetype::Reuse));
        assert!(parse_level("six").is_err());
    }
}
