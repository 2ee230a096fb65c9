//! Academic CDS variant: the published justification/sustainability formula.
//!
//! Scores live on `[0, 1]` and are interpreted against
//! [`BandThresholds::ACADEMIC`]. Nothing here is comparable with the MVP
//! variant's `[0, 100]` composite.

mod case_studies;
mod sustainability;

pub use case_studies::{CaseStudy, UnknownCaseStudy};
pub use sustainability::{r_principle_score, sustainability_score};

use super::domain::{
    BuildRatios, RPrincipleInputs, ScoringError, SolutionType, SustainabilityInputs,
};
use super::interpretation::{interpret_academic, Band, BandView};
use super::normalization::{need_importance_default, solution_fitness};
use super::validation;
use super::weights::{W_JS, W_NI, W_SF, W_SS};
use serde::{Deserialize, Serialize};

/// Inputs collected by a caller for one academic evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicRequest {
    pub solution_type: SolutionType,
    /// Level of importance, 1..=5.
    pub level: u8,
    #[serde(default)]
    pub build_ratios: Option<BuildRatios>,
    #[serde(default)]
    pub old_build_score: Option<f64>,
    #[serde(default)]
    pub r_principles: Option<RPrincipleInputs>,
}

impl AcademicRequest {
    pub fn new(solution_type: SolutionType, level: u8) -> Self {
        Self {
            solution_type,
            level,
            build_ratios: None,
            old_build_score: None,
            r_principles: None,
        }
    }

    pub fn with_build_ratios(mut self, ratios: BuildRatios) -> Self {
        self.build_ratios = Some(ratios);
        self
    }

    pub fn with_old_build_score(mut self, score: f64) -> Self {
        self.old_build_score = Some(score);
        self
    }

    pub fn with_r_principles(mut self, principles: RPrincipleInputs) -> Self {
        self.r_principles = Some(principles);
        self
    }

    /// Ratios used on the build path; absent ratios fall back to the baseline.
    pub fn effective_build_ratios(&self) -> BuildRatios {
        self.build_ratios.unwrap_or_default()
    }
}

impl Default for AcademicRequest {
    fn default() -> Self {
        Self::new(SolutionType::NoBuild, 3)
            .with_build_ratios(BuildRatios::baseline())
            .with_old_build_score(1.0)
            .with_r_principles(RPrincipleInputs::complete(0.0, 0.0, 0.0))
    }
}

/// Every intermediate of an academic evaluation plus its band. The band's
/// label, recommendation and colour serialize alongside the scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub solution_type: SolutionType,
    pub solution_fitness: f64,
    pub need_importance: f64,
    pub justification_score: f64,
    pub sustainability_score: f64,
    pub composite_score: f64,
    #[serde(flatten)]
    pub interpretation: BandView,
}

impl ScoreResult {
    pub fn band(&self) -> Band {
        self.interpretation.band
    }
}

pub fn justification_score(solution_fitness: f64, need_importance: f64) -> f64 {
    W_SF.apply(solution_fitness) + W_NI.apply(need_importance)
}

pub fn composite_score(justification_score: f64, sustainability_score: f64) -> f64 {
    W_JS.apply(justification_score) + W_SS.apply(sustainability_score)
}

/// Permissive evaluation: out-of-range numbers flow through the arithmetic.
/// Fails only when the selected pathway lacks its inputs.
pub fn evaluate_academic(request: &AcademicRequest) -> Result<ScoreResult, ScoringError> {
    let sustainability_inputs = SustainabilityInputs::resolve(
        request.solution_type,
        request.old_build_score,
        request.r_principles.as_ref(),
    )?;

    let ratios = request.effective_build_ratios();
    let solution_fitness = solution_fitness(request.solution_type, &ratios);
    let need_importance = need_importance_default(request.level);
    let justification_score = justification_score(solution_fitness, need_importance);
    let sustainability_score = sustainability_score(&sustainability_inputs);
    let composite_score = composite_score(justification_score, sustainability_score);

    Ok(ScoreResult {
        solution_type: request.solution_type,
        solution_fitness,
        need_importance,
        justification_score,
        sustainability_score,
        composite_score,
        interpretation: interpret_academic(composite_score).view(),
    })
}

/// Range-checks the fields the selected pathway reads, then evaluates.
pub fn evaluate_academic_strict(request: &AcademicRequest) -> Result<ScoreResult, ScoringError> {
    validation::validate_academic(request)?;
    evaluate_academic(request)
}
