//! Circular Development Score engine.
//!
//! Two independent variants share the interpretation bands but nothing else:
//! [`academic`] reproduces the published JS/SS formula on a `[0, 1]` scale and
//! [`mvp`] combines six weighted dimensions on `[0, 100]`. Every entry point is
//! a pure function of its arguments; callers own any session state.

pub mod academic;
pub mod domain;
pub mod interpretation;
pub mod mvp;
pub mod normalization;
pub mod router;
mod validation;
pub mod weights;

#[cfg(test)]
mod tests;

pub use academic::{
    evaluate_academic, evaluate_academic_strict, AcademicRequest, CaseStudy, ScoreResult,
    UnknownCaseStudy,
};
pub use domain::{
    BuildRatios, RPrincipleInputs, RPrinciples, ScoringError, SolutionType, SustainabilityInputs,
};
pub use interpretation::{Band, BandColor, BandThresholds, BandView};
pub use mvp::{
    evaluate_mvp, evaluate_mvp_strict, list_archetypes, Archetype, ArchetypePreset,
    DimensionContribution, MvpDimension, MvpDimensionScores, MvpScoreResult, UnknownArchetype,
};
pub use router::{scoring_router, ValidationMode};
