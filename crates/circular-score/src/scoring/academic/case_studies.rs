use super::super::domain::{BuildRatios, RPrincipleInputs, SolutionType};
use super::AcademicRequest;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Published case studies that pre-fill an academic request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStudy {
    Cs1NoBuild,
    Cs2OldBuild,
    Cs3NewBuild,
    Cs3NewBuildOptimized,
}

impl CaseStudy {
    pub const ALL: [CaseStudy; 4] = [
        Self::Cs1NoBuild,
        Self::Cs2OldBuild,
        Self::Cs3NewBuild,
        Self::Cs3NewBuildOptimized,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CaseStudy::Cs1NoBuild => "CS1: No-Build",
            CaseStudy::Cs2OldBuild => "CS2: Old-Build",
            CaseStudy::Cs3NewBuild => "CS3: New-Build",
            CaseStudy::Cs3NewBuildOptimized => "CS3: New-Build (Optimized)",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            CaseStudy::Cs1NoBuild => "cs1",
            CaseStudy::Cs2OldBuild => "cs2",
            CaseStudy::Cs3NewBuild => "cs3",
            CaseStudy::Cs3NewBuildOptimized => "cs3-optimized",
        }
    }

    pub fn request(&self) -> AcademicRequest {
        match self {
            CaseStudy::Cs1NoBuild => AcademicRequest::new(SolutionType::NoBuild, 3),
            CaseStudy::Cs2OldBuild => AcademicRequest::new(SolutionType::OldBuild, 3)
                .with_build_ratios(BuildRatios::new(0.90, 1.00, 1.10))
                .with_old_build_score(1.0),
            CaseStudy::Cs3NewBuild => AcademicRequest::new(SolutionType::NewBuild, 3)
                .with_build_ratios(BuildRatios::baseline())
                .with_r_principles(RPrincipleInputs::complete(0.15, 0.25, 0.20)),
            CaseStudy::Cs3NewBuildOptimized => AcademicRequest::new(SolutionType::NewBuild, 3)
                .with_build_ratios(BuildRatios::baseline())
                .with_r_principles(RPrincipleInputs::complete(0.35, 0.45, 0.40)),
        }
    }
}

impl fmt::Display for CaseStudy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown case study '{0}' (expected cs1, cs2, cs3 or cs3-optimized)")]
pub struct UnknownCaseStudy(pub String);

impl FromStr for CaseStudy {
    type Err = UnknownCaseStudy;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|case| case.slug() == wanted)
            .ok_or_else(|| UnknownCaseStudy(raw.to_string()))
    }
}
