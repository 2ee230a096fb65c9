use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Construction decision under evaluation. Selects both the solution fitness
/// formula and the single active sustainability pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SolutionType {
    NoBuild,
    OldBuild,
    NewBuild,
}

impl SolutionType {
    pub const ALL: [SolutionType; 3] = [Self::NoBuild, Self::OldBuild, Self::NewBuild];

    pub fn label(&self) -> &'static str {
        match self {
            SolutionType::NoBuild => "No-Build",
            SolutionType::OldBuild => "Old-Build",
            SolutionType::NewBuild => "New-Build",
        }
    }

    /// Old-Build and New-Build both involve a physical intervention and share
    /// the occupancy/demand/growth fitness formula.
    pub fn is_build_path(&self) -> bool {
        !matches!(self, SolutionType::NoBuild)
    }
}

impl fmt::Display for SolutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SolutionType {
    type Err = ScoringError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|ch| !matches!(*ch, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "nobuild" => Ok(Self::NoBuild),
            "oldbuild" => Ok(Self::OldBuild),
            "newbuild" => Ok(Self::NewBuild),
            _ => Err(ScoringError::InvalidSolutionType(raw.to_string())),
        }
    }
}

impl TryFrom<String> for SolutionType {
    type Error = ScoringError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SolutionType> for String {
    fn from(value: SolutionType) -> Self {
        value.label().to_string()
    }
}

/// Occupancy and demand ratios feeding the build-path fitness. Each is nominally
/// in `[0, 1.2]`; values above 1 signal over-capacity against the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildRatios {
    pub past_occupancy_rate: f64,
    pub present_demand_ratio: f64,
    pub future_growth_ratio: f64,
}

impl BuildRatios {
    pub const MAX: f64 = 1.2;

    pub fn new(
        past_occupancy_rate: f64,
        present_demand_ratio: f64,
        future_growth_ratio: f64,
    ) -> Self {
        Self {
            past_occupancy_rate,
            present_demand_ratio,
            future_growth_ratio,
        }
    }

    pub fn baseline() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

impl Default for BuildRatios {
    fn default() -> Self {
        Self::baseline()
    }
}

/// Fully specified New-Build sustainability inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RPrinciples {
    pub reduce: f64,
    pub renew: f64,
    pub replace: f64,
}

/// R-principle inputs as supplied by a caller; any field may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RPrincipleInputs {
    #[serde(default)]
    pub reduce: Option<f64>,
    #[serde(default)]
    pub renew: Option<f64>,
    #[serde(default)]
    pub replace: Option<f64>,
}

impl RPrincipleInputs {
    pub fn complete(reduce: f64, renew: f64, replace: f64) -> Self {
        Self {
            reduce: Some(reduce),
            renew: Some(renew),
            replace: Some(replace),
        }
    }

    /// Requires every principle; absence is never read as zero.
    pub fn require(&self) -> Result<RPrinciples, ScoringError> {
        let missing = |field: &'static str| ScoringError::MissingInput {
            solution_type: SolutionType::NewBuild,
            field,
        };

        Ok(RPrinciples {
            reduce: self.reduce.ok_or_else(|| missing("reduce"))?,
            renew: self.renew.ok_or_else(|| missing("renew"))?,
            replace: self.replace.ok_or_else(|| missing("replace"))?,
        })
    }
}

/// Sustainability inputs tagged by pathway. Exactly one pathway is active per
/// evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "pathway", rename_all = "snake_case")]
pub enum SustainabilityInputs {
    NoBuild,
    OldBuild { ob_score: f64 },
    NewBuild(RPrinciples),
}

impl SustainabilityInputs {
    /// Picks the inputs belonging to `solution_type`, ignoring the rest.
    pub fn resolve(
        solution_type: SolutionType,
        old_build_score: Option<f64>,
        r_principles: Option<&RPrincipleInputs>,
    ) -> Result<Self, ScoringError> {
        match solution_type {
            SolutionType::NoBuild => Ok(Self::NoBuild),
            SolutionType::OldBuild => old_build_score
                .map(|ob_score| Self::OldBuild { ob_score })
                .ok_or(ScoringError::MissingInput {
                    solution_type,
                    field: "old_build_score",
                }),
            SolutionType::NewBuild => {
                let inputs = r_principles.copied().unwrap_or_default();
                inputs.require().map(Self::NewBuild)
            }
        }
    }

    pub fn solution_type(&self) -> SolutionType {
        match self {
            SustainabilityInputs::NoBuild => SolutionType::NoBuild,
            SustainabilityInputs::OldBuild { .. } => SolutionType::OldBuild,
            SustainabilityInputs::NewBuild(_) => SolutionType::NewBuild,
        }
    }
}

/// Failures surfaced by a single evaluation. None are retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("{field} is required for {solution_type} evaluations")]
    MissingInput {
        solution_type: SolutionType,
        field: &'static str,
    },
    #[error("invalid solution type '{0}' (expected No-Build, Old-Build or New-Build)")]
    InvalidSolutionType(String),
    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_published_tags_and_loose_spellings() {
        assert_eq!("No-Build".parse::<SolutionType>(), Ok(SolutionType::NoBuild));
        assert_eq!("old_build".parse::<SolutionType>(), Ok(SolutionType::OldBuild));
        assert_eq!(" NEW BUILD ".parse::<SolutionType>(), Ok(SolutionType::NewBuild));
    }

    #[test]
    fn rejects_unknown_tags() {
        match "Demolish".parse::<SolutionType>() {
            Err(ScoringError::InvalidSolutionType(tag)) => assert_eq!(tag, "Demolish"),
            other => panic!("expected invalid solution type, got {other:?}"),
        }
    }

    #[test]
    fn deserializes_through_the_same_parser() {
        let parsed: SolutionType = serde_json::from_str("\"Old-Build\"").expect("valid tag");
        assert_eq!(parsed, SolutionType::OldBuild);

        let err = serde_json::from_str::<SolutionType>("\"Renovate\"").unwrap_err();
        assert!(err.to_string().contains("invalid solution type"));
    }

    #[test]
    fn old_build_requires_its_score() {
        let err = SustainabilityInputs::resolve(SolutionType::OldBuild, None, None).unwrap_err();
        assert_eq!(
            err,
            ScoringError::MissingInput {
                solution_type: SolutionType::OldBuild,
                field: "old_build_score",
            }
        );
    }

    #[test]
    fn new_build_reports_the_first_missing_principle() {
        let partial = RPrincipleInputs {
            reduce: Some(0.15),
            renew: Some(0.25),
            replace: None,
        };
        let err = SustainabilityInputs::resolve(SolutionType::NewBuild, None, Some(&partial))
            .unwrap_err();
        assert_eq!(
            err,
            ScoringError::MissingInput {
                solution_type: SolutionType::NewBuild,
                field: "replace",
            }
        );
    }

    #[test]
    fn resolved_inputs_remember_their_pathway() {
        for solution_type in SolutionType::ALL {
            let inputs = SustainabilityInputs::resolve(
                solution_type,
                Some(0.5),
                Some(&RPrincipleInputs::complete(0.1, 0.2, 0.3)),
            )
            .expect("complete inputs resolve");
            assert_eq!(inputs.solution_type(), solution_type);
        }
    }

    #[test]
    fn no_build_ignores_supplied_inputs() {
        let inputs = SustainabilityInputs::resolve(
            SolutionType::NoBuild,
            Some(0.2),
            Some(&RPrincipleInputs::complete(0.1, 0.1, 0.1)),
        )
        .expect("no-build needs nothing");
        assert_eq!(inputs, SustainabilityInputs::NoBuild);
    }
}
