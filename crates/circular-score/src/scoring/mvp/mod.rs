//! MVP CDS variant: six free-form dimensions on a `[0, 100]` scale.

mod archetypes;

pub use archetypes::{list_archetypes, Archetype, ArchetypePreset, UnknownArchetype};

use super::domain::ScoringError;
use super::interpretation::{interpret_mvp, Band, BandView};
use super::validation;
use super::weights::Weight;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MvpDimension {
    Justification,
    Rethink,
    Reuse,
    Reduce,
    Renew,
    Replace,
}

impl MvpDimension {
    pub const ALL: [MvpDimension; 6] = [
        Self::Justification,
        Self::Rethink,
        Self::Reuse,
        Self::Reduce,
        Self::Renew,
        Self::Replace,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MvpDimension::Justification => "Justification",
            MvpDimension::Rethink => "No-Build / Rethink",
            MvpDimension::Reuse => "Reuse / Repurpose",
            MvpDimension::Reduce => "Reduce",
            MvpDimension::Renew => "Renew",
            MvpDimension::Replace => "Replace",
        }
    }

    pub fn weight(&self) -> Weight {
        match self {
            MvpDimension::Justification => Weight::from_basis_points(3300),
            MvpDimension::Rethink => Weight::from_basis_points(2000),
            MvpDimension::Reuse => Weight::from_basis_points(1500),
            MvpDimension::Reduce => Weight::from_basis_points(1500),
            MvpDimension::Renew => Weight::from_basis_points(1000),
            MvpDimension::Replace => Weight::from_basis_points(700),
        }
    }
}

/// One integer score per dimension, nominally `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MvpDimensionScores {
    pub justification: i32,
    pub rethink: i32,
    pub reuse: i32,
    pub reduce: i32,
    pub renew: i32,
    pub replace: i32,
}

impl MvpDimensionScores {
    pub const MAX: i32 = 100;

    pub const fn new(
        justification: i32,
        rethink: i32,
        reuse: i32,
        reduce: i32,
        renew: i32,
        replace: i32,
    ) -> Self {
        Self {
            justification,
            rethink,
            reuse,
            reduce,
            renew,
            replace,
        }
    }

    pub fn get(&self, dimension: MvpDimension) -> i32 {
        match dimension {
            MvpDimension::Justification => self.justification,
            MvpDimension::Rethink => self.rethink,
            MvpDimension::Reuse => self.reuse,
            MvpDimension::Reduce => self.reduce,
            MvpDimension::Renew => self.renew,
            MvpDimension::Replace => self.replace,
        }
    }

    pub fn set(&mut self, dimension: MvpDimension, score: i32) {
        let slot = match dimension {
            MvpDimension::Justification => &mut self.justification,
            MvpDimension::Rethink => &mut self.rethink,
            MvpDimension::Reuse => &mut self.reuse,
            MvpDimension::Reduce => &mut self.reduce,
            MvpDimension::Renew => &mut self.renew,
            MvpDimension::Replace => &mut self.replace,
        };
        *slot = score;
    }

    pub fn iter(&self) -> impl Iterator<Item = (MvpDimension, i32)> + '_ {
        MvpDimension::ALL
            .into_iter()
            .map(move |dimension| (dimension, self.get(dimension)))
    }

    /// Replaces every dimension with the preset; nothing is merged.
    pub fn apply_archetype(&mut self, archetype: Archetype) {
        *self = archetype.scores();
    }
}

/// Weighted share of a single dimension in the composite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionContribution {
    pub dimension: MvpDimension,
    pub label: &'static str,
    pub score: i32,
    pub weight: Weight,
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MvpScoreResult {
    pub composite_score: f64,
    #[serde(flatten)]
    pub interpretation: BandView,
    pub contributions: Vec<DimensionContribution>,
}

impl MvpScoreResult {
    pub fn band(&self) -> Band {
        self.interpretation.band
    }
}

pub fn mvp_composite_score(scores: &MvpDimensionScores) -> f64 {
    scores
        .iter()
        .map(|(dimension, score)| dimension.weight().apply(f64::from(score)))
        .sum()
}

/// Permissive evaluation; scores outside `0..=100` are not rejected.
pub fn evaluate_mvp(scores: &MvpDimensionScores) -> MvpScoreResult {
    let contributions: Vec<DimensionContribution> = scores
        .iter()
        .map(|(dimension, score)| {
            let weight = dimension.weight();
            DimensionContribution {
                dimension,
                label: dimension.label(),
                score,
                weight,
                contribution: weight.apply(f64::from(score)),
            }
        })
        .collect();

    let composite_score = mvp_composite_score(scores);

    MvpScoreResult {
        composite_score,
        interpretation: interpret_mvp(composite_score).view(),
        contributions,
    }
}

pub fn evaluate_mvp_strict(scores: &MvpDimensionScores) -> Result<MvpScoreResult, ScoringError> {
    validation::validate_mvp(scores)?;
    Ok(evaluate_mvp(scores))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::weights::{total_basis_points, Weight};

    #[test]
    fn dimension_weights_are_whole() {
        let weights = MvpDimension::ALL.map(|dimension| dimension.weight());
        assert_eq!(total_basis_points(weights), Weight::WHOLE);
    }

    #[test]
    fn uniform_scores_reproduce_the_score() {
        let scores = MvpDimensionScores::new(70, 70, 70, 70, 70, 70);
        let result = evaluate_mvp(&scores);
        assert!((result.composite_score - 70.0).abs() < 1e-9);
        assert_eq!(result.band(), Band::Optimizable);
    }

    #[test]
    fn contributions_follow_dimension_order() {
        let scores = MvpDimensionScores::new(10, 20, 30, 40, 50, 60);
        let result = evaluate_mvp(&scores);
        let order: Vec<MvpDimension> = result
            .contributions
            .iter()
            .map(|entry| entry.dimension)
            .collect();
        assert_eq!(order, MvpDimension::ALL.to_vec());
        let summed: f64 = result
            .contributions
            .iter()
            .map(|entry| entry.contribution)
            .sum();
        assert!((result.composite_score - summed).abs() < 1e-9);
    }

    #[test]
    fn set_updates_a_single_dimension() {
        let mut scores = MvpDimensionScores::default();
        scores.set(MvpDimension::Renew, 42);
        assert_eq!(scores.get(MvpDimension::Renew), 42);
        assert_eq!(scores.iter().filter(|(_, score)| *score != 0).count(), 1);
    }
}
