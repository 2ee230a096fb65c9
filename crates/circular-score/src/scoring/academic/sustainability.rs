use super::super::domain::{RPrinciples, SustainabilityInputs};
use super::super::weights::{NB_INDEX, NWB_INDEX, OB_INDEX, W_REDUCE, W_RENEW, W_REPLACE};

/// OR-logic sustainability score: the pathway tag picks exactly one formula.
pub fn sustainability_score(inputs: &SustainabilityInputs) -> f64 {
    match inputs {
        SustainabilityInputs::NoBuild => NB_INDEX,
        SustainabilityInputs::OldBuild { ob_score } => OB_INDEX * ob_score,
        SustainabilityInputs::NewBuild(principles) => NWB_INDEX * r_principle_score(principles),
    }
}

/// Weighted Reduce/Renew/Replace sum before the New-Build index is applied.
pub fn r_principle_score(principles: &RPrinciples) -> f64 {
    W_REDUCE.apply(principles.reduce)
        + W_RENEW.apply(principles.renew)
        + W_REPLACE.apply(principles.replace)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn no_build_is_the_index() {
        assert_eq!(sustainability_score(&SustainabilityInputs::NoBuild), 1.0);
    }

    #[test]
    fn old_build_scales_by_index() {
        let score = sustainability_score(&SustainabilityInputs::OldBuild { ob_score: 0.5 });
        assert!((score - 0.305).abs() < EPSILON);
    }

    #[test]
    fn new_build_weights_principles_then_scales() {
        let principles = RPrinciples {
            reduce: 1.0,
            renew: 1.0,
            replace: 1.0,
        };
        assert!((r_principle_score(&principles) - 1.0).abs() < EPSILON);
        let score = sustainability_score(&SustainabilityInputs::NewBuild(principles));
        assert!((score - 0.43).abs() < EPSILON);
    }
}
