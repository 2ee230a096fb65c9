use super::academic::AcademicRequest;
use super::domain::{BuildRatios, ScoringError, SolutionType};
use super::mvp::{MvpDimension, MvpDimensionScores};
use super::weights::LOI_MAX;

fn check(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ScoringError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ScoringError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

fn mvp_field(dimension: MvpDimension) -> &'static str {
    match dimension {
        MvpDimension::Justification => "justification",
        MvpDimension::Rethink => "rethink",
        MvpDimension::Reuse => "reuse",
        MvpDimension::Reduce => "reduce",
        MvpDimension::Renew => "renew",
        MvpDimension::Replace => "replace",
    }
}

/// Checks only the fields the selected pathway will read. Missing inputs are
/// left for the evaluator to report.
pub(crate) fn validate_academic(request: &AcademicRequest) -> Result<(), ScoringError> {
    check("level", f64::from(request.level), 1.0, f64::from(LOI_MAX))?;

    if request.solution_type.is_build_path() {
        let ratios = request.effective_build_ratios();
        check("past_occupancy_rate", ratios.past_occupancy_rate, 0.0, BuildRatios::MAX)?;
        check("present_demand_ratio", ratios.present_demand_ratio, 0.0, BuildRatios::MAX)?;
        check("future_growth_ratio", ratios.future_growth_ratio, 0.0, BuildRatios::MAX)?;
    }

    match request.solution_type {
        SolutionType::NoBuild => {}
        SolutionType::OldBuild => {
            if let Some(score) = request.old_build_score {
                check("old_build_score", score, 0.0, 1.0)?;
            }
        }
        SolutionType::NewBuild => {
            if let Some(principles) = &request.r_principles {
                let fields = [
                    ("reduce", principles.reduce),
                    ("renew", principles.renew),
                    ("replace", principles.replace),
                ];
                for (field, value) in fields {
                    if let Some(value) = value {
                        check(field, value, 0.0, 1.0)?;
                    }
                }
            }
        }
    }

    Ok(())
}

pub(crate) fn validate_mvp(scores: &MvpDimensionScores) -> Result<(), ScoringError> {
    for (dimension, score) in scores.iter() {
        check(
            mvp_field(dimension),
            f64::from(score),
            0.0,
            f64::from(MvpDimensionScores::MAX),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::domain::RPrincipleInputs;

    #[test]
    fn level_outside_scale_is_rejected() {
        let request = AcademicRequest::new(SolutionType::NoBuild, 0);
        match validate_academic(&request) {
            Err(ScoringError::OutOfRange { field, .. }) => assert_eq!(field, "level"),
            other => panic!("expected out of range, got {other:?}"),
        }
    }

    #[test]
    fn over_capacity_ratio_within_allowance_passes() {
        let request = AcademicRequest::new(SolutionType::OldBuild, 4)
            .with_build_ratios(BuildRatios::new(1.2, 1.1, 0.0))
            .with_old_build_score(0.4);
        assert!(validate_academic(&request).is_ok());
    }

    #[test]
    fn ratios_are_ignored_for_no_build() {
        let request = AcademicRequest::new(SolutionType::NoBuild, 2)
            .with_build_ratios(BuildRatios::new(-4.0, 9.0, 9.0));
        assert!(validate_academic(&request).is_ok());
    }

    #[test]
    fn non_finite_principles_are_rejected() {
        let request = AcademicRequest::new(SolutionType::NewBuild, 2).with_r_principles(
            RPrincipleInputs::complete(0.2, f64::NAN, 0.3),
        );
        match validate_academic(&request) {
            Err(ScoringError::OutOfRange { field, .. }) => assert_eq!(field, "renew"),
            other => panic!("expected out of range, got {other:?}"),
        }
    }

    #[test]
    fn mvp_scores_above_hundred_are_rejected() {
        let scores = MvpDimensionScores::new(100, 100, 100, 101, 100, 100);
        match validate_mvp(&scores) {
            Err(ScoringError::OutOfRange { field, value, .. }) => {
                assert_eq!(field, "reduce");
                assert_eq!(value, 101.0);
            }
            other => panic!("expected out of range, got {other:?}"),
        }
    }
}
