use crate::infra::{parse_archetype, parse_case_study, parse_level, parse_solution_type};
use circular_score::error::AppError;
use circular_score::scoring::{
    evaluate_academic, evaluate_academic_strict, evaluate_mvp, evaluate_mvp_strict,
    list_archetypes, AcademicRequest, Archetype, BuildRatios, CaseStudy, MvpDimension,
    MvpDimensionScores, MvpScoreResult, RPrincipleInputs, ScoreResult, SolutionType,
};
use clap::Args;

#[derive(Args, Debug, Default)]
pub(crate) struct AcademicArgs {
    /// Start from a published case study (cs1, cs2, cs3, cs3-optimized)
    #[arg(long, value_parser = parse_case_study)]
    pub(crate) case: Option<CaseStudy>,
    /// No-Build, Old-Build or New-Build
    #[arg(long, value_parser = parse_solution_type)]
    pub(crate) solution_type: Option<SolutionType>,
    /// Level of importance (1-5). Defaults to 3.
    #[arg(long, value_parser = parse_level)]
    pub(crate) level: Option<u8>,
    /// Past occupancy rate (0-1.2)
    #[arg(long)]
    pub(crate) por: Option<f64>,
    /// Present demand ratio (0-1.2)
    #[arg(long)]
    pub(crate) pdr: Option<f64>,
    /// Future growth ratio (0-1.2)
    #[arg(long)]
    pub(crate) fgr: Option<f64>,
    /// Old-Build sustainability score (0-1)
    #[arg(long)]
    pub(crate) ob_score: Option<f64>,
    /// New-Build Reduce principle (0-1)
    #[arg(long)]
    pub(crate) reduce: Option<f64>,
    /// New-Build Renew principle (0-1)
    #[arg(long)]
    pub(crate) renew: Option<f64>,
    /// New-Build Replace principle (0-1)
    #[arg(long)]
    pub(crate) replace: Option<f64>,
    /// Reject out-of-range inputs instead of scoring them
    #[arg(long)]
    pub(crate) strict: bool,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct MvpArgs {
    /// Load an archetype before applying individual dimension overrides
    #[arg(long, value_parser = parse_archetype)]
    pub(crate) archetype: Option<Archetype>,
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) justification: Option<i32>,
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) rethink: Option<i32>,
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) reuse: Option<i32>,
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) reduce: Option<i32>,
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) renew: Option<i32>,
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) replace: Option<i32>,
    /// Reject scores outside 0-100 instead of scoring them
    #[arg(long)]
    pub(crate) strict: bool,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn academic_request(args: &AcademicArgs) -> Result<AcademicRequest, AppError> {
    let mut request = match (args.case, args.solution_type) {
        (Some(case), _) => case.request(),
        (None, Some(solution_type)) => AcademicRequest::new(solution_type, 3),
        (None, None) => {
            return Err(AppError::Usage(
                "either --case or --solution-type is required".to_string(),
            ))
        }
    };

    if let Some(solution_type) = args.solution_type {
        request.solution_type = solution_type;
    }
    if let Some(level) = args.level {
        request.level = level;
    }

    if args.por.is_some() || args.pdr.is_some() || args.fgr.is_some() {
        let current = request.effective_build_ratios();
        request.build_ratios = Some(BuildRatios::new(
            args.por.unwrap_or(current.past_occupancy_rate),
            args.pdr.unwrap_or(current.present_demand_ratio),
            args.fgr.unwrap_or(current.future_growth_ratio),
        ));
    }

    if let Some(score) = args.ob_score {
        request.old_build_score = Some(score);
    }

    if args.reduce.is_some() || args.renew.is_some() || args.replace.is_some() {
        let current = request.r_principles.unwrap_or_default();
        request.r_principles = Some(RPrincipleInputs {
            reduce: args.reduce.or(current.reduce),
            renew: args.renew.or(current.renew),
            replace: args.replace.or(current.replace),
        });
    }

    Ok(request)
}

pub(crate) fn mvp_scores(args: &MvpArgs) -> MvpDimensionScores {
    let mut scores = MvpDimensionScores::default();
    if let Some(archetype) = args.archetype {
        scores.apply_archetype(archetype);
    }

    let overrides = [
        (MvpDimension::Justification, args.justification),
        (MvpDimension::Rethink, args.rethink),
        (MvpDimension::Reuse, args.reuse),
        (MvpDimension::Reduce, args.reduce),
        (MvpDimension::Renew, args.renew),
        (MvpDimension::Replace, args.replace),
    ];
    for (dimension, value) in overrides {
        if let Some(value) = value {
            scores.set(dimension, value);
        }
    }

    scores
}

pub(crate) fn run_academic(args: AcademicArgs) -> Result<(), AppError> {
    let request = academic_request(&args)?;
    let result = if args.strict {
        evaluate_academic_strict(&request)?
    } else {
        evaluate_academic(&request)?
    };

    if args.json {
        print_json(&result);
    } else {
        if let Some(case) = args.case {
            println!("Case study: {}", case);
        }
        render_academic_result(&result);
    }
    Ok(())
}

pub(crate) fn run_mvp(args: MvpArgs) -> Result<(), AppError> {
    let scores = mvp_scores(&args);
    let result = if args.strict {
        evaluate_mvp_strict(&scores)?
    } else {
        evaluate_mvp(&scores)
    };

    if args.json {
        print_json(&result);
    } else {
        if let Some(archetype) = args.archetype {
            println!("Archetype: {}", archetype);
        }
        render_mvp_result(&result);
    }
    Ok(())
}

pub(crate) fn run_archetypes() {
    println!("MVP archetypes");
    for preset in list_archetypes() {
        let dimensions: Vec<String> = preset
            .scores
            .iter()
            .map(|(dimension, score)| format!("{} {}", dimension.label(), score))
            .collect();
        println!("- {}: {}", preset.name, dimensions.join(" | "));
    }
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    println!("Circular Development Score demo");
    println!("Decision support only; scores are not a certification.");

    println!("\nAcademic mode (published methodology)");
    for case in CaseStudy::ALL {
        let result = evaluate_academic(&case.request())?;
        println!("\n{}", case);
        render_academic_result(&result);
    }

    println!("\nMVP mode (archetype presets)");
    for preset in list_archetypes() {
        let result = evaluate_mvp(&preset.scores);
        println!("\n{}", preset.name);
        render_mvp_result(&result);
    }

    Ok(())
}

fn render_academic_result(result: &ScoreResult) {
    println!("  Solution type: {}", result.solution_type);
    println!(
        "  Solution fitness (SF) {:.3} | Need importance (NI) {:.3}",
        result.solution_fitness, result.need_importance
    );
    println!(
        "  Justification score (JS) {:.3}",
        result.justification_score
    );
    println!(
        "  Sustainability score (SS) {:.3}",
        result.sustainability_score
    );
    println!("  Final CDS {:.3}", result.composite_score);
    println!(
        "  [{:?}] {}",
        result.interpretation.color,
        result.band().message()
    );
}

fn render_mvp_result(result: &MvpScoreResult) {
    for entry in &result.contributions {
        println!(
            "  - {}: {} x {:.2} = {:.2}",
            entry.label,
            entry.score,
            entry.weight.value(),
            entry.contribution
        );
    }
    println!("  Composite {:.2}", result.composite_score);
    println!(
        "  [{:?}] {}",
        result.interpretation.color,
        result.band().message()
    );
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(err) => println!("result unavailable: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solution_type_overrides_case_study() {
        let args = AcademicArgs {
            case: Some(CaseStudy::Cs2OldBuild),
            solution_type: Some(SolutionType::NoBuild),
            ..AcademicArgs::default()
        };
        let request = academic_request(&args).expect("request builds");
        assert_eq!(request.solution_type, SolutionType::NoBuild);
        assert_eq!(request.old_build_score, Some(1.0));
    }

    #[test]
    fn missing_selection_is_a_usage_error() {
        let err = academic_request(&AcademicArgs::default()).unwrap_err();
        assert!(matches!(err, AppError::Usage(_)));
    }

    #[test]
    fn partial_principles_surface_missing_input() {
        let args = AcademicArgs {
            solution_type: Some(SolutionType::NewBuild),
            reduce: Some(0.15),
            renew: Some(0.25),
            ..AcademicArgs::default()
        };
        let request = academic_request(&args).expect("request builds");
        assert!(matches!(
            run_academic(args),
            Err(AppError::Scoring(_))
        ));
        assert_eq!(request.r_principles.and_then(|inputs| inputs.replace), None);
    }

    #[test]
    fn ratio_overrides_merge_with_case_values() {
        let args = AcademicArgs {
            case: Some(CaseStudy::Cs2OldBuild),
            pdr: Some(0.5),
            ..AcademicArgs::default()
        };
        let request = academic_request(&args).expect("request builds");
        assert_eq!(
            request.build_ratios,
            Some(BuildRatios::new(0.90, 0.5, 1.10))
        );
    }

    #[test]
    fn dimension_overrides_follow_archetype_selection() {
        let args = MvpArgs {
            archetype: Some(Archetype::BestCase),
            replace: Some(10),
            ..MvpArgs::default()
        };
        let scores = mvp_scores(&args);
        assert_eq!(scores.get(MvpDimension::Replace), 10);
        assert_eq!(scores.get(MvpDimension::Justification), 100);
    }

    #[test]
    fn demo_runs_every_preset() {
        assert!(run_demo().is_ok());
    }
}
