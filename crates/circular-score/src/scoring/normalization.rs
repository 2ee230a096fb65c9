use super::domain::{BuildRatios, SolutionType};
use super::weights::LOI_MAX;

/// Scales an ordinal level of importance onto `[0, 1]`.
///
/// Levels are expected in `1..=max`; anything else passes straight through the
/// division.
pub fn need_importance(level: u8, max: u8) -> f64 {
    f64::from(level) / f64::from(max)
}

/// [`need_importance`] on the published five-point scale.
pub fn need_importance_default(level: u8) -> f64 {
    need_importance(level, LOI_MAX)
}

pub fn solution_fitness_no_build() -> f64 {
    1.0
}

/// Mean of the three occupancy/demand ratios. Not clamped: over- and
/// under-capacity signals carry into the final score.
pub fn solution_fitness_build(ratios: &BuildRatios) -> f64 {
    (ratios.past_occupancy_rate + ratios.present_demand_ratio + ratios.future_growth_ratio) / 3.0
}

pub fn solution_fitness(solution_type: SolutionType, ratios: &BuildRatios) -> f64 {
    if solution_type.is_build_path() {
        solution_fitness_build(ratios)
    } else {
        solution_fitness_no_build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn need_importance_spans_fifths() {
        assert!((need_importance_default(1) - 0.2).abs() < EPSILON);
        assert!((need_importance_default(3) - 0.6).abs() < EPSILON);
        assert!((need_importance_default(5) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn no_build_fitness_ignores_ratios() {
        let ratios = BuildRatios::new(0.1, 0.2, 0.3);
        assert_eq!(solution_fitness(SolutionType::NoBuild, &ratios), 1.0);
    }

    #[test]
    fn build_fitness_is_unclamped_mean() {
        let ratios = BuildRatios::new(1.2, 1.2, 1.2);
        let fitness = solution_fitness(SolutionType::NewBuild, &ratios);
        assert!((fitness - 1.2).abs() < EPSILON);

        let negative = BuildRatios::new(-0.3, 0.0, 0.0);
        assert!((solution_fitness_build(&negative) + 0.1).abs() < EPSILON);
    }
}
