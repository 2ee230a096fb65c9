//! Published weighting constants for both score variants.
//!
//! Weights are held as integer basis points so every weight set sums to
//! exactly [`Weight::WHOLE`]; conversion to `f64` only happens at the point of
//! multiplication.

use serde::{Serialize, Serializer};

/// A single weight expressed in basis points (1/10 000).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(u16);

impl Weight {
    pub const WHOLE: u32 = 10_000;

    pub const fn from_basis_points(basis_points: u16) -> Self {
        Self(basis_points)
    }

    pub const fn basis_points(self) -> u16 {
        self.0
    }

    pub fn value(self) -> f64 {
        f64::from(self.0) / f64::from(Self::WHOLE)
    }

    pub fn apply(self, score: f64) -> f64 {
        self.value() * score
    }
}

impl Serialize for Weight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

/// Sum of a weight set in basis points.
pub fn total_basis_points<I>(weights: I) -> u32
where
    I: IntoIterator<Item = Weight>,
{
    weights
        .into_iter()
        .map(|weight| u32::from(weight.basis_points()))
        .sum()
}

// Composite (academic): CDS = W_JS * JS + W_SS * SS
pub const W_JS: Weight = Weight::from_basis_points(5300);
pub const W_SS: Weight = Weight::from_basis_points(4700);

// Justification: JS = W_SF * SF + W_NI * NI
pub const W_SF: Weight = Weight::from_basis_points(4700);
pub const W_NI: Weight = Weight::from_basis_points(5300);

// New-Build R-principles
pub const W_REDUCE: Weight = Weight::from_basis_points(4300);
pub const W_RENEW: Weight = Weight::from_basis_points(2800);
pub const W_REPLACE: Weight = Weight::from_basis_points(2900);

/// Inherent circularity potential per sustainability pathway.
pub const NB_INDEX: f64 = 1.00;
pub const OB_INDEX: f64 = 0.61;
pub const NWB_INDEX: f64 = 0.43;

/// Upper bound of the ordinal level-of-importance scale.
pub const LOI_MAX: u8 = 5;

pub const ACADEMIC_COMPOSITE_WEIGHTS: [Weight; 2] = [W_JS, W_SS];
pub const JUSTIFICATION_WEIGHTS: [Weight; 2] = [W_SF, W_NI];
pub const R_PRINCIPLE_WEIGHTS: [Weight; 3] = [W_REDUCE, W_RENEW, W_REPLACE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn academic_weight_sets_are_whole() {
        assert_eq!(total_basis_points(ACADEMIC_COMPOSITE_WEIGHTS), Weight::WHOLE);
        assert_eq!(total_basis_points(JUSTIFICATION_WEIGHTS), Weight::WHOLE);
        assert_eq!(total_basis_points(R_PRINCIPLE_WEIGHTS), Weight::WHOLE);
    }

    #[test]
    fn weight_value_matches_published_decimal() {
        assert_eq!(W_JS.value(), 0.53);
        assert_eq!(W_SS.value(), 0.47);
        assert_eq!(W_REDUCE.value(), 0.43);
        assert_eq!(W_RENEW.value(), 0.28);
        assert_eq!(W_REPLACE.value(), 0.29);
    }

    #[test]
    fn weights_serialize_as_decimals() {
        let json = serde_json::to_value(W_REPLACE).expect("weight serializes");
        assert_eq!(json, serde_json::json!(0.29));
    }
}
