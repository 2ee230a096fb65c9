use serde::Serialize;

/// Qualitative recommendation band, ordered from most to least circular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    HighlyCircular,
    Optimizable,
    Vulnerable,
    LinearProne,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BandColor {
    Green,
    Orange,
    Red,
}

impl Band {
    pub fn label(&self) -> &'static str {
        match self {
            Band::HighlyCircular => "Highly circular",
            Band::Optimizable => "Optimizable",
            Band::Vulnerable => "Vulnerable",
            Band::LinearProne => "Linear-prone",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            Band::HighlyCircular => "proceed",
            Band::Optimizable => "strong circular potential",
            Band::Vulnerable => "redesign recommended",
            Band::LinearProne => "reconsider build decision",
        }
    }

    pub fn color(&self) -> BandColor {
        match self {
            Band::HighlyCircular | Band::Optimizable => BandColor::Green,
            Band::Vulnerable => BandColor::Orange,
            Band::LinearProne => BandColor::Red,
        }
    }

    pub fn message(&self) -> String {
        format!("{}: {}", self.label(), self.recommendation())
    }

    pub fn view(&self) -> BandView {
        BandView {
            band: *self,
            label: self.label(),
            recommendation: self.recommendation(),
            color: self.color(),
        }
    }
}

/// Band plus its fixed presentation attributes, for callers that render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BandView {
    pub band: Band,
    pub label: &'static str,
    pub recommendation: &'static str,
    pub color: BandColor,
}

/// Inclusive lower bounds of the three upper bands on a variant's own scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandThresholds {
    pub highly_circular: f64,
    pub optimizable: f64,
    pub vulnerable: f64,
}

impl BandThresholds {
    /// Academic composite scale, `[0, 1]`.
    pub const ACADEMIC: BandThresholds = BandThresholds {
        highly_circular: 0.80,
        optimizable: 0.65,
        vulnerable: 0.50,
    };

    /// MVP composite scale, `[0, 100]`.
    pub const MVP: BandThresholds = BandThresholds {
        highly_circular: 80.0,
        optimizable: 65.0,
        vulnerable: 50.0,
    };

    /// Top-down lookup; the first bound the score reaches wins. NaN falls
    /// through to [`Band::LinearProne`].
    pub fn classify(&self, score: f64) -> Band {
        if score >= self.highly_circular {
            Band::HighlyCircular
        } else if score >= self.optimizable {
            Band::Optimizable
        } else if score >= self.vulnerable {
            Band::Vulnerable
        } else {
            Band::LinearProne
        }
    }
}

pub fn interpret_academic(score: f64) -> Band {
    BandThresholds::ACADEMIC.classify(score)
}

pub fn interpret_mvp(score: f64) -> Band {
    BandThresholds::MVP.classify(score)
}
