use super::MvpDimensionScores;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Named quick-scenario presets for the MVP dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    NoBuild,
    Reuse,
    NewBuild,
    BestCase,
    WorstCase,
}

// justification, rethink, reuse, reduce, renew, replace
const NO_BUILD: MvpDimensionScores = MvpDimensionScores::new(85, 100, 60, 90, 70, 60);
const REUSE: MvpDimensionScores = MvpDimensionScores::new(80, 40, 95, 75, 65, 55);
const NEW_BUILD: MvpDimensionScores = MvpDimensionScores::new(75, 20, 30, 55, 60, 50);
const BEST_CASE: MvpDimensionScores = MvpDimensionScores::new(100, 100, 95, 95, 90, 80);
const WORST_CASE: MvpDimensionScores = MvpDimensionScores::new(20, 0, 0, 10, 5, 5);

impl Archetype {
    pub const ALL: [Archetype; 5] = [
        Self::NoBuild,
        Self::Reuse,
        Self::NewBuild,
        Self::BestCase,
        Self::WorstCase,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Archetype::NoBuild => "No-Build",
            Archetype::Reuse => "Reuse",
            Archetype::NewBuild => "New-Build",
            Archetype::BestCase => "Best Case",
            Archetype::WorstCase => "Worst Case",
        }
    }

    pub fn scores(&self) -> MvpDimensionScores {
        match self {
            Archetype::NoBuild => NO_BUILD,
            Archetype::Reuse => REUSE,
            Archetype::NewBuild => NEW_BUILD,
            Archetype::BestCase => BEST_CASE,
            Archetype::WorstCase => WORST_CASE,
        }
    }

    pub fn preset(&self) -> ArchetypePreset {
        ArchetypePreset {
            archetype: *self,
            name: self.name(),
            scores: self.scores(),
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown archetype '{0}'")]
pub struct UnknownArchetype(pub String);

impl FromStr for Archetype {
    type Err = UnknownArchetype;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key = |value: &str| -> String {
            value
                .chars()
                .filter(|ch| ch.is_ascii_alphanumeric())
                .collect::<String>()
                .to_ascii_lowercase()
        };
        let wanted = key(raw);

        Self::ALL
            .into_iter()
            .find(|archetype| key(archetype.name()) == wanted)
            .ok_or_else(|| UnknownArchetype(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArchetypePreset {
    pub archetype: Archetype,
    pub name: &'static str,
    pub scores: MvpDimensionScores,
}

/// Every preset, in presentation order.
pub fn list_archetypes() -> Vec<ArchetypePreset> {
    Archetype::ALL.iter().map(Archetype::preset).collect()
}
