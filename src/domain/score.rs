use serde::{Serialize, Serializer};
use std::fmt;

use crate::domain::digest::Seed;

pub const MAX_SCORE: u8 = 100;

const TOPIC_WEIGHT: f64 = 0.65;
const OVERALL_WEIGHT: f64 = 0.35;

#[derive(Debug, Clone)]
pub struct ScoreRangeDef {
    pub lower: u8,
    pub upper: u8,
    pub label: &'static str,
}

/// Highest band first. The top band is 95-100, one wider than the rest.
pub const SCORE_RANGES: &[ScoreRangeDef; 20] = &[
    ScoreRangeDef { lower: 95, upper: 100, label: "95-100" },
    ScoreRangeDef { lower: 90, upper: 94, label: "90-94" },
    ScoreRangeDef { lower: 85, upper: 89, label: "85-89" },
    ScoreRangeDef { lower: 80, upper: 84, label: "80-84" },
    ScoreRangeDef { lower: 75, upper: 79, label: "75-79" },
    ScoreRangeDef { lower: 70, upper: 74, label: "70-74" },
    ScoreRangeDef { lower: 65, upper: 69, label: "65-69" },
    ScoreRangeDef { lower: 60, upper: 64, label: "60-64" },
    ScoreRangeDef { lower: 55, upper: 59, label: "55-59" },
    ScoreRangeDef { lower: 50, upper: 54, label: "50-54" },
    ScoreRangeDef { lower: 45, upper: 49, label: "45-49" },
    ScoreRangeDef { lower: 40, upper: 44, label: "40-44" },
    ScoreRangeDef { lower: 35, upper: 39, label: "35-39" },
    ScoreRangeDef { lower: 30, upper: 34, label: "30-34" },
    ScoreRangeDef { lower: 25, upper: 29, label: "25-29" },
    ScoreRangeDef { lower: 20, upper: 24, label: "20-24" },
    ScoreRangeDef { lower: 15, upper: 19, label: "15-19" },
    ScoreRangeDef { lower: 10, upper: 14, label: "10-14" },
    ScoreRangeDef { lower: 5, upper: 9, label: "5-9" },
    ScoreRangeDef { lower: 0, upper: 4, label: "0-4" },
];

/// One of the twenty score bands, identified by its position in
/// [`SCORE_RANGES`]. Template tables are indexed the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScoreRange(usize);

impl ScoreRange {
    /// Band containing `score`. Anything above 100 lands in the top band.
    pub fn of(score: u8) -> ScoreRange {
        let index = SCORE_RANGES
            .iter()
            .position(|r| score >= r.lower)
            .unwrap_or(SCORE_RANGES.len() - 1);
        ScoreRange(index)
    }

    pub fn all() -> impl Iterator<Item = ScoreRange> {
        (0..SCORE_RANGES.len()).map(ScoreRange)
    }

    pub fn from_label(label: &str) -> Option<ScoreRange> {
        SCORE_RANGES
            .iter()
            .position(|r| r.label == label)
            .map(ScoreRange)
    }

    pub fn index(&self) -> usize {
        self.0
    }

    pub fn def(&self) -> &'static ScoreRangeDef {
        &SCORE_RANGES[self.0]
    }

    pub fn label(&self) -> &'static str {
        self.def().label
    }

    pub fn contains(&self, score: u8) -> bool {
        let def = self.def();
        (def.lower..=def.upper).contains(&score)
    }
}

impl fmt::Display for ScoreRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ScoreRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Digest read as a big-endian integer, mod 101.
pub fn score(seed: &Seed) -> u8 {
    seed.modulo(u64::from(MAX_SCORE) + 1) as u8
}

/// Weighted mix of a topic's own score and the overall score.
/// Rounds half away from zero; inputs are non-negative so this is half-up.
pub fn blend_topic_score(topic_score: u8, overall_score: u8) -> u8 {
    let mixed = TOPIC_WEIGHT * f64::from(topic_score) + OVERALL_WEIGHT * f64::from(overall_score);
    mixed.round() as u8
}
