use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::digest::{digest, Seed};
use crate::domain::error::FortuneError;
use crate::domain::normalize::{normalize, normalize_opt};
use crate::domain::request::{Category, FortuneRequest, CATEGORIES};

/// Unit separator; cannot be typed into the input form.
pub const FIELD_SEPARATOR: char = '\u{1F}';

/// Korea Standard Time. No DST, so a fixed offset is exact.
const KST_OFFSET_SECS: i64 = 9 * 3600;

/// Calendar day in KST, the boundary at which every fortune rolls over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn today() -> DayKey {
        DayKey::at(Utc::now())
    }

    /// The KST calendar day containing `instant`.
    pub fn at(instant: DateTime<Utc>) -> DayKey {
        let local = instant.naive_utc() + Duration::seconds(KST_OFFSET_SECS);
        DayKey(local.date())
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<DayKey> {
        NaiveDate::from_ymd_opt(year, month, day).map(DayKey)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// `YYYY`, `MM`, `DD` exactly as they appear in the formatted key.
    pub fn components(&self) -> (String, String, String) {
        (
            format!("{:04}", self.0.year()),
            format!("{:02}", self.0.month()),
            format!("{:02}", self.0.day()),
        )
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DayKey {
    type Err = FortuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(DayKey)
            .map_err(|_| FortuneError::InvalidDayKey(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedChain {
    pub base_seed: Seed,
    pub theme_seed: Seed,
    /// One per category, in [`CATEGORIES`] order.
    pub topic_seeds: [(Category, Seed); 4],
    pub final_seed: Seed,
}

impl SeedChain {
    pub fn build(request: &FortuneRequest, day: DayKey) -> SeedChain {
        let base_seed = digest(&serialize_base(request, day));
        let theme_seed = digest(&serialize_theme(request));
        let final_seed = final_seed(&base_seed, &theme_seed);
        let topic_seeds = CATEGORIES.map(|category| (category, topic_seed(&base_seed, category)));

        SeedChain {
            base_seed,
            theme_seed,
            topic_seeds,
            final_seed,
        }
    }

    pub fn topic_seed(&self, category: Category) -> &Seed {
        &self.topic_seeds[category.index()].1
    }
}

pub fn serialize_base(request: &FortuneRequest, day: DayKey) -> String {
    let (year, month, date) = day.components();
    let base = &request.base;

    let fields = [
        day.to_string(),
        year,
        month,
        date,
        normalize(&base.name),
        normalize(base.gender.as_str()),
        base.birth_year.to_string(),
        base.birth_month.to_string(),
        base.birth_day.to_string(),
        normalize(request.selected_category.as_str()),
    ];

    join_fields(&fields)
}

pub fn serialize_theme(request: &FortuneRequest) -> String {
    let theme = &request.theme;

    let fields = [
        normalize_opt(theme.color.as_deref()),
        normalize_opt(theme.animal.as_deref()),
        normalize_opt(theme.person.as_deref()),
        normalize_opt(theme.food.as_deref()),
    ];

    join_fields(&fields)
}

/// Derived from the base seed alone, never from another topic seed.
pub fn topic_seed(base_seed: &Seed, category: Category) -> Seed {
    digest(&format!("{}{}", base_seed, category.as_str()))
}

pub fn final_seed(base_seed: &Seed, theme_seed: &Seed) -> Seed {
    digest(&format!("{}{}", base_seed, theme_seed))
}

fn join_fields(fields: &[String]) -> String {
    let mut sep = [0u8; 4];
    fields.join(FIELD_SEPARATOR.encode_utf8(&mut sep))
}
