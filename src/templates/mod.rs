//! Narrative content keyed by locale, category and score band.
//!
//! The built-in tables are fixed-size arrays indexed by
//! [`ScoreRange::index`], so a missing band is a compile error. Other
//! sources go through [`TemplateSource`] and may have gaps.

use serde::Serialize;

use crate::domain::request::{Category, Locale};
use crate::domain::score::ScoreRange;

mod en;
mod ko;

pub const RANGE_COUNT: usize = 20;

pub type RangeTable<T> = [T; RANGE_COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeLabel {
    pub en: &'static str,
    pub kr: &'static str,
}

impl GradeLabel {
    pub fn for_locale(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Ko => self.kr,
        }
    }
}

pub const GRADE_LABELS: RangeTable<GradeLabel> = [
    GradeLabel { en: "Legendary", kr: "전설" },
    GradeLabel { en: "Blessed", kr: "축복" },
    GradeLabel { en: "Radiant", kr: "찬란" },
    GradeLabel { en: "Excellent", kr: "최상" },
    GradeLabel { en: "Great", kr: "대길" },
    GradeLabel { en: "Very Good", kr: "길" },
    GradeLabel { en: "Good", kr: "양호" },
    GradeLabel { en: "Favorable", kr: "순조" },
    GradeLabel { en: "Fair", kr: "무난" },
    GradeLabel { en: "Balanced", kr: "평온" },
    GradeLabel { en: "Steady", kr: "안정" },
    GradeLabel { en: "Mixed", kr: "혼조" },
    GradeLabel { en: "Cloudy", kr: "흐림" },
    GradeLabel { en: "Cautious", kr: "신중" },
    GradeLabel { en: "Challenging", kr: "시련" },
    GradeLabel { en: "Rough", kr: "험난" },
    GradeLabel { en: "Stormy", kr: "폭풍" },
    GradeLabel { en: "Trying", kr: "고난" },
    GradeLabel { en: "Dark", kr: "암운" },
    GradeLabel { en: "Rock Bottom", kr: "바닥" },
];

pub struct CategoryDescriptions {
    pub love: RangeTable<&'static str>,
    pub money: RangeTable<&'static str>,
    pub study: RangeTable<&'static str>,
    pub social: RangeTable<&'static str>,
}

impl CategoryDescriptions {
    pub fn for_category(&self, category: Category) -> &RangeTable<&'static str> {
        match category {
            Category::Love => &self.love,
            Category::Money => &self.money,
            Category::Study => &self.study,
            Category::Social => &self.social,
        }
    }
}

pub struct LocaleTable {
    pub descriptions: CategoryDescriptions,
    pub advice: RangeTable<&'static str>,
    pub caution: RangeTable<&'static str>,
    pub tags: RangeTable<&'static [&'static str]>,
}

/// Lookup used by the composer. `None` means the source has a gap.
pub trait TemplateSource {
    fn description(&self, locale: Locale, category: Category, range: ScoreRange) -> Option<&str>;
    fn advice(&self, locale: Locale, range: ScoreRange) -> Option<&str>;
    fn caution(&self, locale: Locale, range: ScoreRange) -> Option<&str>;
    fn tags(&self, locale: Locale, range: ScoreRange) -> Option<Vec<&str>>;
    fn grade_label(&self, range: ScoreRange) -> Option<GradeLabel>;
}

/// The tables compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    fn table(locale: Locale) -> &'static LocaleTable {
        match locale {
            Locale::En => &en::EN,
            Locale::Ko => &ko::KO,
        }
    }
}

impl TemplateSource for BuiltinTemplates {
    fn description(&self, locale: Locale, category: Category, range: ScoreRange) -> Option<&str> {
        Self::table(locale)
            .descriptions
            .for_category(category)
            .get(range.index())
            .copied()
    }

    fn advice(&self, locale: Locale, range: ScoreRange) -> Option<&str> {
        Self::table(locale).advice.get(range.index()).copied()
    }

    fn caution(&self, locale: Locale, range: ScoreRange) -> Option<&str> {
        Self::table(locale).caution.get(range.index()).copied()
    }

    fn tags(&self, locale: Locale, range: ScoreRange) -> Option<Vec<&str>> {
        Self::table(locale)
            .tags
            .get(range.index())
            .map(|tags| tags.to_vec())
    }

    fn grade_label(&self, range: ScoreRange) -> Option<GradeLabel> {
        GRADE_LABELS.get(range.index()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::request::{CATEGORIES, LOCALES};
    use crate::domain::score::SCORE_RANGES;

    #[test]
    fn test_table_width_matches_score_ranges() {
        assert_eq!(SCORE_RANGES.len(), RANGE_COUNT);
    }

    #[test]
    fn test_builtin_tables_are_complete() {
        let templates = BuiltinTemplates;

        for locale in LOCALES {
            for range in ScoreRange::all() {
                for category in CATEGORIES {
                    let text = templates.description(locale, category, range);
                    assert!(
                        text.is_some_and(|t| !t.is_empty()),
                        "missing description {locale}/{category}/{range}"
                    );
                }
                assert!(templates.advice(locale, range).is_some_and(|t| !t.is_empty()));
                assert!(templates.caution(locale, range).is_some_and(|t| !t.is_empty()));

                let tags = templates.tags(locale, range).unwrap_or_default();
                assert!(tags.len() >= 2, "need at least two tags for {locale}/{range}");
            }
        }

        for range in ScoreRange::all() {
            let label = templates.grade_label(range).unwrap();
            assert!(!label.en.is_empty() && !label.kr.is_empty());
        }
    }

    #[test]
    fn test_tags_within_band_are_unique() {
        let templates = BuiltinTemplates;
        for locale in LOCALES {
            for range in ScoreRange::all() {
                let mut tags = templates.tags(locale, range).unwrap();
                let before = tags.len();
                tags.sort();
                tags.dedup();
                assert_eq!(tags.len(), before, "duplicate tag in {locale}/{range}");
            }
        }
    }

    #[test]
    fn test_grade_label_for_locale() {
        let top = GRADE_LABELS[ScoreRange::of(100).index()];
        assert_eq!(top.for_locale(Locale::En), "Legendary");
        assert_eq!(top.for_locale(Locale::Ko), "전설");
    }
}
