use serde::Serialize;

use crate::domain::digest::Seed;
use crate::domain::error::FortuneError;
use crate::domain::request::{Category, FortuneRequest, Locale, CATEGORIES};
use crate::domain::sample::sample;
use crate::domain::score::{blend_topic_score, score, ScoreRange};
use crate::domain::seed::{DayKey, SeedChain};
use crate::templates::{BuiltinTemplates, GradeLabel, TemplateSource};

/// Number of tags drawn for every result.
pub const TAG_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: Category,
    pub score: u8,
    pub score_range: ScoreRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneResult {
    pub overall_score: u8,
    pub overall_score_range: ScoreRange,
    #[serde(rename = "categories")]
    pub category_scores: [CategoryScore; 4],
    pub selected_category: Category,
    pub description: String,
    pub advice: String,
    pub caution: String,
    pub tags: Vec<String>,
    pub grade_label: GradeLabel,
    pub base_seed: Seed,
    pub theme_seed: Seed,
    pub final_seed: Seed,
}

impl FortuneResult {
    pub fn category_score(&self, category: Category) -> &CategoryScore {
        &self.category_scores[category.index()]
    }

    /// Score shown for the category the user picked.
    pub fn display_score(&self) -> u8 {
        self.category_score(self.selected_category).score
    }
}

/// Fortune for the current KST day with the built-in tables.
pub fn get_daily_fortune(request: &FortuneRequest, locale: Locale) -> Result<FortuneResult, FortuneError> {
    calculate_fortune(request, locale, DayKey::today(), &BuiltinTemplates)
}

pub fn calculate_fortune<T: TemplateSource + ?Sized>(
    request: &FortuneRequest,
    locale: Locale,
    day: DayKey,
    templates: &T,
) -> Result<FortuneResult, FortuneError> {
    let chain = SeedChain::build(request, day);

    let overall_score = score(&chain.final_seed);
    let overall_score_range = ScoreRange::of(overall_score);

    let category_scores = CATEGORIES.map(|category| {
        let topic_score = score(chain.topic_seed(category));
        let blended = blend_topic_score(topic_score, overall_score);
        CategoryScore {
            category,
            score: blended,
            score_range: ScoreRange::of(blended),
        }
    });

    let selected = request.selected_category;
    let display_score = category_scores[selected.index()].score;
    let range = ScoreRange::of(display_score);

    let missing = |field: &'static str| FortuneError::MissingTemplate { locale, field, range };

    let description = templates
        .description(locale, selected, range)
        .ok_or_else(|| missing("description"))?;
    let advice = templates.advice(locale, range).ok_or_else(|| missing("advice"))?;
    let caution = templates.caution(locale, range).ok_or_else(|| missing("caution"))?;
    let candidate_tags = templates.tags(locale, range).ok_or_else(|| missing("tags"))?;
    let grade_label = templates.grade_label(range).ok_or_else(|| missing("grade_label"))?;

    let tags = sample(&candidate_tags, chain.final_seed.as_str(), TAG_COUNT)
        .into_iter()
        .map(str::to_string)
        .collect();

    tracing::debug!(
        %day,
        %locale,
        category = %selected,
        overall_score,
        display_score,
        range = %range,
        "Composed fortune"
    );

    Ok(FortuneResult {
        overall_score,
        overall_score_range,
        category_scores,
        selected_category: selected,
        description: description.to_string(),
        advice: advice.to_string(),
        caution: caution.to_string(),
        tags,
        grade_label,
        base_seed: chain.base_seed,
        theme_seed: chain.theme_seed,
        final_seed: chain.final_seed,
    })
}

/// Text handed to the share sheet or clipboard.
pub fn share_text(result: &FortuneResult, locale: Locale) -> String {
    let score = result.display_score();
    let grade = result.grade_label.for_locale(locale);

    match locale {
        Locale::En => format!(
            "My Fortune Score today is {score}! {grade}\n\nCheck your fortune at Mystic Fortune!"
        ),
        Locale::Ko => format!(
            "오늘의 운세 점수는 {score}점! {grade}\n\nMystic Fortune에서 운세를 확인해보세요!"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::request::{BaseAttributes, Gender, ThemeAttributes};
    use crate::domain::seed::topic_seed;
    use std::collections::HashSet;

    fn alice() -> FortuneRequest {
        FortuneRequest {
            base: BaseAttributes {
                name: "Alice".to_string(),
                birth_day: 20,
                birth_month: 5,
                birth_year: 1990,
                gender: Gender::Female,
            },
            theme: ThemeAttributes {
                person: Some(String::new()),
                color: Some("blue".to_string()),
                animal: Some("cat".to_string()),
                food: Some("pizza".to_string()),
            },
            selected_category: Category::Love,
        }
    }

    fn day(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    fn compose(request: &FortuneRequest, locale: Locale, d: &str) -> FortuneResult {
        calculate_fortune(request, locale, day(d), &BuiltinTemplates).unwrap()
    }

    /// A source that knows nothing.
    struct EmptyTemplates;

    impl TemplateSource for EmptyTemplates {
        fn description(&self, _: Locale, _: Category, _: ScoreRange) -> Option<&str> {
            None
        }
        fn advice(&self, _: Locale, _: ScoreRange) -> Option<&str> {
            None
        }
        fn caution(&self, _: Locale, _: ScoreRange) -> Option<&str> {
            None
        }
        fn tags(&self, _: Locale, _: ScoreRange) -> Option<Vec<&str>> {
            None
        }
        fn grade_label(&self, _: ScoreRange) -> Option<GradeLabel> {
            None
        }
    }

    /// Built-in tables with the tag lists removed.
    struct NoTags;

    impl TemplateSource for NoTags {
        fn description(&self, l: Locale, c: Category, r: ScoreRange) -> Option<&str> {
            BuiltinTemplates.description(l, c, r)
        }
        fn advice(&self, l: Locale, r: ScoreRange) -> Option<&str> {
            BuiltinTemplates.advice(l, r)
        }
        fn caution(&self, l: Locale, r: ScoreRange) -> Option<&str> {
            BuiltinTemplates.caution(l, r)
        }
        fn tags(&self, _: Locale, _: ScoreRange) -> Option<Vec<&str>> {
            None
        }
        fn grade_label(&self, r: ScoreRange) -> Option<GradeLabel> {
            BuiltinTemplates.grade_label(r)
        }
    }

    #[test]
    fn test_golden_fixture() {
        let result = compose(&alice(), Locale::En, "2025-01-28");

        assert_eq!(
            result.base_seed.as_str(),
            "d30d816bde092b0631d63e3bce36d3445db77bac90f72ef62e614561b54746f8"
        );
        assert_eq!(
            result.theme_seed.as_str(),
            "871332afbc0f012bc2d221eee450ea866b6e5241f75c7bccc34f023738587c49"
        );
        assert_eq!(
            result.final_seed.as_str(),
            "77ad32ddc427ae7380e31a7ae87b9b29613a9b9056b9bc1f4e88d857de4b76f0"
        );
        assert_eq!(result.overall_score, 14);
        // social: 0.65 * 64 + 0.35 * 14 lands exactly on 46.5 and rounds up
        let scores: Vec<u8> = result.category_scores.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![39, 58, 22, 47]);
        assert_eq!(result.display_score(), 39);
        assert_eq!(result.category_score(Category::Love).score_range.label(), "35-39");
        assert_eq!(result.grade_label.en, "Cloudy");
        assert_eq!(result.tags, vec!["#Slow", "#Drifting"]);
        assert_eq!(
            result.description,
            "Your heart may feel a little clouded. Take care of yourself before worrying about others."
        );
    }

    #[test]
    fn test_deterministic() {
        let a = compose(&alice(), Locale::En, "2025-01-28");
        let b = compose(&alice(), Locale::En, "2025-01-28");
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_day_sensitivity() {
        let a = compose(&alice(), Locale::En, "2025-01-28");
        let b = compose(&alice(), Locale::En, "2025-01-29");

        assert_ne!(a.base_seed, b.base_seed);
        assert_ne!(a.final_seed, b.final_seed);
        assert_eq!(a.theme_seed, b.theme_seed);

        // Overall scores collide for a given pair about 1% of the time; a
        // week of days must not all agree.
        let overall: HashSet<u8> = (1..=7)
            .map(|d| compose(&alice(), Locale::En, &format!("2025-02-0{d}")).overall_score)
            .collect();
        assert!(overall.len() > 1);
    }

    #[test]
    fn test_selected_category_changes_base_seed() {
        let love = compose(&alice(), Locale::En, "2025-01-28");

        let mut overall = HashSet::from([love.overall_score]);
        for category in [Category::Money, Category::Study, Category::Social] {
            let mut request = alice();
            request.selected_category = category;
            let other = compose(&request, Locale::En, "2025-01-28");

            assert_ne!(love.base_seed, other.base_seed);
            assert_eq!(love.theme_seed, other.theme_seed);
            overall.insert(other.overall_score);
        }
        assert!(overall.len() > 1);
    }

    #[test]
    fn test_category_scores_follow_blend() {
        let result = compose(&alice(), Locale::En, "2025-01-28");

        for (i, entry) in result.category_scores.iter().enumerate() {
            assert_eq!(entry.category, CATEGORIES[i]);
            let topic = score(&topic_seed(&result.base_seed, entry.category));
            assert_eq!(entry.score, blend_topic_score(topic, result.overall_score));
            assert_eq!(entry.score_range, ScoreRange::of(entry.score));
        }
        assert_eq!(result.overall_score, score(&result.final_seed));
        assert_eq!(result.overall_score_range, ScoreRange::of(result.overall_score));
    }

    #[test]
    fn test_content_matches_display_range() {
        for locale in [Locale::En, Locale::Ko] {
            let result = compose(&alice(), locale, "2025-01-28");
            let range = ScoreRange::of(result.display_score());
            let templates = BuiltinTemplates;

            assert_eq!(
                Some(result.description.as_str()),
                templates.description(locale, Category::Love, range)
            );
            assert_eq!(Some(result.advice.as_str()), templates.advice(locale, range));
            assert_eq!(Some(result.caution.as_str()), templates.caution(locale, range));
            assert_eq!(Some(result.grade_label), templates.grade_label(range));

            let candidates = templates.tags(locale, range).unwrap();
            assert_eq!(result.tags.len(), TAG_COUNT);
            assert_ne!(result.tags[0], result.tags[1]);
            assert!(result.tags.iter().all(|t| candidates.contains(&t.as_str())));
        }
    }

    #[test]
    fn test_locale_does_not_change_scores() {
        let en = compose(&alice(), Locale::En, "2025-01-28");
        let ko = compose(&alice(), Locale::Ko, "2025-01-28");

        assert_eq!(en.category_scores, ko.category_scores);
        assert_eq!(en.final_seed, ko.final_seed);
        assert_eq!(en.grade_label, ko.grade_label);
        assert_ne!(en.description, ko.description);
    }

    #[test]
    fn test_missing_templates_are_fatal() {
        let err = calculate_fortune(&alice(), Locale::En, day("2025-01-28"), &EmptyTemplates)
            .unwrap_err();
        assert!(matches!(
            err,
            FortuneError::MissingTemplate { field: "description", locale: Locale::En, .. }
        ));

        let err = calculate_fortune(&alice(), Locale::Ko, day("2025-01-28"), &NoTags).unwrap_err();
        assert!(matches!(err, FortuneError::MissingTemplate { field: "tags", .. }));
    }

    #[test]
    fn test_share_text() {
        let result = compose(&alice(), Locale::En, "2025-01-28");
        let score = result.display_score();

        let en = share_text(&result, Locale::En);
        assert!(en.starts_with(&format!("My Fortune Score today is {score}! {}", result.grade_label.en)));

        let ko = share_text(&result, Locale::Ko);
        assert!(ko.starts_with(&format!("오늘의 운세 점수는 {score}점! {}", result.grade_label.kr)));
    }

    #[test]
    fn test_result_json_shape() {
        let result = compose(&alice(), Locale::En, "2025-01-28");
        let json = serde_json::to_value(&result).unwrap();

        assert!(json["overallScore"].is_u64());
        assert!(json["overallScoreRange"].is_string());
        assert_eq!(json["categories"].as_array().unwrap().len(), 4);
        assert_eq!(json["categories"][0]["category"], "love");
        assert!(json["categories"][0]["scoreRange"].is_string());
        assert_eq!(json["selectedCategory"], "love");
        assert!(json["gradeLabel"]["en"].is_string());
        assert!(json["gradeLabel"]["kr"].is_string());
        assert_eq!(json["baseSeed"].as_str().unwrap().len(), 64);
    }
}
