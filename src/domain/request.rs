use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::FortuneError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Love,
    Money,
    Study,
    Social,
}

/// Fixed evaluation order for per-category scores.
pub const CATEGORIES: [Category; 4] = [
    Category::Love,
    Category::Money,
    Category::Study,
    Category::Social,
];

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Love => "love",
            Category::Money => "money",
            Category::Study => "study",
            Category::Social => "social",
        }
    }

    /// Position in [`CATEGORIES`].
    pub fn index(&self) -> usize {
        match self {
            Category::Love => 0,
            Category::Money => 1,
            Category::Study => 2,
            Category::Social => 3,
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Category::Love) => "Romance Luck",
            (Locale::En, Category::Money) => "Wealth Luck",
            (Locale::En, Category::Study) => "Academic Luck",
            (Locale::En, Category::Social) => "Interpersonal Luck",
            (Locale::Ko, Category::Love) => "연애운",
            (Locale::Ko, Category::Money) => "금전운",
            (Locale::Ko, Category::Study) => "학업운",
            (Locale::Ko, Category::Social) => "대인관계",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FortuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "love" => Ok(Category::Love),
            "money" => Ok(Category::Money),
            "study" => Ok(Category::Study),
            "social" => Ok(Category::Social),
            _ => Err(FortuneError::UnknownCategory(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = FortuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "female" => Ok(Gender::Female),
            "male" => Ok(Gender::Male),
            "other" => Ok(Gender::Other),
            _ => Err(FortuneError::UnknownGender(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ko,
}

pub const LOCALES: [Locale; 2] = [Locale::En, Locale::Ko];

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ko => "ko",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = FortuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "ko" => Ok(Locale::Ko),
            _ => Err(FortuneError::UnknownLocale(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseAttributes {
    pub name: String,
    pub birth_day: u32,
    pub birth_month: u32,
    pub birth_year: i32,
    pub gender: Gender,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeAttributes {
    #[serde(default)]
    pub person: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub animal: Option<String>,
    #[serde(default)]
    pub food: Option<String>,
}

/// Everything the composer needs, flattened the same way the input form
/// hands it over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneRequest {
    #[serde(flatten)]
    pub base: BaseAttributes,
    #[serde(flatten)]
    pub theme: ThemeAttributes,
    pub selected_category: Category,
}
