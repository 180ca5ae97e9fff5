use std::collections::BTreeMap;

use chrono::Datelike;

use crate::domain::request::{FortuneRequest, Locale};
use crate::domain::seed::DayKey;

pub const MIN_BIRTH_YEAR: i32 = 1900;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum InvalidField {
    Name,
    BirthDay,
    BirthMonth,
    BirthYear,
}

impl InvalidField {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidField::Name => "name",
            InvalidField::BirthDay => "birthDay",
            InvalidField::BirthMonth => "birthMonth",
            InvalidField::BirthYear => "birthYear",
        }
    }

    pub fn message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (InvalidField::Name, Locale::En) => "Name is required",
            (InvalidField::Name, Locale::Ko) => "이름을 입력해주세요",
            (_, Locale::En) => "Please enter a valid date of birth",
            (_, Locale::Ko) => "올바른 생년월일을 입력해주세요",
        }
    }
}

/// Form rules applied before a request reaches the composer. The composer
/// itself trusts its input.
pub fn validate_request(request: &FortuneRequest, current_year: i32) -> Vec<InvalidField> {
    let base = &request.base;
    let mut invalid = Vec::new();

    if base.name.trim().is_empty() {
        invalid.push(InvalidField::Name);
    }
    if !(1..=31).contains(&base.birth_day) {
        invalid.push(InvalidField::BirthDay);
    }
    if !(1..=12).contains(&base.birth_month) {
        invalid.push(InvalidField::BirthMonth);
    }
    if !(MIN_BIRTH_YEAR..=current_year).contains(&base.birth_year) {
        invalid.push(InvalidField::BirthYear);
    }

    invalid
}

/// [`validate_request`] against the current KST year.
pub fn validate_today(request: &FortuneRequest) -> Vec<InvalidField> {
    validate_request(request, DayKey::today().date().year())
}

/// Field name to localized message, for an error body.
pub fn error_messages(invalid: &[InvalidField], locale: Locale) -> BTreeMap<&'static str, &'static str> {
    invalid
        .iter()
        .map(|field| (field.as_str(), field.message(locale)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::request::{BaseAttributes, Category, Gender, ThemeAttributes};

    fn request(name: &str, day: u32, month: u32, year: i32) -> FortuneRequest {
        FortuneRequest {
            base: BaseAttributes {
                name: name.to_string(),
                birth_day: day,
                birth_month: month,
                birth_year: year,
                gender: Gender::Other,
            },
            theme: ThemeAttributes::default(),
            selected_category: Category::Study,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(validate_request(&request("Alice", 20, 5, 1990), 2025).is_empty());
        assert!(validate_request(&request("A", 31, 12, 2025), 2025).is_empty());
        assert!(validate_request(&request("A", 1, 1, 1900), 2025).is_empty());
    }

    #[test]
    fn test_blank_name() {
        assert_eq!(
            validate_request(&request("   ", 20, 5, 1990), 2025),
            vec![InvalidField::Name]
        );
    }

    #[test]
    fn test_out_of_range_dates() {
        assert_eq!(
            validate_request(&request("Alice", 0, 13, 1899), 2025),
            vec![InvalidField::BirthDay, InvalidField::BirthMonth, InvalidField::BirthYear]
        );
        assert_eq!(
            validate_request(&request("Alice", 32, 5, 2026), 2025),
            vec![InvalidField::BirthDay, InvalidField::BirthYear]
        );
    }

    #[test]
    fn test_messages_are_localized() {
        let invalid = [InvalidField::Name, InvalidField::BirthYear];

        let en = error_messages(&invalid, Locale::En);
        assert_eq!(en["name"], "Name is required");
        assert_eq!(en["birthYear"], "Please enter a valid date of birth");

        let ko = error_messages(&invalid, Locale::Ko);
        assert_eq!(ko["name"], "이름을 입력해주세요");
        assert_eq!(ko["birthYear"], "올바른 생년월일을 입력해주세요");
    }
}
