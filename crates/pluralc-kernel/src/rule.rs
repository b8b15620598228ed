//! Raw CLDR rule entries.
//!
//! CLDR publishes each category of a language as one string:
//!
//! ```text
//! "pluralRule-count-one": "i = 1 and v = 0 @integer 1"
//! "pluralRule-count-other": " @integer 0, 2~16, 100, … @decimal 0.0~1.5, …"
//! ```
//!
//! The text before the first `@` marker is the rule; the `@integer` section
//! lists integer samples. `@decimal` samples can never reach gettext and are
//! dropped here.

use crate::category::PluralCategory;
use crate::error::PluralError;
use regex::Regex;
use std::sync::OnceLock;

/// Key prefix used by the CLDR JSON distribution.
pub const CLDR_KEY_PREFIX: &str = "pluralRule-count-";

/// One category's rule text and integer samples, as published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRule {
    pub category: PluralCategory,
    /// Predicate text; empty for the catch-all.
    pub rule: String,
    /// The `@integer` example list, if any.
    pub samples: Option<String>,
}

fn entry_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([^@]*)(?:@integer([^@]*))?(?:@decimal[^@]*)?$")
            .expect("rule entry regex must compile")
    })
}

impl RawRule {
    pub fn new(category: PluralCategory, rule: impl Into<String>, samples: Option<String>) -> Self {
        Self {
            category,
            rule: rule.into(),
            samples,
        }
    }

    /// Split one published entry into rule text and integer samples.
    ///
    /// `key` is either a bare category (`one`) or the prefixed CLDR key
    /// (`pluralRule-count-one`).
    pub fn extract(language: &str, key: &str, raw: &str) -> Result<Self, PluralError> {
        let tag = key.strip_prefix(CLDR_KEY_PREFIX).unwrap_or(key);
        let category: PluralCategory = tag
            .parse()
            .map_err(|e: String| PluralError::structural(language, e))?;

        let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        let caps = entry_re()
            .captures(&normalized)
            .ok_or_else(|| PluralError::Parse {
                language: language.to_string(),
                category: category.to_string(),
                rule: normalized.clone(),
                detail: "bad rule entry".to_string(),
            })?;

        let rule = caps[1].trim().to_string();
        let samples = caps
            .get(2)
            .map(|m| m.as_str().trim().to_string())
            .filter(|samples| !samples.is_empty());

        if category.is_catch_all() && !rule.is_empty() {
            return Err(PluralError::structural(
                language,
                format!("the '{category}' case should not have any rule: {rule}"),
            ));
        }

        Ok(Self {
            category,
            rule,
            samples,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_rule_and_integer_samples() {
        let rule = RawRule::extract(
            "en",
            "pluralRule-count-one",
            "i = 1 and v = 0 @integer 1",
        )
        .unwrap();
        assert_eq!(rule.category, PluralCategory::One);
        assert_eq!(rule.rule, "i = 1 and v = 0");
        assert_eq!(rule.samples.as_deref(), Some("1"));
    }

    #[test]
    fn decimal_section_is_dropped() {
        let rule = RawRule::extract(
            "en",
            "pluralRule-count-other",
            " @integer 0, 2~16, 100, 1000, …   @decimal 0.0~1.5, 10.0, …",
        )
        .unwrap();
        assert_eq!(rule.rule, "");
        assert_eq!(rule.samples.as_deref(), Some("0, 2~16, 100, 1000, …"));

        let rule = RawRule::extract("is", "one", "t = 0 and i % 10 = 1 @decimal 0.1~1.6").unwrap();
        assert_eq!(rule.rule, "t = 0 and i % 10 = 1");
        assert_eq!(rule.samples, None);
    }

    #[test]
    fn bare_keys_are_accepted() {
        let rule = RawRule::extract("xx", "few", "n = 3..4").unwrap();
        assert_eq!(rule.category, PluralCategory::Few);
        assert_eq!(rule.samples, None);
    }

    #[test]
    fn unknown_categories_are_structural() {
        let error = RawRule::extract("xx", "pluralRule-count-several", "n = 2").unwrap_err();
        assert!(matches!(error, PluralError::Structural { .. }));
    }

    #[test]
    fn catch_all_must_be_empty() {
        let error = RawRule::extract("xx", "other", "n = 2 @integer 2").unwrap_err();
        assert_eq!(
            error.to_string(),
            "invalid rule set for 'xx': the 'other' case should not have any rule: n = 2"
        );
    }

    #[test]
    fn misordered_sections_are_parse_errors() {
        let error =
            RawRule::extract("xx", "one", "n = 1 @decimal 1.0 @integer 1").unwrap_err();
        assert!(matches!(error, PluralError::Parse { .. }));
    }
}
