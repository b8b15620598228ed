//! The per-language compilation pipeline.
//!
//! ```text
//! raw entries ─extract→ RawRule[] ─check/sort→ resolve → assemble → validate
//! ```
//!
//! Each stage is a pure function of the previous one; a failure anywhere
//! returns the error and nothing else.

use crate::category::{PluralCategory, is_canonical_list};
use crate::error::PluralError;
use crate::resolve::resolve_categories;
use crate::rule::RawRule;
use crate::sample::{check_formula_text, validate_samples};
use crate::selector::SelectorFormula;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::BTreeMap;

/// The validated gettext plural definition of one language.
///
/// Serializes with the derived `plurals` count (`nplurals` in a gettext
/// header) next to the stored fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRuleSet {
    pub language: String,
    /// Surviving categories in canonical order; the last is the catch-all.
    pub categories: Vec<PluralCategory>,
    pub formula: SelectorFormula,
    /// The `@integer` example list of every surviving category that has one.
    pub examples: BTreeMap<PluralCategory, String>,
}

impl CompiledRuleSet {
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// The category selected for `n`.
    pub fn category_for(&self, n: u64) -> Option<PluralCategory> {
        self.categories.get(self.formula.eval(n)).copied()
    }
}

impl Serialize for CompiledRuleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CompiledRuleSet", 5)?;
        state.serialize_field("language", &self.language)?;
        state.serialize_field("plurals", &self.category_count())?;
        state.serialize_field("categories", &self.categories)?;
        state.serialize_field("formula", &self.formula)?;
        state.serialize_field("examples", &self.examples)?;
        state.end()
    }
}

/// Compile the published entries of one language.
///
/// `entries` pairs CLDR keys (`pluralRule-count-one` or bare `one`) with
/// their raw rule strings.
pub fn compile_entries<K, V>(
    language: &str,
    entries: impl IntoIterator<Item = (K, V)>,
) -> Result<CompiledRuleSet, PluralError>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let rules = entries
        .into_iter()
        .map(|(key, raw)| RawRule::extract(language, key.as_ref(), raw.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    compile_rule_set(language, rules)
}

/// Compile the raw rules of one language into a validated rule set.
pub fn compile_rule_set(
    language: &str,
    mut rules: Vec<RawRule>,
) -> Result<CompiledRuleSet, PluralError> {
    rules.sort_by_key(|raw| raw.category);
    check_structure(language, &rules)?;

    let entries = resolve_categories(language, &rules)?;
    let predicates: Vec<_> = entries.iter().map(|entry| entry.predicate.clone()).collect();
    let mut categories: Vec<_> = entries.iter().map(|entry| entry.category).collect();
    categories.push(PluralCategory::CATCH_ALL);

    if rules.len() > 1 && categories.len() < 2 {
        return Err(PluralError::structural(
            language,
            "unhandled excessive simplification: every category but the catch-all was dropped",
        ));
    }

    let formula = SelectorFormula::assemble(&predicates).map_err(|fault| {
        let category = categories[0];
        let rule = rules
            .iter()
            .find(|raw| raw.category == category)
            .map_or("", |raw| raw.rule.as_str());
        fault.in_rule(language, category, rule)
    })?;
    debug_assert_eq!(formula.category_count(), categories.len());
    debug_assert!(is_canonical_list(&categories));

    check_formula_text(language, &formula)?;
    let examples: BTreeMap<_, _> = rules
        .iter()
        .filter_map(|raw| Some((raw.category, raw.samples.clone()?)))
        .collect();
    for (&category, text) in &examples {
        validate_samples(language, &formula, &categories, category, text)?;
    }

    tracing::debug!(
        language,
        plurals = categories.len(),
        formula = %formula,
        "compiled plural rules"
    );
    Ok(CompiledRuleSet {
        language: language.to_string(),
        categories,
        formula,
        examples,
    })
}

fn check_structure(language: &str, sorted: &[RawRule]) -> Result<(), PluralError> {
    if let Some(pair) = sorted
        .windows(2)
        .find(|pair| pair[0].category == pair[1].category)
    {
        return Err(PluralError::structural(
            language,
            format!("duplicated case: {}", pair[0].category),
        ));
    }
    match sorted.last() {
        Some(last) if last.category.is_catch_all() => {
            if last.rule.trim().is_empty() {
                Ok(())
            } else {
                Err(PluralError::structural(
                    language,
                    format!(
                        "the '{}' case should not have any rule: {}",
                        last.category, last.rule
                    ),
                ))
            }
        }
        _ => Err(PluralError::structural(
            language,
            format!("missing case: {}", PluralCategory::CATCH_ALL),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn single_category_is_constant() {
        let set = compile_entries(
            "ja",
            [("pluralRule-count-other", " @integer 0~15, 100, 1000, 10000, 100000, 1000000, …")],
        )
        .unwrap();
        assert_eq!(set.categories, vec![PluralCategory::Other]);
        assert_eq!(set.formula.to_string(), "0");
        assert_eq!(set.category_count(), 1);
    }

    #[test]
    fn entries_are_sorted_canonically() {
        let set = compile_entries(
            "xx",
            [
                ("other", "@integer 0, 3~10"),
                ("two", "n = 2 @integer 2"),
                ("one", "n = 1 @integer 1"),
            ],
        )
        .unwrap();
        assert_eq!(
            set.categories,
            vec![PluralCategory::One, PluralCategory::Two, PluralCategory::Other]
        );
        assert_eq!(set.formula.to_string(), "(n == 1) ? 0 : ((n == 2) ? 1 : 2)");
        assert_eq!(set.category_for(2), Some(PluralCategory::Two));
    }

    #[test]
    fn structural_errors() {
        let duplicated = compile_rule_set(
            "xx",
            vec![
                RawRule::new(PluralCategory::One, "n = 1", None),
                RawRule::new(PluralCategory::One, "n = 2", None),
                RawRule::new(PluralCategory::Other, "", None),
            ],
        )
        .unwrap_err();
        assert_eq!(
            duplicated.to_string(),
            "invalid rule set for 'xx': duplicated case: one"
        );

        let missing =
            compile_rule_set("xx", vec![RawRule::new(PluralCategory::One, "n = 1", None)])
                .unwrap_err();
        assert_eq!(
            missing.to_string(),
            "invalid rule set for 'xx': missing case: other"
        );

        let non_empty =
            compile_rule_set("xx", vec![RawRule::new(PluralCategory::Other, "n = 1", None)])
                .unwrap_err();
        assert_eq!(non_empty.kind(), ErrorKind::Structural);

        let empty = compile_rule_set("xx", Vec::new()).unwrap_err();
        assert_eq!(empty.kind(), ErrorKind::Structural);
    }

    #[test]
    fn every_category_dropped_is_structural() {
        let error = compile_entries("xx", [("one", "v != 0"), ("other", "@integer 0~10")])
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Structural);
    }

    #[test]
    fn negation_error_names_the_category() {
        let error = compile_entries(
            "xx",
            [
                ("one", "n % 10 = 1 and n % 100 != 11 or n = 5"),
                ("other", ""),
            ],
        )
        .unwrap_err();
        assert!(matches!(
            error,
            PluralError::Negation {
                category: PluralCategory::One,
                ..
            }
        ));
    }

    #[test]
    fn sample_mismatch_fails_validation() {
        let error = compile_entries("xx", [("one", "n = 1 @integer 1, 21"), ("other", "")])
            .unwrap_err();
        assert_eq!(
            error,
            PluralError::Validation {
                language: "xx".to_string(),
                formula: "n != 1".to_string(),
                sample: 21,
                expected: PluralCategory::One,
                actual: "'other' (1)".to_string(),
            }
        );
    }

    #[test]
    fn serializes_for_consumers() {
        let set = compile_entries(
            "en",
            [("one", "i = 1 and v = 0 @integer 1"), ("other", "@integer 0, 2~16")],
        )
        .unwrap();
        assert_eq!(
            serde_json::to_value(&set).unwrap(),
            serde_json::json!({
                "language": "en",
                "plurals": 2,
                "categories": ["one", "other"],
                "formula": "n != 1",
                "examples": {"one": "1", "other": "0, 2~16"},
            })
        );
    }
}
