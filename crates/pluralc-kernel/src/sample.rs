//! Sample validation against the CLDR `@integer` example lists.
//!
//! An example list is a comma list of integers and inclusive ranges `A~B`,
//! optionally ending with an ellipsis. The ellipsis only marks the list as
//! non-exhaustive; it is never read as an open range.

use crate::category::PluralCategory;
use crate::error::PluralError;
use crate::selector::SelectorFormula;
use regex::Regex;
use std::sync::OnceLock;

/// Upper bound on interior samples drawn from one range.
pub const RANGE_SAMPLES: u64 = 100;

/// The sample numbers of one example list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleSet {
    pub numbers: Vec<u64>,
    /// Tokens in compact notation (`1c6`), which carry a non-zero exponent.
    pub skipped: Vec<String>,
}

fn compact_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+(?:\.\d+)?[ce]\d+$").expect("compact regex must compile"))
}

fn safe_formula_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[0-9n %!=<>&|()?:]+$").expect("safe formula regex must compile")
    })
}

/// Expand an example list into sample numbers.
pub fn expand_samples(text: &str) -> Result<SampleSet, String> {
    let trimmed = text
        .trim()
        .trim_end_matches(['…', '.'])
        .trim_end_matches([',', ' ']);

    let mut set = SampleSet::default();
    for token in trimmed.split(',').map(str::trim) {
        if compact_re().is_match(token) {
            set.skipped.push(token.to_string());
            continue;
        }
        match token.split_once('~') {
            Some((from, to)) => {
                let (from, to) = match (parse_int(from), parse_int(to)) {
                    (Some(from), Some(to)) if from <= to => (from, to),
                    _ => return Err(format!("unhandled sample range '{token}'")),
                };
                let step = ((to - from) / RANGE_SAMPLES).max(1);
                set.numbers.extend((from..to).step_by(step as usize));
                set.numbers.push(to);
            }
            None => match parse_int(token) {
                Some(number) => set.numbers.push(number),
                None => return Err(format!("unhandled sample '{token}'")),
            },
        }
    }

    if set.numbers.is_empty() && set.skipped.is_empty() {
        return Err("no sample numbers".to_string());
    }
    Ok(set)
}

fn parse_int(text: &str) -> Option<u64> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Check that every sample of `category` selects that category.
pub fn validate_samples(
    language: &str,
    formula: &SelectorFormula,
    categories: &[PluralCategory],
    category: PluralCategory,
    text: &str,
) -> Result<(), PluralError> {
    let samples = expand_samples(text).map_err(|detail| PluralError::Samples {
        language: language.to_string(),
        category,
        text: text.to_string(),
        detail,
    })?;
    if !samples.skipped.is_empty() {
        tracing::debug!(
            language,
            %category,
            skipped = ?samples.skipped,
            "skipping compact-notation samples"
        );
    }

    for &sample in &samples.numbers {
        let index = formula.eval(sample);
        let actual = categories.get(index).copied();
        if actual != Some(category) {
            return Err(PluralError::Validation {
                language: language.to_string(),
                formula: formula.to_string(),
                sample,
                expected: category,
                actual: match actual {
                    Some(actual) => format!("'{actual}' ({index})"),
                    None => format!("an out-of-range case index ({index})"),
                },
            });
        }
    }
    Ok(())
}

/// Reject rendered formulas containing anything but arithmetic, relational,
/// logical and grouping characters.
pub fn check_formula_text(language: &str, formula: &SelectorFormula) -> Result<(), PluralError> {
    check_rendered_text(language, &formula.to_string())
}

fn check_rendered_text(language: &str, rendered: &str) -> Result<(), PluralError> {
    if safe_formula_re().is_match(rendered) {
        Ok(())
    } else {
        Err(PluralError::UnsafeFormula {
            language: language.to_string(),
            formula: rendered.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::CmpOp::*;
    use crate::expr::build::n;

    #[test]
    fn plain_lists_and_ellipsis() {
        let set = expand_samples("0, 2~4, 100, 1000, …").unwrap();
        assert_eq!(set.numbers, vec![0, 2, 3, 4, 100, 1000]);
        assert!(set.skipped.is_empty());
        assert_eq!(expand_samples("1").unwrap().numbers, vec![1]);
    }

    #[test]
    fn wide_ranges_are_sampled_sparsely() {
        let set = expand_samples("1000~2000").unwrap();
        assert_eq!(set.numbers.first(), Some(&1000));
        assert_eq!(set.numbers.last(), Some(&2000));
        assert_eq!(set.numbers.len(), 101);
        assert_eq!(set.numbers[1], 1010);

        let set = expand_samples("0~1000000").unwrap();
        assert!(set.numbers.len() <= 102);
        assert_eq!(set.numbers.last(), Some(&1000000));
    }

    #[test]
    fn compact_tokens_are_skipped() {
        let set = expand_samples("1000000, 1c6, 2c6, 3e6, …").unwrap();
        assert_eq!(set.numbers, vec![1000000]);
        assert_eq!(set.skipped, vec!["1c6", "2c6", "3e6"]);
    }

    #[test]
    fn malformed_lists_are_rejected() {
        assert!(expand_samples("").is_err());
        assert!(expand_samples("…").is_err());
        assert!(expand_samples("1, x").is_err());
        assert!(expand_samples("5~2").is_err());
        assert!(expand_samples("1.5").is_err());
    }

    #[test]
    fn matching_samples_validate() {
        let formula = SelectorFormula::Binary(n(Ne, 1));
        let categories = [PluralCategory::One, PluralCategory::Other];
        validate_samples("en", &formula, &categories, PluralCategory::One, "1").unwrap();
        validate_samples(
            "en",
            &formula,
            &categories,
            PluralCategory::Other,
            "0, 2~16, 100, 1000, 10000, 100000, 1000000, …",
        )
        .unwrap();
    }

    #[test]
    fn mismatching_sample_names_everything() {
        let formula = SelectorFormula::Binary(n(Ne, 1));
        let categories = [PluralCategory::One, PluralCategory::Other];
        let error = validate_samples("en", &formula, &categories, PluralCategory::One, "1, 2")
            .unwrap_err();
        assert_eq!(
            error,
            PluralError::Validation {
                language: "en".to_string(),
                formula: "n != 1".to_string(),
                sample: 2,
                expected: PluralCategory::One,
                actual: "'other' (1)".to_string(),
            }
        );
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let formula = SelectorFormula::Binary(n(Ne, 1));
        let error = validate_samples("xx", &formula, &[PluralCategory::Other], PluralCategory::Other, "2")
            .unwrap_err();
        assert!(error.to_string().contains("out-of-range case index (1)"));
    }

    #[test]
    fn rendered_formulas_are_safe() {
        check_formula_text("en", &SelectorFormula::Binary(n(Ne, 1))).unwrap();
        check_formula_text("en", &SelectorFormula::Constant).unwrap();
    }

    #[test]
    fn foreign_characters_are_rejected() {
        for rendered in ["n; exit(1)", "n != $x", "n != 1\n", ""] {
            let error = check_rendered_text("xx", rendered).unwrap_err();
            assert_eq!(
                error,
                PluralError::UnsafeFormula {
                    language: "xx".to_string(),
                    formula: rendered.to_string(),
                },
                "{rendered:?}"
            );
        }
        check_rendered_text("xx", "(n % 10 == 1) ? 0 : ((n >= 2 && n <= 4) ? 1 : 2)").unwrap();
    }
}
