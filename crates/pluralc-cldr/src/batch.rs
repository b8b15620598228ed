//! Batch conversion of every CLDR locale.
//!
//! Each locale is named and compiled on its own; locales never influence each
//! other. The result is keyed by normalized id (`pt_PT`) in byte order.

use crate::data::{CldrData, CldrError};
use crate::locale::normalize_locale;
use crate::names::{DisplayName, display_name};
use pluralc_kernel::{PluralCategory, compile_entries};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Policy for one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Abort on the first failing locale instead of collecting failures.
    pub fail_fast: bool,
    /// Only convert these locales (either separator accepted); empty means all.
    pub languages: Vec<String>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            fail_fast: true,
            languages: Vec::new(),
        }
    }
}

impl BatchOptions {
    fn selects(&self, normalized: &str) -> bool {
        self.languages.is_empty()
            || self
                .languages
                .iter()
                .any(|wanted| normalize_locale(wanted) == normalized)
    }
}

/// The gettext plural definition of one locale, as published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
    pub name: String,
    pub plurals: usize,
    pub formula: String,
    pub cases: Vec<PluralCategory>,
    pub examples: BTreeMap<PluralCategory, String>,
}

/// A locale that could not be converted.
#[derive(Debug)]
pub struct LanguageFailure {
    pub locale: String,
    pub error: CldrError,
}

#[derive(Debug, Default)]
pub struct Conversion {
    pub languages: BTreeMap<String, LanguageEntry>,
    /// Obsolete alias ids left out of the result, with their replacement.
    pub superseded: BTreeMap<String, String>,
    /// Empty unless the batch ran with `fail_fast` off.
    pub failures: Vec<LanguageFailure>,
}

impl Conversion {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Convert every selected locale of `data`.
pub fn convert_all(data: &CldrData, options: &BatchOptions) -> Result<Conversion, CldrError> {
    let mut conversion = Conversion::default();
    let mut matched = BTreeSet::new();

    for (locale, rules) in &data.cardinals {
        let normalized = normalize_locale(locale);
        if !options.selects(&normalized) {
            continue;
        }
        matched.insert(normalized.clone());

        match convert_one(data, locale, &normalized, rules) {
            Ok(Outcome::Converted(entry)) => {
                conversion.languages.insert(normalized, entry);
            }
            Ok(Outcome::Superseded(by)) => {
                tracing::debug!(
                    locale = %locale,
                    superseded_by = %by,
                    "skipping superseded locale code"
                );
                conversion.superseded.insert(normalized, by);
            }
            Err(error) if options.fail_fast => return Err(error),
            Err(error) => {
                tracing::warn!(locale = %locale, error = %error, "locale failed to convert");
                conversion.failures.push(LanguageFailure {
                    locale: normalized,
                    error,
                });
            }
        }
    }

    if let Some(missing) = options
        .languages
        .iter()
        .find(|wanted| !matched.contains(&normalize_locale(wanted)))
    {
        return Err(CldrError::UnknownLocale(missing.clone()));
    }

    tracing::info!(
        converted = conversion.languages.len(),
        superseded = conversion.superseded.len(),
        failed = conversion.failures.len(),
        "converted CLDR locales"
    );
    Ok(conversion)
}

enum Outcome {
    Converted(LanguageEntry),
    /// Normalized id of the current code.
    Superseded(String),
}

fn convert_one(
    data: &CldrData,
    locale: &str,
    normalized: &str,
    rules: &BTreeMap<String, String>,
) -> Result<Outcome, CldrError> {
    let name = match display_name(data, locale)? {
        DisplayName::Named(name) => name,
        DisplayName::Superseded { by, .. } => return Ok(Outcome::Superseded(by)),
    };
    let compiled = compile_entries(normalized, rules)?;
    Ok(Outcome::Converted(LanguageEntry {
        name,
        plurals: compiled.category_count(),
        formula: compiled.formula.to_string(),
        cases: compiled.categories,
        examples: compiled.examples,
    }))
}
