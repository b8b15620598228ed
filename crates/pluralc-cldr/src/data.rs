//! Loading the CLDR JSON distribution.
//!
//! Only three documents are read, relative to the CLDR root:
//!
//! ```text
//! main/en-US/languages.json     main.en-US.localeDisplayNames.languages
//! main/en-US/territories.json   main.en-US.localeDisplayNames.territories
//! supplemental/plurals.json     supplemental.plurals-type-cardinal
//! ```
//!
//! The `root` pseudo-locale is dropped from the language and plural tables.

use crate::locale::LocaleId;
use pluralc_kernel::PluralError;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const LANGUAGES_PATH: &str = "main/en-US/languages.json";
pub const TERRITORIES_PATH: &str = "main/en-US/territories.json";
pub const PLURALS_PATH: &str = "supplemental/plurals.json";

const LANGUAGES_FIELDS: [&str; 4] = ["main", "en-US", "localeDisplayNames", "languages"];
const TERRITORIES_FIELDS: [&str; 4] = ["main", "en-US", "localeDisplayNames", "territories"];
const PLURALS_FIELDS: [&str; 2] = ["supplemental", "plurals-type-cardinal"];
const ROOT_LOCALE: &str = "root";

#[derive(Debug, thiserror::Error)]
pub enum CldrError {
    #[error("I/O error at {path}: {message}")]
    Io { path: String, message: String },

    #[error("invalid JSON at {path}: {message}")]
    InvalidJson { path: String, message: String },

    #[error("{path}: missing field `{field}`")]
    MissingField { path: String, field: String },

    #[error("{path}: invalid field `{field}` ({message})")]
    InvalidField {
        path: String,
        field: String,
        message: String,
    },

    #[error("unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("unknown territory code '{territory}' in locale {locale}")]
    UnknownTerritory { locale: String, territory: String },

    #[error("unknown locale code: {0}")]
    UnknownLocale(String),

    #[error("no plural rules for locale code: {0}")]
    NoRules(String),

    #[error(transparent)]
    Plural(#[from] PluralError),
}

/// The CLDR tables the conversion reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CldrData {
    /// English language names by CLDR id (`pt`, `pt-PT`, ...).
    pub languages: BTreeMap<String, String>,
    /// English territory names by code (`BR`, `419`, ...).
    pub territories: BTreeMap<String, String>,
    /// Raw cardinal rule entries by locale id, keyed by `pluralRule-count-*`.
    pub cardinals: BTreeMap<String, BTreeMap<String, String>>,
}

impl CldrData {
    /// Read the CLDR documents under `root`.
    pub fn load(root: impl AsRef<Path>) -> Result<Self, CldrError> {
        let root = root.as_ref();
        let languages = read_json(&root.join(LANGUAGES_PATH))?;
        let territories = read_json(&root.join(TERRITORIES_PATH))?;
        let plurals = read_json(&root.join(PLURALS_PATH))?;
        let data = Self::from_values_with_sources(
            &languages,
            &territories,
            &plurals,
            [
                root.join(LANGUAGES_PATH).display().to_string(),
                root.join(TERRITORIES_PATH).display().to_string(),
                root.join(PLURALS_PATH).display().to_string(),
            ],
        )?;
        tracing::info!(
            root = %root.display(),
            languages = data.languages.len(),
            territories = data.territories.len(),
            locales = data.cardinals.len(),
            "loaded CLDR data"
        );
        Ok(data)
    }

    /// Cardinal entries for `id` with the CLDR id they were found under.
    ///
    /// An exact id wins; otherwise the script subtag is dropped and
    /// `language-TERRITORY` is tried before `language`.
    pub fn rules_for(&self, id: &str) -> Option<(&str, &BTreeMap<String, String>)> {
        let found = match self.cardinals.get_key_value(id) {
            Some(found) => Some(found),
            None => LocaleId::parse(id)?
                .lookup_chain()
                .iter()
                .find_map(|candidate| self.cardinals.get_key_value(candidate)),
        };
        found.map(|(locale, rules)| (locale.as_str(), rules))
    }

    /// Build the tables from already-parsed documents.
    pub fn from_values(
        languages: &Value,
        territories: &Value,
        plurals: &Value,
    ) -> Result<Self, CldrError> {
        Self::from_values_with_sources(
            languages,
            territories,
            plurals,
            [
                "<in-memory:languages>".to_string(),
                "<in-memory:territories>".to_string(),
                "<in-memory:plurals>".to_string(),
            ],
        )
    }

    fn from_values_with_sources(
        languages: &Value,
        territories: &Value,
        plurals: &Value,
        [languages_path, territories_path, plurals_path]: [String; 3],
    ) -> Result<Self, CldrError> {
        let mut language_names =
            string_table(nested(languages, &LANGUAGES_FIELDS, &languages_path)?, &languages_path)?;
        language_names.remove(ROOT_LOCALE);
        let territory_names = string_table(
            nested(territories, &TERRITORIES_FIELDS, &territories_path)?,
            &territories_path,
        )?;

        let mut cardinals = BTreeMap::new();
        for (locale, rules) in nested(plurals, &PLURALS_FIELDS, &plurals_path)? {
            if locale == ROOT_LOCALE {
                continue;
            }
            let rules = rules.as_object().ok_or_else(|| CldrError::InvalidField {
                path: plurals_path.clone(),
                field: locale.clone(),
                message: "expected object".to_string(),
            })?;
            cardinals.insert(locale.clone(), string_table(rules, &plurals_path)?);
        }

        Ok(Self {
            languages: language_names,
            territories: territory_names,
            cardinals,
        })
    }
}

fn read_json(path: &Path) -> Result<Value, CldrError> {
    let text = fs::read_to_string(path).map_err(|error| CldrError::Io {
        path: path.display().to_string(),
        message: error.to_string(),
    })?;
    serde_json::from_str(&text).map_err(|error| CldrError::InvalidJson {
        path: path.display().to_string(),
        message: error.to_string(),
    })
}

fn nested<'a>(
    value: &'a Value,
    fields: &[&str],
    path: &str,
) -> Result<&'a Map<String, Value>, CldrError> {
    let mut current = value;
    for (depth, field) in fields.iter().enumerate() {
        current = current
            .get(field)
            .ok_or_else(|| CldrError::MissingField {
                path: path.to_string(),
                field: fields[..=depth].join("."),
            })?;
    }
    current.as_object().ok_or_else(|| CldrError::InvalidField {
        path: path.to_string(),
        field: fields.join("."),
        message: "expected object".to_string(),
    })
}

fn string_table(
    object: &Map<String, Value>,
    path: &str,
) -> Result<BTreeMap<String, String>, CldrError> {
    object
        .iter()
        .map(|(key, value)| {
            let Some(text) = value.as_str() else {
                return Err(CldrError::InvalidField {
                    path: path.to_string(),
                    field: key.clone(),
                    message: "expected string".to_string(),
                });
            };
            Ok((key.clone(), text.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn languages() -> Value {
        json!({"main": {"en-US": {"localeDisplayNames": {"languages": {
            "root": "Root",
            "en": "English",
            "pt-PT": "European Portuguese"
        }}}}})
    }

    fn territories() -> Value {
        json!({"main": {"en-US": {"localeDisplayNames": {"territories": {"BR": "Brazil"}}}}})
    }

    #[test]
    fn root_locale_is_dropped() {
        let plurals = json!({"supplemental": {"plurals-type-cardinal": {
            "root": {"pluralRule-count-other": ""},
            "en": {"pluralRule-count-one": "i = 1 and v = 0", "pluralRule-count-other": ""}
        }}});
        let data = CldrData::from_values(&languages(), &territories(), &plurals).unwrap();
        assert_eq!(data.languages.len(), 2);
        assert!(!data.languages.contains_key("root"));
        assert_eq!(data.cardinals.keys().collect::<Vec<_>>(), vec!["en"]);
        assert_eq!(data.cardinals["en"]["pluralRule-count-one"], "i = 1 and v = 0");
        assert_eq!(data.territories["BR"], "Brazil");
    }

    #[test]
    fn missing_fields_name_the_path() {
        let error = CldrData::from_values(&languages(), &territories(), &json!({"supplemental": {}}))
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "<in-memory:plurals>: missing field `supplemental.plurals-type-cardinal`"
        );
    }

    #[test]
    fn non_string_rules_are_rejected() {
        let plurals = json!({"supplemental": {"plurals-type-cardinal": {
            "en": {"pluralRule-count-other": 3}
        }}});
        let error = CldrData::from_values(&languages(), &territories(), &plurals).unwrap_err();
        assert!(matches!(
            error,
            CldrError::InvalidField { ref field, .. } if field == "pluralRule-count-other"
        ));
    }

    #[test]
    fn rules_fall_back_from_territory_to_language() {
        let plurals = json!({"supplemental": {"plurals-type-cardinal": {
            "pt": {"pluralRule-count-one": "i = 0..1", "pluralRule-count-other": ""},
            "pt-PT": {"pluralRule-count-one": "i = 1 and v = 0", "pluralRule-count-other": ""}
        }}});
        let data = CldrData::from_values(&languages(), &territories(), &plurals).unwrap();
        let found = |id| data.rules_for(id).map(|(locale, _)| locale);
        assert_eq!(found("pt-PT"), Some("pt-PT"));
        assert_eq!(found("pt_PT"), Some("pt-PT"));
        assert_eq!(found("pt-Latn-PT"), Some("pt-PT"));
        assert_eq!(found("pt-BR"), Some("pt"));
        assert_eq!(found("pt-Latn"), Some("pt"));
        assert_eq!(found("es-ES"), None);
        assert_eq!(found("not a locale"), None);
        assert_eq!(
            data.rules_for("pt-AO").unwrap().1["pluralRule-count-one"],
            "i = 0..1"
        );
    }

    #[test]
    fn missing_root_directory_is_io() {
        let error = CldrData::load("/nonexistent/pluralc/cldr").unwrap_err();
        assert!(matches!(error, CldrError::Io { .. }));
    }
}
