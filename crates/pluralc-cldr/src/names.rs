//! English display names for CLDR locale ids.
//!
//! A locale listed in the language table is named directly (`pt-PT` is
//! "European Portuguese"). Any other id is parsed as
//! `language[-Script][-TERRITORY]`; the script is ignored and the name is
//! `Language (Territory)`.
//!
//! A few codes with plural rules have no entry in the English language table.
//! The macro-languages are named by hand; obsolete aliases report the code
//! that replaced them.

use crate::data::{CldrData, CldrError};
use crate::locale::{LocaleId, normalize_locale};

/// The result of naming one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayName {
    Named(String),
    /// An obsolete alias of `by` (normalized id); `name` names `by`.
    Superseded { by: String, name: String },
}

fn fallback_name(language: &str) -> Option<&'static str> {
    match language {
        "bh" => Some("Bihari"),
        "guw" => Some("Gun"),
        "nah" => Some("Nahuatl"),
        "smi" => Some("Sami"),
        _ => None,
    }
}

fn superseded_by(id: &str) -> Option<&'static str> {
    match id {
        "in" => Some("id"),
        "iw" => Some("he"),
        "ji" => Some("yi"),
        "jw" => Some("jv"),
        "mo" => Some("ro-MD"),
        _ => None,
    }
}

/// Name `locale` in English.
pub fn display_name(data: &CldrData, locale: &str) -> Result<DisplayName, CldrError> {
    if let Some(name) = data.languages.get(locale) {
        return Ok(DisplayName::Named(name.clone()));
    }

    let id = LocaleId::parse(locale).ok_or_else(|| CldrError::UnknownLocale(locale.to_string()))?;
    let base_id = id.base_id();
    if let Some(name) = data.languages.get(&base_id) {
        return Ok(DisplayName::Named(name.clone()));
    }

    if let Some(language_name) = data.languages.get(&id.language) {
        let Some(territory) = &id.territory else {
            return Ok(DisplayName::Named(language_name.clone()));
        };
        let territory_name =
            data.territories
                .get(territory)
                .ok_or_else(|| CldrError::UnknownTerritory {
                    locale: locale.to_string(),
                    territory: territory.clone(),
                })?;
        return Ok(DisplayName::Named(format!("{language_name} ({territory_name})")));
    }

    if let Some(by) = superseded_by(&base_id) {
        return match display_name(data, by) {
            Ok(DisplayName::Named(name)) => Ok(DisplayName::Superseded {
                by: normalize_locale(by),
                name,
            }),
            _ => Err(CldrError::UnknownLanguage(locale.to_string())),
        };
    }

    fallback_name(&base_id)
        .map(|name| DisplayName::Named(name.to_string()))
        .ok_or_else(|| CldrError::UnknownLanguage(locale.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> CldrData {
        CldrData {
            languages: [
                ("he", "Hebrew"),
                ("pt", "Portuguese"),
                ("pt-PT", "European Portuguese"),
                ("ro", "Romanian"),
                ("sr", "Serbian"),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
            territories: [
                ("BA", "Bosnia & Herzegovina"),
                ("BR", "Brazil"),
                ("MD", "Moldova"),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
            ..CldrData::default()
        }
    }

    fn named(text: &str) -> DisplayName {
        DisplayName::Named(text.to_string())
    }

    #[test]
    fn exact_match_wins() {
        assert_eq!(display_name(&data(), "pt").unwrap(), named("Portuguese"));
        assert_eq!(
            display_name(&data(), "pt-PT").unwrap(),
            named("European Portuguese")
        );
        assert_eq!(
            display_name(&data(), "pt_PT").unwrap(),
            named("European Portuguese")
        );
    }

    #[test]
    fn territory_is_appended() {
        assert_eq!(
            display_name(&data(), "pt-BR").unwrap(),
            named("Portuguese (Brazil)")
        );
        assert_eq!(
            display_name(&data(), "ro_MD").unwrap(),
            named("Romanian (Moldova)")
        );
    }

    #[test]
    fn script_subtag_is_ignored() {
        assert_eq!(
            display_name(&data(), "sr-Latn-BA").unwrap(),
            named("Serbian (Bosnia & Herzegovina)")
        );
        assert_eq!(display_name(&data(), "sr_Cyrl").unwrap(), named("Serbian"));
    }

    #[test]
    fn hand_named_macro_languages() {
        assert_eq!(display_name(&data(), "bh").unwrap(), named("Bihari"));
        assert_eq!(display_name(&data(), "guw").unwrap(), named("Gun"));
        assert_eq!(display_name(&data(), "nah").unwrap(), named("Nahuatl"));
        assert_eq!(display_name(&data(), "smi").unwrap(), named("Sami"));
    }

    #[test]
    fn obsolete_aliases_name_their_replacement() {
        assert_eq!(
            display_name(&data(), "iw").unwrap(),
            DisplayName::Superseded {
                by: "he".to_string(),
                name: "Hebrew".to_string(),
            }
        );
        assert_eq!(
            display_name(&data(), "mo").unwrap(),
            DisplayName::Superseded {
                by: "ro_MD".to_string(),
                name: "Romanian (Moldova)".to_string(),
            }
        );
        // Indonesian is not in the table, so its old code cannot be named either.
        assert!(matches!(
            display_name(&data(), "in"),
            Err(CldrError::UnknownLanguage(code)) if code == "in"
        ));
    }

    #[test]
    fn unknown_codes_are_errors() {
        assert!(matches!(
            display_name(&data(), "xx"),
            Err(CldrError::UnknownLanguage(code)) if code == "xx"
        ));
        assert!(matches!(
            display_name(&data(), "pt-ZZ"),
            Err(CldrError::UnknownTerritory { territory, .. }) if territory == "ZZ"
        ));
        assert!(matches!(
            display_name(&data(), "Portuguese"),
            Err(CldrError::UnknownLocale(_))
        ));
    }
}
