//! CLDR locale ids: `language[-Script][-TERRITORY]`, with trailing variants
//! ignored and either `-` or `_` as separator.

use regex::Regex;
use std::sync::OnceLock;

fn locale_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([a-z]{2,3})(?:[_-]([A-Z][a-z]{3}))?(?:[_-]([A-Z]{2}|[0-9]{3}))?(?:$|[_-])")
            .expect("locale id regex must compile")
    })
}

/// A parsed locale id. The script is kept but never used for lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleId {
    pub language: String,
    pub script: Option<String>,
    pub territory: Option<String>,
}

impl LocaleId {
    pub fn parse(id: &str) -> Option<Self> {
        let caps = locale_id_regex().captures(id)?;
        Some(Self {
            language: caps[1].to_string(),
            script: caps.get(2).map(|m| m.as_str().to_string()),
            territory: caps.get(3).map(|m| m.as_str().to_string()),
        })
    }

    /// `language-TERRITORY`, or the bare language.
    pub fn base_id(&self) -> String {
        match &self.territory {
            Some(territory) => format!("{}-{territory}", self.language),
            None => self.language.clone(),
        }
    }

    /// Ids to try, most specific first.
    pub fn lookup_chain(&self) -> Vec<String> {
        let mut chain = vec![self.base_id()];
        if self.territory.is_some() {
            chain.push(self.language.clone());
        }
        chain
    }
}

/// The id used as output key: `-` separators become `_`.
pub fn normalize_locale(locale: &str) -> String {
    locale.replace('-', "_")
}
