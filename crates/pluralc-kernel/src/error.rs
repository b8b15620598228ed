//! Error types for plural rule compilation.
//!
//! Compilation stages below the rule-set level work on bare rule text and
//! report a [`RuleFault`]. The rule-set pipeline attaches the language,
//! category and offending text, producing a [`PluralError`]. Every error is
//! fatal for the language being compiled.

use crate::category::PluralCategory;

/// A failure inside one compilation stage, before its language and category
/// are known.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleFault {
    /// Parenthesized subexpressions are outside the supported grammar.
    #[error("parenthesis handling not implemented")]
    Parenthesized,

    /// An atom does not match `VAR [% MOD] (= | !=) VALUESET`.
    #[error("unhandled atom: '{0}'")]
    UnhandledAtom(String),

    /// `% 0` would make the selector undefined.
    #[error("zero modulus in atom: '{0}'")]
    ZeroModulus(String),

    /// A range `A..B` with `A > B`.
    #[error("empty range {from}..{to} in atom: '{atom}'")]
    EmptyRange { atom: String, from: u64, to: u64 },

    /// An OR-group with a member that holds for every integer.
    #[error("always true")]
    AlwaysTrue,

    /// The two-category negation found neither a rewrite nor a table entry.
    #[error("no known negation for: {0}")]
    NoNegation(String),
}

impl RuleFault {
    /// Attach the rule context, classifying the fault into its error kind.
    pub fn in_rule(
        self,
        language: &str,
        category: PluralCategory,
        rule: &str,
    ) -> PluralError {
        match self {
            Self::AlwaysTrue => PluralError::Contradiction {
                language: language.to_string(),
                category,
                rule: rule.to_string(),
                detail: self.to_string(),
            },
            Self::NoNegation(formula) => PluralError::Negation {
                language: language.to_string(),
                category,
                formula,
            },
            Self::Parenthesized
            | Self::UnhandledAtom(_)
            | Self::ZeroModulus(_)
            | Self::EmptyRange { .. } => PluralError::Parse {
                language: language.to_string(),
                category: category.to_string(),
                rule: rule.to_string(),
                detail: self.to_string(),
            },
        }
    }
}

/// A fatal compilation error for one language, with full context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PluralError {
    /// Rule or raw-entry text outside the supported grammar.
    #[error("cannot parse the '{category}' case for '{language}' with the rule '{rule}': {detail}")]
    Parse {
        language: String,
        category: String,
        rule: String,
        detail: String,
    },

    /// A rule that is provably unreachable despite declared samples, or
    /// provably always true.
    #[error("contradiction in the '{category}' case for '{language}' with the rule '{rule}': {detail}")]
    Contradiction {
        language: String,
        category: PluralCategory,
        rule: String,
        detail: String,
    },

    /// The two-category selector could not be negated.
    #[error("no known negation of the '{category}' case for '{language}': {formula}")]
    Negation {
        language: String,
        category: PluralCategory,
        formula: String,
    },

    /// An example list that cannot be expanded into sample numbers.
    #[error("bad samples for the '{category}' case of '{language}' in '{text}': {detail}")]
    Samples {
        language: String,
        category: PluralCategory,
        text: String,
        detail: String,
    },

    /// A sample number selected the wrong case.
    #[error(
        "the formula '{formula}' for '{language}' evaluated for {sample} resulted in {actual} instead of '{expected}'"
    )]
    Validation {
        language: String,
        formula: String,
        sample: u64,
        expected: PluralCategory,
        actual: String,
    },

    /// The rendered formula contains characters a consumer must not see.
    #[error("the formula '{formula}' for '{language}' contains unsafe characters")]
    UnsafeFormula { language: String, formula: String },

    /// Duplicate, unknown or missing categories, or a malformed catch-all.
    #[error("invalid rule set for '{language}': {detail}")]
    Structural { language: String, detail: String },
}

/// The five error kinds a compilation can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Parse,
    Contradiction,
    Negation,
    Validation,
    Structural,
}

impl PluralError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Contradiction { .. } => ErrorKind::Contradiction,
            Self::Negation { .. } => ErrorKind::Negation,
            Self::Samples { .. } | Self::Validation { .. } | Self::UnsafeFormula { .. } => {
                ErrorKind::Validation
            }
            Self::Structural { .. } => ErrorKind::Structural,
        }
    }

    /// The language the error belongs to.
    pub fn language(&self) -> &str {
        match self {
            Self::Parse { language, .. }
            | Self::Contradiction { language, .. }
            | Self::Negation { language, .. }
            | Self::Samples { language, .. }
            | Self::Validation { language, .. }
            | Self::UnsafeFormula { language, .. }
            | Self::Structural { language, .. } => language,
        }
    }

    pub(crate) fn structural(language: &str, detail: impl Into<String>) -> Self {
        Self::Structural {
            language: language.to_string(),
            detail: detail.into(),
        }
    }
}
