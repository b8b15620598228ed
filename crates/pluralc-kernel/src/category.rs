//! Plural categories and their canonical order.
//!
//! CLDR defines six cardinal categories. Every language uses a subset of
//! them that always includes `other`, and the gettext case index of a
//! category is its position in that subset once ordered canonically:
//!
//! ```text
//! zero < one < two < few < many < other
//! ```

/// One CLDR cardinal plural category.
///
/// The derived `Ord` follows the canonical order, so sorting a list of
/// categories yields the order in which gettext case indices are assigned.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    /// The mandatory catch-all. Its rule text is always empty.
    Other,
}

impl PluralCategory {
    /// All categories in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Few,
        Self::Many,
        Self::Other,
    ];

    /// The catch-all category every language must declare.
    pub const CATCH_ALL: Self = Self::Other;

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }

    pub fn is_catch_all(self) -> bool {
        self == Self::CATCH_ALL
    }
}

impl std::fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PluralCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("unknown plural category: {s}"))
    }
}

/// Returns true if `categories` is a duplicate-free, canonically ordered
/// list ending with the catch-all.
pub fn is_canonical_list(categories: &[PluralCategory]) -> bool {
    categories.windows(2).all(|pair| pair[0] < pair[1])
        && categories.last() == Some(&PluralCategory::CATCH_ALL)
}
