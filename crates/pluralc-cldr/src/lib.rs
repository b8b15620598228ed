//! # pluralc-cldr
//!
//! CLDR layer for the pluralc kernel.
//!
//! This crate provides:
//! - `CldrData`: the three CLDR JSON documents the conversion needs
//! - Locale id parsing and the `language-TERRITORY` → `language` rule lookup
//! - English display names for locale ids
//! - `convert_all`: the batch driver compiling every locale
//!
//! Rendering the result into documents is left to the CLI.
//!
//! ## Data flow
//!
//! ```text
//! cldr/main/en-US/{languages,territories}.json ─┐
//! cldr/supplemental/plurals.json ───────────────┴→ CldrData
//!     │  per locale: display name + pluralc_kernel::compile_entries
//!     ▼
//! Conversion { languages: BTreeMap<id, LanguageEntry>, failures }
//! ```

pub mod batch;
pub mod data;
pub mod locale;
pub mod names;

pub use batch::{BatchOptions, Conversion, LanguageEntry, LanguageFailure, convert_all};
pub use data::{CldrData, CldrError, LANGUAGES_PATH, PLURALS_PATH, TERRITORIES_PATH};
pub use locale::{LocaleId, normalize_locale};
pub use names::{DisplayName, display_name};
