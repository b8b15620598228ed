//! # pluralc kernel
//!
//! Compiles CLDR cardinal plural rules into gettext `Plural-Forms` selector
//! formulas, and proves every formula against the CLDR integer samples.
//!
//! The kernel is pure: it never touches the filesystem and holds no state
//! beyond a few read-only tables built on first use. Languages are compiled
//! independently of each other.
//!
//! ## Pipeline
//!
//! ```text
//! RawRule            ← "i = 1 and v = 0 @integer 1", split into rule + samples
//!     │
//! Atom               ← VAR [% MOD] (= | !=) VALUESET → constant or comparison
//!     │
//! Predicate          ← AND-groups folded into an OR, constants short-circuited
//!     │
//! CategoryEntry      ← per category, canonical order, unreachable ones dropped
//!     │
//! SelectorFormula    ← 0 | ¬P | P₀ ? 0 : (P₁ ? 1 : …)
//!     │
//! CompiledRuleSet    ← validated against every @integer sample
//! ```

pub mod atom;
pub mod category;
pub mod combine;
pub mod error;
pub mod expr;
pub mod negate;
pub mod reduce;
pub mod resolve;
pub mod rule;
pub mod ruleset;
pub mod sample;
pub mod selector;

pub use atom::{Atom, compile_atom};
pub use category::PluralCategory;
pub use combine::{Predicate, compile_rule};
pub use error::{ErrorKind, PluralError, RuleFault};
pub use expr::{CmpOp, Expr, Operand};
pub use resolve::CategoryEntry;
pub use rule::RawRule;
pub use ruleset::{CompiledRuleSet, compile_entries, compile_rule_set};
pub use selector::SelectorFormula;
