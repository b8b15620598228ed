//! Category formula resolution.
//!
//! Compiles every non-catch-all category of a language, in canonical order.
//! A category that compiles to `False` can never be selected by an integer:
//! CLDR uses such categories for decimals only. It is dropped when it
//! declares no integer samples and is a contradiction when it does.

use crate::category::PluralCategory;
use crate::combine::{Predicate, compile_rule};
use crate::error::{PluralError, RuleFault};
use crate::expr::Expr;
use crate::rule::RawRule;

/// A category that survived resolution, with its compiled predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub category: PluralCategory,
    pub predicate: Expr,
}

/// Compile the non-catch-all categories of `rules`, which must already be in
/// canonical order.
pub fn resolve_categories(
    language: &str,
    rules: &[RawRule],
) -> Result<Vec<CategoryEntry>, PluralError> {
    let mut entries = Vec::new();
    for raw in rules.iter().filter(|raw| !raw.category.is_catch_all()) {
        let predicate = compile_rule(&raw.rule)
            .map_err(|fault| fault.in_rule(language, raw.category, &raw.rule))?;
        match predicate {
            Predicate::Expr(predicate) => entries.push(CategoryEntry {
                category: raw.category,
                predicate,
            }),
            Predicate::False => match &raw.samples {
                None => {
                    tracing::debug!(
                        language,
                        category = %raw.category,
                        rule = %raw.rule,
                        "dropping category unreachable by integers"
                    );
                }
                Some(samples) => {
                    return Err(PluralError::Contradiction {
                        language: language.to_string(),
                        category: raw.category,
                        rule: raw.rule.clone(),
                        detail: format!(
                            "never holds for an integer, but has integer samples: {samples}"
                        ),
                    });
                }
            },
            // Unreachable through `compile_rule`, which rejects tautologies.
            Predicate::True => {
                return Err(RuleFault::AlwaysTrue.in_rule(language, raw.category, &raw.rule));
            }
        }
    }
    Ok(entries)
}
