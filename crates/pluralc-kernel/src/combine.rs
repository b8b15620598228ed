//! Conjunction/disjunction combinator.
//!
//! A CLDR rule is an OR of AND-groups of atoms, without parentheses:
//!
//! ```text
//! rule  := group ( " or " group )*
//! group := atom ( " and " atom )*
//! ```
//!
//! Groups short-circuit on constant atoms; the rule as a whole must be
//! satisfiable by some integer without being satisfied by all of them.

use crate::atom::Atom;
use crate::error::RuleFault;
use crate::expr::Expr;
use crate::reduce::reduce;

/// The compiled form of a rule, a group or an atom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Holds for every integer.
    True,
    /// Holds for no integer.
    False,
    Expr(Expr),
}

/// Fold compiled atoms into one AND-group.
pub fn conjunction(atoms: impl IntoIterator<Item = Predicate>) -> Predicate {
    let mut parts = Vec::new();
    for atom in atoms {
        match atom {
            Predicate::False => return Predicate::False,
            Predicate::True => {}
            Predicate::Expr(expr) => parts.push(expr),
        }
    }
    if parts.is_empty() {
        Predicate::True
    } else {
        Predicate::Expr(reduce(Expr::and(parts)))
    }
}

/// Fold compiled AND-groups into the rule predicate.
pub fn disjunction(groups: impl IntoIterator<Item = Predicate>) -> Result<Predicate, RuleFault> {
    let mut parts = Vec::new();
    for group in groups {
        match group {
            Predicate::True => return Err(RuleFault::AlwaysTrue),
            Predicate::False => {}
            Predicate::Expr(expr) => parts.push(expr),
        }
    }
    if parts.is_empty() {
        Ok(Predicate::False)
    } else {
        Ok(Predicate::Expr(Expr::or(parts)))
    }
}

/// Compile a whole rule text.
///
/// Every atom is parsed before any folding, so a malformed atom is reported
/// even when an earlier atom already decides its group.
pub fn compile_rule(rule: &str) -> Result<Predicate, RuleFault> {
    if rule.contains(['(', ')']) {
        return Err(RuleFault::Parenthesized);
    }
    let normalized = rule.split_whitespace().collect::<Vec<_>>().join(" ");

    let groups = normalized
        .split(" or ")
        .map(|group| {
            group
                .split(" and ")
                .map(Atom::parse)
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    disjunction(
        groups
            .iter()
            .map(|atoms| conjunction(atoms.iter().map(Atom::compile))),
    )
}
