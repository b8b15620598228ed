//! Selector formula assembly.
//!
//! The selector maps a count `n` to a 0-based case index. Its shape depends
//! on how many categories survive resolution:
//!
//! ```text
//! 1 category   0
//! 2 categories ¬P₀                          (true → 1, false → 0)
//! 3+           (P₀) ? 0 : ((P₁) ? 1 : … : k)
//! ```
//!
//! Conditional chains are fully parenthesized: consumers do not agree on the
//! associativity of `?:` (C nests to the right, PHP before 8 to the left).

use crate::error::RuleFault;
use crate::expr::Expr;
use crate::negate::negate;
use crate::reduce::reduce;
use serde::{Serialize, Serializer};
use std::fmt;

/// The compiled selector of one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorFormula {
    /// Every count selects case 0.
    Constant,
    /// A boolean read as a number: true selects case 1.
    Binary(Expr),
    /// One test per non-final case, tried in order; the last case is the
    /// fallback.
    Chain(Vec<Expr>),
}

impl SelectorFormula {
    /// Build the selector from the surviving non-catch-all predicates, in
    /// canonical order.
    pub fn assemble(predicates: &[Expr]) -> Result<Self, RuleFault> {
        match predicates {
            [] => Ok(Self::Constant),
            [only] => Ok(Self::Binary(negate(only)?)),
            _ => Ok(Self::Chain(
                predicates.iter().cloned().map(reduce).collect(),
            )),
        }
    }

    pub fn category_count(&self) -> usize {
        match self {
            Self::Constant => 1,
            Self::Binary(_) => 2,
            Self::Chain(tests) => tests.len() + 1,
        }
    }

    /// The case index selected for `n`.
    pub fn eval(&self, n: u64) -> usize {
        match self {
            Self::Constant => 0,
            Self::Binary(expr) => usize::from(expr.eval(n)),
            Self::Chain(tests) => tests
                .iter()
                .position(|test| test.eval(n))
                .unwrap_or(tests.len()),
        }
    }
}

impl fmt::Display for SelectorFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant => f.write_str("0"),
            Self::Binary(expr) => write!(f, "{expr}"),
            Self::Chain(tests) => {
                let mut rest = tests.len().to_string();
                for (index, test) in tests.iter().enumerate().skip(1).rev() {
                    rest = format!("({} ? {index} : {rest})", test.to_condition());
                }
                match tests.first() {
                    Some(first) => write!(f, "{} ? 0 : {rest}", first.to_condition()),
                    None => f.write_str(&rest),
                }
            }
        }
    }
}

impl Serialize for SelectorFormula {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
