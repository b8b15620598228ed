//! Algebraic negation for two-category selectors.
//!
//! A two-category language selects case 0 when its one predicate `P` holds
//! and case 1 otherwise, so its selector is the complement of `P` written
//! out as a comparison tree. Consumers evaluate that text as a number, which
//! rules out wrapping `P` in a logical-not.
//!
//! Supported shapes:
//!
//! 1. A hand-verified table of multi-clause complements, consulted first.
//! 2. A single comparison: the operator is complemented.
//! 3. A junction whose members are comparisons or single-operand junctions
//!    of comparisons (the membership, exclusion and bound idioms the atom
//!    compiler emits): De Morgan at the top, each member complemented.
//!
//! Anything deeper is rejected rather than guessed at.

use crate::error::RuleFault;
use crate::expr::{CmpOp, Expr, Operand};
use crate::reduce::reduce;
use std::sync::OnceLock;

fn complement_table() -> &'static [(Expr, Expr)] {
    static TABLE: OnceLock<Vec<(Expr, Expr)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let n = |op, rhs| Expr::cmp(Operand::N, op, rhs);
        let n10 = |op, rhs| Expr::cmp(Operand::Rem(10), op, rhs);
        vec![
            // i = 1,2,3 or i % 10 != 4,6,9
            (
                Expr::or([
                    n(CmpOp::Eq, 1),
                    n(CmpOp::Eq, 2),
                    n(CmpOp::Eq, 3),
                    Expr::and([n10(CmpOp::Ne, 4), n10(CmpOp::Ne, 6), n10(CmpOp::Ne, 9)]),
                ]),
                Expr::and([
                    n(CmpOp::Ne, 1),
                    n(CmpOp::Ne, 2),
                    n(CmpOp::Ne, 3),
                    Expr::or([n10(CmpOp::Eq, 4), n10(CmpOp::Eq, 6), n10(CmpOp::Eq, 9)]),
                ]),
            ),
            // n = 0..1 or n = 11..99
            (
                Expr::or([
                    n(CmpOp::Eq, 0),
                    n(CmpOp::Eq, 1),
                    Expr::and([n(CmpOp::Ge, 11), n(CmpOp::Le, 99)]),
                ]),
                Expr::and([
                    n(CmpOp::Ge, 2),
                    Expr::or([n(CmpOp::Lt, 11), n(CmpOp::Gt, 99)]),
                ]),
            ),
        ]
    })
}

/// The complement of `expr`, passed through the reduction table.
pub fn negate(expr: &Expr) -> Result<Expr, RuleFault> {
    let complement = match complement_table().iter().find(|(shape, _)| shape == expr) {
        Some((_, complement)) => complement.clone(),
        None => match expr {
            Expr::Cmp { lhs, op, rhs } => Expr::cmp(*lhs, op.complement(), *rhs),
            Expr::And(members) => Expr::or(complement_members(expr, members)?),
            Expr::Or(members) => Expr::and(complement_members(expr, members)?),
        },
    };
    Ok(reduce(complement))
}

fn complement_members(whole: &Expr, members: &[Expr]) -> Result<Vec<Expr>, RuleFault> {
    members
        .iter()
        .map(complement_idiom)
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| RuleFault::NoNegation(whole.to_string()))
}

/// Complement a comparison, or a junction of comparisons over one operand.
fn complement_idiom(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Cmp { lhs, op, rhs } => Some(Expr::cmp(*lhs, op.complement(), *rhs)),
        Expr::And(members) | Expr::Or(members) => {
            if expr.sole_operand().is_none() || !members.iter().all(Expr::is_cmp) {
                return None;
            }
            let flipped = members.iter().filter_map(complement_idiom);
            Some(match expr {
                Expr::And(_) => Expr::or(flipped),
                _ => Expr::and(flipped),
            })
        }
    }
}
