//! Manual reduction table.
//!
//! A closed list of identities that collapse redundant shapes produced by
//! the atom compiler into shorter equivalents. Entries are keyed on the
//! canonical tree, so formatting never affects a match. Shapes that are not
//! listed pass through unchanged: this is not a general minimizer.

use crate::expr::{CmpOp, Expr, Operand};
use std::sync::OnceLock;

fn reductions() -> &'static [(Expr, Expr)] {
    static TABLE: OnceLock<Vec<(Expr, Expr)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let n = |op, rhs| Expr::cmp(Operand::N, op, rhs);
        vec![
            // n = 0..2 and n != 2
            (
                Expr::and([n(CmpOp::Ge, 0), n(CmpOp::Le, 2), n(CmpOp::Ne, 2)]),
                Expr::or([n(CmpOp::Eq, 0), n(CmpOp::Eq, 1)]),
            ),
            (
                Expr::and([n(CmpOp::Ne, 0), n(CmpOp::Ne, 1)]),
                n(CmpOp::Gt, 1),
            ),
            // i = 0,1 and n != 0
            (
                Expr::and([Expr::or([n(CmpOp::Eq, 0), n(CmpOp::Eq, 1)]), n(CmpOp::Ne, 0)]),
                n(CmpOp::Eq, 1),
            ),
        ]
    })
}

/// Replace `expr` with its listed reduction, if any.
pub fn reduce(expr: Expr) -> Expr {
    reductions()
        .iter()
        .find(|(shape, _)| *shape == expr)
        .map(|(_, reduced)| reduced.clone())
        .unwrap_or(expr)
}
