//! Typed boolean expressions over the gettext variable `n`.
//!
//! An [`Expr`] is the single source of truth for a compiled predicate: it is
//! rendered to C-style text for output and evaluated directly when samples
//! are validated. Nothing re-parses rendered text.
//!
//! Construction keeps trees canonical: [`Expr::and`] and [`Expr::or`] splice
//! nested junctions of the same kind and unwrap single-member junctions, so
//! two predicates that render identically always compare equal.

use std::fmt;

/// The left-hand side of a comparison: `n` or `n % m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    N,
    /// `n % m`, with `m > 0`.
    Rem(u64),
}

impl Operand {
    pub fn value(self, n: u64) -> u64 {
        match self {
            Self::N => n,
            Self::Rem(modulus) => n % modulus,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::N => f.write_str("n"),
            Self::Rem(modulus) => write!(f, "n % {modulus}"),
        }
    }
}

/// Relational operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl CmpOp {
    /// The operator that holds exactly when `self` does not.
    pub fn complement(self) -> Self {
        match self {
            Self::Eq => Self::Ne,
            Self::Ne => Self::Eq,
            Self::Lt => Self::Ge,
            Self::Ge => Self::Lt,
            Self::Gt => Self::Le,
            Self::Le => Self::Gt,
        }
    }

    pub fn holds(self, lhs: u64, rhs: u64) -> bool {
        match self {
            Self::Eq => lhs == rhs,
            Self::Ne => lhs != rhs,
            Self::Lt => lhs < rhs,
            Self::Gt => lhs > rhs,
            Self::Le => lhs <= rhs,
            Self::Ge => lhs >= rhs,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Ge => ">=",
        }
    }
}

/// A boolean expression built from comparisons, `&&` and `||`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Cmp { lhs: Operand, op: CmpOp, rhs: u64 },
    And(Vec<Expr>),
    Or(Vec<Expr>),
}

impl Expr {
    pub fn cmp(lhs: Operand, op: CmpOp, rhs: u64) -> Self {
        Self::Cmp { lhs, op, rhs }
    }

    /// Conjunction of `parts`, flattened.
    pub fn and(parts: impl IntoIterator<Item = Expr>) -> Self {
        let mut members = Vec::new();
        for part in parts {
            match part {
                Self::And(inner) => members.extend(inner),
                other => members.push(other),
            }
        }
        if members.len() == 1 {
            members.remove(0)
        } else {
            Self::And(members)
        }
    }

    /// Disjunction of `parts`, flattened.
    pub fn or(parts: impl IntoIterator<Item = Expr>) -> Self {
        let mut members = Vec::new();
        for part in parts {
            match part {
                Self::Or(inner) => members.extend(inner),
                other => members.push(other),
            }
        }
        if members.len() == 1 {
            members.remove(0)
        } else {
            Self::Or(members)
        }
    }

    pub fn eval(&self, n: u64) -> bool {
        match self {
            Self::Cmp { lhs, op, rhs } => op.holds(lhs.value(n), *rhs),
            Self::And(members) => members.iter().all(|member| member.eval(n)),
            Self::Or(members) => members.iter().any(|member| member.eval(n)),
        }
    }

    pub fn is_cmp(&self) -> bool {
        matches!(self, Self::Cmp { .. })
    }

    /// The operand shared by every comparison in this expression, if there
    /// is exactly one.
    pub fn sole_operand(&self) -> Option<Operand> {
        match self {
            Self::Cmp { lhs, .. } => Some(*lhs),
            Self::And(members) | Self::Or(members) => {
                let mut operands = members.iter().map(Self::sole_operand);
                let first = operands.next()??;
                operands
                    .all(|operand| operand == Some(first))
                    .then_some(first)
            }
        }
    }

    /// Render as the condition of a conditional chain: always one
    /// parenthesized group.
    pub fn to_condition(&self) -> String {
        format!("({self})")
    }

    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>, parent: Parent) -> fmt::Result {
        match self {
            Self::Cmp { lhs, op, rhs } => write!(f, "{lhs} {} {rhs}", op.symbol()),
            // `&&` binds tighter than `||`, so a conjunction never needs a group.
            Self::And(members) => write_joined(f, members, " && ", Parent::And, false),
            Self::Or(members) => {
                let grouped = parent != Parent::Top;
                write_joined(f, members, " || ", Parent::Or, grouped)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parent {
    Top,
    And,
    Or,
}

fn write_joined(
    f: &mut fmt::Formatter<'_>,
    members: &[Expr],
    separator: &str,
    parent: Parent,
    grouped: bool,
) -> fmt::Result {
    if grouped {
        f.write_str("(")?;
    }
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        member.fmt_nested(f, parent)?;
    }
    if grouped {
        f.write_str(")")?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_nested(f, Parent::Top)
    }
}


#[cfg(test)]
mod tests {
    use super::build::{n, rem};
    use super::*;
    use CmpOp::*;

    #[test]
    fn junctions_flatten_and_unwrap() {
        let nested = Expr::and([Expr::and([n(Ge, 0), n(Le, 2)]), n(Ne, 2)]);
        assert_eq!(nested, Expr::And(vec![n(Ge, 0), n(Le, 2), n(Ne, 2)]));
        assert_eq!(Expr::or([n(Eq, 1)]), n(Eq, 1));
    }

    #[test]
    fn or_inside_and_is_grouped() {
        let expr = Expr::and([
            rem(10, Ge, 2),
            rem(10, Le, 4),
            Expr::or([rem(100, Lt, 12), rem(100, Gt, 14)]),
        ]);
        assert_eq!(
            expr.to_string(),
            "n % 10 >= 2 && n % 10 <= 4 && (n % 100 < 12 || n % 100 > 14)"
        );
    }

    #[test]
    fn and_inside_or_is_not_grouped() {
        let expr = Expr::or([n(Eq, 0), n(Eq, 1), Expr::and([n(Ge, 11), n(Le, 99)])]);
        assert_eq!(expr.to_string(), "n == 0 || n == 1 || n >= 11 && n <= 99");
        assert_eq!(
            expr.to_condition(),
            "(n == 0 || n == 1 || n >= 11 && n <= 99)"
        );
    }

    #[test]
    fn evaluation_follows_c_semantics() {
        let expr = Expr::and([rem(10, Eq, 1), rem(100, Ne, 11)]);
        assert!(expr.eval(1));
        assert!(expr.eval(21));
        assert!(!expr.eval(11));
        assert!(!expr.eval(111));
        assert!(expr.eval(101));
    }

    #[test]
    fn sole_operand_requires_agreement() {
        assert_eq!(
            Expr::or([rem(10, Eq, 4), rem(10, Eq, 6)]).sole_operand(),
            Some(Operand::Rem(10))
        );
        assert_eq!(
            Expr::and([rem(10, Eq, 1), rem(100, Ne, 11)]).sole_operand(),
            None
        );
    }

    #[test]
    fn complement_is_an_involution() {
        for op in [Eq, Ne, Lt, Gt, Le, Ge] {
            assert_eq!(op.complement().complement(), op);
            for (lhs, rhs) in [(1, 2), (2, 2), (3, 2)] {
                assert_ne!(op.holds(lhs, rhs), op.complement().holds(lhs, rhs));
            }
        }
    }
}
