//! Atom compiler: one primitive relation to a constant or a comparison.
//!
//! The supported grammar is closed:
//!
//! ```text
//! atom     := VAR [ "%" MOD ] ( "=" | "!=" ) valueset
//! valueset := item ( "," item )*
//! item     := INT | INT ".." INT
//! VAR      := n | i | v | w | f | t | c | e
//! ```
//!
//! Gettext only ever sees non-negative integers without a visible fraction
//! or a compact exponent, so `i` is the same as `n` and `v`, `w`, `f`, `t`,
//! `c`, `e` are all zero. Relations on the zero operands fold to constants.

use crate::combine::Predicate;
use crate::error::RuleFault;
use crate::expr::{CmpOp, Expr, Operand};
use regex::Regex;
use std::sync::OnceLock;

/// An operand of the CLDR rule grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    /// Absolute value of the source number.
    N,
    /// Integer digits of `n`.
    I,
    /// Number of visible fraction digits, with trailing zeros.
    V,
    /// Number of visible fraction digits, without trailing zeros.
    W,
    /// Visible fraction digits, with trailing zeros.
    F,
    /// Visible fraction digits, without trailing zeros.
    T,
    /// Compact decimal exponent.
    C,
    /// Synonym of `c`.
    E,
}

impl Variable {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'n' => Some(Self::N),
            'i' => Some(Self::I),
            'v' => Some(Self::V),
            'w' => Some(Self::W),
            'f' => Some(Self::F),
            't' => Some(Self::T),
            'c' => Some(Self::C),
            'e' => Some(Self::E),
            _ => None,
        }
    }

    /// True for operands fixed at zero in the integer-only target encoding.
    pub fn is_always_zero(self) -> bool {
        !matches!(self, Self::N | Self::I)
    }
}

/// One element of a value set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueItem {
    Single(u64),
    /// Inclusive range `from..to`, `from <= to`.
    Range(u64, u64),
}

impl ValueItem {
    pub fn contains(self, value: u64) -> bool {
        match self {
            Self::Single(single) => single == value,
            Self::Range(from, to) => (from..=to).contains(&value),
        }
    }
}

/// A parsed primitive relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    pub variable: Variable,
    pub modulus: Option<u64>,
    /// `!=` rather than `=`.
    pub negated: bool,
    pub values: Vec<ValueItem>,
}

fn atom_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^([nivwftce])(?:\s*%\s*(\d+))?\s*(!=|=)\s*(\d+(?:\.\.\d+)?(?:\s*,\s*\d+(?:\.\.\d+)?)*)$",
        )
        .expect("atom regex must compile")
    })
}

impl Atom {
    pub fn parse(text: &str) -> Result<Self, RuleFault> {
        let text = text.trim();
        if text.contains(['(', ')']) {
            return Err(RuleFault::Parenthesized);
        }
        let unhandled = || RuleFault::UnhandledAtom(text.to_string());
        let caps = atom_re().captures(text).ok_or_else(unhandled)?;

        let variable = caps[1]
            .chars()
            .next()
            .and_then(Variable::from_char)
            .ok_or_else(unhandled)?;
        let modulus = match caps.get(2) {
            Some(m) => match parse_int(m.as_str()).ok_or_else(unhandled)? {
                0 => return Err(RuleFault::ZeroModulus(text.to_string())),
                modulus => Some(modulus),
            },
            None => None,
        };
        let negated = &caps[3] == "!=";

        let mut values = Vec::new();
        for item in caps[4].split(',').map(str::trim) {
            let value = match item.split_once("..") {
                Some((from, to)) => {
                    let from = parse_int(from).ok_or_else(unhandled)?;
                    let to = parse_int(to).ok_or_else(unhandled)?;
                    match from.cmp(&to) {
                        std::cmp::Ordering::Less => ValueItem::Range(from, to),
                        std::cmp::Ordering::Equal => ValueItem::Single(from),
                        std::cmp::Ordering::Greater => {
                            return Err(RuleFault::EmptyRange {
                                atom: text.to_string(),
                                from,
                                to,
                            });
                        }
                    }
                }
                None => ValueItem::Single(parse_int(item).ok_or_else(unhandled)?),
            };
            values.push(value);
        }

        Ok(Self {
            variable,
            modulus,
            negated,
            values,
        })
    }

    /// Compile to a constant or a canonical comparison tree.
    pub fn compile(&self) -> Predicate {
        if self.variable.is_always_zero() {
            let member = self.values.iter().any(|item| item.contains(0));
            return if member != self.negated {
                Predicate::True
            } else {
                Predicate::False
            };
        }

        let operand = self.modulus.map_or(Operand::N, Operand::Rem);
        let op = if self.negated { CmpOp::Ne } else { CmpOp::Eq };
        let junction = |parts: Vec<Expr>| {
            if self.negated {
                Expr::and(parts)
            } else {
                Expr::or(parts)
            }
        };

        let parts = self
            .values
            .iter()
            .map(|item| match *item {
                ValueItem::Single(value) => Expr::cmp(operand, op, value),
                ValueItem::Range(from, to) if to == from + 1 => junction(vec![
                    Expr::cmp(operand, op, from),
                    Expr::cmp(operand, op, to),
                ]),
                ValueItem::Range(from, to) if self.negated => Expr::or([
                    Expr::cmp(operand, CmpOp::Lt, from),
                    Expr::cmp(operand, CmpOp::Gt, to),
                ]),
                ValueItem::Range(from, to) => Expr::and([
                    Expr::cmp(operand, CmpOp::Ge, from),
                    Expr::cmp(operand, CmpOp::Le, to),
                ]),
            })
            .collect();
        Predicate::Expr(junction(parts))
    }
}

fn parse_int(text: &str) -> Option<u64> {
    text.trim().parse().ok()
}

/// Parse and compile one atom.
pub fn compile_atom(text: &str) -> Result<Predicate, RuleFault> {
    Ok(Atom::parse(text)?.compile())
}
