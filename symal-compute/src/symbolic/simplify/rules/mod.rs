//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. Rules only look at the top-level node; its operands are expected to have
//! been simplified already.

pub mod add;
pub mod divide;
pub mod multiply;

use crate::symbolic::{
    expr::{BinOpKind, Expr},
    step_collector::StepCollector,
};
use super::step::Step;

/// If the expression is a binary node of the given kind, calls the given transformation function
/// with its operands.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_binary(
    expr: &Expr,
    kind: BinOpKind,
    f: impl Fn(&Expr, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    match expr {
        Expr::Binary(op, lhs, rhs) if *op == kind => f(&**lhs, &**rhs),
        _ => None,
    }
}

/// Applies all rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add::all(expr, step_collector)
        .or_else(|| multiply::all(expr, step_collector))
        .or_else(|| divide::all(expr, step_collector))
}
