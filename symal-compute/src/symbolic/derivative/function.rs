//! Symbolic derivatives of the unary functions, with the chain rule applied.

use crate::symbolic::expr::{Expr, Func, Variable};
use tracing::trace;

use super::differentiate;

/// Computes the derivative of `func(operand)` and applies the chain rule.
pub(super) fn function_derivative(func: Func, operand: &Expr, var: &Variable) -> Expr {
    if !operand.function_of(var) {
        trace!(%func, "operand is independent");
        return Expr::zero();
    }

    trace!(%func, "applying chain rule");
    let inner = differentiate(operand, var);
    match func {
        // ln(u)' = (1 / u) * u'
        Func::Ln => Expr::mul(Expr::div(Expr::one(), operand), inner),

        // sin(u)' = cos(u) * u'
        Func::Sin => Expr::mul(Expr::cos(operand), inner),

        // cos(u)' = (-1 * sin(u)) * u'
        Func::Cos => Expr::mul(Expr::mul(Expr::minus_one(), Expr::sin(operand)), inner),
    }
}
