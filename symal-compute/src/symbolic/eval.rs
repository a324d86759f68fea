//! Numerical evaluation of expressions.

use crate::error::{
    kind::{DivisionByZero, InvalidDomain, UndefinedResult},
    Error,
};
use super::expr::{BinOpKind, Expr, Func};
use std::ops::Range;
use tracing::instrument;

/// Returns the span of an operand at the given offset within its parent's rendered text.
fn operand_span(offset: usize, operand: &Expr) -> Range<usize> {
    offset..offset + operand.rendered_len()
}

/// Evaluates a binary operator node.
fn eval_binary(node: &Expr, op: BinOpKind, lhs: &Expr, rhs: &Expr) -> Result<f64, Error> {
    let lhs_offset = Expr::lhs_offset();

    // the offset of `rhs` walks all of `lhs`, so it is only computed on failure
    let rhs_offset = || Expr::rhs_offset(op, lhs);
    let eval_lhs = || evaluate(lhs).map_err(|err| err.offset(lhs_offset));
    let eval_rhs = || evaluate(rhs).map_err(|err| err.offset(rhs_offset()));

    match op {
        BinOpKind::Add => Ok(eval_lhs()? + eval_rhs()?),
        BinOpKind::Sub => Ok(eval_lhs()? - eval_rhs()?),
        BinOpKind::Mul => Ok(eval_lhs()? * eval_rhs()?),
        BinOpKind::Div => {
            // the denominator is checked before the numerator is evaluated
            let denominator = eval_rhs()?;
            if denominator == 0.0 {
                return Err(Error::new(
                    vec![0..node.rendered_len(), operand_span(rhs_offset(), rhs)],
                    DivisionByZero,
                ));
            }
            Ok(eval_lhs()? / denominator)
        },
        BinOpKind::Exp => {
            let base = eval_lhs()?;
            let exp = eval_rhs()?;
            if base == 0.0 && exp == 0.0 {
                return Err(Error::new(
                    vec![
                        0..node.rendered_len(),
                        operand_span(lhs_offset, lhs),
                        operand_span(rhs_offset(), rhs),
                    ],
                    UndefinedResult,
                ));
            }

            // negative bases with non-integer exponents produce NaN, which is returned as-is
            Ok(base.powf(exp))
        },
    }
}

/// Evaluates a function call node.
fn eval_call(node: &Expr, func: Func, operand: &Expr) -> Result<f64, Error> {
    let offset = Expr::operand_offset(func);
    let value = evaluate(operand).map_err(|err| err.offset(offset))?;

    match func {
        Func::Ln if value <= 0.0 => Err(Error::new(
            vec![0..node.rendered_len(), operand_span(offset, operand)],
            InvalidDomain { value },
        )),
        Func::Ln => Ok(value.ln()),
        Func::Sin => Ok(value.sin()),
        Func::Cos => Ok(value.cos()),
    }
}

fn evaluate(expr: &Expr) -> Result<f64, Error> {
    match expr {
        Expr::Constant(constant) => Ok(constant.value()),
        Expr::Variable(var) => Ok(var.value()),
        Expr::Binary(op, lhs, rhs) => eval_binary(expr, *op, lhs, rhs),
        Expr::Call(func, operand) => eval_call(expr, *func, operand),
    }
}

impl Expr {
    /// Evaluates the expression using the current values of its variables.
    ///
    /// The first failure aborts the whole evaluation. The spans of the returned [`Error`] point
    /// into the rendered text of `self` (see [`Expr::render`]):
    ///
    /// - [`DivisionByZero`]: the division node, then its denominator.
    /// - [`InvalidDomain`]: the logarithm node, then its operand.
    /// - [`UndefinedResult`]: the power node, then its base, then its exponent.
    #[instrument(level = "trace", skip_all)]
    pub fn eval(&self) -> Result<f64, Error> {
        evaluate(self)
    }
}
