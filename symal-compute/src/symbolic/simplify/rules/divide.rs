//! Simplification rules for division.
//!
//! A zero denominator is not handled here. It is reported as an error by
//! [`simplify`](crate::symbolic::simplify()) before any rule runs.

use crate::symbolic::{
    expr::{BinOpKind, Expr},
    simplify::{rules::do_binary, step::Step},
    step_collector::StepCollector,
};

/// `0/a = 0`
pub fn divide_zero_numerator(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Div, |lhs, _| {
        if lhs.is_zero() {
            Some(Expr::zero())
        } else {
            None
        }
    })?;

    step_collector.push(Step::DivZeroNumerator);
    Some(opt)
}

/// `a/1 = a`
pub fn divide_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Div, |lhs, rhs| {
        if rhs.is_one() {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::DivOne);
    Some(opt)
}

/// Applies all division rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    divide_zero_numerator(expr, step_collector)
        .or_else(|| divide_one(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use crate::symbolic::expr::Variable;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn zero_numerator() {
        let x = Variable::new("x");
        assert_eq!(all(&Expr::div(Expr::zero(), &x), &mut ()), Some(Expr::zero()));
    }

    #[test]
    fn unit_denominator() {
        let x = Variable::new("x");
        let mut steps: Vec<Step> = Vec::new();
        assert_eq!(all(&Expr::div(&x, Expr::one()), &mut steps), Some(x.clone().into()));
        assert_eq!(all(&Expr::div(Expr::one(), &x), &mut steps), None);
        assert_eq!(steps, vec![Step::DivOne]);
    }
}
