//! Simplification rules for addition and subtraction.

use crate::symbolic::{
    expr::{BinOpKind, Expr},
    simplify::{rules::do_binary, step::Step},
    step_collector::StepCollector,
};

/// `0+0 = 0`
/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Add, |lhs, rhs| {
        match (lhs.is_zero(), rhs.is_zero()) {
            (true, true) => Some(Expr::zero()),
            (true, false) => Some(rhs.clone()),
            (false, true) => Some(lhs.clone()),
            (false, false) => None,
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `0-0 = 0`
/// `0-a = a`
/// `a-0 = a`
///
/// `0-a` is not negated, so it collapses the same way `0+a` does.
pub fn subtract_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Sub, |lhs, rhs| {
        match (lhs.is_zero(), rhs.is_zero()) {
            (true, true) => Some(Expr::zero()),
            (true, false) => Some(rhs.clone()),
            (false, true) => Some(lhs.clone()),
            (false, false) => None,
        }
    })?;

    step_collector.push(Step::SubZero);
    Some(opt)
}

/// Applies all addition and subtraction rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_zero(expr, step_collector)
        .or_else(|| subtract_zero(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use crate::consts::custom_constant;
    use crate::symbolic::expr::Variable;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn add_zero_either_side() {
        let x = Variable::new("x");
        let mut steps: Vec<Step> = Vec::new();
        assert_eq!(add_zero(&Expr::add(Expr::zero(), &x), &mut steps), Some(x.clone().into()));
        assert_eq!(add_zero(&Expr::add(&x, Expr::zero()), &mut steps), Some(x.clone().into()));
        assert_eq!(add_zero(&Expr::add(&x, Expr::one()), &mut steps), None);
        assert_eq!(steps, vec![Step::AddZero, Step::AddZero]);
    }

    #[test]
    fn add_zeros_is_reserved_zero() {
        let nothing = custom_constant("nothing", 0.0);
        let simplified = add_zero(&Expr::add(&nothing, &nothing), &mut ()).unwrap();
        assert_eq!(simplified, Expr::zero());
    }

    #[test]
    fn subtract_zero_either_side() {
        let x = Variable::new("x");
        let mut steps: Vec<Step> = Vec::new();
        assert_eq!(subtract_zero(&Expr::sub(&x, Expr::zero()), &mut steps), Some(x.clone().into()));
        assert_eq!(subtract_zero(&Expr::sub(Expr::zero(), Expr::zero()), &mut steps), Some(Expr::zero()));
        assert_eq!(subtract_zero(&Expr::sub(Expr::zero(), &x), &mut steps), Some(x.clone().into()));
        assert_eq!(subtract_zero(&Expr::sub(&x, Expr::one()), &mut steps), None);
        assert_eq!(steps, vec![Step::SubZero; 3]);
    }

    #[test]
    fn other_operators_are_ignored() {
        let x = Variable::new("x");
        assert_eq!(all(&Expr::mul(&x, Expr::zero()), &mut ()), None);
    }
}
