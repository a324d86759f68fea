//! Simplification of expressions.
//!
//! Simplification is a single bottom-up pass: every node simplifies its operands first, then the
//! rules in [`rules`] are tried on the rebuilt node. The rules only remove the additive and
//! multiplicative identities and annihilators:
//!
//! - `a + 0`, `0 + a`, `a - 0` become `a`, and so does `0 - a` (it is not negated),
//! - `a * 0` and `0 * a` become `0`, and `a * 1` and `1 * a` become `a`,
//! - `0 / a` becomes `0`, and `a / 1` becomes `a`.
//!
//! A constant counts as `0` or `1` based on its value, not its name. Powers and function calls
//! have their operands simplified, but are otherwise kept as they are.
//!
//! A division whose denominator simplifies to `0` cannot be simplified at all, and is reported
//! as a [`DivisionByZeroInExpression`] error.
//!
//! ```
//! use symal_compute::consts::constant;
//! use symal_compute::symbolic::{expr::{Expr, Variable}, simplify};
//!
//! let x = Variable::new("x");
//! let expr = Expr::add(Expr::mul(constant("pi").unwrap(), Expr::one()), Expr::mul(&x, Expr::zero()));
//! assert_eq!(simplify(&expr).unwrap().to_string(), "pi");
//! ```

pub mod rules;
pub mod step;

use crate::error::{kind::DivisionByZeroInExpression, Error};
use super::{
    expr::{BinOpKind, Expr},
    step_collector::StepCollector,
};
use tracing::{debug, instrument};

pub use step::Step;

/// Simplifies a single node after simplifying its operands.
fn simplify_node(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Expr, Error> {
    match expr {
        Expr::Constant(_) | Expr::Variable(_) => Ok(expr.clone()),
        Expr::Binary(op, lhs, rhs) => {
            // the offset of `rhs` walks all of `lhs`, so it is only computed on failure
            let new_lhs = simplify_node(lhs, step_collector)
                .map_err(|err| err.offset(Expr::lhs_offset()))?;
            let new_rhs = simplify_node(rhs, step_collector)
                .map_err(|err| err.offset(Expr::rhs_offset(*op, lhs)))?;

            if *op == BinOpKind::Div && new_rhs.is_zero() {
                let rhs_offset = Expr::rhs_offset(*op, lhs);
                return Err(Error::new(
                    vec![0..expr.rendered_len(), rhs_offset..rhs_offset + rhs.rendered_len()],
                    DivisionByZeroInExpression,
                ));
            }

            let node = Expr::binary(*op, new_lhs, new_rhs);
            match rules::all(&node, step_collector) {
                Some(simplified) => {
                    debug!(from = %node, to = %simplified, "simplified");
                    Ok(simplified)
                },
                None => Ok(node),
            }
        },
        Expr::Call(func, operand) => {
            let offset = Expr::operand_offset(*func);
            let new_operand = simplify_node(operand, step_collector)
                .map_err(|err| err.offset(offset))?;
            Ok(Expr::call(*func, new_operand))
        },
    }
}

/// Simplifies the given expression. The input is left untouched.
///
/// Fails with [`DivisionByZeroInExpression`] if some denominator simplifies to `0`. The spans of
/// the error point into the rendered text of `expr`: the division node, then its denominator.
#[instrument(level = "debug", skip_all)]
pub fn simplify(expr: &Expr) -> Result<Expr, Error> {
    simplify_node(expr, &mut ())
}

/// Simplifies the given expression, pushing every rule that was applied to the given
/// [`StepCollector`], in the order they were applied.
#[instrument(level = "debug", skip_all)]
pub fn simplify_with(
    expr: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    simplify_node(expr, step_collector)
}

/// Simplifies the given expression, returning the simplified expression along with the steps
/// taken to simplify it.
pub fn simplify_with_steps(expr: &Expr) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let simplified = simplify_with(expr, &mut steps)?;
    Ok((simplified, steps))
}

impl Expr {
    /// Simplifies the expression. See [`simplify`].
    pub fn simplify(&self) -> Result<Expr, Error> {
        simplify(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::consts::{constant, custom_constant};
    use crate::symbolic::expr::{Func, Variable};
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::thread;
    use super::*;

    fn num(value: f64) -> Expr {
        custom_constant(value.to_string(), value).into()
    }

    /// Builds a random expression over `x` and `y`, biased towards zeros and ones so that the
    /// rules fire often.
    fn random_expr(rng: &mut StdRng, vars: &[Variable], depth: u32) -> Expr {
        if depth == 0 || rng.gen_bool(0.25) {
            return match rng.gen_range(0..7) {
                0 => Expr::zero(),
                1 => Expr::one(),
                2 => Expr::minus_one(),
                3 => custom_constant("nothing", 0.0).into(),
                4 => custom_constant("unit", 1.0).into(),
                5 => num(rng.gen_range(2..10) as f64),
                _ => vars[rng.gen_range(0..vars.len())].clone().into(),
            };
        }

        match rng.gen_range(0..8) {
            0 => Expr::add(random_expr(rng, vars, depth - 1), random_expr(rng, vars, depth - 1)),
            1 => Expr::sub(random_expr(rng, vars, depth - 1), random_expr(rng, vars, depth - 1)),
            2 => Expr::mul(random_expr(rng, vars, depth - 1), random_expr(rng, vars, depth - 1)),
            3 => Expr::div(random_expr(rng, vars, depth - 1), random_expr(rng, vars, depth - 1)),
            4 => Expr::pow(random_expr(rng, vars, depth - 1), random_expr(rng, vars, depth - 1)),
            5 => Expr::call(Func::Ln, random_expr(rng, vars, depth - 1)),
            6 => Expr::call(Func::Sin, random_expr(rng, vars, depth - 1)),
            _ => Expr::call(Func::Cos, random_expr(rng, vars, depth - 1)),
        }
    }

    #[test]
    fn leaves_are_unchanged() {
        let x = Variable::new("x");
        assert_eq!(simplify(&x.clone().into()).unwrap(), Expr::from(&x));
        assert_eq!(simplify(&Expr::zero()).unwrap(), Expr::zero());
        assert_eq!(simplify(&num(2.5)).unwrap(), num(2.5));
    }

    #[test]
    fn add_and_sub() {
        let x = Variable::new("x");
        assert_eq!(Expr::add(&x, Expr::zero()).simplify().unwrap().render(), "x");
        assert_eq!(Expr::add(Expr::zero(), &x).simplify().unwrap().render(), "x");
        assert_eq!(Expr::add(Expr::zero(), Expr::zero()).simplify().unwrap().render(), "0");
        assert_eq!(Expr::sub(&x, Expr::zero()).simplify().unwrap().render(), "x");
        assert_eq!(Expr::sub(Expr::zero(), &x).simplify().unwrap().render(), "x");
        assert_eq!(Expr::sub(Expr::zero(), Expr::zero()).simplify().unwrap().render(), "0");
        assert_eq!(Expr::add(&x, Expr::one()).simplify().unwrap().render(), "(x + 1)");
    }

    #[test]
    fn mul() {
        let x = Variable::new("x");
        assert_eq!(Expr::mul(&x, Expr::zero()).simplify().unwrap().render(), "0");
        assert_eq!(Expr::mul(Expr::one(), &x).simplify().unwrap().render(), "x");
        assert_eq!(Expr::mul(&x, num(3.0)).simplify().unwrap().render(), "(x * 3)");
    }

    #[test]
    fn div() {
        let x = Variable::new("x");
        assert_eq!(Expr::div(Expr::zero(), &x).simplify().unwrap().render(), "0");
        assert_eq!(Expr::div(&x, Expr::one()).simplify().unwrap().render(), "x");
        assert_eq!(Expr::div(&x, &x).simplify().unwrap().render(), "(x / x)");
    }

    #[test]
    fn zero_by_value() {
        let x = Variable::new("x");
        let nothing = custom_constant("nothing", 0.0);
        assert_eq!(Expr::mul(&x, &nothing).simplify().unwrap(), Expr::zero());

        // a variable named `0` is never folded
        let expr = Expr::add(&x, Variable::new("0"));
        assert_eq!(expr.simplify().unwrap(), expr);
    }

    #[test]
    fn bottom_up() {
        let x = Variable::new("x");
        let expr = Expr::mul(
            Expr::add(Expr::mul(&x, Expr::zero()), Expr::one()),
            Expr::sub(&x, Expr::div(Expr::zero(), &x)),
        );
        assert_eq!(expr.simplify().unwrap().render(), "x");
    }

    #[test]
    fn recurses_into_powers_and_functions() {
        let x = Variable::new("x");
        let expr = Expr::pow(Expr::sin(Expr::mul(&x, Expr::one())), Expr::add(Expr::one(), Expr::zero()));
        assert_eq!(expr.simplify().unwrap().render(), "(sin(x) ^ 1)");
        assert_eq!(Expr::ln(Expr::one()).simplify().unwrap().render(), "ln(1)");
    }

    #[test]
    fn derivatives() {
        let x = Variable::new("x");
        let pi = constant("pi").unwrap();
        let cases = [
            (Expr::mul(&pi, &x), "pi"),
            (Expr::sub(Expr::one(), &x), "-1"),
            // `0 - 1` is not negated
            (Expr::sub(Expr::mul(&x, Expr::zero()), &x), "1"),
            (Expr::pow(&x, num(2.0)), "(2 * (x ^ (2 - 1)))"),
            (Expr::sin(Expr::mul(num(2.0), &x)), "(cos((2 * x)) * 2)"),
            (Expr::div(Expr::one(), &x), "(-1 / (x * x))"),
        ];
        for (f, simplified) in cases {
            assert_eq!(f.derivative(&x).simplify().unwrap().render(), simplified);
        }
    }

    #[test]
    fn steps_in_order() {
        let x = Variable::new("x");
        let expr = Expr::add(Expr::mul(&x, Expr::one()), Expr::div(Expr::zero(), &x));
        let (simplified, steps) = simplify_with_steps(&expr).unwrap();
        assert_eq!(simplified.render(), "x");
        assert_eq!(steps, vec![Step::MulOne, Step::DivZeroNumerator, Step::AddZero]);

        let (_, steps) = simplify_with_steps(&Expr::sub(&x, Expr::one())).unwrap();
        assert!(steps.is_empty());
    }

    #[test]
    fn zero_denominator() {
        let x = Variable::new("x");
        let y = Variable::new("y");
        let expr = Expr::add(Expr::one(), Expr::div(&x, Expr::mul(&y, Expr::zero())));
        let rendered = expr.render();
        assert_eq!(rendered, "(1 + (x / (y * 0)))");

        let err = expr.simplify().unwrap_err();
        assert!(err.is::<DivisionByZeroInExpression>());
        assert_eq!(&rendered[err.spans[0].clone()], "(x / (y * 0))");
        assert_eq!(&rendered[err.spans[1].clone()], "(y * 0)");
    }

    #[test]
    fn zero_denominator_inside_function() {
        let x = Variable::new("x");
        let expr = Expr::ln(Expr::div(&x, Expr::sub(Expr::zero(), Expr::zero())));
        let err = expr.simplify().unwrap_err();
        assert_eq!(err.spans, vec![3..16, 8..15]);
    }

    #[test]
    fn idempotent() {
        let x = Variable::new("x");
        let y = Variable::new("y");
        let exprs = [
            Expr::add(Expr::add(&x, Expr::zero()), Expr::mul(Expr::zero(), &y)),
            Expr::sub(Expr::zero(), Expr::sub(&x, Expr::zero())),
            Expr::div(Expr::mul(Expr::one(), Expr::one()), Expr::add(Expr::one(), Expr::zero())),
            Expr::pow(&x, &x).derivative(&x),
            Expr::div(Expr::ln(&x), Expr::cos(&y)).derivative(&x),
            Expr::div(Expr::ln(&x), Expr::cos(&y)).derivative(&y),
            Expr::mul(Expr::sin(&x), Expr::cos(&x)).derivative(&x).derivative(&x),
        ];
        for expr in exprs {
            let once = expr.simplify().unwrap();
            let twice = once.simplify().unwrap();
            assert_eq!(twice.render(), once.render());
        }
    }

    #[test]
    fn idempotent_random() {
        let vars = [Variable::new("x"), Variable::new("y")];
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut simplified = 0;
        for _ in 0..2000 {
            let expr = random_expr(&mut rng, &vars, 5);
            match expr.simplify() {
                Ok(once) => {
                    let (twice, steps) = simplify_with_steps(&once).unwrap();
                    assert_eq!(twice.render(), once.render(), "simplifying {}", expr);
                    assert!(steps.is_empty(), "simplifying {}", expr);
                    simplified += 1;
                },
                Err(err) => assert!(err.is::<DivisionByZeroInExpression>()),
            }
        }
        assert!(simplified > 100);
    }

    #[test]
    fn long_chain() {
        // a left-deep chain of `+ 0` and `- 0` collapses to its first operand
        let handle = thread::Builder::new()
            .stack_size(512 * 1024 * 1024)
            .spawn(|| {
                let x = Variable::new("x");
                let mut expr = Expr::from(&x);
                for i in 0..20_000 {
                    expr = if i % 2 == 0 {
                        Expr::add(expr, Expr::zero())
                    } else {
                        Expr::sub(expr, Expr::zero())
                    };
                }
                for _ in 0..10 {
                    assert_eq!(expr.simplify().unwrap(), Expr::from(&x));
                }
            })
            .unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn input_is_untouched() {
        let x = Variable::new("x");
        let expr = Expr::mul(&x, Expr::one());
        let before = expr.render();
        expr.simplify().unwrap();
        assert_eq!(expr.render(), before);
    }
}
