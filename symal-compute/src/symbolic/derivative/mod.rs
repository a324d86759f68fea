//! Symbolic differentiation.
//!
//! Each node kind applies its calculus rule structurally, without simplifying the result. Before
//! applying a rule, a node checks which of its operands depend on the variable (see
//! [`Expr::function_of`]), and skips building the parts of the rule that are trivially zero.
//! For example, the derivative of `(x + 1)` is just the derivative of `x`, which is `1`.
//!
//! The results are usually not in their simplest form. Pass them through
//! [`simplify`](crate::symbolic::simplify()) to remove the leftover identities.

use super::expr::{BinOpKind, Expr, Variable};
use tracing::{instrument, trace};

mod function;

/// Which operands of a binary node depend on the variable being differentiated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dependence {
    Neither,
    Lhs,
    Rhs,
    Both,
}

impl Dependence {
    fn of(lhs: &Expr, rhs: &Expr, var: &Variable) -> Self {
        match (lhs.function_of(var), rhs.function_of(var)) {
            (false, false) => Self::Neither,
            (true, false) => Self::Lhs,
            (false, true) => Self::Rhs,
            (true, true) => Self::Both,
        }
    }
}

/// `(f + g)' = f' + g'`
fn sum_rule(lhs: &Expr, rhs: &Expr, var: &Variable) -> Expr {
    let dependence = Dependence::of(lhs, rhs, var);
    trace!(?dependence, "applying sum rule");
    match dependence {
        Dependence::Neither => Expr::zero(),
        Dependence::Lhs => differentiate(lhs, var),
        Dependence::Rhs => differentiate(rhs, var),
        Dependence::Both => Expr::add(differentiate(lhs, var), differentiate(rhs, var)),
    }
}

/// `(f - g)' = f' - g'`
fn difference_rule(lhs: &Expr, rhs: &Expr, var: &Variable) -> Expr {
    let dependence = Dependence::of(lhs, rhs, var);
    trace!(?dependence, "applying difference rule");
    match dependence {
        Dependence::Neither => Expr::zero(),
        Dependence::Lhs => differentiate(lhs, var),
        Dependence::Rhs => Expr::mul(Expr::minus_one(), differentiate(rhs, var)),
        Dependence::Both => Expr::sub(differentiate(lhs, var), differentiate(rhs, var)),
    }
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(lhs: &Expr, rhs: &Expr, var: &Variable) -> Expr {
    let dependence = Dependence::of(lhs, rhs, var);
    trace!(?dependence, "applying product rule");
    match dependence {
        Dependence::Neither => Expr::zero(),
        Dependence::Lhs => Expr::mul(differentiate(lhs, var), rhs),
        Dependence::Rhs => Expr::mul(lhs, differentiate(rhs, var)),
        Dependence::Both => Expr::add(
            Expr::mul(differentiate(lhs, var), rhs),
            Expr::mul(lhs, differentiate(rhs, var)),
        ),
    }
}

/// `(f / g)' = (g * f' - f * g') / (g * g)`
fn quotient_rule(lhs: &Expr, rhs: &Expr, var: &Variable) -> Expr {
    let dependence = Dependence::of(lhs, rhs, var);
    trace!(?dependence, "applying quotient rule");
    match dependence {
        Dependence::Neither => Expr::zero(),
        Dependence::Lhs => Expr::div(differentiate(lhs, var), rhs),
        Dependence::Rhs => Expr::div(
            Expr::mul(Expr::mul(Expr::minus_one(), lhs), differentiate(rhs, var)),
            Expr::mul(rhs, rhs),
        ),
        Dependence::Both => Expr::div(
            Expr::sub(
                Expr::mul(rhs, differentiate(lhs, var)),
                Expr::mul(lhs, differentiate(rhs, var)),
            ),
            Expr::mul(rhs, rhs),
        ),
    }
}

/// Differentiates `power = base ^ exp`.
///
/// The rules embed `power` itself in the result. Cloning an [`Expr`] only copies its top-level
/// node, so the operands of `power` are shared with the result.
fn power_rule(power: &Expr, base: &Expr, exp: &Expr, var: &Variable) -> Expr {
    let dependence = Dependence::of(base, exp, var);
    trace!(?dependence, "applying power rule");
    match dependence {
        Dependence::Neither => Expr::zero(),

        // (u ^ c)' = (c * u ^ (c - 1)) * u'
        Dependence::Lhs => Expr::mul(
            Expr::mul(exp, Expr::pow(base, Expr::sub(exp, Expr::one()))),
            differentiate(base, var),
        ),

        // (c ^ v)' = (c ^ v * ln(c)) * v'
        Dependence::Rhs => Expr::mul(
            Expr::mul(power, Expr::ln(base)),
            differentiate(exp, var),
        ),

        // (u ^ v)' = ((v * u ^ v) / u) * u' + (u ^ v * ln(u)) * v'
        Dependence::Both => Expr::add(
            Expr::mul(
                Expr::div(Expr::mul(exp, power), base),
                differentiate(base, var),
            ),
            Expr::mul(
                Expr::mul(power, Expr::ln(base)),
                differentiate(exp, var),
            ),
        ),
    }
}

fn differentiate(f: &Expr, var: &Variable) -> Expr {
    match f {
        Expr::Constant(_) => Expr::zero(),
        Expr::Variable(other) => {
            if other.is(var) {
                Expr::one()
            } else {
                Expr::zero()
            }
        },
        Expr::Binary(op, lhs, rhs) => match op {
            BinOpKind::Add => sum_rule(lhs, rhs, var),
            BinOpKind::Sub => difference_rule(lhs, rhs, var),
            BinOpKind::Mul => product_rule(lhs, rhs, var),
            BinOpKind::Div => quotient_rule(lhs, rhs, var),
            BinOpKind::Exp => power_rule(f, lhs, rhs, var),
        },
        Expr::Call(func, operand) => function::function_derivative(*func, operand, var),
    }
}

/// Computes the derivative of the given expression with respect to `var`.
///
/// Other variables are treated as constants. The result is not simplified.
#[instrument(level = "debug", skip_all, fields(var = var.name()))]
pub fn derivative(f: &Expr, var: &Variable) -> Expr {
    differentiate(f, var)
}

/// Computes the `n`-th derivative of the given expression with respect to `var`, by
/// differentiating `n` times. The zeroth derivative is the expression itself.
#[instrument(level = "debug", skip_all, fields(var = var.name(), n = n))]
pub fn derivative_n(f: &Expr, var: &Variable, n: usize) -> Expr {
    (0..n).fold(f.clone(), |acc, _| differentiate(&acc, var))
}

impl Expr {
    /// Computes the derivative of the expression with respect to `var`. See [`derivative`].
    pub fn derivative(&self, var: &Variable) -> Expr {
        derivative(self, var)
    }
}
