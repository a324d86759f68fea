//! The expression tree.
//!
//! An [`Expr`] is either a leaf ([`Constant`] or [`Variable`]), a binary operator node
//! ([`Expr::Binary`]), or a unary function call ([`Expr::Call`]). Interior nodes own their
//! operands through [`Rc`]s and never change them after construction, which makes cloning an
//! [`Expr`] cheap: only the top-level node is copied, and the operands are shared. This is what
//! lets the derivative of a power embed the power itself as a subexpression, without deep copies
//! and without cycles.
//!
//! The only mutable state in a tree is the value of its [`Variable`]s, which is shared with the
//! caller's handles to the same variables.
//!
//! # Rendering
//!
//! The [`Display`](std::fmt::Display) implementation renders the tree fully parenthesized:
//!
//! - leaves render as their name,
//! - binary nodes render as `(lhs op rhs)`, with `op` one of `+ - * / ^`,
//! - function calls render as `name(operand)`, with `name` one of `ln sin cos`.
//!
//! ```
//! use symal_compute::symbolic::expr::{Expr, Variable};
//! use symal_compute::consts::custom_constant;
//!
//! let x = Variable::new("x");
//! let expr = Expr::add(Expr::mul(custom_constant("2", 2.0), &x), custom_constant("3", 3.0));
//! assert_eq!(expr.to_string(), "((2 * x) + 3)");
//! ```
//!
//! # Equality
//!
//! The [`PartialEq`] implementation for [`Expr`] is **structural**: two trees are equal if they
//! have the same shape, the same operators, and equal leaves. Constants compare by name and
//! value, and variables compare by name only.

mod iter;
mod leaf;

pub use iter::ExprIter;
pub use leaf::{Constant, Variable};

use crate::consts;
use std::{fmt, ops::{Add, Div, Mul, Sub}, rc::Rc};

/// The kind of a binary operator node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,

    /// Exponentiation, `lhs ^ rhs`.
    Exp,
}

impl BinOpKind {
    /// Returns the symbol used to render the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Exp => "^",
        }
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A unary function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Func {
    /// The natural logarithm.
    Ln,
    Sin,
    Cos,
}

impl Func {
    /// Returns the name used to render the function.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ln => "ln",
            Self::Sin => "sin",
            Self::Cos => "cos",
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A node in an expression tree.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A named constant, such as `pi` or `2`.
    Constant(Constant),

    /// A variable, such as `x`.
    Variable(Variable),

    /// A binary operator applied to two operands.
    Binary(BinOpKind, Rc<Expr>, Rc<Expr>),

    /// A unary function applied to one operand.
    Call(Func, Rc<Expr>),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(constant) => write!(f, "{}", constant),
            Self::Variable(var) => write!(f, "{}", var),
            Self::Binary(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
            Self::Call(func, operand) => write!(f, "{}({})", func, operand),
        }
    }
}

impl From<Constant> for Expr {
    fn from(constant: Constant) -> Self {
        Self::Constant(constant)
    }
}

impl From<&Constant> for Expr {
    fn from(constant: &Constant) -> Self {
        Self::Constant(constant.clone())
    }
}

impl From<Variable> for Expr {
    fn from(var: Variable) -> Self {
        Self::Variable(var)
    }
}

/// The resulting expression holds another handle to the variable.
impl From<&Variable> for Expr {
    fn from(var: &Variable) -> Self {
        Self::Variable(var.clone())
    }
}

impl From<&Expr> for Expr {
    fn from(expr: &Expr) -> Self {
        expr.clone()
    }
}

impl Expr {
    /// Creates a binary operator node. No simplification is done.
    pub fn binary(op: BinOpKind, lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::Binary(op, Rc::new(lhs.into()), Rc::new(rhs.into()))
    }

    /// Creates a function call node. No simplification is done.
    pub fn call(func: Func, operand: impl Into<Expr>) -> Self {
        Self::Call(func, Rc::new(operand.into()))
    }

    /// `lhs + rhs`
    pub fn add(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary(BinOpKind::Add, lhs, rhs)
    }

    /// `lhs - rhs`
    pub fn sub(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary(BinOpKind::Sub, lhs, rhs)
    }

    /// `lhs * rhs`
    pub fn mul(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary(BinOpKind::Mul, lhs, rhs)
    }

    /// `lhs / rhs`
    pub fn div(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary(BinOpKind::Div, lhs, rhs)
    }

    /// `base ^ exp`
    pub fn pow(base: impl Into<Expr>, exp: impl Into<Expr>) -> Self {
        Self::binary(BinOpKind::Exp, base, exp)
    }

    /// `ln(operand)`
    pub fn ln(operand: impl Into<Expr>) -> Self {
        Self::call(Func::Ln, operand)
    }

    /// `sin(operand)`
    pub fn sin(operand: impl Into<Expr>) -> Self {
        Self::call(Func::Sin, operand)
    }

    /// `cos(operand)`
    pub fn cos(operand: impl Into<Expr>) -> Self {
        Self::call(Func::Cos, operand)
    }

    /// The reserved constant `0`.
    pub fn zero() -> Self {
        Self::Constant(consts::ZERO.clone())
    }

    /// The reserved constant `1`.
    pub fn one() -> Self {
        Self::Constant(consts::ONE.clone())
    }

    /// The reserved constant `-1`.
    pub fn minus_one() -> Self {
        Self::Constant(consts::MINUS_ONE.clone())
    }

    /// Returns the rendered text of the expression. Same as `to_string()`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Returns the length in bytes of the rendered text of the expression, without rendering it.
    pub fn rendered_len(&self) -> usize {
        match self {
            Self::Constant(constant) => constant.name().len(),
            Self::Variable(var) => var.name().len(),
            // "(" lhs " op " rhs ")"
            Self::Binary(op, lhs, rhs) => {
                lhs.rendered_len() + rhs.rendered_len() + op.symbol().len() + 4
            },
            // name "(" operand ")"
            Self::Call(func, operand) => func.name().len() + operand.rendered_len() + 2,
        }
    }

    /// Returns the byte offset of the left operand of a binary node within the node's rendered
    /// text.
    pub(crate) fn lhs_offset() -> usize {
        "(".len()
    }

    /// Returns the byte offset of the right operand of a binary node within the node's rendered
    /// text.
    pub(crate) fn rhs_offset(op: BinOpKind, lhs: &Expr) -> usize {
        Self::lhs_offset() + lhs.rendered_len() + op.symbol().len() + 2
    }

    /// Returns the byte offset of the operand of a function call within the call's rendered text.
    pub(crate) fn operand_offset(func: Func) -> usize {
        func.name().len() + "(".len()
    }

    /// Returns true if the value of the expression can change when the value of `var` changes.
    ///
    /// This is a structural test: a leaf depends on `var` if it is a variable with the same name
    /// as `var`, and an interior node depends on `var` if any of its operands do.
    pub fn function_of(&self, var: &Variable) -> bool {
        match self {
            Self::Constant(_) => false,
            Self::Variable(other) => other.is(var),
            Self::Binary(_, lhs, rhs) => lhs.function_of(var) || rhs.function_of(var),
            Self::Call(_, operand) => operand.function_of(var),
        }
    }

    /// Returns true if no variable appears anywhere in the expression.
    pub fn is_constant(&self) -> bool {
        match self {
            Self::Constant(_) => true,
            Self::Variable(_) => false,
            Self::Binary(_, lhs, rhs) => lhs.is_constant() && rhs.is_constant(),
            Self::Call(_, operand) => operand.is_constant(),
        }
    }

    /// If the expression is a [`Constant`], returns a reference to it.
    pub fn as_constant(&self) -> Option<&Constant> {
        match self {
            Self::Constant(constant) => Some(constant),
            _ => None,
        }
    }

    /// If the expression is a [`Variable`], returns a reference to it.
    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Self::Variable(var) => Some(var),
            _ => None,
        }
    }

    /// Returns true if the expression is a constant whose value is exactly `0.0`.
    pub fn is_zero(&self) -> bool {
        self.as_constant().map(|c| c.value() == 0.0).unwrap_or(false)
    }

    /// Returns true if the expression is a constant whose value is exactly `1.0`.
    pub fn is_one(&self) -> bool {
        self.as_constant().map(|c| c.value() == 1.0).unwrap_or(false)
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the number of nodes in the expression. Shared subexpressions are counted once for
    /// every place they appear in.
    pub fn complexity(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns the names of the variables in the expression, without duplicates, in the order
    /// they are first encountered in a post-order traversal.
    pub fn variables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for var in self.post_order_iter().filter_map(Expr::as_variable) {
            if !names.contains(&var.name()) {
                names.push(var.name());
            }
        }
        names
    }
}

/// Builds an [`Expr::Binary`] addition node. No simplification is done.
impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::add(self, rhs)
    }
}

/// Builds an [`Expr::Binary`] subtraction node. No simplification is done.
impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::sub(self, rhs)
    }
}

/// Builds an [`Expr::Binary`] multiplication node. No simplification is done.
impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::mul(self, rhs)
    }
}

/// Builds an [`Expr::Binary`] division node. No simplification is done.
impl Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::div(self, rhs)
    }
}
