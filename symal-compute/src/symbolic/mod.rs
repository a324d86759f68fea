//! Symbolic manipulation of expressions.
//!
//! # Expression representation
//!
//! Expressions are trees of [`Expr`] nodes, built bottom-up by the caller from [`Constant`]s,
//! [`Variable`]s and the constructors on [`Expr`]. Unlike the trees produced by a parser, these
//! are never flattened or reordered: the tree has exactly the shape it was built with, and
//! renders fully parenthesized.
//!
//! ```
//! use symal_compute::consts::custom_constant;
//! use symal_compute::symbolic::expr::{Expr, Variable};
//!
//! let x = Variable::new("x");
//! let y = Expr::sub(Expr::mul(custom_constant("4", 4.0), &x), Expr::one());
//! assert_eq!(y.to_string(), "((4 * x) - 1)");
//!
//! x.set_value(2.0);
//! assert_eq!(y.eval().unwrap(), 7.0);
//! ```
//!
//! # Operations
//!
//! Every node supports:
//!
//! - evaluation with the current values of its variables ([`Expr::eval`]),
//! - dependency tests ([`Expr::function_of`] and [`Expr::is_constant`]),
//! - symbolic differentiation ([`derivative()`]),
//! - rendering (the [`Display`](std::fmt::Display) implementation),
//! - simplification ([`simplify()`]).
//!
//! Differentiation applies the calculus rules structurally and produces unsimplified results,
//! which [`simplify()`] then cleans up:
//!
//! ```
//! use symal_compute::consts::constant;
//! use symal_compute::symbolic::{derivative, expr::{Expr, Variable}, simplify};
//!
//! let x = Variable::new("x");
//! let d = derivative(&Expr::mul(constant("pi").unwrap(), &x), &x);
//! assert_eq!(d.to_string(), "(pi * 1)");
//! assert_eq!(simplify(&d).unwrap().to_string(), "pi");
//! ```
//!
//! [`Constant`]: expr::Constant
//! [`Variable`]: expr::Variable

pub mod derivative;
mod eval;
pub mod expr;
pub mod simplify;
pub mod step_collector;

pub use derivative::{derivative, derivative_n};
pub use expr::Expr;
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;
