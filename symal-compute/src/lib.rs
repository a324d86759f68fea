//! A small computer-algebra kernel.
//!
//! Build expression trees from constants and variables, then evaluate them numerically,
//! differentiate them symbolically, render them as text, and simplify them.
//!
//! - [`consts`]: the reserved constants and the [`ConstantRegistry`](consts::ConstantRegistry).
//! - [`symbolic`]: the expression tree and the algorithms on it.
//! - [`error`]: the kinds of errors the kernel can produce.

pub mod consts;
pub mod error;
pub mod symbolic;

pub use consts::{constant, custom_constant, ConstantRegistry};
pub use error::Error;
pub use symbolic::expr::{BinOpKind, Constant, Expr, Func, Variable};
