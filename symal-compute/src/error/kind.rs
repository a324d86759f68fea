use ariadne::Fmt;
use symal_attrs::ErrorKind;
use symal_error::EXPR;

/// The denominator of a division evaluated to exactly zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this division", "this operand evaluated to zero"],
    help = "change the variable values so that the denominator is non-zero"
)]
pub struct DivisionByZero;

/// The operand of a logarithm evaluated to zero or a negative number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot take the natural logarithm of `{}`", self.value),
    labels = [
        "this logarithm".to_string(),
        format!("this operand evaluated to `{}`", self.value),
    ],
    help = "the natural logarithm is only defined for positive numbers"
)]
pub struct InvalidDomain {
    /// The value the operand evaluated to.
    pub value: f64,
}

/// Zero was raised to the power of zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "zero to the power of zero is undefined",
    labels = ["this power", "the base evaluated to zero", "the exponent evaluated to zero"]
)]
pub struct UndefinedResult;

/// The constant is not registered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a known constant", self.name),
    labels = ["this name"],
    help = if self.suggestions.is_empty() {
        format!(
            "to create a constant with this name, use `custom_constant({:?}, <value>)`",
            self.name
        )
    } else if self.suggestions.len() == 1 {
        format!("did you mean the `{}` constant?", (&*self.suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these constants? {}",
            self.suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
)]
pub struct UnknownConstant {
    /// The name that was looked up.
    pub name: String,

    /// Similarly named constants, if any.
    pub suggestions: Vec<String>,
}

/// Simplification found a division whose denominator is the constant zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "this expression always divides by zero",
    labels = ["this division", "this operand simplifies to zero"],
    help = "the expression is undefined for every value of its variables"
)]
pub struct DivisionByZeroInExpression;
