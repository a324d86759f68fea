use std::fmt;

/// A rewrite applied while simplifying an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `0-a = a`
    /// `a-0 = a`
    SubZero,

    /// `0*a = 0`
    /// `a*0 = 0`
    MulZero,

    /// `1*a = a`
    /// `a*1 = a`
    MulOne,

    /// `0/a = 0`
    DivZeroNumerator,

    /// `a/1 = a`
    DivOne,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = match self {
            Self::AddZero => "a + 0 = a",
            Self::SubZero => "a - 0 = a, 0 - a = a",
            Self::MulZero => "a * 0 = 0",
            Self::MulOne => "a * 1 = a",
            Self::DivZeroNumerator => "0 / a = 0",
            Self::DivOne => "a / 1 = a",
        };
        write!(f, "{}", rule)
    }
}
