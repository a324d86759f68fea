//! The leaves of an expression tree: [`Constant`]s and [`Variable`]s.

use std::{cell::Cell, fmt, rc::Rc};

/// A named, fixed numeric value, such as `pi` or a user-defined `k = 35`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    name: String,
    value: f64,
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Constant {
    /// Creates a new constant. Prefer [`crate::consts::constant`] for the reserved constants.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self { name: name.into(), value }
    }

    /// Returns the name of the constant, which is also how it is rendered.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// A named numeric cell whose value can be changed between evaluations.
///
/// Cloning a [`Variable`] produces another handle to the **same** value: setting the value
/// through one handle is visible through every other handle, including the ones stored inside
/// expression trees. The value starts out as `0.0`.
///
/// Two variables are considered to be the same symbol if their names are equal, regardless of
/// whether they share a value cell. This affects [`PartialEq`], and every dependency test and
/// derivative in this crate.
#[derive(Clone)]
pub struct Variable {
    name: String,
    value: Rc<Cell<f64>>,
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variable")
            .field("name", &self.name)
            .field("value", &self.value.get())
            .finish()
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Name equality. The current values are not compared.
impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Variable {}

impl Variable {
    /// Creates a new variable with the value `0.0`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Rc::new(Cell::new(0.0)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current value of the variable.
    pub fn value(&self) -> f64 {
        self.value.get()
    }

    /// Sets the value of the variable, for every handle to it.
    pub fn set_value(&self, value: f64) {
        self.value.set(value);
    }

    /// Returns true if this variable and `other` are the same symbol, i.e. have the same name.
    pub fn is(&self, other: &Variable) -> bool {
        self.name == other.name
    }
}
