//! Named constants used by the library.
//!
//! The five reserved constants (`0`, `1`, `-1`, `e` and `pi`) are available as lazily built
//! statics, and through the closed-name lookup [`constant`]. Ad-hoc values are created with
//! [`custom_constant`], which never touches any shared state.
//!
//! A [`ConstantRegistry`] is an explicit, caller-owned table of named constants. It starts out
//! with the reserved constants, and can be extended with user-defined names or with values that
//! are named after their own decimal rendering (see [`ConstantRegistry::get_or_insert_value`]).

use crate::error::{kind::UnknownConstant, Error};
use crate::symbolic::expr::Constant;
use levenshtein::levenshtein;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

/// The names of the reserved constants.
pub mod name {
    pub const ZERO: &str = "0";
    pub const ONE: &str = "1";
    pub const MINUS_ONE: &str = "-1";

    /// Euler's number.
    pub const E: &str = "e";

    pub const PI: &str = "pi";

    /// All reserved names, in the order above.
    pub const RESERVED: [&str; 5] = [ZERO, ONE, MINUS_ONE, E, PI];
}

pub static ZERO: Lazy<Constant> = Lazy::new(|| Constant::new(name::ZERO, 0.0));

pub static ONE: Lazy<Constant> = Lazy::new(|| Constant::new(name::ONE, 1.0));

pub static MINUS_ONE: Lazy<Constant> = Lazy::new(|| Constant::new(name::MINUS_ONE, -1.0));

/// Euler's number.
pub static E: Lazy<Constant> = Lazy::new(|| Constant::new(name::E, std::f64::consts::E));

pub static PI: Lazy<Constant> = Lazy::new(|| Constant::new(name::PI, std::f64::consts::PI));

/// Returns the reserved constant with the given name, if there is one.
fn reserved(name: &str) -> Option<&'static Constant> {
    match name {
        name::ZERO => Some(&*ZERO),
        name::ONE => Some(&*ONE),
        name::MINUS_ONE => Some(&*MINUS_ONE),
        name::E => Some(&*E),
        name::PI => Some(&*PI),
        _ => None,
    }
}

/// Returns all names from `candidates` that are similar to `name`.
fn similar<'a>(name: &str, candidates: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut suggestions = candidates
        .into_iter()
        .filter(|candidate| levenshtein(candidate, name) < 2)
        .map(str::to_string)
        .collect::<Vec<_>>();
    suggestions.sort();
    suggestions
}

/// Builds the error returned when a constant lookup misses.
fn unknown_constant<'a>(name: &str, candidates: impl IntoIterator<Item = &'a str>) -> Error {
    Error::new(
        vec![0..name.len()],
        UnknownConstant {
            name: name.to_string(),
            suggestions: similar(name, candidates),
        },
    )
}

/// Looks up one of the reserved constants by name.
///
/// Only the names in [`name::RESERVED`] are accepted; any other name fails with
/// [`UnknownConstant`]. The error's span covers the whole name.
pub fn constant(name: &str) -> Result<Constant, Error> {
    reserved(name)
        .cloned()
        .ok_or_else(|| unknown_constant(name, name::RESERVED))
}

/// Creates a constant with the given name and value. No registry is involved.
pub fn custom_constant(name: impl Into<String>, value: f64) -> Constant {
    Constant::new(name, value)
}

/// Returns the name used for an unnamed numeric value: its shortest decimal rendering that
/// round-trips back to the same `f64` (`2.0` is named `2`, `35.2` is named `35.2`).
pub fn value_name(value: f64) -> String {
    value.to_string()
}

/// A caller-owned table of named constants.
///
/// The [`Default`] registry contains the reserved constants. Reserved names can never be
/// rebound.
#[derive(Debug, Clone)]
pub struct ConstantRegistry {
    constants: HashMap<String, Constant>,
}

impl Default for ConstantRegistry {
    fn default() -> Self {
        Self {
            constants: name::RESERVED
                .iter()
                .filter_map(|name| reserved(name))
                .map(|constant| (constant.name().to_string(), constant.clone()))
                .collect(),
        }
    }
}

impl ConstantRegistry {
    /// Creates a registry containing the reserved constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the constant with the given name.
    ///
    /// Fails with [`UnknownConstant`] if nothing is registered under the name. The error
    /// suggests registered names that are spelled similarly.
    pub fn get(&self, name: &str) -> Result<Constant, Error> {
        self.constants
            .get(name)
            .cloned()
            .ok_or_else(|| unknown_constant(name, self.names()))
    }

    /// Registers a constant under the given name, replacing any previous user-defined constant
    /// with the same name.
    ///
    /// Returns false, leaving the registry unchanged, if the name is reserved.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> bool {
        let name = name.into();
        if reserved(&name).is_some() {
            return false;
        }

        debug!(%name, value, "registering constant");
        self.constants.insert(name.clone(), Constant::new(name, value));
        true
    }

    /// Returns the constant named after `value` (see [`value_name`]), registering it first if
    /// needed.
    ///
    /// If a constant with that name is already registered, it is returned as-is, even if it was
    /// registered with a different value by [`ConstantRegistry::insert`].
    pub fn get_or_insert_value(&mut self, value: f64) -> Constant {
        let name = value_name(value);
        self.constants
            .entry(name)
            .or_insert_with_key(|name| {
                debug!(%name, value, "registering constant from value");
                Constant::new(name.clone(), value)
            })
            .clone()
    }

    /// Returns true if a constant is registered under the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }

    /// Returns the registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constants.keys().map(String::as_str)
    }

    /// Returns the number of registered constants.
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    /// Returns true if no constants are registered. This is never the case for a registry built
    /// with [`ConstantRegistry::new`].
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn reserved_values() {
        assert_eq!(constant("0").unwrap().value(), 0.0);
        assert_eq!(constant("1").unwrap().value(), 1.0);
        assert_eq!(constant("-1").unwrap().value(), -1.0);
        assert_eq!(constant("e").unwrap().value(), std::f64::consts::E);
        assert_eq!(constant("pi").unwrap().value(), std::f64::consts::PI);
    }

    #[test]
    fn unknown_name_fails() {
        let err = constant("tau").unwrap_err();
        assert!(err.is::<UnknownConstant>());
        assert_eq!(err.spans, vec![0..3]);
    }

    #[test]
    fn unknown_name_suggests() {
        let err = constant("pie").unwrap_err();
        let kind = err.downcast_ref::<UnknownConstant>().unwrap();
        assert_eq!(kind.suggestions, vec!["pi".to_string()]);
    }

    #[test]
    fn custom() {
        let k = custom_constant("k", 35.0);
        assert_eq!(k.name(), "k");
        assert_eq!(k.value(), 35.0);
    }

    #[test]
    fn value_names() {
        assert_eq!(value_name(35.2), "35.2");
        assert_eq!(value_name(2.0), "2");
        assert_eq!(value_name(-0.5), "-0.5");
    }

    #[test]
    fn registry_starts_with_reserved() {
        let registry = ConstantRegistry::new();
        assert_eq!(registry.len(), 5);
        for name in name::RESERVED {
            assert!(registry.contains(name));
        }
        assert_eq!(registry.get("pi").unwrap().value(), std::f64::consts::PI);
    }

    #[test]
    fn registry_rejects_reserved_names() {
        let mut registry = ConstantRegistry::new();
        assert!(!registry.insert("pi", 3.0));
        assert_eq!(registry.get("pi").unwrap().value(), std::f64::consts::PI);
    }

    #[test]
    fn registry_insert_and_get() {
        let mut registry = ConstantRegistry::new();
        assert!(registry.get("g").is_err());
        assert!(registry.insert("g", 9.81));
        assert_eq!(registry.get("g").unwrap(), Constant::new("g", 9.81));
    }

    #[test]
    fn registry_extends_from_value() {
        let mut registry = ConstantRegistry::new();
        let c = registry.get_or_insert_value(35.2);
        assert_eq!(c.name(), "35.2");
        assert_eq!(c.value(), 35.2);
        assert_eq!(registry.len(), 6);

        // looking it up again does not register a second copy
        registry.get_or_insert_value(35.2);
        assert_eq!(registry.len(), 6);

        // reserved values resolve to the reserved constants
        assert_eq!(registry.get_or_insert_value(-1.0), MINUS_ONE.clone());
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn registry_suggests_registered_names() {
        let mut registry = ConstantRegistry::new();
        registry.insert("g", 9.81);
        let err = registry.get("gg").unwrap_err();
        let kind = err.downcast_ref::<UnknownConstant>().unwrap();
        assert_eq!(kind.suggestions, vec!["g".to_string()]);
    }
}
