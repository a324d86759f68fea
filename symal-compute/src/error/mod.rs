//! Errors produced by the expression kernel.
//!
//! Every failure is a [`symal_error::Error`], carrying one of the kinds in [`kind`] and the
//! spans of the offending nodes within the rendered text of the expression the failing
//! operation was called on.

pub mod kind;

pub use symal_error::Error;
