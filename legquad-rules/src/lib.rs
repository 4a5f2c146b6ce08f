//! Gauss-Legendre quadrature rules for the reference interval `[-1, 1]`.
//!
//! The main purpose of this crate is to support the `legquad` integration library. It only deals
//! with `f64` rules on the reference interval and has no numerical dependencies, so that
//! the rules may be used completely independently of `legquad`.

use std::fmt;
use std::fmt::{Display, Formatter};

pub mod univariate;

/// Library-wide error type.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A parameter was outside of its admissible range.
    InvalidArgument {
        /// The name of the offending parameter.
        parameter: &'static str,
        message: String,
    },
}

impl Error {
    pub(crate) fn invalid_argument(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            message: message.into(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { parameter, message } => {
                write!(f, "Invalid argument `{}`: {}", parameter, message)
            }
        }
    }
}

impl std::error::Error for Error {}

/// A one-dimensional rule, stored as `(nodes, weights)`.
///
/// Entry `i` of the weights belongs to entry `i` of the nodes.
pub type Rule = (Vec<f64>, Vec<f64>);

/// Approximates the integral of `f` with the given rule.
///
/// No rescaling takes place: the rule is applied to `f` exactly as it is, so for rules
/// produced by [`univariate::gauss`] this approximates the integral over `[-1, 1]`.
pub fn integrate(rule: &Rule, f: impl Fn(f64) -> f64) -> f64 {
    let (nodes, weights) = rule;
    assert_eq!(nodes.len(), weights.len(), "nodes and weights must have the same length");
    nodes
        .iter()
        .zip(weights)
        .map(|(&x, &w)| w * f(x))
        .sum()
}
