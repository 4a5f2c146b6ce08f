//! Gauss-Legendre integration of one-dimensional functions on finite intervals.
//!
//! The library is built from four small, stateless pieces that are composed by [`integrate`]:
//!
//! 1. [`gauss_legendre`] generates the nodes and weights of the standard rule on `[-1, 1]`,
//! 2. [`rescale_to_interval`] maps them affinely onto an interval `[a, b]`,
//! 3. [`evaluate_integrand`] evaluates the fixed integrand $f(x) = x^6 - x^2 \sin(2x)$,
//! 4. [`integrate`] reduces the integrand values against the weights.
//!
//! Arbitrary integrands can be integrated with [`integrate_with`].
//!
//! ```
//! use legquad::integrate;
//!
//! let approx: f64 = integrate(1.0, 3.0, 20).unwrap();
//! let converged: f64 = integrate(1.0, 3.0, 40).unwrap();
//! assert!((approx - converged).abs() < 1e-9);
//! ```
use nalgebra::RealField;

pub mod integrand;
pub mod integrate;
pub mod interval;
pub mod quadrature;

#[cfg(feature = "proptest")]
pub mod proptest;

pub extern crate nalgebra;

/// Errors returned by the library.
pub use legquad_rules::Error;

pub use integrand::{evaluate_integrand, evaluate_integrand_elementwise, Integrand, PolyTrigIntegrand};
pub use integrate::{integrate, integrate_with};
pub use interval::Interval;
pub use quadrature::{gauss_legendre, rescale_to_interval};

/// Real scalar types supported by the generic routines.
pub trait Real: RealField + Copy {}

impl<T: RealField + Copy> Real for T {}
