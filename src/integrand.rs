//! Integrands, i.e. the functions being integrated.
use crate::nalgebra::DVector;
use crate::Real;
use numeric_literals::replace_float_literals;

/// A scalar function $f: \mathbb{R} \rightarrow \mathbb{R}$ that can be integrated.
///
/// Implemented for every closure `Fn(T) -> T`, so that plain closures can be passed wherever an
/// integrand is expected.
pub trait Integrand<T: Real> {
    fn evaluate(&self, x: T) -> T;

    /// Evaluates the integrand at every entry of `x`.
    fn evaluate_elementwise(&self, x: &DVector<T>) -> DVector<T> {
        x.map(|x_i| self.evaluate(x_i))
    }
}

impl<T, F> Integrand<T> for F
where
    T: Real,
    F: Fn(T) -> T,
{
    fn evaluate(&self, x: T) -> T {
        self(x)
    }
}

/// The integrand $f(x) = x^6 - x^2 \sin(2x)$.
///
/// The argument of the sine is in radians.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PolyTrigIntegrand;

impl<T: Real> Integrand<T> for PolyTrigIntegrand {
    #[replace_float_literals(T::from_f64(literal).expect("Literal must fit in T"))]
    fn evaluate(&self, x: T) -> T {
        x.powi(6) - x.powi(2) * (2.0 * x).sin()
    }
}

/// Evaluates $f(x) = x^6 - x^2 \sin(2x)$ at `x`.
pub fn evaluate_integrand<T: Real>(x: T) -> T {
    PolyTrigIntegrand.evaluate(x)
}

/// Evaluates $f(x) = x^6 - x^2 \sin(2x)$ at every entry of `x`.
///
/// The output has the same length as `x`.
pub fn evaluate_integrand_elementwise<T: Real>(x: &DVector<T>) -> DVector<T> {
    PolyTrigIntegrand.evaluate_elementwise(x)
}
