//! Integration of functions over finite intervals.
use crate::integrand::{Integrand, PolyTrigIntegrand};
use crate::quadrature::{gauss_legendre, rescale_to_interval};
use crate::{Error, Real};
use log::debug;

/// Approximates $\int_a^b x^6 - x^2 \sin(2x) \, \mathrm{d}x$ with a Gauss-Legendre rule of
/// the given order.
///
/// This is [`integrate_with`] applied to [`PolyTrigIntegrand`].
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `order` is not a positive integer.
pub fn integrate<T, N>(a: T, b: T, order: N) -> Result<T, Error>
where
    T: Real,
    N: TryInto<usize>,
{
    integrate_with(a, b, order, PolyTrigIntegrand)
}

/// Approximates $\int_a^b f(x) \, \mathrm{d}x$ with a Gauss-Legendre rule of the given order.
///
/// The standard rule is rescaled to `[a, b]`, the integrand is evaluated at the scaled nodes
/// and the result is the dot product of the integrand values with the scaled weights.
/// Swapping `a` and `b` flips the sign of the result, and `a == b` gives zero.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `order` is not a positive integer.
pub fn integrate_with<T, N, F>(a: T, b: T, order: N, f: F) -> Result<T, Error>
where
    T: Real,
    N: TryInto<usize>,
    F: Integrand<T>,
{
    let (nodes, weights) = gauss_legendre(order)?;
    debug!("Integrating over [{:?}, {:?}] with {} Gauss-Legendre points", a, b, nodes.len());

    let (scaled_nodes, scaled_weights) = rescale_to_interval(a, b, &nodes, &weights);
    let values = f.evaluate_elementwise(&scaled_nodes);
    Ok(values.dot(&scaled_weights))
}
