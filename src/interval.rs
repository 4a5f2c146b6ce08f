//! Integration intervals and the affine map from the reference interval `[-1, 1]`.
use crate::integrand::Integrand;
use crate::nalgebra::Scalar;
use crate::quadrature::{gauss_legendre, rescale_to_interval, NodesAndWeights};
use crate::{integrate_with, Error, Real};
use numeric_literals::replace_float_literals;
use serde::{Deserialize, Serialize};

/// An integration interval with end points `a` and `b`.
///
/// The end points are not required to be ordered. An interval with `a > b` is *reversed*:
/// integrals over it carry the opposite sign of integrals over `[b, a]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval<T: Scalar> {
    a: T,
    b: T,
}

impl<T: Scalar> Interval<T> {
    pub fn new(a: T, b: T) -> Self {
        Self { a, b }
    }

    pub fn a(&self) -> &T {
        &self.a
    }

    pub fn b(&self) -> &T {
        &self.b
    }

    /// The interval with its end points swapped.
    pub fn reversed(&self) -> Self {
        Self::new(self.b.clone(), self.a.clone())
    }
}

impl<T: Real> Interval<T> {
    /// The signed length `b - a`.
    pub fn length(&self) -> T {
        self.b - self.a
    }

    #[replace_float_literals(T::from_f64(literal).expect("Literal must fit in T"))]
    pub fn half_length(&self) -> T {
        0.5 * (self.b - self.a)
    }

    #[replace_float_literals(T::from_f64(literal).expect("Literal must fit in T"))]
    pub fn midpoint(&self) -> T {
        0.5 * (self.b + self.a)
    }

    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    pub fn is_reversed(&self) -> bool {
        self.a > self.b
    }

    /// Maps a point on the reference interval `[-1, 1]` onto this interval.
    pub fn map_from_reference(&self, xi: T) -> T {
        self.half_length() * xi + self.midpoint()
    }

    /// The Gauss-Legendre rule of the given order, rescaled to this interval.
    pub fn gauss_legendre<N>(&self, order: N) -> Result<NodesAndWeights<T>, Error>
    where
        N: TryInto<usize>,
    {
        let (nodes, weights) = gauss_legendre(order)?;
        Ok(rescale_to_interval(self.a, self.b, &nodes, &weights))
    }

    /// Integrates `f` over this interval with a Gauss-Legendre rule of the given order.
    pub fn integrate<N>(&self, order: N, f: impl Integrand<T>) -> Result<T, Error>
    where
        N: TryInto<usize>,
    {
        integrate_with(self.a, self.b, order, f)
    }
}

impl<T: Scalar> From<[T; 2]> for Interval<T> {
    fn from([a, b]: [T; 2]) -> Self {
        Self::new(a, b)
    }
}

impl<T: Scalar> From<(T, T)> for Interval<T> {
    fn from((a, b): (T, T)) -> Self {
        Self::new(a, b)
    }
}
