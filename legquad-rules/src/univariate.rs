//! Gauss-Legendre rules for the one-dimensional domain `[-1, 1]`.

use crate::{Error, Rule};
use log::{trace, warn};
use std::f64::consts::PI;

/// Upper bound on the number of Newton iterations spent on a single root.
const MAX_NEWTON_ITERATIONS: usize = 100;

/// Newton steps at or below this length are considered converged.
const NEWTON_STEP_TOLERANCE: f64 = 1e-15;

/// The Legendre polynomial `P_n` and its predecessor `P_{n-1}`, evaluated at a point.
///
/// Note: the derivative formula is *not* defined at |x| == 1, so this is only
/// suitable for evaluation in the open interval (-1, 1).
#[derive(Debug, Default, Clone, Copy)]
struct LegendreRecurrence {
    n: usize,
    x: f64,
    // p_n(x)
    p_n: f64,
    // p_{n - 1}(x)
    p_n_minus_1: f64,
}

impl LegendreRecurrence {
    fn evaluate(n: usize, x: f64) -> Self {
        //  m P_m(x) = (2m - 1) * x P_{m - 1}(x) - (m - 1) P_{m - 2}(x)
        let mut p_n = 1.0;
        let mut p_n_minus_1 = 0.0;
        for m in 1..=n {
            let m = m as f64;
            let p_n_minus_2 = p_n_minus_1;
            p_n_minus_1 = p_n;
            p_n = ((2.0 * m - 1.0) * x * p_n_minus_1 - (m - 1.0) * p_n_minus_2) / m;
        }

        Self {
            n,
            x,
            p_n,
            p_n_minus_1,
        }
    }

    fn value(&self) -> f64 {
        self.p_n
    }

    fn derivative(&self) -> f64 {
        let n = self.n as f64;
        let x = self.x;
        // dP_n/dx (x) = n * (x * P_n(x) - P_{n - 1}(x)) / (x^2 - 1)
        n * (x * self.p_n - self.p_n_minus_1) / (x * x - 1.0)
    }
}

/// Refines an initial guess for a root of `P_n` with Newton's method.
///
/// Returns the root together with the derivative `P_n'` evaluated at the root.
fn newton_refine_root(n: usize, initial_guess: f64) -> (f64, f64) {
    let mut x = initial_guess;
    let mut recurrence = LegendreRecurrence::evaluate(n, x);

    for iteration in 1..=MAX_NEWTON_ITERATIONS {
        let dx = -recurrence.value() / recurrence.derivative();
        x += dx;
        recurrence = LegendreRecurrence::evaluate(n, x);
        if dx.abs() <= NEWTON_STEP_TOLERANCE {
            trace!("Root {} of P_{} converged after {} Newton iterations", x, n, iteration);
            return (x, recurrence.derivative());
        }
    }

    warn!(
        "Newton iteration for a root of P_{} did not converge in {} iterations, using x = {}",
        n, MAX_NEWTON_ITERATIONS, x
    );
    (x, recurrence.derivative())
}

/// Gauss-Legendre quadrature for the reference interval [-1, 1].
///
/// Returns the [Gauss quadrature rule] with the given number of points as `(nodes, weights)`.
/// Given `n` points, the rule integrates polynomials of order up to `2 n - 1` exactly.
///
/// The nodes are sorted in ascending order and are exactly symmetric about zero, i.e.
/// `nodes[i] == -nodes[n - 1 - i]`. All weights are positive and sum to 2.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `num_points` is zero, or if it cannot be represented
/// as a `usize` (for example a negative signed integer).
///
/// [Gauss quadrature rule]: https://en.wikipedia.org/wiki/Gaussian_quadrature
pub fn gauss<N>(num_points: N) -> Result<Rule, Error>
where
    N: TryInto<usize>,
{
    let n: usize = num_points
        .try_into()
        .map_err(|_| Error::invalid_argument("num_points", "must be a non-negative integer"))?;
    if n == 0 {
        return Err(Error::invalid_argument(
            "num_points",
            "at least one quadrature point is required",
        ));
    }

    // Loosely based on the procedure used in
    // Numerical Recipes, The art of Scientific Computing, Third Edition (2007)
    let m = (n + 1) / 2;
    let mut nodes = vec![0.0; n];
    let mut weights = vec![0.0; n];

    // Only find the m non-negative roots, in descending order. The rest follow by symmetry
    for i in 0..m {
        let (x, dp) = if 2 * i + 1 == n {
            // Legendre polynomials of odd degree vanish at the origin
            (0.0, LegendreRecurrence::evaluate(n, 0.0).derivative())
        } else {
            let initial_guess = (PI * (i as f64 + 0.75) / (n as f64 + 0.5)).cos();
            newton_refine_root(n, initial_guess)
        };

        // Once a root is known, its weight is given explicitly by a standard formula
        let w = 2.0 / ((1.0 - x * x) * dp * dp);

        // For odd n, both writes of the middle root target the same slot
        nodes[i] = -x;
        weights[i] = w;
        nodes[n - 1 - i] = x;
        weights[n - 1 - i] = w;
    }

    Ok((nodes, weights))
}
