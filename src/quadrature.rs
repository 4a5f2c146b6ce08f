//! Standard Gauss-Legendre rules and their rescaling to arbitrary intervals.
use crate::nalgebra::{convert, DVector};
use crate::{Error, Real};
use itertools::izip;
use legquad_rules::univariate;
use numeric_literals::replace_float_literals;

/// A one-dimensional rule stored as `(nodes, weights)`.
pub type NodesAndWeights<T> = (DVector<T>, DVector<T>);

/// Nodes and weights of the Gauss-Legendre rule with the given order on `[-1, 1]`.
///
/// The nodes are the roots of the Legendre polynomial $P_N$ in ascending order, and the weights
/// are given by
/// <div>$$
///   w_i = \frac{2}{(1 - x_i^2) [P_N'(x_i)]^2}.
/// $$</div>
/// The weights are positive and sum to 2.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `order` is not a positive integer.
pub fn gauss_legendre<T, N>(order: N) -> Result<NodesAndWeights<T>, Error>
where
    T: Real,
    N: TryInto<usize>,
{
    let (nodes, weights) = univariate::gauss(order)?;
    Ok(convert_rule_from_f64((nodes, weights)))
}

fn convert_rule_from_f64<T>(rule: legquad_rules::Rule) -> NodesAndWeights<T>
where
    T: Real,
{
    let (nodes, weights) = rule;
    let nodes = DVector::from_iterator(nodes.len(), nodes.into_iter().map(convert));
    let weights = DVector::from_iterator(weights.len(), weights.into_iter().map(convert));
    (nodes, weights)
}

/// Rescales a rule on `[-1, 1]` to the interval `[a, b]`.
///
/// Nodes are mapped by $x \mapsto \frac{b - a}{2} x + \frac{b + a}{2}$ and weights are
/// multiplied by $\frac{b - a}{2}$. Order and length are preserved.
///
/// Both `a == b` and `a > b` are admissible: the former gives zero weights and the latter
/// negative weights, so that integrals change sign when the bounds are swapped.
///
/// # Panics
///
/// Panics if `nodes` and `weights` do not have the same length.
#[replace_float_literals(T::from_f64(literal).expect("Literal must fit in T"))]
pub fn rescale_to_interval<T>(a: T, b: T, nodes: &DVector<T>, weights: &DVector<T>) -> NodesAndWeights<T>
where
    T: Real,
{
    assert_eq!(
        nodes.len(),
        weights.len(),
        "Nodes and weights must have the same length."
    );
    let half_length = 0.5 * (b - a);
    let midpoint = 0.5 * (b + a);

    let mut scaled_nodes = DVector::zeros(nodes.len());
    let mut scaled_weights = DVector::zeros(weights.len());
    for (x_scaled, w_scaled, &x, &w) in izip!(scaled_nodes.iter_mut(), scaled_weights.iter_mut(), nodes, weights) {
        *x_scaled = half_length * x + midpoint;
        *w_scaled = half_length * w;
    }

    (scaled_nodes, scaled_weights)
}
