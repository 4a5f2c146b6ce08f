use crate::Interval;
use ::proptest::prelude::*;

/// Quadrature orders from 1 up to and including `max_order`.
pub fn order(max_order: usize) -> impl Strategy<Value = usize> {
    1..=max_order
}

pub fn interval() -> impl Strategy<Value = Interval<f64>> {
    // Pick a reasonably small range for the end points, the integrand grows like x^6 and
    // tolerances relative to the interval length stop being meaningful for huge values
    let range = -10.0..10.0;
    [range.clone(), range].prop_map(|[a, b]| Interval::new(a, b))
}

/// Intervals with `a <= b`.
pub fn ordered_interval() -> impl Strategy<Value = Interval<f64>> {
    interval().prop_map(|interval| {
        if interval.is_reversed() {
            interval.reversed()
        } else {
            interval
        }
    })
}

impl Arbitrary for Interval<f64> {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        interval().boxed()
    }
}
