//! Integrates $x^6 - x^2 \sin(2x)$ over `[a, b]` with `N` Gauss-Legendre points.
//!
//! Usage: `cargo run --example integrate -- [a] [b] [N]`, defaulting to `1 3 20`.
//!
//! In addition to the requested value, a table of results for increasing orders is printed.
//! The value has converged once it no longer changes in the significant digits.
use eyre::{eyre, WrapErr};
use legquad::integrate;
use rayon::prelude::*;
use std::env;

fn parse_arg<T>(args: &[String], index: usize, name: &str, default: T) -> eyre::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match args.get(index) {
        Some(arg) => arg
            .parse()
            .wrap_err_with(|| format!("Failed to parse {name} from \"{arg}\"")),
        None => Ok(default),
    }
}

fn main() -> eyre::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() > 3 {
        return Err(eyre!("Expected at most three arguments: a b N"));
    }
    let a: f64 = parse_arg(&args, 0, "a", 1.0)?;
    let b: f64 = parse_arg(&args, 1, "b", 3.0)?;
    let order: i64 = parse_arg(&args, 2, "N", 20)?;

    let result = integrate(a, b, order)?;
    println!("Integral of x^6 - x^2 sin(2x) over [{a}, {b}] with N = {order}: {result:.15}");

    // Each order is an independent integration, so the table is computed in parallel
    let orders: Vec<usize> = (1..=8).map(|k| 5 * k).collect();
    let table = orders
        .par_iter()
        .map(|&n| integrate(a, b, n).map(|value| (n, value)))
        .collect::<Result<Vec<_>, _>>()?;

    println!();
    println!("{:>5} {:>25} {:>12}", "N", "value", "change");
    let mut previous: Option<f64> = None;
    for (n, value) in table {
        match previous {
            Some(previous) => println!("{:>5} {:>25.15} {:>12.3e}", n, value, (value - previous).abs()),
            None => println!("{:>5} {:>25.15} {:>12}", n, value, "-"),
        }
        previous = Some(value);
    }

    Ok(())
}
