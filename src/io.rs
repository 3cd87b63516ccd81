//! Instance parsing for the command-line front end.
//!
//! The input is whitespace separated: `n k` followed by `n` coordinate
//! pairs. Line structure is not significant; tokens may span lines.

use std::io::Read;
use std::str::FromStr;

use crate::point::Point;

/// A parsed problem instance. `k` is not range-checked here; the engine
/// constructor owns that validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub points: Vec<Point>,
    pub k: usize,
}

/// Read `n`, `k`, then `n` coordinate pairs from `input`.
pub fn read_instance<R: Read>(mut input: R) -> Result<Instance, String> {
    let mut buf = String::new();
    input
        .read_to_string(&mut buf)
        .map_err(|err| format!("read error: {err}"))?;
    parse_instance(&buf)
}

/// Parse an instance from an in-memory string.
pub fn parse_instance(text: &str) -> Result<Instance, String> {
    let mut tokens = text.split_whitespace();
    let n: usize = next_value(&mut tokens, "point count n")?;
    let k: usize = next_value(&mut tokens, "combination size k")?;

    let mut points = Vec::with_capacity(n);
    for idx in 0..n {
        let x: f64 = next_value(&mut tokens, &format!("x coordinate of point {idx}"))?;
        let y: f64 = next_value(&mut tokens, &format!("y coordinate of point {idx}"))?;
        points.push(Point::new(x, y));
    }

    Ok(Instance { points, k })
}

fn next_value<'a, T, I>(tokens: &mut I, what: &str) -> Result<T, String>
where
    T: FromStr,
    I: Iterator<Item = &'a str>,
{
    let token = tokens.next().ok_or_else(|| format!("missing {what}"))?;
    token
        .parse::<T>()
        .map_err(|_| format!("invalid {what} '{token}'"))
}
