//! Karatsuba multiplication of decimal big integers.
//!
//! Each level splits both operands at `half = max_len / 2` digits and needs
//! three sub-products instead of four:
//!
//! ```text
//! z0 = low1 * low2
//! z1 = (low1 + high1) * (low2 + high2)
//! z2 = high1 * high2
//! x * y = z2 * 10^(2 half) + (z1 - z2 - z0) * 10^half + z0
//! ```
//!
//! `z1 - z2 - z0` equals `low1 * high2 + high1 * low2` and is never negative.
//! The recursion bottoms out once either operand is a single digit. That
//! product goes through [`BigDigits::mul_digit`], because the other operand
//! may still be arbitrarily long.

use crate::arith::digits::BigDigits;
use crate::error::Result;
use crate::monitor::{Monitor, NoOperationMonitor, Step};

fn base_case(x: &BigDigits, y: &BigDigits) -> Option<BigDigits> {
    if let Some(d) = x.small_value() {
        return Some(y.mul_digit(d));
    }
    y.small_value().map(|d| x.mul_digit(d))
}

#[inline]
fn split_point(x: &BigDigits, y: &BigDigits) -> usize {
    x.digit_len().max(y.digit_len()) / 2
}

fn combine(z0: &BigDigits, z1: &BigDigits, z2: &BigDigits, half: usize) -> BigDigits {
    let middle = &(z1 - z2) - z0;
    &(&z2.shl_digits(2 * half) + &middle.shl_digits(half)) + z0
}

fn karatsuba<M>(x: &BigDigits, y: &BigDigits, monitor: &mut M, depth: usize) -> BigDigits
where
    M: Monitor + ?Sized,
{
    if let Some(product) = base_case(x, y) {
        monitor.on_step(&Step::BaseCase { depth, lhs: x, rhs: y, product: &product });
        return product;
    }

    let half = split_point(x, y);
    let (high1, low1) = x.split_at(half);
    let (high2, low2) = y.split_at(half);
    // One split line per level, for the left operand.
    monitor.on_step(&Step::Split { depth, half, value: x, high: &high1, low: &low1 });

    let z0 = karatsuba(&low1, &low2, monitor, depth + 1);
    let z1 = karatsuba(&(&low1 + &high1), &(&low2 + &high2), monitor, depth + 1);
    let z2 = karatsuba(&high1, &high2, monitor, depth + 1);

    let result = combine(&z0, &z1, &z2, half);
    monitor.on_step(&Step::Combine { depth, result: &result });
    result
}

/// Exact product of two non-negative integers.
pub fn multiply(a: &BigDigits, b: &BigDigits) -> BigDigits {
    multiply_with(a, b, &mut NoOperationMonitor)
}

/// Like [`multiply`], reporting every split, base case and combine to `monitor`.
pub fn multiply_with<M>(a: &BigDigits, b: &BigDigits, monitor: &mut M) -> BigDigits
where
    M: Monitor + ?Sized,
{
    log::debug!("karatsuba on {} x {} digits", a.digit_len(), b.digit_len());
    karatsuba(a, b, monitor, 0)
}

/// Parses two decimal strings and multiplies them. Fails with `InvalidInput`
/// naming the first non-digit character.
pub fn multiply_str(a: &str, b: &str) -> Result<BigDigits> {
    let a = BigDigits::parse(a)?;
    let b = BigDigits::parse(b)?;
    Ok(multiply(&a, &b))
}

/// Like [`multiply`], computing the three sub-products of large levels on
/// scoped threads. The product is identical to the sequential one.
#[cfg(feature = "threads")]
pub fn multiply_par(a: &BigDigits, b: &BigDigits) -> BigDigits {
    log::debug!("parallel karatsuba on {} x {} digits", a.digit_len(), b.digit_len());
    karatsuba_par(a, b, 0)
}

#[cfg(feature = "threads")]
fn karatsuba_par(x: &BigDigits, y: &BigDigits, depth: usize) -> BigDigits {
    use crate::limits::{PAR_MAX_DEPTH, PAR_MIN_DIGITS};

    if depth >= PAR_MAX_DEPTH || x.digit_len().max(y.digit_len()) < PAR_MIN_DIGITS {
        return karatsuba(x, y, &mut NoOperationMonitor, depth);
    }
    if let Some(product) = base_case(x, y) {
        return product;
    }

    let half = split_point(x, y);
    let (high1, low1) = x.split_at(half);
    let (high2, low2) = y.split_at(half);
    let (sum1, sum2) = (&low1 + &high1, &low2 + &high2);

    let (z0, z1, z2) = std::thread::scope(|scope| {
        let h0 = scope.spawn(|| karatsuba_par(&low1, &low2, depth + 1));
        let h2 = scope.spawn(|| karatsuba_par(&high1, &high2, depth + 1));
        let z1 = karatsuba_par(&sum1, &sum2, depth + 1);
        (crate::par::join(h0), z1, crate::par::join(h2))
    });
    combine(&z0, &z1, &z2, half)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::StepRecorder;

    fn big(s: &str) -> BigDigits {
        s.parse().unwrap()
    }

    #[test]
    fn single_digit_operands() {
        for a in 0..10u64 {
            for b in 0..10u64 {
                assert_eq!(multiply(&BigDigits::from(a), &BigDigits::from(b)), BigDigits::from(a * b));
            }
        }
    }

    #[test]
    fn single_digit_times_long_operand() {
        let long = big("98765432109876543210987654321098765432109876543210");
        assert_eq!(multiply(&big("7"), &long), long.mul_digit(7));
        assert_eq!(multiply(&long, &big("7")), long.mul_digit(7));
    }

    #[test]
    fn combine_reassembles_parts() {
        // 1234 * 5678 with half = 2: z0 = 34*78, z1 = 46*134, z2 = 12*56
        let got = combine(&big("2652"), &big("6164"), &big("672"), 2);
        assert_eq!(got, big("7006652"));
    }

    #[test]
    fn uneven_lengths() {
        assert_eq!(multiply(&big("12"), &big("345678")), big("4148136"));
        assert_eq!(multiply(&big("100000"), &big("99")), big("9900000"));
    }

    #[test]
    fn one_split_line_per_level() {
        let mut rec = StepRecorder::new();
        let got = multiply_with(&big("1234"), &big("5678"), &mut rec);
        assert_eq!(got, big("7006652"));
        let first: Vec<&str> = rec.lines().take(2).collect();
        assert_eq!(first, vec!["split: 1234 = 12*10^2 + 34", "  split: 34 = 3*10^1 + 4"]);
        assert_eq!(rec.count("split"), rec.count("combine"));
        assert_eq!(rec.lines().last(), Some("combine: result = 7006652"));
    }
}
