//! Arbitrary-precision non-negative integers stored as decimal digits.
//!
//! Digits are kept least-significant first with no zero digits at the top,
//! so zero is the empty sequence and every value has exactly one
//! representation. Every primitive here works digit by digit with small
//! carries, which keeps all intermediate values far from any native-width
//! limit no matter how long the operands are.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use num_traits::{CheckedSub, One, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, InvalidInput, Result};

/// Base of the positional system.
pub const RADIX: u8 = 10;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigDigits {
    digits: Vec<u8>, // least significant first, canonical
}

#[inline]
fn trim(digits: &mut Vec<u8>) {
    while digits.last() == Some(&0) {
        digits.pop();
    }
}

fn add_le(a: &[u8], b: &[u8]) -> Vec<u8> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u8;
    for (i, &d) in long.iter().enumerate() {
        let s = d + short.get(i).copied().unwrap_or(0) + carry;
        out.push(s % RADIX);
        carry = s / RADIX;
    }
    if carry > 0 {
        out.push(carry);
    }
    out
}

// Both inputs canonical; None when b > a.
fn sub_le(a: &[u8], b: &[u8]) -> Option<Vec<u8>> {
    if b.len() > a.len() {
        return None;
    }
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0u8;
    for (i, &d) in a.iter().enumerate() {
        let rhs = b.get(i).copied().unwrap_or(0) + borrow;
        if d >= rhs {
            out.push(d - rhs);
            borrow = 0;
        } else {
            out.push(d + RADIX - rhs);
            borrow = 1;
        }
    }
    if borrow != 0 {
        return None;
    }
    trim(&mut out);
    Some(out)
}

impl BigDigits {
    fn from_le(mut digits: Vec<u8>) -> Self {
        trim(&mut digits);
        BigDigits { digits }
    }

    /// Parses a decimal string. Leading zeros are accepted and dropped.
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(InvalidInput::EmptyDigits.into());
        }
        if let Some((position, found)) = s.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(InvalidInput::NonDigit { position, found }.into());
        }
        Ok(Self::from_le(s.bytes().rev().map(|b| b - b'0').collect()))
    }

    /// Number of decimal digits in the canonical rendering; zero has one.
    #[inline]
    pub fn digit_len(&self) -> usize {
        self.digits.len().max(1)
    }

    /// The value itself when it is below the radix.
    #[inline]
    pub fn small_value(&self) -> Option<u8> {
        match self.digits.as_slice() {
            [] => Some(0),
            [d] => Some(*d),
            _ => None,
        }
    }

    /// Digits, least significant first. Empty for zero.
    #[inline]
    pub fn digits_le(&self) -> &[u8] {
        &self.digits
    }

    /// `self * d` for a single digit `d`.
    pub fn mul_digit(&self, d: u8) -> BigDigits {
        debug_assert!(d < RADIX, "mul_digit takes a single digit, got {}", d);
        if d == 0 || self.digits.is_empty() {
            return BigDigits::zero();
        }
        let mut out = Vec::with_capacity(self.digits.len() + 1);
        let mut carry = 0u8;
        for &x in &self.digits {
            let t = x * d + carry;
            out.push(t % RADIX);
            carry = t / RADIX;
        }
        if carry > 0 {
            out.push(carry);
        }
        BigDigits { digits: out }
    }

    /// `self * RADIX^k`.
    pub fn shl_digits(&self, k: usize) -> BigDigits {
        if k == 0 || self.digits.is_empty() {
            return self.clone();
        }
        let mut out = Vec::with_capacity(self.digits.len() + k);
        out.resize(k, 0);
        out.extend_from_slice(&self.digits);
        BigDigits { digits: out }
    }

    /// Splits into `(self / RADIX^k, self % RADIX^k)` by slicing digits.
    pub fn split_at(&self, k: usize) -> (BigDigits, BigDigits) {
        if k >= self.digits.len() {
            return (BigDigits::zero(), self.clone());
        }
        let (low, high) = self.digits.split_at(k);
        (BigDigits { digits: high.to_vec() }, Self::from_le(low.to_vec()))
    }

    /// Quadratic long multiplication, the reference the fast product is checked against.
    pub fn mul_schoolbook(&self, rhs: &BigDigits) -> BigDigits {
        if self.digits.is_empty() || rhs.digits.is_empty() {
            return BigDigits::zero();
        }
        let (a, b) = (&self.digits, &rhs.digits);
        let mut out = vec![0u8; a.len() + b.len()];
        for (i, &da) in a.iter().enumerate() {
            if da == 0 {
                continue;
            }
            let mut carry = 0u8;
            for (j, &db) in b.iter().enumerate() {
                let t = out[i + j] + da * db + carry;
                out[i + j] = t % RADIX;
                carry = t / RADIX;
            }
            let mut k = i + b.len();
            while carry > 0 {
                let t = out[k] + carry;
                out[k] = t % RADIX;
                carry = t / RADIX;
                k += 1;
            }
        }
        Self::from_le(out)
    }
}

impl FromStr for BigDigits {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BigDigits::parse(s)
    }
}

impl From<u64> for BigDigits {
    fn from(mut v: u64) -> Self {
        let mut digits = Vec::new();
        while v > 0 {
            digits.push((v % RADIX as u64) as u8);
            v /= RADIX as u64;
        }
        BigDigits { digits }
    }
}

impl fmt::Display for BigDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.digits.is_empty() {
            return f.pad("0");
        }
        let s: String = self.digits.iter().rev().map(|&d| char::from(b'0' + d)).collect();
        f.pad(&s)
    }
}

impl Ord for BigDigits {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.iter().rev().cmp(other.digits.iter().rev()))
    }
}

impl PartialOrd for BigDigits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a> Add<&'a BigDigits> for &'a BigDigits {
    type Output = BigDigits;

    fn add(self, rhs: &'a BigDigits) -> BigDigits {
        BigDigits { digits: add_le(&self.digits, &rhs.digits) }
    }
}

impl Add for BigDigits {
    type Output = BigDigits;

    fn add(self, rhs: BigDigits) -> BigDigits {
        &self + &rhs
    }
}

impl<'a> Sub<&'a BigDigits> for &'a BigDigits {
    type Output = BigDigits;

    /// Panics when `rhs > self`, like subtraction on unsigned integers.
    fn sub(self, rhs: &'a BigDigits) -> BigDigits {
        match sub_le(&self.digits, &rhs.digits) {
            Some(digits) => BigDigits { digits },
            None => panic!("attempt to subtract {} from smaller value {}", rhs, self),
        }
    }
}

impl Sub for BigDigits {
    type Output = BigDigits;

    fn sub(self, rhs: BigDigits) -> BigDigits {
        &self - &rhs
    }
}

impl CheckedSub for BigDigits {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        sub_le(&self.digits, &v.digits).map(|digits| BigDigits { digits })
    }
}

impl<'a> Mul<&'a BigDigits> for &'a BigDigits {
    type Output = BigDigits;

    fn mul(self, rhs: &'a BigDigits) -> BigDigits {
        crate::algorithms::karatsuba::multiply(self, rhs)
    }
}

impl Mul for BigDigits {
    type Output = BigDigits;

    fn mul(self, rhs: BigDigits) -> BigDigits {
        &self * &rhs
    }
}

impl Zero for BigDigits {
    fn zero() -> Self {
        BigDigits { digits: Vec::new() }
    }

    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }
}

impl One for BigDigits {
    fn one() -> Self {
        BigDigits { digits: vec![1] }
    }
}

impl Serialize for BigDigits {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BigDigits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        BigDigits::parse(&s).map_err(serde::de::Error::custom)
    }
}
