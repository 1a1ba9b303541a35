//! Fixed-point token amounts scaled by 10^18

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

use crate::types::{AirdropError, AirdropResult};

/// Number of implied decimal places of a token amount
pub const DECIMALS: usize = 18;

/// Decimal separator used by the presale export
pub const DECIMAL_SEPARATOR: char = ',';

/// Token quantity stored as an integer number of 10^-18 units
///
/// Arithmetic is exact; amounts may become negative when used for a
/// remainder against a cap.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FixedPointAmount(BigInt);

impl FixedPointAmount {
    /// Zero amount
    pub fn zero() -> Self {
        Self(BigInt::from(0))
    }

    /// Wrap a raw value already expressed in 10^-18 units
    pub fn from_raw(raw: impl Into<BigInt>) -> Self {
        Self(raw.into())
    }

    /// Whole number of tokens
    pub fn from_whole_tokens(tokens: impl Into<BigInt>) -> Self {
        Self(tokens.into() * BigInt::from(10u32).pow(DECIMALS as u32))
    }

    /// Parse a comma-decimal quantity such as `"100,5"` or `"222247844"`.
    ///
    /// The integer part and the fractional part right-padded to 18 digits are
    /// concatenated and read as one integer. A fractional part longer than 18
    /// digits is kept whole, anything after a second comma is ignored and an
    /// empty string reads as zero.
    pub fn parse(value: &str) -> AirdropResult<Self> {
        let mut parts = value.split(DECIMAL_SEPARATOR);
        let integer = parts.next().unwrap_or_default();
        let fraction = match parts.next() {
            Some(fraction) => format!("{fraction:0<width$}", width = DECIMALS),
            None => "0".repeat(DECIMALS),
        };

        let digits = format!("{integer}{fraction}");
        BigInt::from_str(digits.trim())
            .map(Self)
            .map_err(|_| AirdropError::InvalidAmount {
                value: value.to_string(),
                row: None,
            })
    }

    /// Raw integer value in 10^-18 units
    pub fn raw(&self) -> &BigInt {
        &self.0
    }

    /// Amount as a decimal token quantity (e.g. `1.5` for `15 * 10^17`)
    pub fn to_tokens(&self) -> BigDecimal {
        BigDecimal::new(self.0.clone(), DECIMALS as i64).normalized()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < BigInt::from(0)
    }
}

impl FromStr for FixedPointAmount {
    type Err = AirdropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FixedPointAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() keeps width and alignment flags working for report columns
        f.pad(&self.0.to_string())
    }
}

impl Add for FixedPointAmount {
    type Output = FixedPointAmount;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl<'a> Add<&'a FixedPointAmount> for &'a FixedPointAmount {
    type Output = FixedPointAmount;

    fn add(self, rhs: Self) -> Self::Output {
        FixedPointAmount(&self.0 + &rhs.0)
    }
}

impl AddAssign for FixedPointAmount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<'a> Sub<&'a FixedPointAmount> for &'a FixedPointAmount {
    type Output = FixedPointAmount;

    fn sub(self, rhs: Self) -> Self::Output {
        FixedPointAmount(&self.0 - &rhs.0)
    }
}

impl<'a> Sum<&'a FixedPointAmount> for FixedPointAmount {
    fn sum<I: Iterator<Item = &'a FixedPointAmount>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, amount| FixedPointAmount(acc.0 + &amount.0))
    }
}

impl Sum for FixedPointAmount {
    fn sum<I: Iterator<Item = FixedPointAmount>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, amount| acc + amount)
    }
}
