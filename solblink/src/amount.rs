//! Human-readable currency amounts.
//!
//! Action links carry amounts in whole-coin units (`amount=1.5` means 1.5 SOL).
//! [`Amount`] holds such a value as an exact decimal so that conversion to the
//! chain's base unit never goes through binary floating point.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A strictly positive decimal amount expressed in whole-coin units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

/// Errors produced while parsing or converting an [`Amount`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// The input is not a decimal number.
    #[error("Invalid amount: {0}")]
    Parse(String),
    /// The value is zero or negative.
    #[error("Amount must be greater than zero: {0}")]
    NotPositive(Decimal),
    /// The value has more fractional digits than the base unit allows.
    #[error("Amount {amount} is not a whole number of base units at {decimals} decimals")]
    NotWholeBaseUnits {
        /// The offending amount.
        amount: Decimal,
        /// Number of decimals of the base unit.
        decimals: u32,
    },
    /// The value does not fit into a `u64` count of base units.
    #[error("Amount {0} overflows the base unit range")]
    Overflow(Decimal),
}

impl Amount {
    /// One whole coin.
    pub const ONE: Self = Self(Decimal::ONE);

    /// Wraps a decimal, rejecting zero and negative values.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::NotPositive`] if `value <= 0`.
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive(value));
        }
        Ok(Self(value.normalize()))
    }

    /// Creates an amount from a whole number of coins.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::NotPositive`] if `coins` is zero.
    pub fn from_whole(coins: u64) -> Result<Self, AmountError> {
        Self::new(Decimal::from(coins))
    }

    /// Returns the inner decimal value.
    #[must_use]
    pub const fn inner(&self) -> Decimal {
        self.0
    }

    /// Converts the amount into the chain's base unit (e.g. lamports for
    /// `decimals = 9`).
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::NotWholeBaseUnits`] if the amount has a fractional
    /// base-unit part and [`AmountError::Overflow`] if it exceeds `u64::MAX`.
    pub fn to_base_units(&self, decimals: u32) -> Result<u64, AmountError> {
        let scale = 10u64
            .checked_pow(decimals)
            .ok_or(AmountError::Overflow(self.0))?;
        let scaled = self
            .0
            .checked_mul(Decimal::from(scale))
            .ok_or(AmountError::Overflow(self.0))?;
        if !scaled.fract().is_zero() {
            return Err(AmountError::NotWholeBaseUnits {
                amount: self.0,
                decimals,
            });
        }
        scaled.to_u64().ok_or(AmountError::Overflow(self.0))
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| AmountError::Parse(s.to_owned()))?;
        Self::new(value)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
