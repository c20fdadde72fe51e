//! Fixed-point decimal types for prices and quantities
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! Every value is kept at 4 decimal places; construction and arithmetic
//! re-round (HALF-UP) so repeated fill/re-fill cycles cannot drift.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of decimal places carried by every price and quantity
pub const SCALE: u32 = 4;

/// Errors raised when constructing a numeric value
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumericError {
    #[error("invalid decimal literal: {0}")]
    InvalidLiteral(String),

    #[error("price must be positive")]
    NonPositivePrice,

    #[error("quantity must not be negative")]
    NegativeQuantity,
}

fn round_fixed(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// An order or trade price
///
/// Strictly positive, fixed at 4 decimal places. `Ord` follows numeric
/// order, so prices can key the book's sorted levels directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Round to fixed scale and validate positivity
    ///
    /// Returns None for values that are zero or negative after rounding.
    pub fn try_new(value: Decimal) -> Option<Self> {
        let rounded = round_fixed(value);
        if rounded > Decimal::ZERO {
            Some(Self(rounded))
        } else {
            None
        }
    }

    /// Construct from a whole number of quote units
    pub fn from_u64(value: u64) -> Self {
        Self(round_fixed(Decimal::from(value)))
    }

    /// Parse from a decimal literal such as "100.25"
    pub fn from_str(s: &str) -> Result<Self, NumericError> {
        let value: Decimal = s
            .parse()
            .map_err(|_| NumericError::InvalidLiteral(s.to_string()))?;
        Self::try_new(value).ok_or(NumericError::NonPositivePrice)
    }

    /// Get the inner decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = NumericError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::try_new(value).ok_or(NumericError::NonPositivePrice)
    }
}

/// An order or trade quantity
///
/// Non-negative, fixed at 4 decimal places. Zero is representable (a fully
/// consumed order's residual) but a zero-quantity order must never rest in
/// the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Quantity(Decimal);

impl Quantity {
    /// Round to fixed scale and validate non-negativity
    pub fn try_new(value: Decimal) -> Option<Self> {
        let rounded = round_fixed(value);
        if rounded >= Decimal::ZERO {
            Some(Self(rounded))
        } else {
            None
        }
    }

    /// Parse from a decimal literal such as "2.5"
    pub fn from_str(s: &str) -> Result<Self, NumericError> {
        let value: Decimal = s
            .parse()
            .map_err(|_| NumericError::InvalidLiteral(s.to_string()))?;
        Self::try_new(value).ok_or(NumericError::NegativeQuantity)
    }

    /// The zero quantity
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Check whether this quantity is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Subtract, clamping at zero
    ///
    /// Matching only ever removes what a resting order can supply, so a
    /// negative intermediate indicates the caller already exhausted the
    /// order; clamping keeps the result a valid quantity.
    pub fn saturating_sub(self, other: Quantity) -> Quantity {
        Quantity::try_new(self.0 - other.0).unwrap_or_else(Quantity::zero)
    }

    /// Get the inner decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Quantity {
    type Error = NumericError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::try_new(value).ok_or(NumericError::NegativeQuantity)
    }
}
