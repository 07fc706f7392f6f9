//! Rupee amounts.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid amount.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid amount: {reason}")]
pub struct InvalidAmount {
    reason: &'static str,
}

/// A non-negative amount of Indian rupees, stored as whole paise.
///
/// Parsed amounts are always strictly positive; zero only arises as the
/// identity for sums.
///
/// # Examples
///
/// ```
/// use journey_server::domain::Amount;
///
/// let a = Amount::parse("1250.5").unwrap();
/// assert_eq!(a.paise(), 125_050);
/// assert_eq!(a.to_string(), "1250.50");
///
/// assert!(Amount::parse("0").is_err());
/// assert!(Amount::parse("12.345").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Largest amount [`Amount::parse`] accepts: one crore rupees.
    ///
    /// Keeps sums over any realistic number of expenses far below `u64`.
    pub const MAX: Amount = Amount::from_rupees(10_000_000);

    /// Create an amount from whole rupees.
    pub const fn from_rupees(rupees: u64) -> Self {
        Amount(rupees * 100)
    }

    /// Create an amount from paise.
    pub const fn from_paise(paise: u64) -> Self {
        Amount(paise)
    }

    /// Parse a decimal rupee string such as `"1500"` or `"99.9"`.
    ///
    /// Accepts ASCII digits with at most one decimal point and at most two
    /// fractional digits. Surrounding whitespace is ignored. The result must
    /// be greater than zero and at most [`Amount::MAX`].
    pub fn parse(s: &str) -> Result<Self, InvalidAmount> {
        let s = s.trim();
        if s.is_empty() {
            return Err(InvalidAmount {
                reason: "must not be empty",
            });
        }

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(InvalidAmount {
                reason: "must contain digits",
            });
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(InvalidAmount {
                reason: "must be a plain decimal number",
            });
        }
        if frac.len() > 2 {
            return Err(InvalidAmount {
                reason: "at most two decimal places",
            });
        }

        let rupees: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| InvalidAmount {
                reason: "too large",
            })?
        };
        let paise: u64 = match frac.len() {
            0 => 0,
            1 => u64::from(frac.as_bytes()[0] - b'0') * 10,
            _ => u64::from(frac.as_bytes()[0] - b'0') * 10 + u64::from(frac.as_bytes()[1] - b'0'),
        };

        let total = rupees
            .checked_mul(100)
            .and_then(|r| r.checked_add(paise))
            .ok_or(InvalidAmount { reason: "too large" })?;

        if total == 0 {
            return Err(InvalidAmount {
                reason: "must be greater than zero",
            });
        }
        if total > Amount::MAX.0 {
            return Err(InvalidAmount {
                reason: "must not exceed 10000000 rupees",
            });
        }

        Ok(Amount(total))
    }

    /// Returns the amount in paise.
    pub fn paise(&self) -> u64 {
        self.0
    }

    /// Returns true for the zero amount.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Amount {
        iter.copied().sum()
    }
}

/// Whole rupees print without decimals; anything else prints two places.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rupees = self.0 / 100;
        let paise = self.0 % 100;
        if paise == 0 {
            write!(f, "{rupees}")
        } else {
            write!(f, "{rupees}.{paise:02}")
        }
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
