use std::fmt;

use thiserror::Error;

const CENTS_PER_UNIT: i64 = 100;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Currency amount stored as a whole number of cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);

    /// Builds an amount from whole currency units, e.g. `Money::from_units(500)` is 500.00
    pub const fn from_units(units: i64) -> Self {
        Self(units * CENTS_PER_UNIT)
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Parses text such as `100`, `-5`, `12.5` or `0.99`.
    ///
    /// At most two decimal places are accepted, so every parsed value is exact.
    pub fn parse(string: &str) -> Result<Self, MoneyError> {
        let trimmed = string.trim();

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut parts = unsigned.split('.');

        let units = parts.next().unwrap_or_default();
        let cents = parts.next();

        if parts.next().is_some() {
            return Err(MoneyError::Parse("Too many decimal points", string.to_string()));
        }

        if units.is_empty() && cents.map_or(true, str::is_empty) {
            return Err(MoneyError::Parse("No digits found", string.to_string()));
        }

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());

        if !all_digits(units) || !cents.map_or(true, all_digits) {
            return Err(MoneyError::Parse("Unexpected character", string.to_string()));
        }

        let cents = match cents {
            None => "00".to_string(),
            Some(cents) if cents.len() > 2 => {
                return Err(MoneyError::Parse("Too many decimal places", string.to_string()))
            }
            Some(cents) => format!("{:0<2}", cents),
        };

        let overflow = || MoneyError::Parse("Amount too large", string.to_string());

        let units: i64 = if units.is_empty() {
            0
        } else {
            units.parse().map_err(|_| overflow())?
        };
        let cents: i64 = cents.parse().map_err(|_| overflow())?;

        let value = units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(overflow)?;

        Ok(Money(if negative { -value } else { value }))
    }

    pub fn add(self, other: Self) -> Result<Self, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or(MoneyError::Overflow("add", self, other))
    }

    pub fn sub(self, other: Self) -> Result<Self, MoneyError> {
        self.0
            .checked_sub(other.0)
            .map(Money)
            .ok_or(MoneyError::Overflow("sub", self, other))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let cents = CENTS_PER_UNIT as u64;

        return write!(f, "{sign}{}.{:02}", abs / cents, abs % cents);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(Money::parse("100"), Ok(Money(10000)));
        assert_eq!(Money::parse("100.5"), Ok(Money(10050)));
        assert_eq!(Money::parse("100.05"), Ok(Money(10005)));
        assert_eq!(Money::parse(" 0.99 "), Ok(Money(99)));
        assert_eq!(Money::parse(".5"), Ok(Money(50)));
        assert_eq!(Money::parse("7."), Ok(Money(700)));
        assert_eq!(Money::parse("-5.50"), Ok(Money(-550)));
        assert_eq!(Money::parse("0"), Ok(Money::ZERO));
    }

    #[test]
    fn fail_to_parse() {
        for input in ["", "-", ".", "abc", "1.2.3", "1.234", "1e5", "+5", "12,50", "--1"] {
            assert!(
                matches!(Money::parse(input), Err(MoneyError::Parse(..))),
                "expected parse failure for {input:?}"
            );
        }

        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn add_and_sub() {
        assert_eq!(Money(150).add(Money(50)), Ok(Money(200)));
        assert_eq!(Money(150).sub(Money(200)), Ok(Money(-50)));

        assert_eq!(
            Money(i64::MAX).add(Money(1)),
            Err(MoneyError::Overflow("add", Money(i64::MAX), Money(1)))
        );
        assert!(Money(i64::MIN).sub(Money(1)).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Money(0).to_string(), "0.00");
        assert_eq!(Money(5).to_string(), "0.05");
        assert_eq!(Money(123456).to_string(), "1234.56");
        assert_eq!(Money(-550).to_string(), "-5.50");
        assert_eq!(Money::from_units(500).to_string(), "500.00");
    }
}
