//! Human-readable byte sizes such as `10MB`, `512k` or `2 megabytes`

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Accepted spellings per power of 1024, matched after lowercasing
const UNITS: [(u32, &[&str]); 7] = [
    (0, &["", "b", "byte"]),
    (1, &["k", "kb", "kilo", "kilobyte", "kilobytes"]),
    (2, &["m", "mb", "mega", "megabyte", "megabytes"]),
    (3, &["g", "gb", "giga", "gigabyte", "gigabytes"]),
    (4, &["t", "tb", "tera", "terabyte", "terabytes"]),
    (5, &["p", "pb", "peta", "petabyte", "petabytes"]),
    (6, &["e", "eb", "exa", "exabyte", "exabytes"]),
];

/// Bit-sized suffixes, rejected case-sensitively before lowercasing
const BIT_UNITS: [&str; 6] = ["Kb", "Mb", "Gb", "Tb", "Pb", "Eb"];

/// Short names used when displaying a size
const DISPLAY_NAMES: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Errors produced when parsing a [`ByteSize`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ByteSizeError {
    #[error("empty size")]
    Empty,

    #[error("size {0:?} does not start with a number")]
    MissingNumber(String),

    #[error("unknown size unit {0:?}")]
    UnknownUnit(String),

    #[error("{0:?} is a bit unit, sizes are given in bytes")]
    BitUnit(String),

    #[error("size {0:?} does not fit in 64 bits")]
    Overflow(String),
}

/// A byte count using binary (1024-based) units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteSize(u64);

impl ByteSize {
    /// Get the raw byte count
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl FromStr for ByteSize {
    type Err = ByteSizeError;

    /// Parse `<digits>[whitespace][unit]`. Units are case-insensitive
    /// (`k`, `KB`, `kilo`, `kilobytes`, ...), except that the bit-looking
    /// `Kb`, `Mb`, `Gb`, `Tb`, `Pb` and `Eb` are refused. A bare number is a
    /// byte count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ByteSizeError::Empty);
        }

        let split = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        let (digits, unit) = trimmed.split_at(split);
        if digits.is_empty() {
            return Err(ByteSizeError::MissingNumber(s.to_string()));
        }

        let number: u64 = digits
            .parse()
            .map_err(|_| ByteSizeError::Overflow(s.to_string()))?;
        let exponent = parse_unit(unit.trim_start())?;

        1024u64
            .checked_pow(exponent)
            .and_then(|multiplier| number.checked_mul(multiplier))
            .map(Self)
            .ok_or_else(|| ByteSizeError::Overflow(s.to_string()))
    }
}

/// Map a unit suffix to its power of 1024
fn parse_unit(unit: &str) -> Result<u32, ByteSizeError> {
    if BIT_UNITS.contains(&unit) {
        return Err(ByteSizeError::BitUnit(unit.to_string()));
    }
    let lower = unit.to_ascii_lowercase();
    UNITS
        .iter()
        .find(|(_, names)| names.contains(&lower.as_str()))
        .map(|(exponent, _)| *exponent)
        .ok_or_else(|| ByteSizeError::UnknownUnit(unit.to_string()))
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Largest unit that divides the value exactly
        let exponent = (0..DISPLAY_NAMES.len())
            .rev()
            .find(|exponent| self.0 != 0 && self.0 % (1u64 << (10 * exponent)) == 0)
            .unwrap_or(0);
        write!(
            f,
            "{}{}",
            self.0 >> (10 * exponent),
            DISPLAY_NAMES[exponent]
        )
    }
}
