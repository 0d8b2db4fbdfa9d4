//! Core domain types for Gunghap.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! The computation crate produces these values and every presentation layer consumes them.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod destiny;
mod name;

pub use destiny::{DestinyResult, DigitRow, InterleavedSequence};
pub use name::{
    MAX_NAME_DIFF, MIN_NAME_LENGTH, NameError, NamePair, NameRules, NameSlot, is_name_char,
    normalize_name,
};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Digit
// ============================================================================

/// A single decimal digit, guaranteed to be in `0..=9`.
///
/// Every value in a reduction row is a `Digit`; the invalid state "row entry of 12"
/// cannot be represented.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("digit must be in 0..=9 (got {0})")]
pub struct DigitRangeError(pub u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);

    pub const fn new(value: u8) -> Result<Self, DigitRangeError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(DigitRangeError(value))
        }
    }

    /// The ones digit of `total`.
    #[must_use]
    pub const fn from_total(total: u32) -> Self {
        Self((total % 10) as u8)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Add two digits, dropping the tens place.
    ///
    /// Two digits sum to at most 18, so a single subtraction keeps the result in range.
    #[must_use]
    pub const fn wrapping_add(self, other: Digit) -> Self {
        let sum = self.0 + other.0;
        if sum >= 10 { Self(sum - 10) } else { Self(sum) }
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitRangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(value: Digit) -> Self {
        value.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Percentage
// ============================================================================

/// The final score: two result digits read as a decimal number.
///
/// Displays as `58%`. A leading zero is dropped (`0` and `5` display as `5%`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    #[must_use]
    pub const fn from_digits(digits: [Digit; 2]) -> Self {
        Self(digits[0].get() * 10 + digits[1].get())
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// ============================================================================
// Decomposition Kind
// ============================================================================

/// How syllable blocks are broken into jamo before stroke lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecompositionKind {
    /// Split compound vowels and compound finals into their parts (ㅘ → ㅗ ㅏ, ㄳ → ㄱ ㅅ).
    #[default]
    Split,
    /// Keep compound vowels and compound finals whole.
    Compound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown decomposition {0:?} (expected \"split\" or \"compound\")")]
pub struct ParseDecompositionError(pub String);

impl DecompositionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DecompositionKind::Split => "split",
            DecompositionKind::Compound => "compound",
        }
    }
}

impl FromStr for DecompositionKind {
    type Err = ParseDecompositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "split" => Ok(DecompositionKind::Split),
            "compound" => Ok(DecompositionKind::Compound),
            _ => Err(ParseDecompositionError(s.to_string())),
        }
    }
}

impl fmt::Display for DecompositionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
