//! Validated name input.
//!
//! The reduction pipeline assumes both names are Hangul, at least two characters long,
//! and close in length. [`NamePair`] is the proof that those checks ran; callers build
//! one at the boundary and hand the parts to the computation.

use std::fmt;

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use unicode_script::UnicodeScript;

/// Minimum number of characters in each name.
pub const MIN_NAME_LENGTH: usize = 2;

/// Two names must differ in length by strictly less than this.
pub const MAX_NAME_DIFF: usize = 2;

/// Length policy applied by [`NamePair::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameRules {
    pub min_length: usize,
    pub max_diff: usize,
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            min_length: MIN_NAME_LENGTH,
            max_diff: MAX_NAME_DIFF,
        }
    }
}

/// Which of the two names an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSlot {
    First,
    Second,
}

impl fmt::Display for NameSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameSlot::First => f.write_str("first"),
            NameSlot::Second => f.write_str("second"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("{slot} name must not be empty")]
    Empty { slot: NameSlot },
    #[error("{slot} name must be at least {min} characters (got {len})")]
    TooShort {
        slot: NameSlot,
        len: usize,
        min: usize,
    },
    #[error("{slot} name contains {ch:?} ({script}); only Hangul is accepted")]
    NotHangul {
        slot: NameSlot,
        ch: char,
        script: &'static str,
    },
    #[error("names differ in length by {diff} ({len1} vs {len2}); the difference must be less than {max_diff}")]
    LengthMismatch {
        len1: usize,
        len2: usize,
        diff: usize,
        max_diff: usize,
    },
}

/// Whether `c` may appear in a name: a precomposed syllable (가–힣) or a
/// compatibility consonant (ㄱ–ㅎ).
#[must_use]
pub fn is_name_char(c: char) -> bool {
    matches!(c, '가'..='힣' | 'ㄱ'..='ㅎ')
}

/// Trim surrounding whitespace and compose conjoining jamo into syllables (NFC).
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    raw.trim().nfc().collect()
}

/// Two names that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePair {
    first: String,
    second: String,
}

impl NamePair {
    pub fn new(first: &str, second: &str, rules: &NameRules) -> Result<Self, NameError> {
        let first = normalize_name(first);
        let second = normalize_name(second);

        let len1 = check_name(NameSlot::First, &first, rules)?;
        let len2 = check_name(NameSlot::Second, &second, rules)?;

        let diff = len1.abs_diff(len2);
        if diff >= rules.max_diff {
            return Err(NameError::LengthMismatch {
                len1,
                len2,
                diff,
                max_diff: rules.max_diff,
            });
        }

        Ok(Self { first, second })
    }

    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    #[must_use]
    pub fn second(&self) -> &str {
        &self.second
    }

    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.first, self.second)
    }
}

fn check_name(slot: NameSlot, name: &str, rules: &NameRules) -> Result<usize, NameError> {
    if name.is_empty() {
        return Err(NameError::Empty { slot });
    }

    if let Some(ch) = name.chars().find(|c| !is_name_char(*c)) {
        return Err(NameError::NotHangul {
            slot,
            ch,
            script: ch.script().full_name(),
        });
    }

    let len = name.chars().count();
    if len < rules.min_length {
        return Err(NameError::TooShort {
            slot,
            len,
            min: rules.min_length,
        });
    }

    Ok(len)
}
