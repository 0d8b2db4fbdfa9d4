//! Output of a compatibility computation.

use std::fmt;
use std::slice;

use serde::{Deserialize, Serialize};

use crate::{Digit, Percentage};

/// One generation of the reduction cascade.
pub type DigitRow = Vec<Digit>;

/// Characters of two names merged position by position.
///
/// At each index the character from the first name (if any) comes before the character
/// from the second name (if any). Each name keeps its left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterleavedSequence(Vec<char>);

impl InterleavedSequence {
    #[must_use]
    pub fn new(chars: Vec<char>) -> Self {
        Self(chars)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, char> {
        self.0.iter()
    }

    /// Adjacent character pairs, left to right.
    pub fn pairs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.0.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl FromIterator<char> for InterleavedSequence {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a InterleavedSequence {
    type Item = &'a char;
    type IntoIter = slice::Iter<'a, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for InterleavedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| fmt::Write::write_char(f, *c))
    }
}

/// Everything a presentation layer needs to replay a computation.
///
/// Built once per invocation and read-only afterwards. Only [`DestinyResult::new`]
/// constructs one; it serializes but does not deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinyResult {
    name1: String,
    name2: String,
    combined: InterleavedSequence,
    /// Unreduced stroke count of each combined character (display only; may exceed 9).
    stroke_totals: Vec<u32>,
    /// Every reduction row from length `combined.len() - 1` down to length 3.
    trace: Vec<DigitRow>,
    result: [Digit; 2],
}

impl DestinyResult {
    #[must_use]
    pub fn new(
        name1: impl Into<String>,
        name2: impl Into<String>,
        combined: InterleavedSequence,
        stroke_totals: Vec<u32>,
        trace: Vec<DigitRow>,
        result: [Digit; 2],
    ) -> Self {
        debug_assert_eq!(stroke_totals.len(), combined.len());
        Self {
            name1: name1.into(),
            name2: name2.into(),
            combined,
            stroke_totals,
            trace,
            result,
        }
    }

    #[must_use]
    pub fn name1(&self) -> &str {
        &self.name1
    }

    #[must_use]
    pub fn name2(&self) -> &str {
        &self.name2
    }

    #[must_use]
    pub fn combined(&self) -> &InterleavedSequence {
        &self.combined
    }

    #[must_use]
    pub fn stroke_totals(&self) -> &[u32] {
        &self.stroke_totals
    }

    #[must_use]
    pub fn trace(&self) -> &[DigitRow] {
        &self.trace
    }

    #[must_use]
    pub const fn result(&self) -> [Digit; 2] {
        self.result
    }

    #[must_use]
    pub const fn percentage(&self) -> Percentage {
        Percentage::from_digits(self.result)
    }

    /// The two result digits as text, leading zero kept (`"05"`).
    #[must_use]
    pub fn score_text(&self) -> String {
        format!("{}{}", self.result[0], self.result[1])
    }
}
