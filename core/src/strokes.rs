//! Stroke table and stroke counting.

/// How a running stroke total is accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeMode {
    /// Plain sum. Used for the per-character numbers shown to the user.
    Raw,
    /// Keep only the ones digit after every addition.
    Digit,
}

/// Immutable mapping from compatibility jamo to stroke count.
///
/// Entries are searched in order; the first entry for a unit wins.
#[derive(Debug)]
pub struct StrokeTable {
    entries: &'static [(char, u8)],
}

/// Traditional stroke counts for every jamo used in names.
///
/// Compound vowels are listed so a decomposer that keeps them whole still scores them;
/// compound final consonants are not.
pub static STROKE_TABLE: StrokeTable = StrokeTable::new(&[
    // Consonants
    ('ㄱ', 2),
    ('ㄴ', 2),
    ('ㄷ', 3),
    ('ㄹ', 5),
    ('ㅁ', 4),
    ('ㅂ', 4),
    ('ㅅ', 2),
    ('ㅇ', 1),
    ('ㅈ', 3),
    ('ㅊ', 4),
    ('ㅋ', 3),
    ('ㅌ', 4),
    ('ㅍ', 4),
    ('ㅎ', 3),
    ('ㄲ', 4),
    ('ㄸ', 6),
    ('ㅃ', 8),
    ('ㅆ', 4),
    ('ㅉ', 6),
    // Vowels
    ('ㅏ', 2),
    ('ㅑ', 3),
    ('ㅓ', 2),
    ('ㅕ', 3),
    ('ㅗ', 2),
    ('ㅛ', 3),
    ('ㅜ', 2),
    ('ㅠ', 3),
    ('ㅡ', 1),
    ('ㅣ', 1),
    ('ㅘ', 4),
    ('ㅚ', 3),
    ('ㅙ', 5),
    ('ㅝ', 4),
    ('ㅞ', 5),
    ('ㅢ', 2),
    ('ㅐ', 3),
    ('ㅔ', 3),
    ('ㅟ', 3),
    ('ㅖ', 4),
    ('ㅒ', 4),
]);

impl StrokeTable {
    #[must_use]
    pub const fn new(entries: &'static [(char, u8)]) -> Self {
        Self { entries }
    }

    /// Stroke count of `unit`, or `None` if the table has no entry for it.
    #[must_use]
    pub fn get(&self, unit: char) -> Option<u8> {
        self.entries
            .iter()
            .find(|(symbol, _)| *symbol == unit)
            .map(|(_, strokes)| *strokes)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u8)> + '_ {
        self.entries.iter().copied()
    }

    /// Sum the strokes of `units`.
    ///
    /// Units missing from the table count as zero. In [`StrokeMode::Digit`] the running
    /// total drops its tens place after every addition, which equals the full sum mod 10
    /// because no single entry exceeds 9.
    #[must_use]
    pub fn stroke_value(&self, units: &[char], mode: StrokeMode) -> u32 {
        units.iter().fold(0, |total, unit| {
            let Some(strokes) = self.get(*unit) else {
                tracing::trace!(unit = %unit, "no stroke entry; counting as zero");
                return total;
            };
            let total = total + u32::from(strokes);
            match mode {
                StrokeMode::Digit if total >= 10 => total - 10,
                _ => total,
            }
        })
    }
}

/// [`StrokeTable::stroke_value`] against [`STROKE_TABLE`].
#[must_use]
pub fn stroke_value(units: &[char], mode: StrokeMode) -> u32 {
    STROKE_TABLE.stroke_value(units, mode)
}

#[cfg(test)]
mod tests {
    use super::{STROKE_TABLE, StrokeMode, StrokeTable, stroke_value};

    #[test]
    fn table_values_stay_single_digit() {
        assert_eq!(STROKE_TABLE.len(), 40);
        assert!(STROKE_TABLE.iter().all(|(_, strokes)| (1..=8).contains(&strokes)));
    }

    #[test]
    fn table_has_no_duplicate_symbols() {
        let mut symbols: Vec<char> = STROKE_TABLE.iter().map(|(symbol, _)| symbol).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), STROKE_TABLE.len());
    }

    #[test]
    fn raw_sum_can_exceed_nine() {
        // 철 = ㅊ ㅓ ㄹ
        assert_eq!(stroke_value(&['ㅊ', 'ㅓ', 'ㄹ'], StrokeMode::Raw), 11);
    }

    #[test]
    fn digit_mode_keeps_ones_place() {
        assert_eq!(stroke_value(&['ㅊ', 'ㅓ', 'ㄹ'], StrokeMode::Digit), 1);
        // 철영 = ㅊ ㅓ ㄹ ㅇ ㅕ ㅇ = 16
        let units = ['ㅊ', 'ㅓ', 'ㄹ', 'ㅇ', 'ㅕ', 'ㅇ'];
        assert_eq!(stroke_value(&units, StrokeMode::Digit), 6);
    }

    #[test]
    fn digit_mode_equals_raw_mod_ten() {
        let samples: [&[char]; 5] = [
            &['ㅃ', 'ㅃ', 'ㅃ', 'ㅃ'],
            &['ㄸ', 'ㅙ', 'ㄹ', 'ㅉ', 'ㅞ', 'ㄹ'],
            &['ㅇ'],
            &[],
            &['ㅎ', 'ㅡ', 'ㅣ', 'ㄱ', 'ㅏ', 'ㅁ', 'ㅅ', 'ㅜ'],
        ];
        for units in samples {
            assert_eq!(
                stroke_value(units, StrokeMode::Digit),
                stroke_value(units, StrokeMode::Raw) % 10,
                "units: {units:?}"
            );
        }
    }

    #[test]
    fn custom_table_lookups() {
        static SMALL: StrokeTable = StrokeTable::new(&[('ㅇ', 3), ('ㅏ', 9)]);
        assert_eq!(SMALL.len(), 2);
        assert_eq!(SMALL.get('ㅇ'), Some(3));
        assert_eq!(SMALL.get('ㄱ'), None);
        assert_eq!(SMALL.stroke_value(&['ㅇ', 'ㅏ', 'ㄱ'], StrokeMode::Raw), 12);
        assert_eq!(SMALL.stroke_value(&['ㅇ', 'ㅏ', 'ㄱ'], StrokeMode::Digit), 2);
    }

    #[test]
    fn unknown_units_count_as_zero() {
        assert_eq!(stroke_value(&['a', 'ㄳ', '?'], StrokeMode::Raw), 0);
        assert_eq!(stroke_value(&['ㅇ', 'x', 'ㅏ'], StrokeMode::Raw), 3);
    }
}
