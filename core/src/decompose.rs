//! Hangul syllable decomposition.
//!
//! Canonical decomposition (NFD) splits a precomposed syllable into conjoining jamo
//! (U+1100..=U+11FF). The stroke table is keyed by compatibility jamo
//! (U+3131..=U+3163), so each conjoining jamo is mapped to its compatibility form.
//!
//! Decomposition is per character, so decomposing a concatenation equals concatenating
//! the decompositions. The pairwise step of the reducer relies on this.

use unicode_normalization::char::decompose_canonical;

use gunghap_types::DecompositionKind;

/// Capability to break text into ordered phonetic units.
pub trait Decompose {
    fn decompose(&self, text: &str) -> Vec<char>;
}

const LEADING_FIRST: u32 = 0x1100;
const VOWEL_FIRST: u32 = 0x1161;
const TRAILING_FIRST: u32 = 0x11A8;

// Indexed by offset from U+1100 (choseong ᄀ..ᄒ)
const INITIALS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

// Indexed by offset from U+1161 (jungseong ᅡ..ᅵ)
const MEDIALS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

// Indexed by offset from U+11A8 (jongseong ᆨ..ᇂ)
const FINALS: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ',
    'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Compatibility form of a modern conjoining jamo. Other characters are returned as-is.
#[must_use]
pub fn compatibility_jamo(c: char) -> char {
    let code = u32::from(c);
    let lookup = |table: &[char], first: u32| {
        code.checked_sub(first)
            .and_then(|offset| usize::try_from(offset).ok())
            .and_then(|offset| table.get(offset).copied())
    };
    lookup(&INITIALS, LEADING_FIRST)
        .or_else(|| lookup(&MEDIALS, VOWEL_FIRST))
        .or_else(|| lookup(&FINALS, TRAILING_FIRST))
        .unwrap_or(c)
}

/// Parts of a compound vowel or compound final consonant.
///
/// Double consonants (ㄲ ㄸ ㅃ ㅆ ㅉ) are single letters and are not split.
#[must_use]
pub fn split_compound(jamo: char) -> Option<[char; 2]> {
    let parts = match jamo {
        'ㅘ' => ['ㅗ', 'ㅏ'],
        'ㅙ' => ['ㅗ', 'ㅐ'],
        'ㅚ' => ['ㅗ', 'ㅣ'],
        'ㅝ' => ['ㅜ', 'ㅓ'],
        'ㅞ' => ['ㅜ', 'ㅔ'],
        'ㅟ' => ['ㅜ', 'ㅣ'],
        'ㅢ' => ['ㅡ', 'ㅣ'],
        'ㄳ' => ['ㄱ', 'ㅅ'],
        'ㄵ' => ['ㄴ', 'ㅈ'],
        'ㄶ' => ['ㄴ', 'ㅎ'],
        'ㄺ' => ['ㄹ', 'ㄱ'],
        'ㄻ' => ['ㄹ', 'ㅁ'],
        'ㄼ' => ['ㄹ', 'ㅂ'],
        'ㄽ' => ['ㄹ', 'ㅅ'],
        'ㄾ' => ['ㄹ', 'ㅌ'],
        'ㄿ' => ['ㄹ', 'ㅍ'],
        'ㅀ' => ['ㄹ', 'ㅎ'],
        'ㅄ' => ['ㅂ', 'ㅅ'],
        _ => return None,
    };
    Some(parts)
}

fn push_jamo(out: &mut Vec<char>, jamo: char, split: bool) {
    match split_compound(jamo) {
        Some(parts) if split => out.extend(parts),
        _ => out.push(jamo),
    }
}

fn decompose_into(text: &str, split: bool) -> Vec<char> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        decompose_canonical(c, |part| push_jamo(&mut out, compatibility_jamo(part), split));
    }
    out
}

/// Fully splits syllables into basic jamo, compound vowels and finals included.
#[derive(Debug, Clone, Copy, Default)]
pub struct HangulDecomposer;

impl Decompose for HangulDecomposer {
    fn decompose(&self, text: &str) -> Vec<char> {
        decompose_into(text, true)
    }
}

/// Splits syllables into initial, medial, and final, keeping compound jamo whole.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompoundDecomposer;

impl Decompose for CompoundDecomposer {
    fn decompose(&self, text: &str) -> Vec<char> {
        decompose_into(text, false)
    }
}

/// Decomposer selected at runtime from configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct KindDecomposer(pub DecompositionKind);

impl Decompose for KindDecomposer {
    fn decompose(&self, text: &str) -> Vec<char> {
        match self.0 {
            DecompositionKind::Split => HangulDecomposer.decompose(text),
            DecompositionKind::Compound => CompoundDecomposer.decompose(text),
        }
    }
}
