//! Invariants checked across many name pairs

use gunghap_core::{
    Decompose, HangulDecomposer, StrokeMode, compute_destiny, interleave, stroke_value,
};

const NAMES: &[&str] = &[
    "철수", "영희", "민준", "서연", "지우", "하은", "김철수", "이영희", "박지훈", "최수빈",
    "홍길동", "아무개", "남궁민수", "황보영", "선우재덕", "제갈량", "빵꾸똥꾸", "쌍둥이",
];

fn valid_pairs() -> impl Iterator<Item = (&'static str, &'static str)> {
    NAMES.iter().flat_map(|a| {
        NAMES.iter().filter_map(move |b| {
            let diff = a.chars().count().abs_diff(b.chars().count());
            (diff < 2).then_some((*a, *b))
        })
    })
}

#[test]
fn result_is_two_single_digits() {
    for (a, b) in valid_pairs() {
        let destiny = compute_destiny(a, b);
        assert!(destiny.result().iter().all(|d| d.get() <= 9), "{a} {b}");
        assert!(destiny.percentage().get() <= 99);
    }
}

#[test]
fn trace_rows_shrink_by_one_down_to_three() {
    for (a, b) in valid_pairs() {
        let destiny = compute_destiny(a, b);
        let combined = destiny.combined().len();
        assert!(combined >= 4);
        assert_eq!(destiny.stroke_totals().len(), combined);

        let lens: Vec<usize> = destiny.trace().iter().map(Vec::len).collect();
        let expected: Vec<usize> = (3..combined).rev().collect();
        assert_eq!(lens, expected, "{a} {b}");
    }
}

#[test]
fn interleaving_keeps_every_character() {
    for (a, b) in valid_pairs() {
        let seq = interleave(a, b);
        assert_eq!(seq.len(), a.chars().count() + b.chars().count());
        let mut sorted_seq: Vec<char> = seq.iter().copied().collect();
        let mut sorted_input: Vec<char> = a.chars().chain(b.chars()).collect();
        sorted_seq.sort_unstable();
        sorted_input.sort_unstable();
        assert_eq!(sorted_seq, sorted_input);
    }
}

#[test]
fn reduced_strokes_equal_raw_mod_ten_for_every_syllable_pair_sample() {
    let syllables: Vec<char> = ('가'..='힣').step_by(97).collect();
    for pair in syllables.windows(2) {
        let text: String = pair.iter().collect();
        let units = HangulDecomposer.decompose(&text);
        assert_eq!(
            stroke_value(&units, StrokeMode::Digit),
            stroke_value(&units, StrokeMode::Raw) % 10,
            "{text}"
        );
    }
}

#[test]
fn first_row_digit_matches_pair_stroke_sum() {
    for (a, b) in valid_pairs() {
        let destiny = compute_destiny(a, b);
        let totals = destiny.stroke_totals();
        for (i, digit) in destiny.trace()[0].iter().enumerate() {
            let expected = (totals[i] + totals[i + 1]) % 10;
            assert_eq!(u32::from(digit.get()), expected, "{a} {b} pair {i}");
        }
    }
}
