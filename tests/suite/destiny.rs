//! End-to-end reduction scenarios

use gunghap_core::compute_destiny;
use gunghap_types::{DestinyResult, Digit};

fn digits(row: &[Digit]) -> Vec<u8> {
    row.iter().map(|d| d.get()).collect()
}

fn trace_lens(destiny: &DestinyResult) -> Vec<usize> {
    destiny.trace().iter().map(Vec::len).collect()
}

#[test]
fn two_and_two_runs_one_cascade_step() {
    let destiny = compute_destiny("철수", "영희");
    assert_eq!(destiny.combined().len(), 4);
    assert_eq!(trace_lens(&destiny), vec![3]);
    assert_eq!(digits(&destiny.result()), vec![5, 8]);
}

#[test]
fn four_and_three_records_four_rows() {
    let destiny = compute_destiny("남궁민수", "황보영");
    assert_eq!(destiny.combined().to_string(), "남황궁보민영수");
    assert_eq!(destiny.stroke_totals(), &[8, 8, 5, 6, 7, 5, 4]);
    assert_eq!(trace_lens(&destiny), vec![6, 5, 4, 3]);
    assert_eq!(digits(&destiny.trace()[0]), vec![6, 3, 1, 3, 2, 9]);
    assert_eq!(digits(&destiny.trace()[3]), vec![1, 7, 5]);
    assert_eq!(digits(&destiny.result()), vec![8, 2]);
    assert_eq!(destiny.percentage().get(), 82);
}

#[test]
fn three_and_three() {
    let destiny = compute_destiny("홍길동", "아무개");
    assert_eq!(destiny.combined().to_string(), "홍아길무동개");
    assert_eq!(destiny.stroke_totals(), &[6, 3, 8, 6, 6, 5]);
    assert_eq!(trace_lens(&destiny), vec![5, 4, 3]);
    assert_eq!(digits(&destiny.result()), vec![6, 0]);
}

#[test]
fn argument_order_matters() {
    // Stable, intentional asymmetry: swapping names changes the interleaving.
    let forward = compute_destiny("철수", "영희");
    let backward = compute_destiny("영희", "철수");
    assert_eq!(digits(&forward.result()), vec![5, 8]);
    assert_eq!(digits(&backward.result()), vec![2, 5]);

    let forward = compute_destiny("남궁민수", "황보영");
    let backward = compute_destiny("황보영", "남궁민수");
    assert_eq!(forward.percentage().get(), 82);
    assert_eq!(backward.percentage().get(), 7);
}

#[test]
fn repeated_calls_are_identical() {
    let first = compute_destiny("김철수", "이영희");
    let second = compute_destiny("김철수", "이영희");
    assert_eq!(first, second);
    assert_eq!(digits(&first.result()), vec![5, 7]);
}

#[test]
fn names_are_kept_verbatim() {
    let destiny = compute_destiny("김철수", "이영희");
    assert_eq!(destiny.name1(), "김철수");
    assert_eq!(destiny.name2(), "이영희");
}
