use gunghap_types::InterleavedSequence;

/// Merge two names character by character.
///
/// At each position the first name's character (if it has one there) precedes the
/// second name's. `"철수"` and `"영희"` give `철 영 수 희`.
#[must_use]
pub fn interleave(name1: &str, name2: &str) -> InterleavedSequence {
    let mut first = name1.chars();
    let mut second = name2.chars();
    let mut out = Vec::with_capacity(name1.len() + name2.len());

    loop {
        let a = first.next();
        let b = second.next();
        if a.is_none() && b.is_none() {
            break;
        }
        out.extend(a);
        out.extend(b);
    }

    InterleavedSequence::new(out)
}
