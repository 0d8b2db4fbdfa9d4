//! Stroke-count compatibility pipeline for Gunghap.
//!
//! Two names are interleaved, decomposed into jamo, scored against a fixed stroke
//! table, and reduced pairwise until two digits remain. Everything here is pure:
//! no IO, no shared mutable state, safe to call from any thread.

pub mod decompose;
pub mod destiny;
mod interleave;
pub mod strokes;

use gunghap_types::{DecompositionKind, DestinyResult};

pub use decompose::{CompoundDecomposer, Decompose, HangulDecomposer, KindDecomposer};
pub use destiny::{DestinyReducer, cascade, compute_destiny, reduce_row};
pub use interleave::interleave;
pub use strokes::{STROKE_TABLE, StrokeMode, StrokeTable, stroke_value};

/// Compute with the decomposition selected in configuration.
#[must_use]
pub fn compute_destiny_with(kind: DecompositionKind, name1: &str, name2: &str) -> DestinyResult {
    DestinyReducer::new(KindDecomposer(kind)).compute(name1, name2)
}
