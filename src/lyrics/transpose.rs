//! Transposing every chord token in a lyric line.

use crate::chords::Transposition;
use crate::constants::token::{CLOSE, OPEN};

use super::tokenize::{tokenize, Segment, TokenizedLine};

/// Rewrite a tokenized line with each chord transposed.
///
/// Lyric runs are untouched and the segment order is kept. Tokens are written
/// back without the padding that may have surrounded the chord inside the
/// brackets.
pub fn transpose_tokens(line: &TokenizedLine, transposition: Transposition) -> String {
    let mut out = String::new();
    for segment in line.segments() {
        match segment {
            Segment::Lyric(text) => out.push_str(text),
            Segment::Chord { chord, .. } => {
                out.push(OPEN);
                out.push_str(transposition.apply(chord).text());
                out.push(CLOSE);
            }
        }
    }
    out
}

/// Transpose all chords in `line` by `semitones`.
pub fn transpose_line(line: &str, semitones: i32) -> String {
    transpose_tokens(&tokenize(line), Transposition::up(semitones))
}
