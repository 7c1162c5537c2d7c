//! Lyric sheet processing.
//!
//! Lines are handled one at a time and independently of each other:
//! - tokenize: Breaking a line into lyric runs and chord tokens
//! - transpose: Rewriting chord tokens in a new key
//! - align: Chord-above-lyrics layout

pub mod align;
pub mod tokenize;
pub mod transpose;

use rayon::prelude::*;

use crate::chords::{Chord, Transposition};

pub use align::{align, align_line, pad, AlignOptions, Alignment};
pub use tokenize::{tokenize, Segment, TokenizedLine};
pub use transpose::{transpose_line, transpose_tokens};

/// A chord that failed validation, with its position in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChord {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column of the opening `[`.
    pub column: usize,
    /// The offending chord.
    pub chord: Chord,
}

/// Transpose every line of a document. Output order matches input order.
pub fn transpose_document<S: AsRef<str> + Sync>(lines: &[S], transposition: Transposition) -> Vec<String> {
    lines
        .par_iter()
        .map(|line| transpose_tokens(&tokenize(line.as_ref()), transposition))
        .collect()
}

/// Lay out every line of a document with chords above the lyrics.
///
/// Each entry is either the original line or a two-line block.
pub fn align_document<S: AsRef<str> + Sync>(lines: &[S], options: &AlignOptions) -> Vec<String> {
    lines
        .par_iter()
        .map(|line| align_line(line.as_ref(), options))
        .collect()
}

/// Chords on one tokenized line that fail validation.
pub fn invalid_chords(line_number: usize, line: &TokenizedLine) -> Vec<InvalidChord> {
    line.chords()
        .filter(|(_, chord)| !chord.is_valid())
        .map(|(column, chord)| InvalidChord {
            line: line_number,
            column: column + 1,
            chord: chord.clone(),
        })
        .collect()
}

/// Validate every chord in a document.
pub fn check_document<S: AsRef<str> + Sync>(lines: &[S]) -> Vec<InvalidChord> {
    lines
        .par_iter()
        .enumerate()
        .flat_map_iter(|(idx, line)| invalid_chords(idx + 1, &tokenize(line.as_ref())))
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_transpose_document_keeps_order() {
        let lines = vec!["[C]one", "two", "[G]three [D]four"];
        let out = transpose_document(&lines, Transposition::up(2));
        assert_eq!(out, vec!["[D]one", "two", "[A]three [E]four"]);
    }

    #[test]
    fn test_align_document_mixes_passthrough_and_blocks() {
        let lines = vec![
            "Key: [G]".to_string(),
            "Verse 1".to_string(),
            "[G]Amazing [C]grace".to_string(),
        ];
        let out = align_document(&lines, &AlignOptions::default());
        assert_eq!(out[0], "Key: [G]");
        assert_eq!(out[1], "Verse 1");
        assert_eq!(out[2], "G       C\nAmazing grace");
    }

    #[test]
    fn test_check_document_reports_positions() {
        let lines = ["[G]fine [Hm]bad", "ok", "x[Cadd9]y"];
        let found = check_document(&lines);
        assert_eq!(found.len(), 2);
        assert_eq!((found[0].line, found[0].column), (1, 9));
        assert_eq!(found[0].chord.text(), "Hm");
        assert_eq!((found[1].line, found[1].column), (3, 2));
        assert_eq!(found[1].chord.text(), "Cadd9");
    }
}
