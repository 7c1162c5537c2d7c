//! Chromatic spelling tables.
//!
//! Index 0 is `A` and each step is one semitone. For a given index every row
//! names the same pitch class, e.g. index 1 is `A#`, `Bb` and `Cbb`.

/// Number of entries in every spelling row.
const ROW_LEN: usize = 12;

/// A row of spellings, one per pitch class.
type SpellingRow = [&'static str; ROW_LEN];

/// Naturals plus most single sharps (all but `B#` and `E#`).
const SHARP1: SpellingRow = ["A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#"];

/// `B#`, `E#` and every double sharp, with repeats where none exists.
const SHARP2: SpellingRow = ["G##", "A#", "A##", "B#", "B##", "C##", "D#", "D##", "E#", "E##", "F##", "G#"];

/// Naturals plus most single flats (all but `Cb` and `Fb`).
const FLAT1: SpellingRow = ["A", "Bb", "B", "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab"];

/// `Cb`, `Fb` and every double flat, with repeats where none exists.
const FLAT2: SpellingRow = ["Bbb", "Cbb", "Cb", "Dbb", "Db", "Ebb", "Fbb", "Fb", "Gbb", "Gb", "Abb", "Ab"];

/// Accepted input rows in lookup priority order.
///
/// The order decides which pitch class a colliding double accidental
/// resolves to, so it must not change.
const INPUT_ROWS: [&SpellingRow; 4] = [&SHARP1, &SHARP2, &FLAT1, &FLAT2];

/// The one spelling written for each pitch class.
const OUTPUT: SpellingRow = ["A", "Bb", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#"];

/// Recognised chord qualities (the suffix before any bass note), lowercase.
const CHORD_TYPES: &[&str] = &[
    "+", "6", "7", "aug", "dim", "m", "m6", "m7", "maj", "maj7", "o", "sus", "sus4",
];

/// Look up the pitch class (0..=11) of a normalised root spelling.
///
/// Rows are searched sharp1, sharp2, flat1, flat2 and the first match wins.
pub fn pitch_class_of(root: &str) -> Option<u8> {
    INPUT_ROWS
        .iter()
        .find_map(|row| row.iter().position(|&spelling| spelling == root))
        .and_then(|idx| u8::try_from(idx).ok())
}

/// Canonical output spelling of a pitch class, wrapping out-of-range values.
pub fn canonical_spelling(pitch_class: u8) -> &'static str {
    OUTPUT[usize::from(pitch_class) % ROW_LEN]
}

/// Whether `quality` (already lowercased) is a known chord type.
pub fn is_known_quality(quality: &str) -> bool {
    CHORD_TYPES.contains(&quality)
}
