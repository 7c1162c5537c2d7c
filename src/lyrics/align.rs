//! Chord-above-lyrics layout.
//!
//! Turns `[G]Mary had a little lamb, [D7]little lamb` into
//!
//! ```text
//! G                       D7
//! Mary had a little lamb, little lamb
//! ```
//!
//! Every chord starts in the same column as the syllable it was attached to.
//! When a chord is wider than its syllable the lyric line is stretched, using
//! the span character unless the syllable already ends in a space.

use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::constants::layout::{DEFAULT_SPAN_CHAR, LEAD_SPAN_COUNT};

use super::tokenize::{tokenize, Segment, TokenizedLine};

/// Options for the chord-above layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignOptions {
    /// Character that stretches a syllable held under a wide chord.
    pub span_char: char,
    /// Fill the whole stretch with `span_char` (`true`) or write a single
    /// lead-in span character followed by spaces (`false`).
    pub multi_span: bool,
}

impl Default for AlignOptions {
    fn default() -> Self {
        Self {
            span_char: DEFAULT_SPAN_CHAR,
            multi_span: true,
        }
    }
}

impl AlignOptions {
    /// Fill written after `lyric` to stretch it by `amount` columns.
    fn stretch(&self, lyric: &str, amount: isize) -> String {
        if lyric.ends_with(' ') {
            pad(amount, None, ' ', None)
        } else if self.multi_span {
            pad(amount, None, self.span_char, None)
        } else {
            pad(amount, None, ' ', Some((self.span_char, LEAD_SPAN_COUNT)))
        }
    }
}

/// Result of laying out one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alignment {
    /// The line is written back unchanged (no chords, or a key line).
    Passthrough(String),
    /// Two lines, chords first. Trailing whitespace is already trimmed.
    ChordAbove {
        /// The chord line.
        chords: String,
        /// The lyric line.
        lyrics: String,
    },
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passthrough(line) => f.write_str(line),
            Self::ChordAbove { chords, lyrics } => write!(f, "{chords}\n{lyrics}"),
        }
    }
}

/// Build a run of fill characters.
///
/// The length is `count` plus the display width of `extend`. With `lead`, the
/// first `n` characters use the lead character and the rest use `fill`; a
/// non-positive `n` means all `fill`, and `n` at or past the length means all
/// lead. A non-positive length gives an empty string.
pub fn pad(count: isize, extend: Option<&str>, fill: char, lead: Option<(char, isize)>) -> String {
    let length = count + extend.map_or(0, width);
    if length <= 0 {
        return String::new();
    }
    let repeat = |c: char, n: isize| std::iter::repeat(c).take(n.unsigned_abs());

    match lead {
        Some((lead_char, lead_count)) if lead_count >= length => repeat(lead_char, length).collect(),
        Some((lead_char, lead_count)) if lead_count > 0 => repeat(lead_char, lead_count)
            .chain(repeat(fill, length - lead_count))
            .collect(),
        _ => repeat(fill, length).collect(),
    }
}

/// Lay out a tokenized line with chords above the lyrics.
pub fn align(line: &TokenizedLine, options: &AlignOptions) -> Alignment {
    if !line.has_tokens() || line.is_key_line() {
        return Alignment::Passthrough(line.to_string());
    }

    let segments = line.segments();
    let mut chords = String::new();
    let mut lyrics = String::new();
    // Columns the next lyric run must be stretched by to catch up with a wide chord
    let mut pending: isize = 0;

    for (i, pair) in segments.windows(2).enumerate() {
        match (&pair[0], &pair[1]) {
            (Segment::Chord { chord, .. }, Segment::Chord { .. }) => {
                chords.push_str(chord.text());
                chords.push(' ');
                lyrics.push_str(&pad(1, Some(chord.text()), ' ', None));
            }
            (Segment::Chord { chord, .. }, Segment::Lyric(next)) => {
                let diff = width(next) - width(chord.text());
                chords.push_str(chord.text());
                if diff > 0 {
                    chords.push_str(&pad(diff, None, ' ', None));
                } else {
                    chords.push(' ');
                    pending = 1 - diff;
                }
            }
            (Segment::Lyric(text), _) => {
                if i == 0 {
                    chords.push_str(&pad(0, Some(text.as_str()), ' ', None));
                }
                lyrics.push_str(text);
                lyrics.push_str(&options.stretch(text, pending));
                pending = 0;
            }
        }
    }

    match segments.last() {
        Some(Segment::Chord { chord, .. }) => chords.push_str(chord.text()),
        Some(Segment::Lyric(text)) => lyrics.push_str(text),
        None => {}
    }

    Alignment::ChordAbove {
        chords: chords.trim_end().to_string(),
        lyrics: lyrics.trim_end().to_string(),
    }
}

/// Lay out `line`, returning either the line itself or a two-line block.
pub fn align_line(line: &str, options: &AlignOptions) -> String {
    align(&tokenize(line), options).to_string()
}

fn width(text: &str) -> isize {
    isize::try_from(text.width()).unwrap_or(isize::MAX)
}
