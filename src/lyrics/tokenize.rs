//! Splitting lyric lines into lyric runs and inline chord tokens.

use std::fmt;

use crate::chords::Chord;
use crate::constants::token::{CLOSE, OPEN};

// Allow unwrap for compile-time constant regex patterns in lazy_static blocks
#[allow(clippy::unwrap_used)]
mod patterns {
    use lazy_static::lazy_static;
    use regex::Regex;

    lazy_static! {
        /// An inline chord token, e.g. `[C7]`; the capture is the text inside.
        pub static ref TOKEN: Regex = Regex::new(r"\[([^\]]*)\]").unwrap();

        /// A song key annotation such as `Key: [Dm]`.
        pub static ref KEY_LINE: Regex = Regex::new(r"(?i)^\s*key:\s*\[[^\]]*\]\s*$").unwrap();
    }
}

/// One piece of a lyric line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal lyric text, kept verbatim.
    Lyric(String),
    /// A bracketed chord token.
    Chord {
        /// Text between the brackets exactly as written.
        inner: String,
        /// The chord parsed from the trimmed inner text.
        chord: Chord,
    },
}

impl Segment {
    fn chord(inner: &str) -> Self {
        Self::Chord {
            inner: inner.to_string(),
            chord: Chord::parse(inner.trim()),
        }
    }

    /// Whether this is a chord token.
    pub const fn is_chord(&self) -> bool {
        matches!(self, Self::Chord { .. })
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lyric(text) => f.write_str(text),
            Self::Chord { inner, .. } => write!(f, "{OPEN}{inner}{CLOSE}"),
        }
    }
}

/// A lyric line broken into ordered segments.
///
/// Writing the segments back out in order reproduces the source line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenizedLine {
    segments: Vec<Segment>,
    has_tokens: bool,
    key_line: bool,
}

impl TokenizedLine {
    /// Segments in source order. Never contains empty lyric runs.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether at least one chord token was found.
    pub const fn has_tokens(&self) -> bool {
        self.has_tokens
    }

    /// Whether the line is a key annotation like `Key: [Dm]`.
    pub const fn is_key_line(&self) -> bool {
        self.key_line
    }

    /// Chord segments with the column where each token's `[` starts.
    pub fn chords(&self) -> impl Iterator<Item = (usize, &Chord)> {
        let mut column = 0;
        self.segments.iter().filter_map(move |segment| {
            let start = column;
            column += segment.to_string().chars().count();
            match segment {
                Segment::Chord { chord, .. } => Some((start, chord)),
                Segment::Lyric(_) => None,
            }
        })
    }
}

impl fmt::Display for TokenizedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.segments.iter().try_for_each(|segment| write!(f, "{segment}"))
    }
}

/// Split `line` into lyric runs and chord tokens.
///
/// A token is the text from a `[` to the next `]`. Empty brackets and an
/// unmatched `[` stay in the lyric text.
pub fn tokenize(line: &str) -> TokenizedLine {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest_start = 0;

    for caps in patterns::TOKEN.captures_iter(line) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        literal.push_str(&line[rest_start..whole.start()]);
        rest_start = whole.end();

        if inner.as_str().is_empty() {
            literal.push_str(whole.as_str());
            continue;
        }
        flush_lyric(&mut segments, &mut literal);
        segments.push(Segment::chord(inner.as_str()));
    }
    literal.push_str(&line[rest_start..]);
    flush_lyric(&mut segments, &mut literal);

    let has_tokens = segments.iter().any(Segment::is_chord);
    TokenizedLine {
        segments,
        has_tokens,
        key_line: has_tokens && patterns::KEY_LINE.is_match(line),
    }
}

fn flush_lyric(segments: &mut Vec<Segment>, literal: &mut String) {
    if !literal.is_empty() {
        segments.push(Segment::Lyric(std::mem::take(literal)));
    }
}
