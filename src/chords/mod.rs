//! Chord symbols and chromatic transposition.
//!
//! A chord token such as `D#maj7/F#` splits into a root (`D#`) and a suffix
//! (`maj7/F#`). Roots are looked up in the chromatic [`table`]; suffixes are
//! carried verbatim except for bass notes after a `/`, which are transposed as
//! chords of their own.

pub mod table;

use std::fmt;

use crate::constants::chord::{BAD_ROOT, BASS_DELIM, FLAT, PITCH_CLASSES, SHARP};
use crate::error::{Error, Result};

/// A single chord symbol, e.g. `Bbm7` or `C/G`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    text: String,
    root: String,
    suffix: String,
    pitch_class: Option<u8>,
}

impl Chord {
    /// Parse chord text into root and suffix.
    ///
    /// The root is the first character plus one accidental, or two if they are
    /// the same (`##`/`bb`). It is capitalized (`bB` becomes `Bb`); the suffix
    /// is kept as written. Parsing never fails: an unknown root simply has no
    /// pitch class.
    pub fn parse(text: &str) -> Self {
        let root_len = root_len(text);
        let (root, suffix) = text.split_at(root_len);
        let root = capitalize(root);
        let pitch_class = table::pitch_class_of(&root);

        Self {
            text: text.to_string(),
            root,
            suffix: suffix.to_string(),
            pitch_class,
        }
    }

    /// The chord as originally written.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Normalised root spelling, e.g. `G`, `Bb`, `F##`.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Everything after the root: quality plus any bass-note modifiers.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Position of the root on the chromatic circle (0 = A), if recognised.
    pub const fn pitch_class(&self) -> Option<u8> {
        self.pitch_class
    }

    /// Whether the root and the chord quality are both recognised.
    ///
    /// Only the part of the suffix before the first `/` is checked, ignoring
    /// case. Transposition does not depend on this.
    pub fn is_valid(&self) -> bool {
        if self.pitch_class.is_none() {
            return false;
        }
        let quality = self.suffix.split(BASS_DELIM).next().unwrap_or_default();
        quality.is_empty() || table::is_known_quality(&quality.to_lowercase())
    }

    /// Shift the chord by `semitones` (negative moves down).
    ///
    /// The root is respelled canonically; an unknown root becomes `??`. Each
    /// `/`-separated bass note in the suffix is transposed recursively.
    pub fn transpose(&self, semitones: i32) -> Self {
        let pitch_class = self.pitch_class.map(|pc| shift(pc, semitones));
        let root = pitch_class.map_or(BAD_ROOT, table::canonical_spelling);
        if pitch_class.is_none() {
            tracing::debug!("Unrecognised chord root in {:?}", self.text);
        }
        let suffix = transpose_suffix(&self.suffix, semitones);

        Self {
            text: format!("{root}{suffix}"),
            root: root.to_string(),
            suffix,
            pitch_class,
        }
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.suffix)
    }
}

/// A transpose amount in semitones, fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transposition {
    semitones: i32,
}

impl Transposition {
    /// Transpose up by `semitones`.
    pub const fn up(semitones: i32) -> Self {
        Self { semitones }
    }

    /// Transpose down by `semitones`.
    pub const fn down(semitones: i32) -> Self {
        Self { semitones: semitones.saturating_neg() }
    }

    /// Derive the amount that moves chord `from` onto chord `to`.
    ///
    /// Only the roots matter, so `G7` to `E7` is the same as `G` to `E`.
    pub fn between(from: &str, to: &str) -> Result<Self> {
        const HINT: &str = "A root chord is A-G, A#-G#, Ab-Gb, A##-G## or Abb-Gbb";

        let from_pc = Chord::parse(from.trim())
            .pitch_class()
            .ok_or_else(|| Error::config(format!("Unrecognised FROM chord '{from}'"), HINT))?;
        let to_pc = Chord::parse(to.trim())
            .pitch_class()
            .ok_or_else(|| Error::config(format!("Unrecognised TO chord '{to}'"), HINT))?;

        Ok(Self { semitones: i32::from(to_pc) - i32::from(from_pc) })
    }

    /// Signed number of semitones.
    pub const fn semitones(self) -> i32 {
        self.semitones
    }

    /// Apply to a single chord.
    pub fn apply(self, chord: &Chord) -> Chord {
        chord.transpose(self.semitones)
    }
}

/// Byte length of the root at the start of `text`.
fn root_len(text: &str) -> usize {
    let mut chars = text.chars();
    let Some(letter) = chars.next() else {
        return 0;
    };
    let is_accidental = |c: Option<char>| matches!(c, Some(SHARP | FLAT));

    let first = chars.next();
    if !is_accidental(first) {
        return letter.len_utf8();
    }
    // Accidentals are ASCII, one byte each
    if chars.next() == first {
        letter.len_utf8() + 2
    } else {
        letter.len_utf8() + 1
    }
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// Move a pitch class by `semitones`, wrapping into 0..=11.
fn shift(pitch_class: u8, semitones: i32) -> u8 {
    let shifted = (i32::from(pitch_class) + semitones.rem_euclid(PITCH_CLASSES)).rem_euclid(PITCH_CLASSES);
    u8::try_from(shifted).unwrap_or_default()
}

/// Keep the quality, transpose every bass note after it.
///
/// `m7/G/B` under +2 becomes `m7/A/C#`. A bass part that does not start with a
/// root comes out with the `??` marker.
fn transpose_suffix(suffix: &str, semitones: i32) -> String {
    let mut parts = suffix.split(BASS_DELIM);
    let mut out = parts.next().unwrap_or_default().to_string();
    for bass in parts {
        out.push(BASS_DELIM);
        out.push_str(Chord::parse(bass).transpose(semitones).text());
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_parse_natural_root() {
        let chord = Chord::parse("G7");
        assert_eq!(chord.root(), "G");
        assert_eq!(chord.suffix(), "7");
        assert_eq!(chord.pitch_class(), Some(10));
    }

    #[test]
    fn test_parse_single_and_double_accidentals() {
        let chord = Chord::parse("D#maj7/F#");
        assert_eq!(chord.root(), "D#");
        assert_eq!(chord.suffix(), "maj7/F#");
        assert_eq!(chord.text(), "D#maj7/F#");

        let chord = Chord::parse("Gbbsus4");
        assert_eq!(chord.root(), "Gbb");
        assert_eq!(chord.suffix(), "sus4");
        assert_eq!(chord.pitch_class(), Some(8));

        let chord = Chord::parse("E##+");
        assert_eq!(chord.root(), "E##");
        assert_eq!(chord.suffix(), "+");
    }

    #[test]
    fn test_parse_mixed_accidentals_take_one() {
        let chord = Chord::parse("C#b5");
        assert_eq!(chord.root(), "C#");
        assert_eq!(chord.suffix(), "b5");
    }

    #[test]
    fn test_parse_capitalizes_root() {
        let chord = Chord::parse("bbm");
        assert_eq!(chord.root(), "Bb");
        assert_eq!(chord.suffix(), "m");
        assert_eq!(chord.pitch_class(), Some(1));

        let chord = Chord::parse("cm");
        assert_eq!(chord.root(), "C");
        assert_eq!(chord.to_string(), "Cm");
        assert_eq!(chord.text(), "cm");
    }

    #[test]
    fn test_parse_short_and_empty() {
        let chord = Chord::parse("");
        assert_eq!(chord.root(), "");
        assert_eq!(chord.pitch_class(), None);

        let chord = Chord::parse("A");
        assert_eq!(chord.root(), "A");
        assert_eq!(chord.suffix(), "");

        let chord = Chord::parse("Ab");
        assert_eq!(chord.root(), "Ab");
        assert_eq!(chord.suffix(), "");
    }

    #[test]
    fn test_transpose_up() {
        assert_eq!(Chord::parse("G").transpose(2).text(), "A");
        assert_eq!(Chord::parse("Am7").transpose(3).text(), "Cm7");
    }

    #[test]
    fn test_transpose_negative_wraps() {
        assert_eq!(Chord::parse("A").transpose(-1).text(), "G#");
        assert_eq!(Chord::parse("C").transpose(-15).text(), "A");
    }

    #[test]
    fn test_transpose_respells_canonically() {
        assert_eq!(Chord::parse("Db").transpose(0).text(), "C#");
        assert_eq!(Chord::parse("A#").transpose(0).text(), "Bb");
        assert_eq!(Chord::parse("Cb").transpose(12).text(), "B");
    }

    #[test]
    fn test_transpose_bass_notes() {
        assert_eq!(Chord::parse("C7/G").transpose(-2).text(), "Bb7/F");
        assert_eq!(Chord::parse("C/G").transpose(2).text(), "D/A");
        assert_eq!(Chord::parse("Cm/E_bass/Fplucked").transpose(2).text(), "Dm/F#_bass/Gplucked");
    }

    #[test]
    fn test_transpose_bad_root() {
        let chord = Chord::parse("Zm").transpose(3);
        assert_eq!(chord.root(), "??");
        assert_eq!(chord.text(), "??m");
        assert_eq!(chord.pitch_class(), None);
    }

    #[test]
    fn test_transpose_bad_bass_note() {
        assert_eq!(Chord::parse("C/x").transpose(1).text(), "C#/??");
        assert_eq!(Chord::parse("C/").transpose(1).text(), "C#/??");
        assert_eq!(Chord::parse("C7/").transpose(1).text(), "C#7/??");
        assert_eq!(Chord::parse("C//G").transpose(1).text(), "C#/??/G#");
    }

    #[test]
    fn test_transpose_composes() {
        let chord = Chord::parse("F#m");
        for m in -13..13 {
            for n in -13..13 {
                let stepwise = chord.transpose(m).transpose(n);
                let direct = chord.transpose(m + n);
                assert_eq!(stepwise.pitch_class(), direct.pitch_class());
                assert_eq!(stepwise.text(), direct.text());
            }
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(Chord::parse("A").is_valid());
        assert!(Chord::parse("Bbmaj7").is_valid());
        assert!(Chord::parse("CM7").is_valid());
        assert!(Chord::parse("G/B").is_valid());
        assert!(Chord::parse("Dsus4/A").is_valid());
        assert!(!Chord::parse("Hm").is_valid());
        assert!(!Chord::parse("Cadd9").is_valid());
    }

    #[test]
    fn test_transposition_between() {
        assert_eq!(Transposition::between("C", "Eb").unwrap().semitones(), 3);
        assert_eq!(Transposition::between("C", "a").unwrap().semitones(), -3);
        assert_eq!(Transposition::between("G7", "E7").unwrap().semitones(), -3);
    }

    #[test]
    fn test_transposition_between_rejects_unknown() {
        match Transposition::between("H", "C") {
            Err(Error::Config { message, .. }) => assert!(message.contains("FROM")),
            other => panic!("Expected FROM config error, got {other:?}"),
        }
        match Transposition::between("C", "") {
            Err(Error::Config { message, .. }) => assert!(message.contains("TO")),
            other => panic!("Expected TO config error, got {other:?}"),
        }
    }

    #[test]
    fn test_transposition_down() {
        let t = Transposition::down(3);
        assert_eq!(t.semitones(), -3);
        assert_eq!(t.apply(&Chord::parse("C")).text(), "A");
    }
}
