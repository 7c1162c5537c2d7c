//! `chordsheet` - transpose and lay out lyric sheets with inline chords.
//!
//! Lyric sheets carry chords inline, e.g. `[G]Mary had a little[D7] lamb`.
//! This crate transposes those chords and converts lines into a chord line
//! printed above the lyric line.

pub mod chords;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod lyrics;

pub use chords::{Chord, Transposition};
pub use error::{Error, Result};
pub use lyrics::{align_line, transpose_line, AlignOptions};
