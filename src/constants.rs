//! Notation constants.
//!
//! Centralizes the characters and defaults shared by the chord model and the
//! lyric layout code.

/// Chord notation constants.
pub mod chord {
    /// Accidental raising a root by one semitone.
    pub const SHARP: char = '#';

    /// Accidental lowering a root by one semitone.
    pub const FLAT: char = 'b';

    /// Root shown in place of a root that could not be recognised.
    pub const BAD_ROOT: &str = "??";

    /// Separates the chord quality from bass-note modifiers, e.g. `C7/G`.
    pub const BASS_DELIM: char = '/';

    /// Number of pitch classes in the chromatic scale.
    pub const PITCH_CLASSES: i32 = 12;
}

/// Inline token delimiters.
pub mod token {
    /// Opens an inline chord token.
    pub const OPEN: char = '[';

    /// Closes an inline chord token.
    pub const CLOSE: char = ']';
}

/// Chord-above layout constants.
pub mod layout {
    /// Default character used to stretch a syllable held under a wide chord.
    ///
    /// Pick something that never shows up in normal song text (`_`, `~`, `|`)
    /// so the layout can be converted back; `-` and `.` are poor choices.
    pub const DEFAULT_SPAN_CHAR: char = '_';

    /// Span characters written before falling back to spaces when the
    /// single-span strategy is selected.
    pub const LEAD_SPAN_COUNT: isize = 1;
}

/// Environment variable names read by [`crate::config::Config::load`].
pub mod env {
    /// Overrides the span character.
    pub const SPAN_CHAR: &str = "CHORDSHEET_SPAN_CHAR";

    /// Selects multi (`true`) or single (`false`) span filling.
    pub const MULTI_SPAN: &str = "CHORDSHEET_MULTI_SPAN";
}
