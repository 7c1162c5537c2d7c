//! Command-line argument parsing.
//!
//! Kept free of I/O so it can be tested directly; `main` acts on the result.

use std::path::PathBuf;

use crate::chords::Transposition;
use crate::config::parse_span_char;
use crate::error::{Error, Result};

/// Where to read lyric lines from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input, processed line by line.
    Stdin,
    /// A text file, tilde-expanded.
    File(PathBuf),
}

/// A parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Transpose every chord in the input.
    Transpose {
        /// Amount to move each chord by.
        transposition: Transposition,
        /// Lines to read.
        input: Input,
    },
    /// Rewrite inline chords as chord-above-lyrics.
    Above {
        /// Span character override.
        span_char: Option<char>,
        /// Use a single lead-in span character instead of a full run.
        single_span: bool,
        /// Lines to read.
        input: Input,
    },
    /// Report chords that are not recognised.
    Check {
        /// Lines to read.
        input: Input,
    },
    /// Print usage and exit successfully.
    Help,
}

/// Usage text shown for `--help` and after usage errors.
pub fn usage(app: &str) -> String {
    format!(
        "Usage:
  {app}  -h|--help
  {app}  transpose  -u|-d NUM_SEMITONES_UP_OR_DOWN  [TEXT_FILE]
  {app}  transpose  -f FROM_CHORD  -t TO_CHORD  [TEXT_FILE]
  {app}  above  [--span-char C]  [--single-span]  [TEXT_FILE]
  {app}  check  [TEXT_FILE]
where: FROM_CHORD and TO_CHORD must start with a root-chord
  and: A root-chord is A-G, A#-G#, Ab-Gb, A##-G## or Abb-Gbb

TEXT_FILE must contain lyrics with inline chords placed between square
brackets, eg. [Bbmaj7]. Without TEXT_FILE (or with '-') lines are read
from standard input.

transpose: the part after the root-chord (eg. 'maj7') is unchanged unless
it contains '/'. Any root-chord right after a '/' is transposed too,
eg. [C7/G] to [D7/A].

  {app}  transpose -u 2  song.txt
changes:  [G]Or [Am]when [G/B]the [Am]valley's [F]hushed and ...
to:       [A]Or [Bm]when [A/C#]the [Bm]valley's [G]hushed and ...

All of the following transpose down by 3 semitones:
  {app}  transpose -d 3  song.txt
  {app}  transpose -f C  -t a   song.txt  # Upper or lower case chord
  {app}  transpose -f G7 -t E7  song.txt  # '7' is ignored

above: prints each chord on its own line above the syllable it was
attached to. Key lines such as 'Key: [Dm]' are left as they are.
"
    )
}

/// Parse arguments (without the program name) into a [`Command`].
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    match args.next().as_deref() {
        None => Err(Error::usage("Error: Use one of the commands below.")),
        Some("-h" | "--help" | "help") => Ok(Command::Help),
        Some("transpose") => parse_transpose(args),
        Some("above") => parse_above(args),
        Some("check") => parse_check(args),
        Some(other) => Err(Error::usage(format!("Error: Unknown command '{other}'"))),
    }
}

fn parse_transpose(mut args: impl Iterator<Item = String>) -> Result<Command> {
    let mut semitones: Option<i32> = None;
    let mut from = None;
    let mut to = None;
    let mut positional = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-u" => semitones = Some(parse_semitones(&arg, args.next())?),
            "-d" => semitones = Some(parse_semitones(&arg, args.next())?.saturating_neg()),
            "-f" => from = Some(required_value(&arg, args.next())?),
            "-t" => to = Some(required_value(&arg, args.next())?),
            "-h" | "--help" => return Ok(Command::Help),
            _ => positional.push(arg),
        }
    }

    // A complete from/to pair overrides -u/-d wherever they appear
    let transposition = match (from, to, semitones) {
        (Some(from), Some(to), _) => Transposition::between(&from, &to)?,
        (Some(_), None, _) | (None, Some(_), _) => {
            return Err(Error::config(
                "You must use '-f' and '-t' options together",
                "Give both the chord to transpose from and the chord to transpose to",
            ))
        }
        (None, None, Some(n)) => Transposition::up(n),
        (None, None, None) => return Err(Error::usage("Error: Use one of the commands below.")),
    };

    Ok(Command::Transpose {
        transposition,
        input: parse_input(positional)?,
    })
}

fn parse_above(mut args: impl Iterator<Item = String>) -> Result<Command> {
    let mut span_char = None;
    let mut single_span = false;
    let mut positional = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--span-char" => span_char = Some(parse_span_char(&required_value(&arg, args.next())?)?),
            "--single-span" => single_span = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => positional.push(arg),
        }
    }

    Ok(Command::Above {
        span_char,
        single_span,
        input: parse_input(positional)?,
    })
}

fn parse_check(args: impl Iterator<Item = String>) -> Result<Command> {
    let mut positional = Vec::new();
    for arg in args {
        if matches!(arg.as_str(), "-h" | "--help") {
            return Ok(Command::Help);
        }
        positional.push(arg);
    }
    Ok(Command::Check { input: parse_input(positional)? })
}

fn required_value(flag: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| Error::usage(format!("Error: Option '{flag}' needs a value.")))
}

fn parse_semitones(flag: &str, value: Option<String>) -> Result<i32> {
    let value = required_value(flag, value)?;
    value
        .trim()
        .parse()
        .map_err(|_| Error::usage(format!("Error: '{value}' is not a whole number of semitones.")))
}

fn parse_input(positional: Vec<String>) -> Result<Input> {
    match positional.as_slice() {
        [] => Ok(Input::Stdin),
        [path] if path == "-" => Ok(Input::Stdin),
        [path] if path.starts_with('-') => Err(Error::usage(format!("Error: Unknown option '{path}'"))),
        [path] => Ok(Input::File(PathBuf::from(shellexpand::tilde(path).to_string()))),
        many => {
            let mut msg = String::from("Error: Unexpected parameters:");
            for arg in many {
                msg.push_str("\n* ");
                msg.push_str(arg);
            }
            Err(Error::usage(msg))
        }
    }
}
