//! `chordsheet` - transpose lyric sheets and print chords above lyrics.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;

use chordsheet::cli::{self, Command, Input};
use chordsheet::config::Config;
use chordsheet::lyrics::{self, tokenize, transpose_tokens};
use chordsheet::Error;

fn main() -> ExitCode {
    let app = env!("CARGO_PKG_NAME");

    let command = match cli::parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}");
            if e.wants_usage() {
                eprintln!("{}", cli::usage(app));
            }
            return ExitCode::FAILURE;
        }
    };

    match run(command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> anyhow::Result<ExitCode> {
    let config = Config::load()?;

    match command {
        Command::Help => {
            println!("{}", cli::usage(config.app_name()));
        }
        Command::Transpose { transposition, input } => {
            tracing::info!("Transposing by {} semitones", transposition.semitones());
            emit(
                &input,
                |line| transpose_tokens(&tokenize(line), transposition),
                |lines| lyrics::transpose_document(lines, transposition),
            )?;
        }
        Command::Above { span_char, single_span, input } => {
            let mut options = config.align_options();
            if let Some(c) = span_char {
                options.span_char = c;
            }
            if single_span {
                options.multi_span = false;
            }
            emit(
                &input,
                |line| lyrics::align_line(line, &options),
                |lines| lyrics::align_document(lines, &options),
            )?;
        }
        Command::Check { input } => {
            let lines = read_all(&input)?;
            let invalid = lyrics::check_document(&lines);
            let mut out = io::stdout().lock();
            for found in &invalid {
                tracing::warn!("Invalid chord {:?} on line {}", found.chord.text(), found.line);
                writeln!(out, "{}:{}: invalid chord [{}]", found.line, found.column, found.chord.text())?;
            }
            tracing::info!("Checked {} lines, {} invalid chords", lines.len(), invalid.len());
            if !invalid.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Write processed lines to stdout.
///
/// Stdin is streamed a line at a time; a file is read whole and processed
/// as a document.
fn emit<F, D>(input: &Input, per_line: F, document: D) -> anyhow::Result<()>
where
    F: Fn(&str) -> String,
    D: Fn(&[String]) -> Vec<String>,
{
    let mut out = io::stdout().lock();
    match input {
        Input::Stdin => {
            for line in stdin_lines() {
                let line = line.context("reading standard input")?;
                writeln!(out, "{}", per_line(&line))?;
            }
        }
        Input::File(_) => {
            let lines = read_all(input)?;
            for line in document(&lines) {
                writeln!(out, "{line}")?;
            }
            tracing::info!("Processed {} lines", lines.len());
        }
    }
    out.flush()?;
    Ok(())
}

fn read_all(input: &Input) -> anyhow::Result<Vec<String>> {
    match input {
        Input::Stdin => stdin_lines()
            .collect::<chordsheet::Result<Vec<_>>>()
            .context("reading standard input"),
        Input::File(path) => {
            let bytes = fs_err::read(path)
                .map_err(|e| Error::io(e, path.clone()))
                .with_context(|| format!("File '{}' must exist and be readable", path.display()))?;
            Ok(split_lines(&bytes))
        }
    }
}

/// Standard input a line at a time.
fn stdin_lines() -> impl Iterator<Item = chordsheet::Result<String>> {
    io::stdin()
        .lock()
        .split(b'\n')
        .enumerate()
        .map(|(i, line)| line.map(|bytes| decode_line(i + 1, &bytes)).map_err(Error::from))
}

/// Split file contents into lines the way `str::lines` does.
fn split_lines(bytes: &[u8]) -> Vec<String> {
    let mut lines: Vec<String> = bytes
        .split(|&b| b == b'\n')
        .enumerate()
        .map(|(i, line)| decode_line(i + 1, line))
        .collect();
    if bytes.is_empty() || bytes.ends_with(b"\n") {
        lines.pop();
    }
    lines
}

/// Decode one line, replacing invalid UTF-8 so a bad line never stops the run.
fn decode_line(number: usize, bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(line) => line.to_string(),
        Cow::Owned(line) => {
            tracing::warn!("Line {number} is not valid UTF-8; invalid bytes replaced");
            line
        }
    }
}
