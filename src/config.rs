//! Application configuration.
//!
//! Handles loading layout settings from environment variables and .env files.
//! Command-line flags are applied on top by the binary.

use dotenv::dotenv;
use std::env;
use unicode_width::UnicodeWidthChar;

use crate::constants::env::{MULTI_SPAN, SPAN_CHAR};
use crate::constants::layout::DEFAULT_SPAN_CHAR;
use crate::error::{Error, Result};
use crate::lyrics::AlignOptions;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// Character used to stretch a syllable under a wide chord
    pub span_char: char,
    /// Fill a whole stretch with span characters instead of one lead-in
    pub multi_span: bool,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Layout options derived from this configuration.
    pub const fn align_options(&self) -> AlignOptions {
        AlignOptions {
            span_char: self.span_char,
            multi_span: self.multi_span,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            span_char: DEFAULT_SPAN_CHAR,
            multi_span: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup(SPAN_CHAR) {
            config.span_char = parse_span_char(&value)?;
        }

        if let Some(value) = lookup(MULTI_SPAN) {
            config.multi_span = parse_flag(&value).ok_or_else(|| {
                Error::config(
                    format!("{MULTI_SPAN} has unrecognised value '{value}'"),
                    "Use true/false, yes/no or 1/0",
                )
            })?;
        }

        Ok(config)
    }
}

/// Parse a span character setting.
///
/// It must be exactly one visible character one column wide, since the layout
/// counts one column per span character.
pub fn parse_span_char(value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() && c.width() == Some(1) => Ok(c),
        _ => Err(Error::config(
            format!("Span character must be a single visible one-column character, got '{value}'"),
            "Pick something absent from normal song text, e.g. '_', '~' or '|'",
        )),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
