//! Transcript input sources.
//!
//! This module provides the Loader stage:
//! - File reading for local transcripts
//! - HTTP fetching for `http://` / `https://` locations
//! - Stdin for piped input (`-`)
//!
//! Fetching is the only blocking step of a load. Parsing happens here too, so
//! callers receive events rather than raw text (parse at boundary).

use crate::model::error::LoadError;
use crate::parser::{parse_transcript, ParsedTranscript};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

pub mod file;
pub mod http;
pub mod stdin;

/// Where a transcript is loaded from.
///
/// Sum type enforces exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptSource {
    /// Local file
    File(PathBuf),
    /// Remote file fetched with a GET request
    Http(String),
    /// Piped standard input
    Stdin,
}

impl TranscriptSource {
    /// Pick the source for a location string.
    ///
    /// `-` selects stdin, `http://` / `https://` select HTTP, anything else is
    /// a filesystem path.
    pub fn detect(location: &str) -> Self {
        if location == stdin::STDIN_PATH {
            TranscriptSource::Stdin
        } else if http::is_url(location) {
            TranscriptSource::Http(location.to_string())
        } else {
            TranscriptSource::File(PathBuf::from(location))
        }
    }

    /// Fetch the raw transcript text.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the transport fails; never retried.
    pub fn fetch_text(&self, timeout: Option<Duration>) -> Result<String, LoadError> {
        match self {
            TranscriptSource::File(path) => file::read_file(path),
            TranscriptSource::Http(url) => http::fetch(url, timeout),
            TranscriptSource::Stdin => stdin::read_stdin(),
        }
    }
}

impl fmt::Display for TranscriptSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptSource::File(path) => write!(f, "{}", path.display()),
            TranscriptSource::Http(url) => write!(f, "{url}"),
            TranscriptSource::Stdin => write!(f, "{}", stdin::STDIN_PATH),
        }
    }
}

/// Fetch and parse a transcript.
///
/// Malformed lines are dropped inside [`parse_transcript`]; only transport
/// failures are errors.
///
/// # Errors
///
/// Returns `LoadError` if the transcript cannot be fetched.
pub fn load_transcript(
    source: &TranscriptSource,
    timeout: Option<Duration>,
) -> Result<ParsedTranscript, LoadError> {
    let text = source.fetch_text(timeout).inspect_err(|err| {
        error!(source = %source, error = %err, "Error loading transcript");
    })?;

    let parsed = parse_transcript(&text);
    info!(
        source = %source,
        lines = parsed.report.lines,
        malformed = parsed.report.malformed,
        irrelevant = parsed.report.irrelevant,
        kept = parsed.report.kept,
        "Transcript loaded"
    );

    Ok(parsed)
}
