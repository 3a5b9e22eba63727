//! Script file loading and paragraph segmentation.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Paragraphs made only of whitespace, digits, list markers and colons carry no speech.
static SYMBOL_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\s*\-\d.:：・]*$").expect("symbol filter pattern is valid")
});

/// Errors that can occur while reading a script.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Script {0} is not valid UTF-8")]
    InvalidUtf8(PathBuf),
}

/// Read a script file and split it into speech segments.
///
/// A leading byte-order mark is ignored. Segments are returned in document order.
pub fn read_script(path: &Path) -> Result<Vec<String>, ScriptError> {
    let bytes = std::fs::read(path).map_err(|source| ScriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let content =
        String::from_utf8(bytes).map_err(|_| ScriptError::InvalidUtf8(path.to_path_buf()))?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    Ok(split_segments(content))
}

/// Split script text into segments.
///
/// Paragraphs are separated by a blank line. Inside a paragraph each line is
/// trimmed, empty lines are dropped and the rest are joined with no separator.
pub fn split_segments(content: &str) -> Vec<String> {
    let normalized = content.replace("\r\n", "\n");

    normalized
        .split("\n\n")
        .map(join_paragraph)
        .filter(|text| !text.is_empty() && !is_symbol_only(text))
        .collect()
}

/// Whether `text` has nothing left after removing whitespace, digits and `* - . : ：・`.
pub fn is_symbol_only(text: &str) -> bool {
    SYMBOL_ONLY.is_match(text)
}

fn join_paragraph(paragraph: &str) -> String {
    paragraph
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// One unit of text to synthesize, numbered by document position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub index: usize,
    pub text: String,
}

impl Segment {
    /// Number segment texts in order, starting at zero.
    pub fn enumerate(texts: Vec<String>) -> Vec<Segment> {
        texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| Segment { index, text })
            .collect()
    }

    /// Output file name, e.g. `segment_007.wav`.
    pub fn audio_file_name(&self) -> String {
        format!("segment_{:03}.wav", self.index)
    }

    /// First 50 characters of the text, with `...` appended when truncated.
    pub fn preview(&self) -> String {
        const PREVIEW_CHARS: usize = 50;

        let mut chars = self.text.chars();
        let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
        if chars.next().is_some() {
            format!("{head}...")
        } else {
            head
        }
    }
}
