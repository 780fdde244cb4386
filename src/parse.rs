//! Glossary source parsing.
//!
//! Stage 1 of the build. Reads a plain-text glossary and produces the
//! [`Glossary`] mapping the generator consumes.
//!
//! ## Source Format
//!
//! ```text
//! book                                   ← term (first non-blank line)
//! a printed or written literary work     ← definition line
//!                                        ← blank line commits the stanza
//! meaning
//! something that one wishes to convey,   ← definitions may span
//! especially by language                 ← several lines
//!
//! ```
//!
//! Every line is trimmed before it is looked at. Definition lines are joined
//! with `\n`.
//!
//! ## Permissive Rules
//!
//! The parser never rejects input. Instead:
//!
//! - A term with no definition lines is dropped.
//! - A stanza not followed by a blank line is dropped: there is no implicit
//!   flush at end of input, so a glossary file should end with a blank line.
//! - A repeated term replaces the earlier definition.

use crate::types::Glossary;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),
    #[error("Cannot read input file {path}: {source}")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ParseError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            ParseError::InputNotFound(path.to_path_buf())
        } else {
            ParseError::InputUnreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// The stanza currently being read: a term plus its definition so far.
#[derive(Debug, Default)]
struct PendingEntry {
    term: String,
    definition: String,
}

impl PendingEntry {
    fn feed(&mut self, raw: &str, glossary: &mut Glossary) {
        let line = raw.trim();
        if line.is_empty() {
            if !self.term.is_empty() && !self.definition.is_empty() {
                // Drop the separator appended after the last definition line
                self.definition.pop();
                glossary.insert(
                    std::mem::take(&mut self.term),
                    std::mem::take(&mut self.definition),
                );
            }
            self.term.clear();
        } else if self.term.is_empty() {
            self.term.push_str(line);
        } else {
            self.definition.push_str(line);
            self.definition.push('\n');
        }
    }
}

/// Parse glossary lines from any in-memory line source.
///
/// A trailing stanza that is not terminated by a blank line is discarded.
pub fn parse_lines<I, S>(lines: I) -> Glossary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut glossary = Glossary::new();
    let mut pending = PendingEntry::default();
    for line in lines {
        pending.feed(line.as_ref(), &mut glossary);
    }
    glossary
}

/// Parse a glossary from a line-oriented reader.
///
/// Read errors are reported against `path`, which is only used for the
/// error message. Nothing is parsed unless every line reads cleanly.
pub fn read_glossary_from<R: BufRead>(reader: R, path: &Path) -> Result<Glossary, ParseError> {
    let lines = reader
        .lines()
        .collect::<io::Result<Vec<String>>>()
        .map_err(|source| ParseError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(parse_lines(lines))
}

/// Open and parse the glossary file at `path`.
pub fn read_glossary(path: &Path) -> Result<Glossary, ParseError> {
    let file = File::open(path).map_err(|e| ParseError::from_io(path, e))?;
    read_glossary_from(BufReader::new(file), path)
}

/// Number of definition lines in a parsed definition.
pub fn definition_line_count(definition: &str) -> usize {
    definition.lines().count()
}
