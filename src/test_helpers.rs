//! Shared test utilities for the glossgen test suite.
//!
//! Provides a sample glossary source, fixture setup on a temp directory, and
//! an in-memory [`PageSink`] for exercising the generator without touching
//! the filesystem.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = write_glossary_file(SAMPLE_GLOSSARY);
//! let glossary = read_glossary(&tmp.path().join(GLOSSARY_FILE)).unwrap();
//!
//! let mut sink = MemorySink::default();
//! write_index_page(&glossary, &mut sink, &IndexConfig::default()).unwrap();
//! assert_eq!(sink.names(), vec!["index.html"]);
//! ```

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::generate::{GenerateError, PageSink};

/// File name used by [`write_glossary_file`].
pub const GLOSSARY_FILE: &str = "terms.txt";

/// Seven well-formed stanzas, each terminated by a blank line.
pub const SAMPLE_GLOSSARY: &str = "\
meaning
something that one wishes to convey, especially by language

term
a word whose definition is in a glossary

word
a string of characters in a language, which has at least one character

definition
a sequence of words that gives meaning to a term

glossary
a list of difficult or specialized terms, with their definitions, usually near the end of a book

language
a set of strings of characters, each of which has meaning

book
a printed or written literary work

";

// =========================================================================
// Fixture setup
// =========================================================================

/// Write `contents` to `terms.txt` in a fresh temp directory.
pub fn write_glossary_file(contents: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join(GLOSSARY_FILE), contents).unwrap();
    tmp
}

/// Read a generated page. Panics with the directory listing on miss.
pub fn read_page(dir: &Path, name: &str) -> String {
    std::fs::read_to_string(dir.join(name)).unwrap_or_else(|e| {
        let names: Vec<PathBuf> = std::fs::read_dir(dir)
            .map(|entries| entries.filter_map(|e| e.ok()).map(|e| e.path()).collect())
            .unwrap_or_default();
        panic!("page '{name}' not readable ({e}). Present: {names:?}")
    })
}

// =========================================================================
// In-memory sink
// =========================================================================

/// Collects pages in memory, optionally failing on one page name.
#[derive(Debug, Default)]
pub struct MemorySink {
    pages: Vec<(String, String)>,
    fail_on: Option<String>,
}

impl MemorySink {
    /// A sink that rejects the page called `name` and accepts the rest.
    pub fn failing_on(name: &str) -> Self {
        Self {
            pages: Vec::new(),
            fail_on: Some(name.to_string()),
        }
    }

    /// Page names in write order.
    pub fn names(&self) -> Vec<&str> {
        self.pages.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn page(&self, name: &str) -> Option<&str> {
        self.pages
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c.as_str())
    }

    /// Pages keyed by name, for order-independent comparison.
    pub fn by_name(&self) -> BTreeMap<&str, &str> {
        self.pages
            .iter()
            .map(|(n, c)| (n.as_str(), c.as_str()))
            .collect()
    }
}

impl PageSink for MemorySink {
    fn write_page(&mut self, name: &str, contents: &str) -> Result<(), GenerateError> {
        if self.fail_on.as_deref() == Some(name) {
            return Err(GenerateError::OutputDirectoryUnwritable {
                path: PathBuf::from(name),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "sink rejected page"),
            });
        }
        self.pages.push((name.to_string(), contents.to_string()));
        Ok(())
    }
}
