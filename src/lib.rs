//! # glossgen
//!
//! A minimal static site generator for plain-text glossaries. A text file of
//! blank-line separated stanzas becomes an index page plus one page per term.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Parse     terms.txt  →  Glossary      (lines → term/definition map)
//! 2. Generate  Glossary   →  out/          (index.html + <term>.html)
//! ```
//!
//! The [`Glossary`](types::Glossary) is the only thing passed between stages.
//! It is built once and read-only afterwards, so both generator operations
//! borrow it.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`parse`] | Stage 1 — folds source lines into a glossary |
//! | [`generate`] | Stage 2 — renders the index and term pages using Maud |
//! | [`types`] | The `Glossary` mapping and its sorted term order |
//! | [`config`] | Optional `glossary.toml` loading, merging, and validation |
//! | [`output`] | CLI output formatting for both stages |
//!
//! # Design Decisions
//!
//! ## Permissive Parsing
//!
//! Malformed input is never an error. A term with no definition, or a stanza
//! that runs to end of file without a closing blank line, is simply dropped.
//! A repeated term keeps its last definition.
//!
//! ## Verbatim Output
//!
//! Terms and definitions are written into the HTML without escaping, and term
//! page file names are the raw term. Glossary text may therefore carry inline
//! markup, and a term with characters the filesystem rejects fails to write.
//!
//! ## Injected I/O
//!
//! The parser reads from any `BufRead` (or plain line iterator) and the
//! generator writes through a [`PageSink`](generate::PageSink), so both
//! stages are testable without real files.

pub mod config;
pub mod generate;
pub mod output;
pub mod parse;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
