//! CLI output formatting for both build stages.
//!
//! Output is term-centric: every line leads with a positional index and the
//! term itself, with the generated file shown after an arrow.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Terms (from terms.txt)
//! 001 book (1 line)
//! 002 meaning (2 lines)
//! ```
//!
//! ## Generate
//!
//! ```text
//! Index → index.html
//! 001 book → book.html
//! 002 meaning → meaning.html
//!
//! Generated 2 term pages in out
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure.

use crate::generate::{GenerateReport, INDEX_FILE};
use crate::parse::definition_line_count;
use crate::types::Glossary;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, plural)
    }
}

// ============================================================================
// Stage 1: Parse output
// ============================================================================

/// Format the terms retained from a glossary source, in index order.
pub fn format_check_output(glossary: &Glossary, source: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("Terms (from {})", source.display()));

    for (i, term) in glossary.sorted_terms().into_iter().enumerate() {
        let count = glossary.get(term).map(definition_line_count).unwrap_or(0);
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            term,
            plural(count, "line", "lines")
        ));
    }

    if glossary.is_empty() {
        lines.push("    (no terms; is every stanza followed by a blank line?)".to_string());
    }

    lines
}

/// Print check output to stdout.
pub fn print_check_output(glossary: &Glossary, source: &Path) {
    for line in format_check_output(glossary, source) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format the pages written by a generation run.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("Index \u{2192} {}", INDEX_FILE));

    for (i, (term, filename)) in report.term_pages.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            term,
            filename
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} in {}",
        plural(report.term_pages.len(), "term page", "term pages"),
        report.output_dir.display()
    ));

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
