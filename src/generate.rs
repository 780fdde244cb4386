//! HTML site generation.
//!
//! Stage 2 of the build. Takes a parsed [`Glossary`] and writes the static
//! site into an existing output directory.
//!
//! ## Generated Pages
//!
//! - **Index page** (`index.html`): every term, sorted, linked to its page
//! - **Term pages** (`<term>.html`): the term as a bold, italic, red
//!   heading, its definition, and a link back to the index
//!
//! ## Output Structure
//!
//! ```text
//! out/
//! ├── index.html
//! ├── book.html
//! ├── glossary.html
//! └── meaning.html
//! ```
//!
//! File names are the raw term with `.html` appended. Terms are not
//! sanitized, so a term containing `/` or other characters the filesystem
//! rejects makes its page write fail.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for the page skeleton. Glossary text
//! is spliced in through [`PreEscaped`], so terms and definitions reach the
//! page exactly as written. A term containing `<` or `&` will break the
//! markup; glossary authors own their HTML.
//!
//! ## Failure Behavior
//!
//! Pages are written one at a time through a [`PageSink`]. The first failed
//! write aborts generation; pages written before it stay on disk.

use crate::config::{IndexConfig, SiteConfig, TermPageConfig};
use crate::types::Glossary;
use maud::{DOCTYPE, Markup, PreEscaped, Render, html};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Cannot write {path}: {source}")]
    OutputDirectoryUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// File name of the index page.
pub const INDEX_FILE: &str = "index.html";

/// Font color of the term heading on every term page.
pub const TERM_COLOR: &str = "red";

/// File name of a term's page: the term itself plus `.html`.
pub fn term_page_filename(term: &str) -> String {
    format!("{term}.html")
}

/// Destination for rendered pages.
///
/// Each call writes one complete page; implementations must not hold
/// resources open between calls.
pub trait PageSink {
    fn write_page(&mut self, name: &str, contents: &str) -> Result<(), GenerateError>;
}

/// Writes each page as a file in an existing directory.
#[derive(Debug, Clone)]
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl PageSink for DirSink {
    fn write_page(&mut self, name: &str, contents: &str) -> Result<(), GenerateError> {
        let path = self.dir.join(name);
        fs::write(&path, contents)
            .map_err(|source| GenerateError::OutputDirectoryUnwritable { path, source })
    }
}

/// What a generation run wrote, in write order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    /// `(term, file name)` for every term page.
    pub term_pages: Vec<(String, String)>,
}

/// Write the index page followed by every term page into `output_dir`.
///
/// The directory must already exist.
pub fn generate(
    glossary: &Glossary,
    output_dir: &Path,
    config: &SiteConfig,
) -> Result<GenerateReport, GenerateError> {
    let mut sink = DirSink::new(output_dir);
    write_index_page(glossary, &mut sink, &config.index)?;
    let term_pages = write_term_pages(glossary, &mut sink, &config.term_page)?;
    Ok(GenerateReport {
        output_dir: output_dir.to_path_buf(),
        term_pages,
    })
}

/// Render and write `index.html`.
pub fn write_index_page<S: PageSink>(
    glossary: &Glossary,
    sink: &mut S,
    config: &IndexConfig,
) -> Result<(), GenerateError> {
    let page = render_index(glossary, config);
    sink.write_page(INDEX_FILE, &page.into_string())
}

/// Render and write one page per term, in sorted term order.
///
/// Returns `(term, file name)` pairs for the pages written.
pub fn write_term_pages<S: PageSink>(
    glossary: &Glossary,
    sink: &mut S,
    config: &TermPageConfig,
) -> Result<Vec<(String, String)>, GenerateError> {
    let mut written = Vec::with_capacity(glossary.len());
    for (term, definition) in glossary.sorted_entries() {
        let filename = term_page_filename(term);
        let page = render_term_page(term, definition, config);
        sink.write_page(&filename, &page.into_string())?;
        written.push((term.to_string(), filename));
    }
    Ok(written)
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: impl Render, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                title { (title) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the index page: heading plus the sorted term list.
pub fn render_index(glossary: &Glossary, config: &IndexConfig) -> Markup {
    let content = html! {
        h1 { (config.heading) }
        ul {
            @for term in glossary.sorted_terms() {
                li {
                    a href={ (PreEscaped(term)) ".html" } { (PreEscaped(term)) }
                }
            }
        }
    };

    base_document(&config.title, content)
}

/// Renders a single term page.
pub fn render_term_page(term: &str, definition: &str, config: &TermPageConfig) -> Markup {
    let content = html! {
        h1 {
            i { b { font color=(TERM_COLOR) { (PreEscaped(term)) } } }
        }
        p { (PreEscaped(definition)) }
        hr;
        "Return to "
        a href=(INDEX_FILE) { (config.return_label) }
    };

    base_document(PreEscaped(term), content)
}

// ============================================================================
// Tests
// ============================================================================
