pub mod mysql;
pub mod postgres;
pub mod sqlite;

use scraper::{ElementRef, Html, Selector};

use crate::record::FunctionRecord;

/// Extraction state shared across every page of one crawl.
#[derive(Debug, Default)]
pub struct ExtractContext {
    pub records: Vec<FunctionRecord>,
    /// Theme in effect; some extractors carry it over from the previous page.
    pub theme: String,
    /// Record whose name has been seen but whose description has not.
    pub pending: Option<FunctionRecord>,
}

impl ExtractContext {
    pub fn push(&mut self, record: FunctionRecord) {
        self.records.push(record);
    }

    pub fn into_records(self) -> Vec<FunctionRecord> {
        self.records
    }
}

/// Per-database rules turning one documentation page into records.
pub trait Extractor {
    fn extract(&self, doc: &Html, ctx: &mut ExtractContext);
}

/// Parse a selector known at compile time.
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad selector {:?}: {:?}", css, e))
}

/// Concatenated text of an element and all its descendants, untouched.
pub(crate) fn text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Text of every descendant matching `sel`, joined and trimmed.
pub(crate) fn child_text(el: ElementRef<'_>, sel: &Selector) -> String {
    el.select(sel)
        .flat_map(|m| m.text())
        .collect::<String>()
        .trim()
        .to_string()
}

// ── Tests ──
