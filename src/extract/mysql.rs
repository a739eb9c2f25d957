use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

use super::{selector, text, ExtractContext, Extractor};
use crate::record::FunctionRecord;

static TITLE: LazyLock<Selector> = LazyLock::new(|| selector(".titlepage"));
static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tbody tr"));
static CELL: LazyLock<Selector> = LazyLock::new(|| selector("td"));
static SECTION_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"((?:\d+\.?)+)").unwrap());

/// Reference tables of the MySQL manual. Rows whose first cell is not a
/// call signature (operators, statements) are skipped.
pub struct MysqlExtractor;

impl Extractor for MysqlExtractor {
    fn extract(&self, doc: &Html, ctx: &mut ExtractContext) {
        // Pages without a title keep the previous page's theme.
        if let Some(title) = doc.select(&TITLE).last() {
            ctx.theme = clean_title(&text(title));
        }

        for row in doc.select(&ROW) {
            let mut cells = row.select(&CELL);

            let Some(first) = cells.next() else {
                continue;
            };
            let name = text(first);
            if !name.ends_with(')') {
                debug!("Skipping statement {:?}", name.trim());
                continue;
            }

            let mut f = FunctionRecord::new(&ctx.theme);
            f.name = name;
            if let Some(second) = cells.next() {
                f.description = text(second).trim().to_string();
            }
            ctx.push(f);
        }
    }
}

/// "12.20.1 Aggregate Function Descriptions" → "Aggregate Function Descriptions"
fn clean_title(title: &str) -> String {
    SECTION_NUMBER.replace_all(title, "").trim().to_string()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn run_pages(pages: &[&str]) -> Vec<FunctionRecord> {
        let mut ctx = ExtractContext::default();
        for html in pages {
            MysqlExtractor.extract(&Html::parse_document(html), &mut ctx);
        }
        ctx.into_records()
    }

    #[test]
    fn title_cleanup() {
        assert_eq!(
            clean_title("\n 12.20.1 Aggregate Function Descriptions \n"),
            "Aggregate Function Descriptions"
        );
        assert_eq!(clean_title("Functions and Operators"), "Functions and Operators");
    }

    #[test]
    fn statements_are_skipped() {
        let records = run_pages(&[r#"
            <div class="titlepage">12.1 Reference</div>
            <table><tbody>
              <tr><td>ABS()</td><td> Return the absolute value </td></tr>
              <tr><td>CASE</td><td>Case operator</td></tr>
              <tr><td>&gt;=</td><td>Greater than or equal</td></tr>
            </tbody></table>"#]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "ABS()");
        assert_eq!(records[0].description, "Return the absolute value");
        assert_eq!(records[0].theme, "Reference");
    }

    #[test]
    fn header_rows_are_not_records() {
        let records = run_pages(&[r#"
            <table><thead><tr><th>Name</th></tr></thead>
            <tbody><tr><th>Name</th><th>Description</th></tr>
            <tr><td>NOW()</td></tr></tbody></table>"#]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "NOW()");
        assert_eq!(records[0].description, "");
    }

    #[test]
    fn theme_carries_over_untitled_pages() {
        let records = run_pages(&[
            r#"<div class="titlepage">12.6 Numeric Functions</div>
               <table><tbody><tr><td>PI()</td><td>pi</td></tr></tbody></table>"#,
            r#"<table><tbody><tr><td>E()</td><td>e</td></tr></tbody></table>"#,
        ]);
        assert_eq!(records[1].theme, "Numeric Functions");
    }

    #[test]
    fn last_title_wins() {
        let records = run_pages(&[r#"
            <div class="titlepage">12.8 String Functions</div>
            <div class="titlepage">12.8.1 String Comparison Functions</div>
            <table><tbody><tr><td>STRCMP()</td><td>Compare</td></tr></tbody></table>"#]);
        assert_eq!(records[0].theme, "String Comparison Functions");
    }

    #[test]
    fn fixture_page() {
        let html = std::fs::read_to_string("tests/fixtures/mysql_aggregate.html").unwrap();
        let records = run_pages(&[html.as_str()]);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["AVG()", "COUNT()", "MAX()"]);
        assert!(records.iter().all(|r| r.theme == "Aggregate Function Descriptions"));
    }
}
