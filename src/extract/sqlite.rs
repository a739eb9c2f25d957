use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::{selector, text, ExtractContext, Extractor};
use crate::record::FunctionRecord;

static LIST: LazyLock<Selector> = LazyLock::new(|| selector("h1 + dl"));
static TERMS: LazyLock<Selector> = LazyLock::new(|| selector("dt, dd"));
static OUTLINE_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\d.]+").unwrap());

const HEADING_PREFIX: &str = " Descriptions of ";

/// Definition lists right after an `<h1>`: `<dt>` holds the signature,
/// the following `<dd>` its description.
pub struct SqliteExtractor;

impl Extractor for SqliteExtractor {
    fn extract(&self, doc: &Html, ctx: &mut ExtractContext) {
        for list in doc.select(&LIST) {
            ctx.theme = list
                .prev_siblings()
                .find_map(ElementRef::wrap)
                .map(|h| clean_heading(&text(h)))
                .unwrap_or_default();
            ctx.pending = None;

            for node in list.select(&TERMS) {
                match node.value().name() {
                    "dt" => {
                        if let Some(dropped) = ctx.pending.take() {
                            debug!("No description for {}", dropped.name);
                        }
                        let mut f = FunctionRecord::new(&ctx.theme);
                        f.name = split_signatures(&text(node));
                        ctx.pending = Some(f);
                    }
                    _ => match ctx.pending.take() {
                        Some(mut f) => {
                            f.description = text(node).trim().to_string();
                            ctx.push(f);
                        }
                        None => debug!("Description without a term in {:?}", ctx.theme),
                    },
                }
            }
        }
    }
}

/// "2. Descriptions of built-in scalar SQL functions" → "built-in scalar SQL functions"
fn clean_heading(heading: &str) -> String {
    let rest = OUTLINE_PREFIX.replace(heading, "");
    rest.strip_prefix(HEADING_PREFIX)
        .unwrap_or(&rest)
        .trim()
        .to_string()
}

/// A term can pack several signatures separated only by `<br>`, whose text
/// reads "foo()bar()".
fn split_signatures(term: &str) -> String {
    term.replace(')', ") ").trim().to_string()
}

// ── Tests ──
