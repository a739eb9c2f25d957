use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::info;

use super::{child_text, selector, text, ExtractContext, Extractor};
use crate::record::FunctionRecord;

static TABLE: LazyLock<Selector> = LazyLock::new(|| selector(r#"table[summary$="Functions"]"#));
static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
static CELL: LazyLock<Selector> = LazyLock::new(|| selector("td"));
static FUNCTION_CODE: LazyLock<Selector> = LazyLock::new(|| selector("code.function"));
static CODE: LazyLock<Selector> = LazyLock::new(|| selector("code"));

/// Function summary tables: `<table summary="... Functions">`, one record per row.
pub struct PostgresExtractor;

impl Extractor for PostgresExtractor {
    fn extract(&self, doc: &Html, ctx: &mut ExtractContext) {
        for table in doc.select(&TABLE) {
            let theme = table.value().attr("summary").unwrap_or_default();

            for row in table.select(&ROW) {
                let mut f = FunctionRecord::new(theme);
                for (i, cell) in row.select(&CELL).enumerate() {
                    match i {
                        0 => {
                            // Some names are <code><code>..</code></code>, which
                            // would double the text if read through plain `code`.
                            f.name = child_text(cell, &FUNCTION_CODE);
                            if f.name.is_empty() {
                                f.name = child_text(cell, &CODE);
                            }
                            info!("{}", f.name);
                        }
                        1 => f.description = text(cell),
                        _ => {}
                    }
                }
                ctx.push(f);
            }
        }
    }
}

// ── Tests ──
