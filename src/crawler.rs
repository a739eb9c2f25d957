use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{CrawlError, Result};
use crate::extract::{selector, text, ExtractContext};
use crate::fetch::Fetcher;
use crate::record::FunctionRecord;
use crate::target::Profile;

static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a[href]"));

/// Depth-first documentation crawler. Each page is fetched once; its
/// matching links are followed to completion before the page itself is
/// handed to the extractor.
pub struct Crawler<F: Fetcher> {
    fetcher: F,
    profile: Profile,
    visited: HashSet<String>,
    ctx: ExtractContext,
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(fetcher: F, profile: Profile) -> Self {
        Self {
            fetcher,
            profile,
            visited: HashSet::new(),
            ctx: ExtractContext::default(),
        }
    }

    /// Crawl from the seed and return every record in discovery order.
    /// The first fatal error aborts the crawl and discards what was found.
    pub fn run(mut self) -> Result<Vec<FunctionRecord>> {
        let seed = Url::parse(&self.profile.seed_url).map_err(|source| CrawlError::InvalidUrl {
            url: self.profile.seed_url.clone(),
            source,
        })?;
        self.visit(seed)?;
        info!(
            "Crawl finished: {} pages, {} functions",
            self.visited.len(),
            self.ctx.records.len()
        );
        Ok(self.ctx.into_records())
    }

    fn visit(&mut self, mut url: Url) -> Result<()> {
        url.set_fragment(None);
        if !self.visited.insert(url.to_string()) {
            return Err(CrawlError::AlreadyVisited(url.into()));
        }
        if !(self.profile.admission)(&url) {
            warn!("Rejected {}", url);
            return Ok(());
        }

        info!("Visiting {}", url);
        let page = self.fetcher.fetch(&url)?;
        let doc = Html::parse_document(&page.body);

        self.follow_links(&doc, &page.url)?;
        self.profile.extractor.extract(&doc, &mut self.ctx);
        Ok(())
    }

    fn follow_links(&mut self, doc: &Html, base: &Url) -> Result<()> {
        for anchor in doc.select(&ANCHOR) {
            if !(self.profile.link_predicate)(&text(anchor)) {
                continue;
            }
            match self.visit_href(base, anchor.value().attr("href")) {
                Err(e) if e.is_recoverable() => debug!("Skipping link: {}", e),
                other => other?,
            }
        }
        Ok(())
    }

    fn visit_href(&mut self, base: &Url, href: Option<&str>) -> Result<()> {
        let href = href
            .map(str::trim)
            .filter(|h| !h.is_empty() && !h.starts_with('#'))
            .ok_or(CrawlError::MissingUrl)?;
        let url = base.join(href).map_err(|_| CrawlError::MissingUrl)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CrawlError::MissingUrl);
        }
        self.visit(url)
    }
}

// ── Tests ──
