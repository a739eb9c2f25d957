use reqwest::blocking::Client;
use url::Url;

use crate::error::{CrawlError, Result};
use crate::settings::Settings;

/// A fetched document. `url` is the final location after redirects and is
/// the base for resolving relative links.
#[derive(Debug, Clone)]
pub struct Page {
    pub url: Url,
    pub body: String,
}

/// Network side of the crawler: turn a URL into an HTML body.
pub trait Fetcher {
    fn fetch(&mut self, url: &Url) -> Result<Page>;
}

impl<T: Fetcher + ?Sized> Fetcher for &mut T {
    fn fetch(&mut self, url: &Url) -> Result<Page> {
        (**self).fetch(url)
    }
}

/// Blocking HTTP fetcher. Non-2xx answers are errors.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(settings: &Settings) -> Result<Self> {
        // The blocking client defaults to a 30s timeout; `None` lifts it.
        let client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(settings.timeout())
            .build().map_err(|source| CrawlError::Http {
            url: "<client setup>".to_string(),
            source,
        })?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&mut self, url: &Url) -> Result<Page> {
        let http_err = |source: reqwest::Error| CrawlError::Http {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url.clone()).send().map_err(http_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().clone();
        let body = response.text().map_err(http_err)?;
        Ok(Page {
            url: final_url,
            body,
        })
    }
}
