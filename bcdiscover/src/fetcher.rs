use anyhow::Result;
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header;
use serde::Deserialize;
use tracing::{debug, trace, warn};

use crate::error::DiscoverError;

const USER_AGENT: &str = concat!("bcdiscover/", env!("CARGO_PKG_VERSION"));
const ALBUM_ITEM_TYPE: &str = "a";

pub struct DiscoverClient {
    client: Client,
}

impl DiscoverClient {
    pub fn new() -> Result<Self> {
        Self::with_builder(Client::builder())
    }

    fn with_builder(builder: ClientBuilder) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(USER_AGENT),
        );

        let client = builder.default_headers(headers).build()?;

        Ok(Self { client })
    }

    /// Issues a single GET against `url` and returns album page URLs in
    /// response order. Nothing is retried.
    pub fn fetch_album_urls(&self, url: &str) -> Result<Vec<String>, DiscoverError> {
        debug!("Discover API request: {url}");

        let fetch_err = |source| DiscoverError::Fetch {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().map_err(fetch_err)?;

        // The body is decoded whatever the status; an error page surfaces as a
        // decode failure.
        let status = response.status();
        if !status.is_success() {
            warn!("Discover API responded with {status}");
        }

        // The response is consumed by bytes(), so the connection is released
        // before decoding starts whether or not decoding succeeds.
        let body = response.bytes().map_err(fetch_err)?;

        let data: DiscoverResponse = serde_json::from_slice(&body)?;
        debug!("Discover API returned {} items", data.items.len());

        Ok(album_urls(&data))
    }
}

#[derive(Deserialize, Debug)]
pub struct DiscoverResponse {
    pub items: Vec<DiscoveryItem>,
}

#[derive(Deserialize, Debug)]
pub struct DiscoveryItem {
    /// Album title.
    #[serde(default)]
    pub primary_text: String,
    /// Artist name.
    #[serde(default)]
    pub secondary_text: String,
    #[serde(default)]
    pub url_hints: UrlHints,
}

#[derive(Deserialize, Debug, Default)]
pub struct UrlHints {
    /// `<subdomain>.bandcamp.com`
    #[serde(default)]
    pub subdomain: String,
    /// `/album/<slug>`
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub item_type: String,
}

impl DiscoveryItem {
    pub fn is_album(&self) -> bool {
        self.url_hints.item_type == ALBUM_ITEM_TYPE
    }

    /// Custom domains aren't resolved; every album is assumed to live on bandcamp.com.
    pub fn album_url(&self) -> String {
        format!(
            "https://{}.bandcamp.com/album/{}",
            self.url_hints.subdomain, self.url_hints.slug
        )
    }
}

pub fn album_urls(data: &DiscoverResponse) -> Vec<String> {
    data.items
        .iter()
        .filter(|item| {
            if item.is_album() {
                debug!("{} - {}", item.secondary_text, item.primary_text);
                true
            } else {
                trace!(
                    "Skipping item of type {:?}: {}",
                    item.url_hints.item_type, item.primary_text
                );
                false
            }
        })
        .map(DiscoveryItem::album_url)
        .collect()
}
