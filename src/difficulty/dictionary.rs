//! English-Hindi dictionary lookup.
//!
//! Only checks that the dictionary page for a word can be fetched; the page
//! itself is not parsed.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, REFERER, USER_AGENT};
use reqwest::Url;

use crate::error::{Error, Result};

pub const SHABDKOSH_URL: &str = "https://www.shabdkosh.com/search-dictionary";

#[derive(Debug, Clone)]
pub struct DictionaryClient {
    client: Client,
    base_url: String,
}

impl DictionaryClient {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: SHABDKOSH_URL.to_string(),
        }
    }

    /// Search URL for `word`, with the word query-encoded.
    pub fn entry_url(&self, word: &str) -> Result<Url> {
        Url::parse_with_params(
            &self.base_url,
            &[("lc", "hi"), ("sl", "en"), ("tl", "hi"), ("e", word)],
        )
        .map_err(|e| Error::Config(format!("bad dictionary url: {e}")))
    }

    /// Fetch the entry page for `word`, discard the body, return the status.
    pub fn fetch(&self, word: &str) -> Result<u16> {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, HeaderValue::from_static("https://www.google.com"));
        headers.insert(USER_AGENT, HeaderValue::from_static(super::USER_AGENT));

        let response = self
            .client
            .get(self.entry_url(word)?)
            .headers(headers)
            .send()?;
        let status = response.status().as_u16();
        tracing::debug!(word, status, "dictionary lookup");
        Ok(status)
    }
}
