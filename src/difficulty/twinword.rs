//! Twinword word-difficulty API.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, HOST, REFERER, USER_AGENT};
use reqwest::StatusCode;
use serde::Deserialize;

use super::{Difficulty, DifficultyScorer};
use crate::error::{Error, Result};

pub const TWINWORD_URL: &str = "https://www.twinword.com/api/score/word/latest/";

/// `result_code` the service returns for words it has no score for
const NOT_FOUND_CODE: &str = "462";

#[derive(Debug, Deserialize)]
struct ScoreResponse {
    #[serde(default)]
    result_code: Option<String>,
    #[serde(default)]
    result_msg: Option<String>,
    #[serde(default)]
    value: Option<f64>,
}

/// Scores words by POSTing them to the Twinword scoring endpoint.
#[derive(Debug, Clone)]
pub struct TwinwordScorer {
    client: Client,
    url: String,
}

impl TwinwordScorer {
    pub fn new(client: Client) -> Self {
        Self::with_url(client, TWINWORD_URL)
    }

    /// Point the scorer at another endpoint (a mirror or a local stub).
    pub fn with_url(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("www.twinword.com"));
        headers.insert(
            REFERER,
            HeaderValue::from_static("https://www.twinword.com/api/language-scoring.php"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(super::USER_AGENT));
        headers
    }

    /// Map an HTTP status and body to a [`Difficulty`].
    ///
    /// - 200 with `result_code` "462": [`Difficulty::NotFound`]
    /// - 200 otherwise: [`Difficulty::Scored`] with the `value` field
    /// - any other status: [`Difficulty::Unavailable`]
    ///
    /// A 200 response whose body is not the expected JSON, or that has no
    /// `value` and an unknown `result_code`, is an error.
    pub fn interpret(status: StatusCode, body: &str) -> Result<Difficulty> {
        if status != StatusCode::OK {
            return Ok(Difficulty::Unavailable);
        }
        let response: ScoreResponse = serde_json::from_str(body)?;
        if response.result_code.as_deref() == Some(NOT_FOUND_CODE) {
            return Ok(Difficulty::NotFound);
        }
        match response.value {
            Some(value) => Ok(Difficulty::Scored(value)),
            None => Err(Error::Response(format!(
                "no difficulty value (result_code {}: {})",
                response.result_code.as_deref().unwrap_or("none"),
                response.result_msg.as_deref().unwrap_or(""),
            ))),
        }
    }
}

impl DifficultyScorer for TwinwordScorer {
    fn score(&self, word: &str) -> Result<Difficulty> {
        let response = self
            .client
            .post(&self.url)
            .headers(Self::headers())
            .form(&[("entry", word)])
            .send()?;
        let status = response.status();
        let body = response.text()?;
        tracing::debug!(word, status = status.as_u16(), "twinword response");
        Self::interpret(status, &body)
    }
}
