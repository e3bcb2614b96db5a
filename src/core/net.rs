//! HTTP round-trip for request envelopes.

use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use url::Url;

use crate::core::{JqError, RequestEnvelope};

/// The reusable connection context to the single base endpoint.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: Client,
    base_url: Url,
}

impl Transport {
    pub(crate) fn new(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// POSTs the envelope and returns the raw body.
    ///
    /// The request body is JSON; the response is usually CSV text even though
    /// `Accept: application/json` is sent. Only the request is JSON.
    pub(crate) fn dispatch(&self, envelope: &RequestEnvelope) -> Result<String, JqError> {
        let body = envelope.to_json()?;
        let resp = self
            .http
            .post(self.base_url.clone())
            .header(ACCEPT, "application/json")
            .body(body)
            .send()?;

        if !resp.status().is_success() {
            return Err(JqError::Status {
                status: resp.status().as_u16(),
                url: self.base_url.to_string(),
            });
        }

        Ok(get_text(resp, envelope)?)
    }
}

/// Read the response body as text.
/// In `test-mode`, if `JQ_RECORD=1`, the body is saved as a fixture keyed by method and code.
/// Token responses are never recorded.
fn get_text(resp: Response, _envelope: &RequestEnvelope) -> Result<String, reqwest::Error> {
    let text = resp.text()?;

    #[cfg(feature = "test-mode")]
    {
        let method = _envelope.method();
        if _envelope.token().is_some()
            && std::env::var("JQ_RECORD").ok().as_deref() == Some("1")
        {
            match crate::core::fixtures::record_fixture(method, _envelope.params(), &text) {
                Ok(path) => {
                    if std::env::var("JQ_DEBUG").ok().as_deref() == Some("1") {
                        eprintln!("JQ_RECORD: wrote fixture to {}", path.display());
                    }
                }
                Err(e) => eprintln!("JQ_RECORD: failed to write fixture for {method}: {e}"),
            }
        }
    }

    Ok(text)
}
