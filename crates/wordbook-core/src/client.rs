use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};

use crate::error::{ClientError, LookupError};
use crate::raw::RawEntry;

/// Remote dictionary lookup
#[async_trait]
pub trait DictionarySource: Send + Sync {
    /// Fetch every candidate entry the service has for `query`
    async fn lookup(&self, query: &str) -> Result<Vec<RawEntry>, LookupError>;
}

#[derive(Clone)]
pub struct DictionaryClient {
    base_url: Url,
    client: reqwest::Client,
}

impl DictionaryClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Self::with_http_client(base_url, client)
    }

    /// Use a preconfigured HTTP client; its timeout settings apply to lookups
    pub fn with_http_client(base_url: &str, client: reqwest::Client) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot have path segments".to_string(),
            });
        }

        Ok(Self { base_url, client })
    }

    /// `<base>/<query>` with the query percent-encoded as one path segment
    pub fn entry_url(&self, query: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(query);
        }
        url
    }
}

#[async_trait]
impl DictionarySource for DictionaryClient {
    async fn lookup(&self, query: &str) -> Result<Vec<RawEntry>, LookupError> {
        let url = self.entry_url(query);
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        classify(status, &body)
    }
}

/// Map a completed HTTP exchange to entries or `NotFound`
pub fn classify(status: StatusCode, body: &[u8]) -> Result<Vec<RawEntry>, LookupError> {
    if status == StatusCode::NOT_FOUND {
        return Err(LookupError::NotFound);
    }

    if !status.is_success() {
        tracing::warn!("Dictionary service returned HTTP {}", status);
        return Err(LookupError::NotFound);
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        tracing::warn!("Dictionary service returned an empty body");
        return Err(LookupError::NotFound);
    }

    serde_json::from_slice::<Vec<RawEntry>>(body).map_err(|e| {
        tracing::warn!("Failed to parse dictionary response: {}", e);
        LookupError::NotFound
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> DictionaryClient {
        DictionaryClient::new(
            "https://api.dictionaryapi.dev/api/v2/entries/en",
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn query_is_percent_encoded() {
        let client = client();
        assert_eq!(
            client.entry_url("hello").as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/hello"
        );
        assert_eq!(
            client.entry_url("ice cream").as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/ice%20cream"
        );
        assert_eq!(
            client.entry_url("a/b?c#d").as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/a%2Fb%3Fc%23d"
        );
    }

    #[test]
    fn trailing_slash_in_base_is_tolerated() {
        let client = DictionaryClient::new("http://localhost:8080/entries/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.entry_url("word").as_str(), "http://localhost:8080/entries/word");
    }

    #[test]
    fn rejects_unusable_base() {
        assert!(DictionaryClient::new("not a url", Duration::from_secs(1)).is_err());
        assert!(DictionaryClient::new("mailto:someone@example.org", Duration::from_secs(1)).is_err());
    }

    #[test]
    fn classify_statuses() {
        let body = br#"[{"word": "hello"}]"#;

        assert_eq!(classify(StatusCode::OK, body).unwrap().len(), 1);
        assert_eq!(
            classify(StatusCode::NOT_FOUND, br#"{"title": "No Definitions Found"}"#).unwrap_err(),
            LookupError::NotFound
        );
        assert_eq!(
            classify(StatusCode::INTERNAL_SERVER_ERROR, body).unwrap_err(),
            LookupError::NotFound
        );
        assert_eq!(
            classify(StatusCode::TOO_MANY_REQUESTS, body).unwrap_err(),
            LookupError::NotFound
        );
    }

    #[test]
    fn classify_bad_bodies() {
        assert_eq!(classify(StatusCode::OK, b"").unwrap_err(), LookupError::NotFound);
        assert_eq!(classify(StatusCode::OK, b" \n").unwrap_err(), LookupError::NotFound);
        assert_eq!(classify(StatusCode::OK, b"<html>").unwrap_err(), LookupError::NotFound);
        assert_eq!(
            classify(StatusCode::OK, br#"{"word": "hello"}"#).unwrap_err(),
            LookupError::NotFound
        );
        // an empty array decodes; the normalizer rejects it
        assert!(classify(StatusCode::OK, b"[]").unwrap().is_empty());
    }
}
