use crate::config::FetchConfig;
use crate::error::ExtractError;
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, USER_AGENT};
use std::time::Duration;

/// Fetch a document body over HTTP.
///
/// One bounded GET with the configured timeout and a browser user agent;
/// failures surface to the caller and are never retried.
pub fn fetch_document(url: &str, config: &FetchConfig) -> Result<String, ExtractError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, config.user_agent.parse()?);

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .default_headers(headers)
        .build()?;

    debug!("fetching {url}");
    let body = client.get(url).send()?.text()?;
    debug!("fetched {} bytes from {url}", body.len());
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_document_returns_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/recipe")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body>hi</body></html>")
            .create();

        let body =
            fetch_document(&format!("{}/recipe", server.url()), &FetchConfig::default()).unwrap();
        assert!(body.contains("hi"));
        mock.assert();
    }

    #[test]
    fn test_fetch_document_propagates_http_errors() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/missing")
            .with_status(404)
            .create();

        // a 404 still returns its body; only transport errors fail
        let body =
            fetch_document(&format!("{}/missing", server.url()), &FetchConfig::default()).unwrap();
        assert!(body.is_empty());
    }
}
