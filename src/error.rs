use thiserror::Error;

/// Errors that can occur during ingredient extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    /// No document content or no source identifier was supplied
    #[error("no document content or source identifier provided")]
    EmptyInput,

    /// The markup could not be parsed into a document tree at all.
    ///
    /// The html5ever parser underneath recovers from arbitrary input, so the
    /// current pipeline never produces this; the variant stays part of the
    /// public contract for extractors that can reject their input outright.
    #[error("document markup could not be parsed")]
    MalformedDocument,

    /// Network or timeout failure while fetching a URL
    #[error("failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Error parsing HTTP headers
    #[error("header parse error: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
