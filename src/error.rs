use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by [`Client`](crate::Client) and the model helpers.
///
/// Invalid-value errors (`InvalidLanguage`, `InvalidPctChange`) are raised by
/// the `FromStr` impls before any network activity. `Status` is the SIE API
/// answering with a non-success code; `Http` is the transport itself failing.
#[derive(Debug, Error)]
pub enum Error {
    /// Language outside the supported `en`/`es` pair.
    #[error("language {0:?} is not defined: try \"en\" for english or \"es\" for spanish")]
    InvalidLanguage(String),

    /// Percent-change mode outside the literals the SIE API understands.
    #[error(
        "percent-change mode {0:?} is not defined: try \"PorcObsAnt\", \"PorcAnual\" or \"PorcAcumAnual\""
    )]
    InvalidPctChange(String),

    /// Non-success HTTP status from the SIE API, with a likely-cause hint.
    #[error("request failed with HTTP {status}: check {hint}")]
    Status {
        status: StatusCode,
        hint: &'static str,
    },

    /// Transport failure: connect, timeout, or response-body decode.
    #[error("http transport error")]
    Http(#[from] reqwest::Error),

    /// A JSON body did not match the typed response models.
    #[error("decode response json")]
    Json(#[from] serde_json::Error),
}
