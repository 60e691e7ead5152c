//! Error type shared by both conversion pipelines.

use thiserror::Error;

/// Failures raised while converting raw API data into domain values.
///
/// There is exactly one class of failure: a required field is missing or
/// malformed. Optional fields never error; they resolve to `None`.
#[derive(Debug, Error)]
pub enum Error {
    /// A feed item lacks a key the parser unconditionally reads.
    #[error("feed item is missing required field `{0}`")]
    MissingField(&'static str),

    /// The feed title was empty after stripping the registry suffix,
    /// leaving no package name to extract.
    #[error("feed item title contains no package name")]
    EmptyTitle,

    /// The `pubDate` value was present but not a valid RFC 2822 date.
    #[error("invalid publication date: {0}")]
    PublicationDate(#[from] chrono::ParseError),

    /// The JSON API payload was malformed or lacked a required field.
    #[error("malformed package metadata: {0}")]
    Json(#[from] serde_json::Error),
}
