//! Typed models for PyPI's public API responses.
//!
//! Two independent, side-effect-free conversion pipelines:
//!
//! - The JSON API payload for one package+version query deserializes into
//!   [`json::JsonPackageMetadata`] and converts into a [`package::Package`]
//!   (with its [`package::Release`] and [`package::Distribution`]s).
//! - One RSS feed item, as a string→string mapping, parses into an
//!   [`rss::RssPackageMetadata`].
//!
//! Fetching the raw payloads is the caller's concern; this crate performs
//! no I/O.

pub mod error;
pub mod json;
pub mod package;
pub mod rss;

pub use error::Error;
pub use json::JsonPackageMetadata;
pub use package::{Distribution, Package, Release};
pub use rss::RssPackageMetadata;
