//! Parsing for PyPI's "newest packages" / "latest updates" RSS feeds.
//!
//! Each feed `<item>` arrives as a flat string→string mapping of its child
//! elements; XML extraction is the caller's concern.

use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;
use std::collections::HashMap;

use crate::error::Error;

/// Fixed suffix PyPI appends to feed item titles.
const TITLE_SUFFIX: &str = " added to PyPI";

/// Metadata for one entry of a PyPI update feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RssPackageMetadata {
    /// Package name, extracted from the feed title.
    pub title: String,
    /// Version from the feed title, when the title unambiguously carries one.
    pub version: Option<String>,
    /// Canonical URL to the package's registry page.
    pub package_link: String,
    pub guid: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub publication_date: Option<DateTime<Utc>>,
}

impl RssPackageMetadata {
    /// Build an instance from the raw key-value form of one feed item.
    ///
    /// `title` and `link` are required; everything else is optional and
    /// becomes `None` when absent. A feed title like
    /// `"requests 2.31.0 added to PyPI"` yields the package name and
    /// version; a title that splits into anything other than exactly two
    /// tokens yields no version.
    pub fn build_from(data: &HashMap<String, String>) -> Result<Self, Error> {
        let raw_title = data.get("title").ok_or(Error::MissingField("title"))?;
        let stripped = raw_title.strip_suffix(TITLE_SUFFIX).unwrap_or(raw_title);
        let tokens: Vec<&str> = stripped.split_whitespace().collect();

        let title = tokens.first().ok_or(Error::EmptyTitle)?.to_string();
        let version = if tokens.len() == 2 {
            Some(tokens[1].to_string())
        } else {
            if tokens.len() > 2 {
                debug!("feed title {raw_title:?} does not split into name and version");
            }
            None
        };

        let publication_date = match data.get("pubDate") {
            Some(date) => Some(DateTime::parse_from_rfc2822(date)?.with_timezone(&Utc)),
            None => None,
        };

        Ok(RssPackageMetadata {
            title,
            version,
            package_link: data
                .get("link")
                .ok_or(Error::MissingField("link"))?
                .clone(),
            guid: data.get("guid").cloned(),
            description: data.get("description").cloned(),
            author: data.get("author").cloned(),
            publication_date,
        })
    }
}
