//! Raw response types for PyPI's per-package JSON API.
//!
//! These mirror the wire shape of `https://pypi.org/pypi/<name>/<version>/json`.
//! Only `info.name`, `info.version` and the `urls` entries' `filename`/`url`
//! are required; everything else is optional and defaults when absent.
//! Unknown fields are ignored.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::str::FromStr;

use crate::error::Error;

/// The full JSON API payload for one package+version query.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct JsonPackageMetadata {
    pub info: PackageInfo,
    #[serde(default)]
    pub last_serial: Option<i64>,
    pub urls: Vec<DistributionUrl>,
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
}

impl FromStr for JsonPackageMetadata {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

/// The `info` block of the JSON API payload.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PackageInfo {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_content_type: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub author_email: Option<String>,
    #[serde(default)]
    pub maintainer: Option<String>,
    #[serde(default)]
    pub maintainer_email: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub classifiers: Vec<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub home_page: Option<String>,
    #[serde(default)]
    pub package_url: Option<String>,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub project_urls: Option<HashMap<String, String>>,
    #[serde(default)]
    pub release_url: Option<String>,
    #[serde(default)]
    pub requires_dist: Option<Vec<String>>,
    #[serde(default)]
    pub requires_python: Option<String>,
    #[serde(default)]
    pub yanked: bool,
    #[serde(default)]
    pub yanked_reason: Option<String>,
}

/// One entry of the `urls` array: a single downloadable file.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DistributionUrl {
    pub filename: String,
    pub url: String,
    #[serde(default)]
    pub packagetype: Option<String>,
    #[serde(default)]
    pub python_version: Option<String>,
    #[serde(default)]
    pub requires_python: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub digests: Option<Digests>,
    #[serde(default)]
    pub md5_digest: Option<String>,
    #[serde(default)]
    pub has_sig: Option<bool>,
    #[serde(default)]
    pub comment_text: Option<String>,
    #[serde(default)]
    pub upload_time_iso_8601: Option<DateTime<Utc>>,
    #[serde(default)]
    pub yanked: bool,
    #[serde(default)]
    pub yanked_reason: Option<String>,
}

/// Checksums published alongside a file.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Digests {
    #[serde(default)]
    pub blake2b_256: Option<String>,
    #[serde(default)]
    pub md5: Option<String>,
    #[serde(default)]
    pub sha256: Option<String>,
}

/// A known vulnerability affecting the queried release.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Vulnerability {
    pub id: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub withdrawn: Option<DateTime<Utc>>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub fixed_in: Vec<String>,
}
