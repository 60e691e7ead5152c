//! Domain values for package metadata.
//!
//! Built from [`JsonPackageMetadata`] in leaf-to-root order: each `urls`
//! entry becomes a [`Distribution`], those aggregate into a [`Release`],
//! and a [`Package`] wraps the release with the package name.

use serde::Serialize;

use crate::json::{DistributionUrl, JsonPackageMetadata};

/// A single published file belonging to a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distribution {
    pub filename: String,
    pub url: String,
}

impl From<&DistributionUrl> for Distribution {
    fn from(data: &DistributionUrl) -> Self {
        Distribution {
            filename: data.filename.clone(),
            url: data.url.clone(),
        }
    }
}

/// One versioned publication of a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
    pub version: String,
    /// Every file published for this version, in upstream listing order.
    /// May be empty for a version with no published files.
    pub distributions: Vec<Distribution>,
}

impl From<&JsonPackageMetadata> for Release {
    fn from(data: &JsonPackageMetadata) -> Self {
        Release {
            version: data.info.version.clone(),
            distributions: data.urls.iter().map(Distribution::from).collect(),
        }
    }
}

/// Top-level package metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    pub title: String,
    /// Shaped as a sequence so that multi-version queries can be added
    /// without changing the type, but the JSON API answers one
    /// package+version query, so exactly one release is populated today.
    pub releases: Vec<Release>,
}

impl From<&JsonPackageMetadata> for Package {
    fn from(data: &JsonPackageMetadata) -> Self {
        Package {
            title: data.info.name.clone(),
            releases: vec![Release::from(data)],
        }
    }
}
