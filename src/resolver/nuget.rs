//! NuGet flat-container registry adapter
//!
//! The flat container's `index.json` lists every published version in
//! ascending order, so the latest is simply the last element. Package
//! ids are lowercased in the URL, as the service requires.

use super::{HttpClient, RegistryResolver};
use crate::error::ResolveError;
use async_trait::async_trait;
use serde::Deserialize;

/// NuGet flat-container service base URL
pub const NUGET_FLAT_CONTAINER_URL: &str = "https://api.nuget.org/v3-flatcontainer";

const REGISTRY_NAME: &str = "NuGet";

/// Version index of one package in the flat container
#[derive(Debug, Deserialize)]
struct FlatContainerIndex {
    versions: Vec<String>,
}

/// Registry resolver backed by the NuGet flat container
#[derive(Debug, Clone)]
pub struct NuGetResolver {
    client: HttpClient,
    base_url: String,
}

impl NuGetResolver {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            base_url: NUGET_FLAT_CONTAINER_URL.to_string(),
        }
    }

    fn build_url(&self, package: &str) -> String {
        format!("{}/{}/index.json", self.base_url, package.to_lowercase())
    }
}

#[async_trait]
impl RegistryResolver for NuGetResolver {
    fn registry_name(&self) -> &'static str {
        REGISTRY_NAME
    }

    async fn latest_version(&self, package: &str) -> Result<String, ResolveError> {
        let url = self.build_url(package);
        let index: FlatContainerIndex =
            self.client.get_json(&url, package, REGISTRY_NAME).await?;

        index
            .versions
            .into_iter()
            .last()
            .ok_or_else(|| ResolveError::NoVersions {
                package: package.to_string(),
            })
    }
}
