use crate::error::{RegionsErrorExt, Result};
use atlas_domain::config::ApiConfig;
use atlas_domain::region::{Category, Region};
use std::future::Future;
use tracing::debug;

/// Where region lists come from.
///
/// One call issues one request; implementations must not retry, cache, or deduplicate.
pub trait RegionSource {
    /// Fetches the full, ordered list for `category`.
    fn fetch(&self, category: Category) -> impl Future<Output = Result<Vec<Region>>>;
}

/// Builds the collection URL for `category` under `base_url`.
#[must_use]
pub fn endpoint(base_url: &str, category: Category) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), category.path())
}

/// [`RegionSource`] backed by a plain `GET` against the regions API.
///
/// Uses the browser `fetch` on wasm32 and hyper natively (both through `reqwest`).
#[derive(Debug, Clone)]
pub struct HttpRegionSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRegionSource {
    #[must_use]
    pub fn new(api: &ApiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), api)
    }

    #[must_use]
    pub fn with_client(client: reqwest::Client, api: &ApiConfig) -> Self {
        Self { client, base_url: api.base_url.trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn endpoint(&self, category: Category) -> String {
        endpoint(&self.base_url, category)
    }
}

impl RegionSource for HttpRegionSource {
    async fn fetch(&self, category: Category) -> Result<Vec<Region>> {
        let url = self.endpoint(category);
        debug!(%url, "Requesting regions");

        let response = self.client.get(&url).send().await.context(format!("GET {url}"))?;
        debug!(%url, status = %response.status(), "Regions response received");

        // Status is not inspected: any body that parses as a region array is accepted.
        let body = response.text().await.context("Failed to read response body")?;
        let regions: Vec<Region> =
            serde_json::from_str(&body).context(format!("Failed to decode {category} payload"))?;

        debug!(%category, count = regions.len(), "Regions decoded");
        Ok(regions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_category_path() {
        let base = atlas_domain::constants::API_BASE_URL;
        assert_eq!(
            endpoint(base, Category::Provinces),
            "https://my-json-server.typicode.com/simonachkar/demo-canada-api-server/provinces"
        );
        assert_eq!(
            endpoint(base, Category::Territories),
            "https://my-json-server.typicode.com/simonachkar/demo-canada-api-server/territories"
        );
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        let api = ApiConfig { base_url: "http://localhost:3000/api/".to_owned() };
        let source = HttpRegionSource::new(&api);
        assert_eq!(source.base_url(), "http://localhost:3000/api");
        assert_eq!(source.endpoint(Category::Provinces), "http://localhost:3000/api/provinces");
    }
}
