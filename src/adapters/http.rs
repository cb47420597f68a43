use crate::domain::model::{ProductId, VersionCycle};
use crate::domain::ports::{ConfigProvider, EolSource};
use crate::utils::error::{EolError, Result};
use crate::utils::validation::validate_url;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

/// HTTP client for the endoflife.date style API.
///
/// `GET {base}/all.json` lists product ids, `GET {base}/{product}.json` lists
/// the release cycles of one product. Every request shares the same timeout.
#[derive(Debug, Clone)]
pub struct EolApiClient {
    client: Client,
    base_url: Url,
}

impl EolApiClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let base_url = validate_url("base_url", config.base_url())?;
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| EolError::network(base_url.as_str(), e))?;

        Ok(Self { client, base_url })
    }

    /// `{base}/{name}.json`, with `name` percent-encoded as a single path segment.
    pub fn endpoint(&self, name: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| EolError::InvalidConfigValue {
                field: "base_url".to_string(),
                value: self.base_url.to_string(),
                reason: "URL cannot carry path segments".to_string(),
            })?
            .pop_if_empty()
            .push(&format!("{}.json", name));
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| EolError::network(url.as_str(), e))?;

        tracing::debug!("{} -> {}", url, response.status());
        response
            .json::<T>()
            .await
            .map_err(|e| EolError::network(url.as_str(), e))
    }
}

#[async_trait::async_trait]
impl EolSource for EolApiClient {
    async fn fetch_catalog(&self) -> Result<Vec<ProductId>> {
        let products: Vec<ProductId> = self.get_json(self.endpoint("all")?).await?;
        tracing::debug!("Catalog lists {} products", products.len());
        Ok(products)
    }

    async fn fetch_detail(&self, product: &str) -> Result<Vec<VersionCycle>> {
        self.get_json(self.endpoint(product)?).await
    }
}
