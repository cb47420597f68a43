use crate::domain::model::{Harvest, ProductId, Report, VersionCycle};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<PathBuf>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}

/// Read access to the end-of-life API.
#[async_trait]
pub trait EolSource: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Vec<ProductId>>;
    async fn fetch_detail(&self, product: &str) -> Result<Vec<VersionCycle>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Harvest>;
    async fn transform(&self, harvest: Harvest) -> Result<Report>;
    async fn load(&self, report: Report) -> Result<PathBuf>;
}
