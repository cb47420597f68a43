use crate::core::filter::build_report;
use crate::domain::model::{Harvest, ProductDetail, Report};
use crate::domain::ports::{EolSource, Pipeline, Storage};
use crate::utils::error::Result;
use std::path::PathBuf;

/// Catalog → per-product details → year filter → `eol_<year>.csv`.
pub struct EolPipeline<S: Storage, E: EolSource> {
    storage: S,
    source: E,
    target_year: String,
}

impl<S: Storage, E: EolSource> EolPipeline<S, E> {
    pub fn new(storage: S, source: E, target_year: impl Into<String>) -> Self {
        Self {
            storage,
            source,
            target_year: target_year.into(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, E: EolSource> Pipeline for EolPipeline<S, E> {
    async fn extract(&self) -> Result<Harvest> {
        // A catalog failure is fatal; a single product failure is not.
        let products = self.source.fetch_catalog().await?;

        let mut harvest = Harvest::default();
        for product in products {
            let detail = self.source.fetch_detail(&product).await;
            match detail {
                Ok(cycles) => harvest.details.push(ProductDetail { product, cycles }),
                Err(e) => {
                    tracing::debug!("Skipping {}: {}", product, e);
                    println!("Error fetching details for product: {}", product);
                    harvest.failed.push(product);
                }
            }
        }

        tracing::debug!(
            "Fetched {} product details, {} failed",
            harvest.details.len(),
            harvest.failed.len()
        );
        Ok(harvest)
    }

    async fn transform(&self, harvest: Harvest) -> Result<Report> {
        let report = build_report(&harvest.details, &self.target_year);
        tracing::debug!("{} products match {}", report.len(), self.target_year);
        Ok(report)
    }

    async fn load(&self, report: Report) -> Result<PathBuf> {
        let data = report.to_csv()?;
        tracing::debug!("Writing {} bytes to {}", data.len(), report.file_name());
        self.storage.write_file(&report.file_name(), &data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ProductId, VersionCycle};
    use crate::utils::error::EolError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<PathBuf> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(PathBuf::from(path))
        }
    }

    /// In-memory API. Products without an entry in `details` fail to fetch.
    struct MockSource {
        catalog: Option<Vec<ProductId>>,
        details: HashMap<String, Vec<VersionCycle>>,
    }

    fn not_found(what: &str) -> EolError {
        EolError::filesystem(
            what,
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such product"),
        )
    }

    #[async_trait::async_trait]
    impl EolSource for MockSource {
        async fn fetch_catalog(&self) -> Result<Vec<ProductId>> {
            self.catalog.clone().ok_or_else(|| not_found("all"))
        }

        async fn fetch_detail(&self, product: &str) -> Result<Vec<VersionCycle>> {
            self.details.get(product).cloned().ok_or_else(|| not_found(product))
        }
    }

    fn cycle(cycle: &str, eol: &str) -> VersionCycle {
        VersionCycle {
            cycle: cycle.to_string(),
            eol: eol.to_string(),
        }
    }

    fn alpha_beta_source() -> MockSource {
        let mut details = HashMap::new();
        details.insert("alpha".to_string(), vec![cycle("1.0", "2026-01-01")]);
        details.insert("beta".to_string(), vec![cycle("2.0", "False")]);
        MockSource {
            catalog: Some(vec!["alpha".to_string(), "beta".to_string()]),
            details,
        }
    }

    #[tokio::test]
    async fn test_extract_skips_failed_products() {
        let mut source = alpha_beta_source();
        source.catalog = Some(vec![
            "alpha".to_string(),
            "missing".to_string(),
            "beta".to_string(),
        ]);
        let pipeline = EolPipeline::new(MockStorage::new(), source, "2026");

        let harvest = pipeline.extract().await.unwrap();

        assert_eq!(harvest.failed, vec!["missing"]);
        let fetched: Vec<&str> = harvest.details.iter().map(|d| d.product.as_str()).collect();
        assert_eq!(fetched, vec!["alpha", "beta"]);
    }

    #[tokio::test]
    async fn test_extract_catalog_failure_is_fatal() {
        let mut source = alpha_beta_source();
        source.catalog = None;
        let pipeline = EolPipeline::new(MockStorage::new(), source, "2026");

        assert!(pipeline.extract().await.is_err());
    }

    #[tokio::test]
    async fn test_full_run_writes_named_csv() {
        let storage = MockStorage::new();
        let pipeline = EolPipeline::new(storage.clone(), alpha_beta_source(), "2026");

        let harvest = pipeline.extract().await.unwrap();
        let report = pipeline.transform(harvest).await.unwrap();
        assert_eq!(report.len(), 1);

        let path = pipeline.load(report).await.unwrap();
        assert_eq!(path, PathBuf::from("eol_2026.csv"));

        let csv = storage.get_file("eol_2026.csv").await.unwrap();
        assert_eq!(
            String::from_utf8(csv).unwrap(),
            "Product,EOLDate,Cycle\r\nalpha,2026-01-01,1.0\r\n"
        );
    }

    #[tokio::test]
    async fn test_no_matches_still_writes_header() {
        let storage = MockStorage::new();
        let pipeline = EolPipeline::new(storage.clone(), alpha_beta_source(), "1999");

        let harvest = pipeline.extract().await.unwrap();
        let report = pipeline.transform(harvest).await.unwrap();
        assert!(report.is_empty());
        pipeline.load(report).await.unwrap();

        let csv = storage.get_file("eol_1999.csv").await.unwrap();
        assert_eq!(String::from_utf8(csv).unwrap(), "Product,EOLDate,Cycle\r\n");
    }
}
