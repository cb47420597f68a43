use crate::domain::model::RunSummary;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::debug!("Extracting catalog and product details");
        let harvest = self.pipeline.extract().await?;
        let failed_products = harvest.failed.clone();

        tracing::debug!("Filtering {} products", harvest.details.len());
        let report = self.pipeline.transform(harvest).await?;
        let year = report.year.clone();
        let matches = report.len();

        tracing::debug!("Writing {} matches", matches);
        let output_path = self.pipeline.load(report).await?;

        Ok(RunSummary {
            year,
            matches,
            failed_products,
            output_path,
        })
    }
}
