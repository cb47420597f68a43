use serde::{Deserialize, Deserializer, Serialize};

/// Catalog identifier of a product, e.g. `python` or `nodejs`.
pub type ProductId = String;

/// One release line of a product as returned by `{base}/{product}.json`.
///
/// The API sends `eol` as a date string, a boolean, or nothing at all. Both
/// fields are flattened to plain strings here so later stages only ever
/// compare strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VersionCycle {
    #[serde(default, deserialize_with = "lenient_string")]
    pub cycle: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub eol: String,
}

/// `null` becomes `""`, strings pass through, booleans read `True`/`False`
/// and anything else keeps its JSON text.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        serde_json::Value::Bool(true) => "True".to_string(),
        serde_json::Value::Bool(false) => "False".to_string(),
        other => other.to_string(),
    })
}

/// A product's detail fetch that succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetail {
    pub product: ProductId,
    pub cycles: Vec<VersionCycle>,
}

/// Everything the extract stage gathered: the details that came back and the
/// products that were skipped because their detail fetch failed.
#[derive(Debug, Clone, Default)]
pub struct Harvest {
    pub details: Vec<ProductDetail>,
    pub failed: Vec<ProductId>,
}

/// One CSV row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "Product")]
    pub product: ProductId,
    #[serde(rename = "EOLDate")]
    pub eol_date: String,
    #[serde(rename = "Cycle")]
    pub cycle: String,
}

/// Matches in discovery order, at most one per product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub year: String,
    pub records: Vec<MatchRecord>,
}

impl Report {
    pub fn new(year: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// File name the report is written under: `eol_<year>.csv`.
    pub fn file_name(&self) -> String {
        format!("eol_{}.csv", self.year)
    }
}

/// What a completed run hands back to the caller for the closing summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub year: String,
    pub matches: usize,
    pub failed_products: Vec<ProductId>,
    pub output_path: std::path::PathBuf,
}
