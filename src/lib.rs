pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::EolApiClient;
pub use config::cli::{CliConfig, LocalStorage};
pub use config::AppConfig;
pub use crate::core::{etl::EtlEngine, pipeline::EolPipeline};
pub use domain::model::{MatchRecord, Report, RunSummary, VersionCycle};
pub use utils::error::{EolError, Result};
