pub mod etl;
pub mod filter;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{Harvest, MatchRecord, Report, VersionCycle};
pub use crate::domain::ports::{ConfigProvider, EolSource, Pipeline, Storage};
pub use crate::utils::error::Result;
