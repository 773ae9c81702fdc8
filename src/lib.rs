pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{BundledStorage, LocalStorage};
pub use app::{pipelines::HiringPipeline, view_model::HiringViewModel, view_model::ViewState};
pub use config::AppConfig;
pub use core::{etl::EtlEngine, loader::ItemLoader, repository::HiringRepository};
pub use domain::model::{HiringItem, HiringItemMap, OutputFormat};
pub use utils::error::{EtlError, LoadError, Result};
