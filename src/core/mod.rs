pub mod etl;
pub mod loader;
pub mod repository;

pub use crate::domain::model::{HiringItem, HiringItemMap, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
