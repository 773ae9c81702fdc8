// Adapters layer: concrete storage backends behind the domain ports.

pub mod storage;

pub use storage::{BundledStorage, LocalStorage, HIRING_RESOURCE};
