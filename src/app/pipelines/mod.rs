pub mod hiring_pipeline;

pub use hiring_pipeline::HiringPipeline;
