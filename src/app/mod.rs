// Application layer: the pipeline, the view-state holder and the renderer.

pub mod pipelines;
pub mod render;
pub mod view_model;
