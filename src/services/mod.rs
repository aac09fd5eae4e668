pub mod filter_pipeline;

pub use filter_pipeline::FilterPipeline;
