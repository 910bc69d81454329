pub mod etl;
pub mod loader;
pub mod normalizer;
pub mod pipeline;
pub mod reporter;

pub use crate::domain::model::{DrawCandidate, DrawRecord, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
