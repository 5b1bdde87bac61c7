pub mod column_transformations;
mod error;
mod location;
mod pipeline;
mod tables;
pub mod traits;

pub use error::{ColumnTransformationError, TransformError};
pub use location::location_label;
pub use pipeline::{AnonymizationPipeline, PipelineConfig};
pub use tables::{default_gender_table, default_medication_table};
pub use traits::Transformer;
