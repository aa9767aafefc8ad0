pub mod registry;
pub mod tracker;

pub use registry::SparkRegistry;
pub use tracker::SparkField;
