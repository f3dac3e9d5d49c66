// File: crates/chart-gen/src/lib.rs
// Summary: Library entry point; exports the generator operation and storage seam.

pub mod error;
pub mod generator;
pub mod storage;

pub use error::ChartGenError;
pub use generator::{create_chart, CHART_FILE_NAME};
pub use storage::{DirStorage, StorageProvider};
