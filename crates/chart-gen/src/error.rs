// File: crates/chart-gen/src/error.rs
// Summary: The single failure outcome of chart generation.

use thiserror::Error;

/// Chart generation failed. Callers cannot distinguish a storage-lookup
/// failure from a render or filesystem failure; the underlying cause is
/// carried as `source` for diagnostics only.
#[derive(Debug, Error)]
#[error("chart generation failed")]
pub struct ChartGenError {
    #[source]
    source: anyhow::Error,
}

impl From<anyhow::Error> for ChartGenError {
    fn from(source: anyhow::Error) -> Self {
        Self { source }
    }
}
