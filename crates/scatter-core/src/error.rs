// File: crates/scatter-core/src/error.rs
// Summary: Error taxonomy for dataset loading, layout, and rendering.

/// Errors produced while loading a dataset or rendering a chart.
///
/// All failures are terminal for the current render attempt; there is no
/// partial-success state to recover.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// Dataset file could not be read.
    #[error("dataset i/o: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset file could not be decoded as CSV.
    #[error("dataset csv decode: {0}")]
    Csv(#[from] csv::Error),

    /// Dataset file could not be decoded as JSON.
    #[error("dataset json decode: {0}")]
    Json(#[from] serde_json::Error),

    /// Dataset file extension is not a supported format.
    #[error("unsupported dataset format '{0}' (expected .json or .csv)")]
    UnsupportedFormat(String),

    /// Dataset loaded but holds zero usable records; extents are undefined.
    #[error("dataset contains no records")]
    EmptyDataset,

    /// Margins leave no drawable area inside the computed outer size.
    #[error("outer size {width}x{height} leaves no drawable area inside the margins")]
    InvalidLayout { width: f64, height: f64 },

    /// The rendering backend failed (surface creation or encoding).
    #[error("render backend: {0}")]
    Render(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, ChartError>;
