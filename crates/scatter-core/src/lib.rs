// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports the scatter chart API.

pub mod chart;
pub mod color;
pub mod dataset;
pub mod error;
pub mod layout;
pub mod record;
pub mod scale;
pub mod theme;

pub use chart::{RenderOptions, ScatterChart};
pub use color::{ramp, Rgb, SequentialScale, YLGNBU};
pub use dataset::load_records;
pub use error::ChartError;
pub use layout::{Dimensions, Margin};
pub use record::{Channels, Field, WeatherRecord};
pub use scale::{build_scales, extent, LinearScale, Scales};
pub use theme::Theme;
