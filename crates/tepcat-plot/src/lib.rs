pub mod dataset;
pub mod error;
pub mod render;
pub mod series;
pub mod stats;

pub use dataset::LoadedDataset;
pub use error::{PlotError, Result};
pub use render::{render_histogram, render_overview, ImageKind};
pub use stats::{Bin, Histogram, Summary};
