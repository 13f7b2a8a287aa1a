pub mod errors;
pub mod formats;
pub mod model;
pub mod references;
mod registry;

pub use errors::ParserError;
pub use model::{
    ErrorMargins, Measurement, PlanetaryProperties, Quantity, Record, References,
    StellarProperties,
};
pub use registry::{parse_source, SourceFormat, SourceParser};
