pub mod delay;
pub mod era;
pub mod error;
pub mod geo;
pub mod geojson;
pub mod icon;
pub mod layer;
pub mod marker;
pub mod palette;
pub mod places;
pub mod popup;

pub use era::{EraBucket, extract_year};
pub use error::LoadError;
pub use geo::{LatLng, LatLngBounds};
pub use geojson::{Feature, FeatureCollection, LighthouseProperties};
pub use icon::IconSpec;
pub use layer::{IconUpdate, LighthouseLayer, LoadSummary, MapSurface, MarkerEvent};
pub use marker::{MarkerId, MarkerMeta};
