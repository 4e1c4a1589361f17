//! Convert polygon geometries from the longitude range [-180, 180] to [0, 360].
//!
//! Polygons are split along the prime meridian (0°) and the western pieces are
//! shifted by +360° so that data crossing the prime meridian or the
//! antimeridian can be drawn contiguously. The data must be in a geographic
//! (longitude/latitude) coordinate reference system; no reprojection happens
//! here.
//!
//! ```
//! use convert_long::{GeoCollection, convert360};
//!
//! let collection = GeoCollection::from_json_str(r#"{
//!   "type": "FeatureCollection",
//!   "features": [{
//!     "type": "Feature",
//!     "geometry": {
//!       "type": "Polygon",
//!       "coordinates": [[[-10, 5], [-20, 5], [-20, 15], [-10, 15], [-10, 5]]]
//!     },
//!     "properties": {"name": "west"}
//!   }]
//! }"#).unwrap();
//!
//! let converted = convert360(collection).unwrap();
//! let bounds = converted.compute_bounds().unwrap();
//! assert_eq!(bounds.as_array(), [340.0, 5.0, 350.0, 15.0]);
//! ```
//!
//! Note that values of `0` and `360` refer to the same longitude, and polygons
//! that span the antimeridian (180°) are not merged back into a single
//! polygon. The conversion is intended for visualization.

mod convert;
mod geo;
mod io;

pub use convert::*;
pub use geo::*;
pub use io::*;
