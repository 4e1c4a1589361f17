// Core geometric types of the data model: `Coordinates` as the (longitude,
// latitude) pair, `RingGeometry` as a closed ring, `PolygonGeometry` and
// `MultiPolygonGeometry` as the two geometry kinds this tool converts, plus
// the remaining GeoJSON primitives so that arbitrary input can be represented
// (and rejected) without losing the type name.

mod bbox;
mod coordinates;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;

pub use bbox::*;
pub use coordinates::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
