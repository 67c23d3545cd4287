//! Core-Domänentypen: Messpunkte, Punktfolge und Geometrie-Engine.

pub mod geometry;
pub mod point;
pub mod point_sequence;

pub use geometry::{path_length, polygon_area, GeometryEngine, EARTH_RADIUS_M};
pub use point::{MeasurePoint, PointId};
pub use point_sequence::PointSequence;
