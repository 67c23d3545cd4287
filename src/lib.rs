//! Map Measure Library.
//! Punktfolgen-Zustandsautomat und Geometrie-Engine der Messwerkzeuge,
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use crate::app::{
    MeasureCommand, MeasureIntent, MeasureState, MeasurementController, MeasurementTool,
    MeasurementView, SessionState,
};
pub use crate::core::{
    path_length, polygon_area, GeometryEngine, MeasurePoint, PointId, PointSequence,
};
pub use crate::shared::{AreaDisplay, LengthDisplay, MeasureOptions, NumberFormat};
