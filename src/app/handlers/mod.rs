//! Feature-Handler für MeasureCommand-Verarbeitung.
//!
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod points;
pub mod tool;
