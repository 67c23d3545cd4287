//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen und Anzeigeformate, die zwischen `app` und der
//! Präsentationsschicht geteilt werden.

pub mod format;
pub mod options;

pub use format::{AreaDisplay, LengthDisplay, NumberFormat};
pub use options::MeasureOptions;
