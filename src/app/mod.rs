//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod session;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Messsitzung (Punktfolge, Werkzeug, Sicht).
pub mod state;
pub mod view;

pub use command_log::{CommandLog, CommandLogEntry};
pub use controller::MeasurementController;
pub use events::{MeasureCommand, MeasureIntent};
pub use session::SessionState;
pub use state::{MeasureState, MeasurementTool};
pub use view::MeasurementView;
