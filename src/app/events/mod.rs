//! MeasureIntent- und MeasureCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::MeasureCommand;
pub use intent::MeasureIntent;
