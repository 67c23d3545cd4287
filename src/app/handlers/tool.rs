//! Handler für den Werkzeugwechsel.

use crate::app::state::MeasurementTool;
use crate::app::MeasureState;

/// Aktiviert ein Messwerkzeug (oder deaktiviert mit `None`).
pub fn set_tool(state: &mut MeasureState, tool: Option<MeasurementTool>) {
    state.tool = tool;
    match tool {
        Some(tool) => log::info!("Messwerkzeug: {:?}", tool),
        None => log::info!("Messwerkzeug deaktiviert"),
    }
}
