//! Measurement Controller für zentrale Event-Verarbeitung.

use super::view;
use super::{MeasureCommand, MeasureIntent, MeasureState};

/// Orchestriert Karten-Events und Punktfolgen-Mutationen auf den MeasureState.
///
/// Hält keinen eigenen Zustand; nach jedem Command wird die Sicht neu berechnet
/// und in `state.view` veröffentlicht.
#[derive(Default)]
pub struct MeasurementController;

impl MeasurementController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut MeasureState,
        intent: MeasureIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent)?;
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Eingabe-Handler der Kartenschicht: neuer Punkt per Klick.
    pub fn on_point_add(
        &mut self,
        state: &mut MeasureState,
        lat: f64,
        lon: f64,
    ) -> anyhow::Result<()> {
        self.handle_intent(state, MeasureIntent::PointPlaced { lat, lon })
    }

    /// Eingabe-Handler der Kartenschicht: Marker an `index` verschoben.
    pub fn on_point_update(
        &mut self,
        state: &mut MeasureState,
        index: usize,
        lat: f64,
        lon: f64,
    ) -> anyhow::Result<()> {
        self.handle_intent(state, MeasureIntent::PointDragged { index, lat, lon })
    }

    /// Führt mutierende Commands auf dem MeasureState aus und veröffentlicht die neue Sicht.
    pub fn handle_command(
        &mut self,
        state: &mut MeasureState,
        command: MeasureCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command.clone() {
            MeasureCommand::SetPoints { points } => handlers::points::set_points(state, points)?,
            MeasureCommand::AddPoint { point, position } => {
                handlers::points::add_point(state, point, position)?
            }
            MeasureCommand::UpdatePoint { index, point } => {
                handlers::points::update_point(state, index, point)?
            }
            MeasureCommand::RemovePoint { id } => handlers::points::remove_point(state, id),
            MeasureCommand::SetTool { tool } => handlers::tool::set_tool(state, tool),
        }

        // nur ausgeführte Commands protokollieren
        let point_count = state.points.len();
        state.command_log.record(command, point_count);
        self.publish(state);
        Ok(())
    }

    /// Berechnet Länge/Fläche aus der aktuellen Folge und legt die Sicht im State ab.
    fn publish(&self, state: &mut MeasureState) {
        state.view = view::build(state.tool, &state.points, &state.options);
    }
}
