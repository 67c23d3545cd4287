//! Mapping von Karten-Intents auf mutierende Commands.
//!
//! Hier liegt die einzige Stelle, die "Klick = anhängen" und
//! "Drag = an Index ersetzen" kennt.

use super::{MeasureCommand, MeasureIntent, MeasureState};
use crate::core::MeasurePoint;

/// Übersetzt einen `MeasureIntent` in eine Sequenz ausführbarer `MeasureCommand`s.
///
/// Fehler nur, wenn für einen neuen Punkt keine ID mehr frei ist.
pub fn map_intent_to_commands(
    state: &MeasureState,
    intent: MeasureIntent,
) -> anyhow::Result<Vec<MeasureCommand>> {
    let commands = match intent {
        MeasureIntent::PointPlaced { lat, lon } => {
            if state.tool.is_none() {
                log::debug!("Punkt ignoriert: kein Messwerkzeug aktiv");
                return Ok(Vec::new());
            }
            let point = MeasurePoint::with_id(state.peek_point_id()?, lat, lon);
            vec![MeasureCommand::AddPoint {
                point,
                position: None,
            }]
        }
        MeasureIntent::PointInserted { position, lat, lon } => {
            if state.tool.is_none() {
                log::debug!("Zwischenpunkt ignoriert: kein Messwerkzeug aktiv");
                return Ok(Vec::new());
            }
            let point = MeasurePoint::with_id(state.peek_point_id()?, lat, lon);
            vec![MeasureCommand::AddPoint {
                point,
                position: Some(position),
            }]
        }
        MeasureIntent::PointDragged { index, lat, lon } => {
            // ID des gezogenen Markers beibehalten, damit Löschen per ID weiter greift
            let id = state.points().get(index).and_then(|p| p.id);
            vec![MeasureCommand::UpdatePoint {
                index,
                point: MeasurePoint { id, lat, lon },
            }]
        }
        MeasureIntent::PointRemoved { id } => vec![MeasureCommand::RemovePoint { id }],
        MeasureIntent::MapCleared => vec![MeasureCommand::SetPoints { points: Vec::new() }],
        MeasureIntent::ToolSelected { tool } => vec![
            MeasureCommand::SetTool { tool },
            MeasureCommand::SetPoints { points: Vec::new() },
        ],
        MeasureIntent::SessionRestored { session } => vec![MeasureCommand::SetPoints {
            points: session.points,
        }],
    };
    Ok(commands)
}
