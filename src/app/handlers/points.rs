//! Handler für die vier Mutationen der Punktfolge.
//!
//! Jeder Handler ersetzt die Folge im State durch eine neue; bei einem
//! Vertragsfehler bleibt die alte Folge unverändert.

use crate::app::MeasureState;
use crate::core::{MeasurePoint, PointId, PointSequence};

/// Ersetzt die gesamte Punktfolge.
pub fn set_points(state: &mut MeasureState, points: Vec<MeasurePoint>) -> anyhow::Result<()> {
    let next = PointSequence::set_points(points)?;
    if let Some(max_id) = next.max_id() {
        state.reserve_point_id(max_id);
    }
    log::debug!("Punktfolge ersetzt ({} Punkte)", next.len());
    state.points = next;
    Ok(())
}

/// Fügt einen Punkt an `position` ein oder hängt ihn an.
pub fn add_point(
    state: &mut MeasureState,
    point: MeasurePoint,
    position: Option<usize>,
) -> anyhow::Result<()> {
    let next = state.points.add_point(point, position)?;
    if let Some(id) = point.id {
        state.reserve_point_id(id);
    }
    log::debug!(
        "Punkt ({:.6}, {:.6}) an Position {} eingefuegt",
        point.lat,
        point.lon,
        position.unwrap_or(state.points.len())
    );
    state.points = next;
    Ok(())
}

/// Ersetzt den Punkt an `index`.
pub fn update_point(
    state: &mut MeasureState,
    index: usize,
    point: MeasurePoint,
) -> anyhow::Result<()> {
    let next = state.points.update_point(index, point)?;
    if let Some(id) = point.id {
        state.reserve_point_id(id);
    }
    log::debug!(
        "Punkt {} verschoben nach ({:.6}, {:.6})",
        index,
        point.lat,
        point.lon
    );
    state.points = next;
    Ok(())
}

/// Entfernt den Punkt mit dieser ID (unbekannte ID: No-Op).
pub fn remove_point(state: &mut MeasureState, id: PointId) {
    let next = state.points.remove_point(id);
    if next.len() == state.points.len() {
        log::debug!("Punkt {} nicht vorhanden, nichts entfernt", id);
    } else {
        log::debug!("Punkt {} entfernt", id);
    }
    state.points = next;
}
