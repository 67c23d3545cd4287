use super::super::session::SessionState;
use super::super::state::MeasurementTool;
use crate::core::PointId;

/// Eingaben der Kartenschicht ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum MeasureIntent {
    /// Neuer Punkt per Klick auf die Karte gesetzt
    PointPlaced { lat: f64, lon: f64 },
    /// Bestehender Marker an Index `index` verschoben
    PointDragged { index: usize, lat: f64, lon: f64 },
    /// Punkt zwischen zwei Markern eingefügt (Zwischenpunkt-Geste)
    PointInserted { position: usize, lat: f64, lon: f64 },
    /// Bestimmten Punkt löschen
    PointRemoved { id: PointId },
    /// Globales Leeren der Karte
    MapCleared,
    /// Messwerkzeug wechseln (`None` = deaktivieren)
    ToolSelected { tool: Option<MeasurementTool> },
    /// Gespeicherte Sitzung wiederherstellen
    SessionRestored { session: SessionState },
}
