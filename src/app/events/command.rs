use super::super::state::MeasurementTool;
use crate::core::{MeasurePoint, PointId};

/// Commands sind mutierende Schritte auf der Punktfolge, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum MeasureCommand {
    /// Gesamte Folge ersetzen
    SetPoints { points: Vec<MeasurePoint> },
    /// Punkt an Position einfügen (`None` = anhängen)
    AddPoint {
        point: MeasurePoint,
        position: Option<usize>,
    },
    /// Punkt an Index ersetzen
    UpdatePoint { index: usize, point: MeasurePoint },
    /// Punkt per ID entfernen
    RemovePoint { id: PointId },
    /// Aktives Messwerkzeug setzen
    SetTool { tool: Option<MeasurementTool> },
}
