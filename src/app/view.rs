//! Veröffentlichte Sicht für die Präsentationsschicht: Punkte plus abgeleitete Messwerte.

use super::state::MeasurementTool;
use crate::core::PointSequence;
use crate::shared::{AreaDisplay, LengthDisplay, MeasureOptions};

/// Was die Kartenschicht nach jeder Mutation darstellt.
///
/// Fehlende Werte (`None`) bedeuten "noch kein Ergebnis", die Anzeige entfällt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementView {
    /// Aktives Werkzeug zum Zeitpunkt der Berechnung
    pub tool: Option<MeasurementTool>,
    /// Punktfolge (ein verschiebbarer Marker pro Punkt)
    pub points: PointSequence,
    /// Streckenlänge in m (Distance/Elevation)
    pub length_m: Option<f64>,
    /// Fläche in m² (Area)
    pub area_m2: Option<f64>,
    /// Ringumfang in m (Area)
    pub perimeter_m: Option<f64>,
    /// Formatierte Streckenlänge
    pub length: Option<LengthDisplay>,
    /// Formatierte Fläche
    pub area: Option<AreaDisplay>,
    /// Polylinie zwischen den Markern zeichnen
    pub show_path: bool,
    /// Polygon-Overlay zeichnen
    pub show_polygon: bool,
}

impl MeasurementView {
    /// Ob ein Messergebnis (Tooltip) angezeigt werden kann.
    pub fn has_result(&self) -> bool {
        self.length.is_some() || self.area.is_some()
    }
}

/// Berechnet die Sicht aus Werkzeug und Punktfolge neu.
pub fn build(
    tool: Option<MeasurementTool>,
    points: &PointSequence,
    options: &MeasureOptions,
) -> MeasurementView {
    let geometry = options.geometry();
    let format = options.number_format();
    let slice = points.as_slice();

    let mut view = MeasurementView {
        tool,
        points: points.clone(),
        ..MeasurementView::default()
    };

    let Some(tool) = tool else {
        return view;
    };

    if tool.measures_length() {
        view.length_m = geometry.path_length(slice);
        view.length = view
            .length_m
            .map(|m| LengthDisplay::from_meters(m, &format));
        view.show_path = points.len() > 1;
    }

    if tool.measures_area() {
        view.area_m2 = geometry.polygon_area(slice);
        view.perimeter_m = geometry.ring_perimeter(slice);
        view.area = view
            .area_m2
            .map(|m2| AreaDisplay::from_square_meters(m2, &format));
        view.show_polygon = points.len() > 1;
    }

    view
}
