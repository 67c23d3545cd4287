//! Application State — zentrale Datenhaltung der Messsitzung.

use super::session::SessionState;
use super::view::MeasurementView;
use super::CommandLog;
use crate::core::{PointId, PointSequence};
use crate::shared::MeasureOptions;
use serde::{Deserialize, Serialize};

/// Aktives Messwerkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeasurementTool {
    /// Streckenmessung entlang der Punktfolge
    Distance,
    /// Höhenprofil entlang der Punktfolge (Pfad wie Distance)
    Elevation,
    /// Flächenmessung des geschlossenen Rings
    Area,
}

impl MeasurementTool {
    /// Ob das Werkzeug eine Streckenlänge anzeigt.
    pub fn measures_length(self) -> bool {
        matches!(self, Self::Distance | Self::Elevation)
    }

    /// Ob das Werkzeug eine Fläche anzeigt.
    pub fn measures_area(self) -> bool {
        matches!(self, Self::Area)
    }
}

impl std::str::FromStr for MeasurementTool {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "distance" | "measure" => Ok(Self::Distance),
            "elevation" | "measure-ele" => Ok(Self::Elevation),
            "area" | "measure-area" => Ok(Self::Area),
            other => anyhow::bail!("Unbekanntes Messwerkzeug: {}", other),
        }
    }
}

/// Hauptzustand der Messsitzung
pub struct MeasureState {
    /// Kanonische Punktfolge (nur über Handler ersetzt)
    pub(crate) points: PointSequence,
    /// Aktives Werkzeug (None = keine Messung aktiv)
    pub tool: Option<MeasurementTool>,
    /// Zuletzt veröffentlichte Sicht für die Präsentationsschicht
    pub view: MeasurementView,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Radius, Zahlenformat)
    pub options: MeasureOptions,
    /// Nächste freie Punkt-ID (`None` = ID-Raum erschöpft); IDs werden nie wiederverwendet
    next_point_id: Option<u64>,
}

impl MeasureState {
    /// Erstellt einen neuen, leeren State
    pub fn new() -> Self {
        Self::with_options(MeasureOptions::default())
    }

    /// Erstellt einen leeren State mit eigenen Optionen
    pub fn with_options(options: MeasureOptions) -> Self {
        Self {
            points: PointSequence::new(),
            tool: None,
            view: MeasurementView::default(),
            command_log: CommandLog::new(),
            options,
            next_point_id: Some(1),
        }
    }

    /// Aktuelle Punktfolge (read-only)
    pub fn points(&self) -> &PointSequence {
        &self.points
    }

    /// Nächste ID, die ein neu gesetzter Punkt erhält.
    ///
    /// Schlägt fehl, sobald `u64::MAX` vergeben ist.
    pub fn peek_point_id(&self) -> anyhow::Result<PointId> {
        match self.next_point_id {
            Some(next) => Ok(PointId(next)),
            None => anyhow::bail!("Keine freie Punkt-ID mehr in dieser Sitzung"),
        }
    }

    /// Markiert eine ID als vergeben, damit sie nicht erneut ausgegeben wird.
    pub(crate) fn reserve_point_id(&mut self, id: PointId) {
        let Some(next) = self.next_point_id else {
            return;
        };
        if id.0 >= next {
            self.next_point_id = id.0.checked_add(1);
            if self.next_point_id.is_none() {
                log::warn!("Punkt-ID {} vergeben, keine weiteren IDs verfuegbar", id);
            }
        }
    }

    /// Sitzungsabbild `{ points: [...] }` der aktuellen Folge.
    pub fn session(&self) -> SessionState {
        SessionState {
            points: self.points.as_slice().to_vec(),
        }
    }
}

impl Default for MeasureState {
    fn default() -> Self {
        Self::new()
    }
}
