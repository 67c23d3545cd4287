//! Sitzungsabbild der Punktfolge im Layout `{ "points": [ { id?, lat, lon } ] }`.

use crate::core::MeasurePoint;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Flaches, geordnetes Punkt-Array einer Messsitzung.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Punkte in Messreihenfolge
    #[serde(default)]
    pub points: Vec<MeasurePoint>,
}

impl SessionState {
    /// Liest ein Sitzungsabbild aus JSON.
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        serde_json::from_str(content).context("Sitzungs-JSON konnte nicht gelesen werden")
    }

    /// Schreibt das Sitzungsabbild als JSON.
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Sitzung konnte nicht serialisiert werden")
    }

    /// Lädt ein Sitzungsabbild aus einer Datei.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Sitzungsdatei nicht lesbar: {}", path.display()))?;
        let session = Self::from_json(&content)?;
        log::info!(
            "Sitzung mit {} Punkten geladen aus: {}",
            session.points.len(),
            path.display()
        );
        Ok(session)
    }

    /// Speichert das Sitzungsabbild in eine Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, self.to_json()?)
            .with_context(|| format!("Sitzungsdatei nicht schreibbar: {}", path.display()))?;
        log::info!("Sitzung gespeichert nach: {}", path.display());
        Ok(())
    }
}
