//! Geografischer Messpunkt mit optionaler Identität.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gültiger Breitengrad-Bereich in Grad.
pub const LAT_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
/// Gültiger Längengrad-Bereich in Grad.
pub const LON_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// Opake, innerhalb einer Sitzung nie wiederverwendete Punkt-ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(pub u64);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ein Messpunkt auf der Karte (WGS84-Grad).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurePoint {
    /// Identität für das Entfernen per ID (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PointId>,
    /// Breitengrad in Grad
    pub lat: f64,
    /// Längengrad in Grad
    pub lon: f64,
}

impl MeasurePoint {
    /// Erstellt einen Punkt ohne Identität.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { id: None, lat, lon }
    }

    /// Erstellt einen Punkt mit Identität.
    pub fn with_id(id: PointId, lat: f64, lon: f64) -> Self {
        Self {
            id: Some(id),
            lat,
            lon,
        }
    }

    /// Prüft, ob beide Koordinaten endlich und im gültigen Bereich liegen.
    pub fn is_in_range(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && LAT_RANGE.contains(&self.lat)
            && LON_RANGE.contains(&self.lon)
    }

    /// Liefert einen Fehler mit Beschreibung, wenn die Koordinaten ungültig sind.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.is_in_range() {
            anyhow::bail!(
                "Koordinate ausserhalb des gueltigen Bereichs: lat={} lon={}",
                self.lat,
                self.lon
            );
        }
        Ok(())
    }
}
