//! Reine Geometrie-Funktionen für Strecken- und Flächenmessung auf der Erdkugel.
//!
//! Zustandslos und deterministisch: gleiche Punktfolge ergibt bitgleiche Ergebnisse.
//! Zu wenige Punkte liefern `None` (kein Messwert), nie einen Fehler.

use super::MeasurePoint;
use glam::DVec2;

/// Mittlerer Erdradius (IUGG) in Metern.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Mindestanzahl Punkte für eine Streckenlänge.
pub const MIN_POINTS_FOR_LENGTH: usize = 2;
/// Mindestanzahl Punkte für eine Fläche.
pub const MIN_POINTS_FOR_AREA: usize = 3;

/// Geometrie-Engine mit konfigurierbarem Kugelradius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryEngine {
    /// Radius der Referenzkugel in Metern
    pub earth_radius_m: f64,
}

impl Default for GeometryEngine {
    fn default() -> Self {
        Self {
            earth_radius_m: EARTH_RADIUS_M,
        }
    }
}

impl GeometryEngine {
    /// Erstellt eine Engine mit eigenem Radius.
    pub fn with_radius(earth_radius_m: f64) -> Self {
        Self { earth_radius_m }
    }

    /// Großkreis-Distanz (Haversine) zwischen zwei Punkten in Metern.
    pub fn distance(&self, a: &MeasurePoint, b: &MeasurePoint) -> f64 {
        let lat_a = a.lat.to_radians();
        let lat_b = b.lat.to_radians();
        let d_lat = (b.lat - a.lat).to_radians();
        let d_lon = wrap_degrees(b.lon - a.lon).to_radians();

        let h = (d_lat / 2.0).sin().powi(2)
            + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
        let h = h.clamp(0.0, 1.0);
        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

        self.earth_radius_m * c
    }

    /// Distanzen aller aufeinanderfolgenden Punktpaare in Metern.
    pub fn segment_lengths(&self, points: &[MeasurePoint]) -> Vec<f64> {
        points
            .windows(2)
            .map(|w| self.distance(&w[0], &w[1]))
            .collect()
    }

    /// Summe der Großkreis-Distanzen entlang der Folge, `None` unter zwei Punkten.
    pub fn path_length(&self, points: &[MeasurePoint]) -> Option<f64> {
        if points.len() < MIN_POINTS_FOR_LENGTH {
            return None;
        }
        Some(self.segment_lengths(points).into_iter().sum())
    }

    /// Umfang des geschlossenen Rings (inkl. Rücksegment), `None` unter drei Punkten.
    pub fn ring_perimeter(&self, points: &[MeasurePoint]) -> Option<f64> {
        if points.len() < MIN_POINTS_FOR_AREA {
            return None;
        }
        let open = self.path_length(points)?;
        let closing = self.distance(&points[points.len() - 1], &points[0]);
        Some(open + closing)
    }

    /// Fläche des geschlossenen Rings in Quadratmetern, `None` unter drei Punkten.
    ///
    /// Lokale equirektangulare Projektion um den Mittelpunkt des Rings, danach
    /// Gaußsche Trapezformel. Unabhängig vom Umlaufsinn.
    pub fn polygon_area(&self, points: &[MeasurePoint]) -> Option<f64> {
        if points.len() < MIN_POINTS_FOR_AREA {
            return None;
        }

        let projected = self.project_local(points);
        let n = projected.len();
        let twice_area: f64 = (0..n)
            .map(|i| projected[i].perp_dot(projected[(i + 1) % n]))
            .sum();

        Some(twice_area.abs() * 0.5)
    }

    /// Projiziert die Punkte in eine lokale Ebene (Meter) um ihren Mittelpunkt.
    fn project_local(&self, points: &[MeasurePoint]) -> Vec<DVec2> {
        let count = points.len() as f64;
        let origin = points[0];

        // Längen relativ zum ersten Punkt mitteln, damit die Datumsgrenze nicht stört
        let mean_d_lon = points
            .iter()
            .map(|p| wrap_degrees(p.lon - origin.lon))
            .sum::<f64>()
            / count;
        let center_lon = origin.lon + mean_d_lon;
        let center_lat = points.iter().map(|p| p.lat).sum::<f64>() / count;

        let r = self.earth_radius_m;
        let cos_lat = center_lat.to_radians().cos();

        points
            .iter()
            .map(|p| {
                let x = r * wrap_degrees(p.lon - center_lon).to_radians() * cos_lat;
                let y = r * (p.lat - center_lat).to_radians();
                DVec2::new(x, y)
            })
            .collect()
    }
}

/// Streckenlänge mit Standard-Erdradius.
pub fn path_length(points: &[MeasurePoint]) -> Option<f64> {
    GeometryEngine::default().path_length(points)
}

/// Ringfläche mit Standard-Erdradius.
pub fn polygon_area(points: &[MeasurePoint]) -> Option<f64> {
    GeometryEngine::default().polygon_area(points)
}

/// Normalisiert eine Winkeldifferenz in Grad auf [-180, 180).
fn wrap_degrees(delta: f64) -> f64 {
    (delta + 180.0).rem_euclid(360.0) - 180.0
}
