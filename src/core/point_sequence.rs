//! Unveränderliche, geordnete Punktfolge und ihre vier Mutations-Operationen.
//!
//! Jede Operation liefert eine neue Folge; die Ausgangsfolge bleibt unverändert.
//! Intern wird ein `Arc<Vec<_>>` geteilt, geklont wird erst in `Arc::make_mut`
//! (Copy-on-Write).
//!
//! Adressierung ist bewusst asymmetrisch:
//! - Einfügen und Aktualisieren per Position (Drag meldet "Marker N bewegt")
//! - Entfernen per Identität (Löschen meldet "dieser Punkt")
//!
//! Nach einem `remove_point` verschieben sich alle späteren Indizes.

use super::{MeasurePoint, PointId};
use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Geordnete Folge von Messpunkten. Reihenfolge bestimmt Pfadrichtung und Umlaufsinn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointSequence {
    points: Arc<Vec<MeasurePoint>>,
}

impl PointSequence {
    /// Erstellt eine leere Folge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn noch kein Punkt gesetzt ist.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only Sicht auf alle Punkte in Reihenfolge.
    pub fn as_slice(&self) -> &[MeasurePoint] {
        &self.points
    }

    /// Punkt an Index (falls vorhanden).
    pub fn get(&self, index: usize) -> Option<&MeasurePoint> {
        self.points.get(index)
    }

    /// Aktueller Index des Punkts mit dieser ID.
    pub fn position_of(&self, id: PointId) -> Option<usize> {
        self.points.iter().position(|p| p.id == Some(id))
    }

    /// Größte vergebene ID in der Folge.
    pub fn max_id(&self) -> Option<PointId> {
        self.points.iter().filter_map(|p| p.id).max()
    }

    /// Ersetzt die gesamte Folge.
    ///
    /// Geprüft wird nur der Koordinatenbereich jedes Punkts.
    pub fn set_points(points: Vec<MeasurePoint>) -> anyhow::Result<Self> {
        for (index, point) in points.iter().enumerate() {
            if let Err(e) = point.validate() {
                bail!("Punkt {} ungueltig: {}", index, e);
            }
        }
        Ok(Self {
            points: Arc::new(points),
        })
    }

    /// Fügt `point` an `position` ein, ohne Position wird angehängt.
    ///
    /// Alle Punkte ab `position` rücken um eins nach rechts.
    /// `position` muss in `0..=len` liegen.
    pub fn add_point(&self, point: MeasurePoint, position: Option<usize>) -> anyhow::Result<Self> {
        point.validate()?;
        let len = self.len();
        let position = position.unwrap_or(len);
        if position > len {
            bail!(
                "Einfuegeposition {} ausserhalb des gueltigen Bereichs 0..={}",
                position,
                len
            );
        }

        let mut next = self.clone();
        Arc::make_mut(&mut next.points).insert(position, point);
        Ok(next)
    }

    /// Ersetzt den Punkt an `index` (Drag eines bestehenden Markers).
    ///
    /// Die Identität wird nicht erzwungen: der Aufrufer entscheidet, ob `point.id`
    /// die alte ID übernimmt.
    pub fn update_point(&self, index: usize, point: MeasurePoint) -> anyhow::Result<Self> {
        point.validate()?;
        if index >= self.len() {
            bail!(
                "Index {} ausserhalb der Punktfolge (Laenge {})",
                index,
                self.len()
            );
        }

        let mut next = self.clone();
        Arc::make_mut(&mut next.points)[index] = point;
        Ok(next)
    }

    /// Entfernt den Punkt mit dieser ID; unbekannte ID ist ein No-Op.
    pub fn remove_point(&self, id: PointId) -> Self {
        if self.position_of(id).is_none() {
            return self.clone();
        }

        let mut next = self.clone();
        Arc::make_mut(&mut next.points).retain(|p| p.id != Some(id));
        next
    }
}

impl<'a> IntoIterator for &'a PointSequence {
    type Item = &'a MeasurePoint;
    type IntoIter = std::slice::Iter<'a, MeasurePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
