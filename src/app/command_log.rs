//! Protokoll erfolgreich ausgeführter Commands mit der resultierenden Punktanzahl.
//!
//! Commands, die an einem Vertragsfehler scheitern, landen nicht im Log.

use super::MeasureCommand;
use std::collections::VecDeque;

/// Ein ausgeführter Command und die Länge der Punktfolge danach.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandLogEntry {
    /// Ausgeführter Command
    pub command: MeasureCommand,
    /// Anzahl Punkte nach der Ausführung
    pub point_count: usize,
}

/// Ringpuffer der letzten ausgeführten Commands.
pub struct CommandLog {
    entries: VecDeque<CommandLogEntry>,
    capacity: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLog {
    /// Standard-Kapazität einer Sitzung.
    pub const DEFAULT_CAPACITY: usize = 512;

    /// Erstellt ein leeres Log mit Standard-Kapazität.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Erstellt ein leeres Log, das höchstens `capacity` Einträge hält.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(Self::DEFAULT_CAPACITY)),
            capacity: capacity.max(1),
        }
    }

    /// Hält einen erfolgreich ausgeführten Command fest.
    ///
    /// Bei voller Kapazität fällt der älteste Eintrag heraus.
    pub fn record(&mut self, command: MeasureCommand, point_count: usize) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(CommandLogEntry {
            command,
            point_count,
        });
    }

    /// Anzahl der Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn noch nichts ausgeführt wurde.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Einträge in Ausführungsreihenfolge.
    pub fn entries(&self) -> std::collections::vec_deque::Iter<'_, CommandLogEntry> {
        self.entries.iter()
    }

    /// Letzter ausgeführter Eintrag.
    pub fn last(&self) -> Option<&CommandLogEntry> {
        self.entries.back()
    }

    /// Eine Textzeile pro Eintrag für Diagnose-Ausgaben.
    pub fn summary_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                format!(
                    "{:>4}: {:?} -> {} Punkte",
                    i + 1,
                    entry.command,
                    entry.point_count
                )
            })
            .collect()
    }
}
