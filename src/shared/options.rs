//! Zentrale Konfiguration für die Messwerkzeuge.
//!
//! `MeasureOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{GeometryEngine, EARTH_RADIUS_M};
use crate::shared::format::NumberFormat;
use anyhow::Context;
use serde::{Deserialize, Serialize};

// ── Zahlenformat ────────────────────────────────────────────────────

/// Feste Nachkommastellen der Messanzeige.
pub const DISPLAY_DECIMALS: usize = 3;
/// Dezimaltrennzeichen (slowakische Konvention).
pub const DECIMAL_SEPARATOR: char = ',';
/// Tausendertrennzeichen (geschütztes Leerzeichen, wie `Intl.NumberFormat('sk')`).
pub const GROUP_SEPARATOR: char = '\u{a0}';

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Mess-Optionen.
/// Wird als `map_measure.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeasureOptions {
    /// Radius der Referenzkugel in Metern
    pub earth_radius_m: f64,
    /// Nachkommastellen aller angezeigten Werte
    pub decimals: usize,
    /// Dezimaltrennzeichen
    pub decimal_separator: char,
    /// Tausendertrennzeichen (leer = keine Gruppierung)
    #[serde(default = "default_group_separator")]
    pub group_separator: String,
}

impl Default for MeasureOptions {
    fn default() -> Self {
        Self {
            earth_radius_m: EARTH_RADIUS_M,
            decimals: DISPLAY_DECIMALS,
            decimal_separator: DECIMAL_SEPARATOR,
            group_separator: GROUP_SEPARATOR.to_string(),
        }
    }
}

/// Serde-Default für `group_separator` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_group_separator() -> String {
    GROUP_SEPARATOR.to_string()
}

/// Höchste sinnvolle Zahl an Nachkommastellen.
pub const MAX_DECIMALS: usize = 9;

impl MeasureOptions {
    /// Lädt Optionen aus einer TOML-Datei.
    ///
    /// Fehlt die Datei oder ist sie nicht lesbar, gelten die Standardwerte.
    /// Einzelne unbrauchbare Felder werden mit Warnung auf ihren Default gesetzt,
    /// der Rest der Datei bleibt wirksam.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => {
                log::info!(
                    "Keine Optionen unter {} gefunden, Erdradius {} m und {} Nachkommastellen",
                    path.display(),
                    EARTH_RADIUS_M,
                    DISPLAY_DECIMALS
                );
                return Self::default();
            }
        };

        match toml::from_str::<Self>(&content) {
            Ok(mut opts) => {
                let fixed = opts.sanitize();
                log::info!(
                    "Optionen aus {} geladen ({} Feld(er) korrigiert)",
                    path.display(),
                    fixed
                );
                opts
            }
            Err(e) => {
                log::warn!(
                    "{} ist kein gueltiges Mess-TOML, verwende Standardwerte: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Setzt unbrauchbare Felder auf ihren Default zurück und gibt deren Anzahl zurück.
    pub fn sanitize(&mut self) -> usize {
        let mut fixed = 0;

        if !(self.earth_radius_m.is_finite() && self.earth_radius_m > 0.0) {
            log::warn!(
                "earth_radius_m = {} ist kein positiver Radius, verwende {} m",
                self.earth_radius_m,
                EARTH_RADIUS_M
            );
            self.earth_radius_m = EARTH_RADIUS_M;
            fixed += 1;
        }
        if self.decimals > MAX_DECIMALS {
            log::warn!(
                "decimals = {} ueberschreitet {}, verwende {}",
                self.decimals,
                MAX_DECIMALS,
                DISPLAY_DECIMALS
            );
            self.decimals = DISPLAY_DECIMALS;
            fixed += 1;
        }
        if self.group_separator.chars().count() > 1 {
            log::warn!(
                "group_separator {:?} hat mehr als ein Zeichen, verwende U+00A0",
                self.group_separator
            );
            self.group_separator = default_group_separator();
            fixed += 1;
        }
        if self.group_separator.starts_with(self.decimal_separator) {
            log::warn!(
                "group_separator gleich decimal_separator {:?}, Gruppierung abgeschaltet",
                self.decimal_separator
            );
            self.group_separator.clear();
            fixed += 1;
        }

        fixed
    }

    /// Speichert Optionen als TOML-Datei; unbrauchbare Werte werden abgelehnt.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let mut checked = self.clone();
        if checked.sanitize() > 0 {
            anyhow::bail!(
                "Optionen enthalten ungueltige Werte, {} nicht geschrieben",
                path.display()
            );
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nach {} schreiben", path.display()))?;
        log::info!("Mess-Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("map_measure"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("map_measure.toml")
    }

    /// Geometrie-Engine mit dem konfigurierten Radius.
    pub fn geometry(&self) -> GeometryEngine {
        GeometryEngine::with_radius(self.earth_radius_m)
    }

    /// Zahlenformat für die Anzeige.
    pub fn number_format(&self) -> NumberFormat {
        let mut chars = self.group_separator.chars();
        let group_separator = match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(c), None) => Some(c),
            (Some(_), Some(_)) => {
                log::warn!(
                    "group_separator {:?} nicht einstellig, verwende U+00A0",
                    self.group_separator
                );
                Some(GROUP_SEPARATOR)
            }
        };
        NumberFormat {
            decimals: self.decimals,
            decimal_separator: self.decimal_separator,
            group_separator,
        }
    }
}
