//! Anzeigeformate für Messwerte (Länge und Fläche).
//!
//! Alle Einheiten werden aus genau einem Rohwert abgeleitet und unabhängig
//! voneinander gerundet. Ein fehlender Messwert (`None`) wird hier nie
//! formatiert; der Aufrufer blendet die Anzeige aus.

use serde::Serialize;

/// Quadratmeter pro Ar.
pub const SQUARE_METERS_PER_ARE: f64 = 100.0;
/// Quadratmeter pro Hektar.
pub const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;
/// Quadratmeter pro Quadratkilometer.
pub const SQUARE_METERS_PER_SQUARE_KILOMETER: f64 = 1_000_000.0;
/// Meter pro Kilometer.
pub const METERS_PER_KILOMETER: f64 = 1_000.0;

/// Locale-abhängiges Zahlenformat mit fester Nachkommastellenzahl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Feste Anzahl Nachkommastellen
    pub decimals: usize,
    /// Dezimaltrennzeichen
    pub decimal_separator: char,
    /// Tausendertrennzeichen (`None` = keine Gruppierung)
    pub group_separator: Option<char>,
}

impl Default for NumberFormat {
    fn default() -> Self {
        crate::shared::MeasureOptions::default().number_format()
    }
}

impl NumberFormat {
    /// Formatiert einen Wert mit fester Präzision, Gruppierung und Dezimaltrenner.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let fixed = format!("{:.*}", self.decimals, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (fixed.as_str(), None),
        };

        let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
        let rounds_to_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
        if value.is_sign_negative() && !rounds_to_zero {
            out.push('-');
        }

        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                if let Some(sep) = self.group_separator {
                    out.push(sep);
                }
            }
            out.push(digit);
        }

        if let Some(frac) = frac_part {
            out.push(self.decimal_separator);
            out.push_str(frac);
        }

        out
    }
}

/// Streckenlänge in Metern und Kilometern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LengthDisplay {
    /// Formatierter Wert in m
    pub meters: String,
    /// Formatierter Wert in km
    pub kilometers: String,
}

impl LengthDisplay {
    /// Leitet beide Einheiten aus dem Rohwert in Metern ab.
    pub fn from_meters(meters: f64, format: &NumberFormat) -> Self {
        Self {
            meters: format.format(meters),
            kilometers: format.format(meters / METERS_PER_KILOMETER),
        }
    }

    /// Anzeigezeilen mit Einheit.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("{} m", self.meters),
            format!("{} km", self.kilometers),
        ]
    }
}

/// Fläche in m², a, ha und km².
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaDisplay {
    /// Formatierter Wert in m²
    pub square_meters: String,
    /// Formatierter Wert in a
    pub ares: String,
    /// Formatierter Wert in ha
    pub hectares: String,
    /// Formatierter Wert in km²
    pub square_kilometers: String,
}

impl AreaDisplay {
    /// Leitet alle vier Einheiten aus dem Rohwert in Quadratmetern ab.
    pub fn from_square_meters(square_meters: f64, format: &NumberFormat) -> Self {
        Self {
            square_meters: format.format(square_meters),
            ares: format.format(square_meters / SQUARE_METERS_PER_ARE),
            hectares: format.format(square_meters / SQUARE_METERS_PER_HECTARE),
            square_kilometers: format.format(square_meters / SQUARE_METERS_PER_SQUARE_KILOMETER),
        }
    }

    /// Anzeigezeilen mit Einheit.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("{} m²", self.square_meters),
            format!("{} a", self.ares),
            format!("{} ha", self.hectares),
            format!("{} km²", self.square_kilometers),
        ]
    }
}
