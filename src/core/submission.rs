//! Submission-Datensätze und das Eingabeformular (Draft).

use super::error::SubmissionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Eindeutige, streng monoton steigende Submission-ID (Erstellungszeit in ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubmissionId(pub u64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ein angenommener Geburtsdatensatz.
///
/// Wird nach Annahme nie mehr verändert; "Bearbeiten" kopiert die Felder
/// zurück ins Formular und erzeugt beim erneuten Absenden einen neuen Datensatz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub display_name: String,
    /// Geburtszeitpunkt, unverändert wie eingegeben (ISO 8601)
    pub birth_datetime: String,
    pub birth_lat: f64,
    pub birth_lon: f64,
    /// Optionaler Ortsname (Freitext)
    pub birth_place: Option<String>,
}

impl Submission {
    /// Listeneintrag: "Name (Datum, Breite, Länge, Ort)".
    pub fn list_label(&self) -> String {
        format!(
            "{} ({}, {}, {}, {})",
            self.display_name,
            self.birth_datetime,
            self.birth_lat,
            self.birth_lon,
            self.birth_place.as_deref().unwrap_or("no city")
        )
    }

    /// Formularwerte zum erneuten Bearbeiten.
    pub fn to_draft(&self) -> SubmissionDraft {
        SubmissionDraft {
            display_name: self.display_name.clone(),
            birth_datetime: self.birth_datetime.clone(),
            birth_lat: self.birth_lat.to_string(),
            birth_lon: self.birth_lon.to_string(),
            birth_place: self.birth_place.clone().unwrap_or_default(),
        }
    }
}

/// Rohe Formularfelder, so wie der Benutzer sie eingibt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionDraft {
    pub display_name: String,
    pub birth_datetime: String,
    pub birth_lat: String,
    pub birth_lon: String,
    pub birth_place: String,
}

/// Woher die Geburtskoordinaten kommen.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftLocation {
    /// Direkt eingegebene Koordinaten
    Coordinates { lat: f64, lon: f64 },
    /// Ortsname, der per Geocoding aufgelöst werden muss
    Place(String),
}

/// Validierter Draft, bereit für Geocoding bzw. Linienberechnung.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDraft {
    pub display_name: String,
    pub birth_datetime: String,
    pub location: DraftLocation,
}

impl ValidatedDraft {
    /// Ortsname, falls einer angegeben wurde.
    pub fn birth_place(&self) -> Option<&str> {
        match &self.location {
            DraftLocation::Place(place) => Some(place),
            DraftLocation::Coordinates { .. } => None,
        }
    }

    /// Erzeugt den endgültigen Datensatz mit aufgelösten Koordinaten.
    pub fn into_submission(self, id: SubmissionId, lat: f64, lon: f64) -> Submission {
        let birth_place = match self.location {
            DraftLocation::Place(place) => Some(place),
            DraftLocation::Coordinates { .. } => None,
        };
        Submission {
            id,
            display_name: self.display_name,
            birth_datetime: self.birth_datetime,
            birth_lat: lat,
            birth_lon: lon,
            birth_place,
        }
    }
}

impl SubmissionDraft {
    /// Prüft die Pflichtfelder.
    ///
    /// Name und Geburtszeit sind Pflicht. Ist ein Ortsname angegeben, wird er
    /// per Geocoding aufgelöst (auch wenn Koordinaten vorhanden sind), sonst
    /// müssen Breite und Länge numerisch sein.
    pub fn validate(&self) -> Result<ValidatedDraft, SubmissionError> {
        let display_name = self.display_name.trim();
        let birth_datetime = self.birth_datetime.trim();
        let birth_place = self.birth_place.trim();

        let mut missing = Vec::new();
        if display_name.is_empty() {
            missing.push("name");
        }
        if birth_datetime.is_empty() {
            missing.push("datetime");
        }

        let location = if !birth_place.is_empty() {
            Some(DraftLocation::Place(birth_place.to_string()))
        } else {
            let lat = parse_coordinate(&self.birth_lat);
            let lon = parse_coordinate(&self.birth_lon);
            if lat.is_none() {
                missing.push("birth_lat");
            }
            if lon.is_none() {
                missing.push("birth_lon");
            }
            lat.zip(lon)
                .map(|(lat, lon)| DraftLocation::Coordinates { lat, lon })
        };

        match location {
            Some(location) if missing.is_empty() => Ok(ValidatedDraft {
                display_name: display_name.to_string(),
                birth_datetime: birth_datetime.to_string(),
                location,
            }),
            _ => Err(SubmissionError::ValidationFailure(missing.join(", "))),
        }
    }

    /// Übernimmt aufgelöste Koordinaten in die angezeigten Formularfelder.
    pub fn set_coordinates(&mut self, lat: f64, lon: f64) {
        self.birth_lat = lat.to_string();
        self.birth_lon = lon.to_string();
    }
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
