//! Wire-Formate der externen Dienste (Linien-Backend, Geocoding).

use super::error::ServiceError;
use super::{CelestialBody, GeoPoint, Submission};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Request an das Linien-Backend, einmal pro Submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRequest {
    /// Geburtszeitpunkt (ISO 8601)
    pub datetime: String,
    pub birth_lat: f64,
    pub birth_lon: f64,
    /// Angeforderte Körper, immer alle neun in Katalog-Reihenfolge
    pub planets: Vec<CelestialBody>,
}

impl LineRequest {
    /// Baut den Request für eine Submission.
    pub fn for_submission(submission: &Submission) -> Self {
        Self {
            datetime: submission.birth_datetime.clone(),
            birth_lat: submission.birth_lat,
            birth_lon: submission.birth_lon,
            planets: CelestialBody::ALL.to_vec(),
        }
    }
}

/// Antwortdaten eines Körpers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyLineData {
    /// Rohe Linienpunkte in Backend-Reihenfolge
    pub rising_line: Vec<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planet_ra: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planet_dec: Option<f64>,
}

/// Antwort des Linien-Backends: Körper-ID → Linie.
///
/// Die Reihenfolge der Schlüssel bleibt erhalten. Fehlende Körper bedeuten
/// "keine Linie", unbekannte Schlüssel werden beim Auswerten übersprungen.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineResponse {
    pub lines: IndexMap<String, BodyLineData>,
}

impl LineResponse {
    /// Parst eine JSON-Antwort.
    pub fn from_json(body: &str) -> Result<Self, ServiceError> {
        serde_json::from_str(body).map_err(|e| ServiceError::Decode(e.to_string()))
    }

    /// Fügt eine Linie hinzu (Tests, Fixtures).
    pub fn insert(&mut self, body: CelestialBody, rising_line: Vec<GeoPoint>) {
        self.lines.insert(
            body.id().to_string(),
            BodyLineData {
                rising_line,
                planet_ra: None,
                planet_dec: None,
            },
        );
    }

    /// Alle bekannten Körper der Antwort, in Antwort-Reihenfolge.
    pub fn known_bodies(&self) -> impl Iterator<Item = (CelestialBody, &[GeoPoint])> + '_ {
        self.lines.iter().filter_map(|(key, data)| {
            let Some(body) = CelestialBody::from_id(key) else {
                log::warn!("Unbekannter Körper in Backend-Antwort ignoriert: {}", key);
                return None;
            };
            Some((body, data.rising_line.as_slice()))
        })
    }

    /// Anzahl der Einträge (inkl. unbekannter Schlüssel).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// `true` wenn die Antwort keine Linien enthält.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// Kompakt, damit Logs und Command-Debug-Ausgaben nicht hunderte Punkte enthalten.
impl fmt::Debug for LineResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.lines
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.rising_line.len())),
            )
            .finish()
    }
}

/// Ein Geocoding-Treffer. Nur der erste Treffer wird verwendet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub lat: f64,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl PlaceCandidate {
    /// Parst eine Geocoding-Antwort (JSON-Array).
    pub fn list_from_json(body: &str) -> Result<Vec<Self>, ServiceError> {
        serde_json::from_str(body).map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

/// Nominatim liefert Koordinaten als String, andere Dienste als Zahl.
fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(v) => Ok(v),
        Raw::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("keine Zahl: {s:?}"))),
    }
}
