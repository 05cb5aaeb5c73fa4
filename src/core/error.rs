//! Fehlertypen für Submission-Lifecycle und externe Dienste.

use std::fmt;

/// Welcher externe Aufruf fehlgeschlagen ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStage {
    /// Ortsname → Koordinaten (Geocoding)
    PlaceLookup,
    /// Geburtsdaten → Rising Lines
    LineComputation,
}

impl fmt::Display for RequestStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestStage::PlaceLookup => f.write_str("Geocoding"),
            RequestStage::LineComputation => f.write_str("Linienberechnung"),
        }
    }
}

/// Transport- oder Protokollfehler eines externen Dienstes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Verbindung/Transport fehlgeschlagen
    #[error("Network error: {0}")]
    Transport(String),
    /// Antwort mit Nicht-Erfolgs-Status
    #[error("Network error: {status} {reason}")]
    Status { status: u16, reason: String },
    /// Antwort nicht lesbar
    #[error("Invalid response: {0}")]
    Decode(String),
}

/// Fehler eines einzelnen Submission-Versuchs. Nie fatal für den Prozess.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// Pflichtfelder fehlen oder Koordinaten sind nicht numerisch
    #[error("Eingabe ungültig: {0}")]
    ValidationFailure(String),
    /// Geocoding lieferte keine Treffer
    #[error("Ort nicht gefunden: {0}")]
    PlaceNotFound(String),
    /// Einer der beiden externen Aufrufe ist fehlgeschlagen
    #[error("{stage} fehlgeschlagen: {source}")]
    NetworkFailure {
        stage: RequestStage,
        #[source]
        source: ServiceError,
    },
}

impl SubmissionError {
    /// Text für den transienten Fehlerbereich der Oberfläche.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::ValidationFailure(_) => {
                "Please fill out all required fields (or provide a valid city name).".to_string()
            }
            SubmissionError::PlaceNotFound(_) => {
                "City not found. Please check your input.".to_string()
            }
            SubmissionError::NetworkFailure {
                stage: RequestStage::PlaceLookup,
                ..
            } => "Error fetching city data.".to_string(),
            SubmissionError::NetworkFailure {
                stage: RequestStage::LineComputation,
                source,
            } => format!("Error: {source}"),
        }
    }
}
