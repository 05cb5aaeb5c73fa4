//! Externe Dienste: Linienberechnung und Geocoding.
//!
//! Die Traits sind blockierend; [`NetworkDispatcher`] führt sie auf
//! Worker-Threads aus und liefert die Ergebnisse als [`AppIntent`]s zurück.
//!
//! [`AppIntent`]: crate::app::AppIntent

mod dispatcher;
mod http;

use crate::core::{LineRequest, LineResponse, PlaceCandidate, ServiceError};

pub use dispatcher::NetworkDispatcher;
pub use http::{HttpLineClient, NominatimClient};

/// Berechnet Rising Lines für Geburtsdaten.
pub trait LineComputation: Send + Sync {
    /// Liefert pro Körper die rohe Linie.
    fn compute_lines(&self, request: &LineRequest) -> Result<LineResponse, ServiceError>;
}

/// Löst einen Ortsnamen in Koordinaten auf.
pub trait PlaceLookup: Send + Sync {
    /// Treffer in Relevanz-Reihenfolge (leer = nicht gefunden).
    fn search(&self, query: &str) -> Result<Vec<PlaceCandidate>, ServiceError>;
}
