use super::super::requests::RequestTicket;
use crate::core::{
    CelestialBody, CurveId, LineResponse, PlaceCandidate, ServiceError, SubmissionDraft,
    SubmissionId,
};
use crate::shared::AppOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Formularwerte übernehmen
    UpdateDraft { draft: SubmissionDraft },
    /// Fehlerbereich leeren
    ClearErrorMessage,
    /// Formular validieren und Requests anstoßen
    SubmitDraft,
    /// Geocoding-Ergebnis verarbeiten
    ApplyPlaceLookup {
        ticket: RequestTicket,
        result: Result<Vec<PlaceCandidate>, ServiceError>,
    },
    /// Linien-Ergebnis verarbeiten
    ApplyLineResult {
        ticket: RequestTicket,
        result: Result<LineResponse, ServiceError>,
    },
    /// Submission aus der Liste entfernen
    DeleteSubmission { id: SubmissionId },
    /// Formular mit den Werten einer Submission füllen
    PrefillDraftFromSubmission { id: SubmissionId },
    /// Sichtbarkeit eines Körpers setzen
    SetBodyVisibility { body: CelestialBody, visible: bool },
    /// Sichtbarkeit aller Körper setzen
    SetAllBodiesVisibility { visible: bool },
    /// Kurve hervorheben, alle anderen dimmen
    FocusCurve { curve: CurveId },
    /// Kartenausschnitt zurücksetzen
    ResetView,
    /// Kartenausschnitt verschieben
    PanView { delta_lat: f64, delta_lon: f64 },
    /// Kartenausschnitt zoomen
    ZoomView { factor: f64 },
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: Box<AppOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}
