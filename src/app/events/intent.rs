use super::super::requests::RequestTicket;
use crate::core::{
    CelestialBody, CurveId, LineResponse, PlaceCandidate, ServiceError, SubmissionDraft,
    SubmissionId,
};
use crate::shared::AppOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Formularwerte wurden in der UI geändert
    DraftEdited { draft: SubmissionDraft },
    /// Formular absenden
    SubmitRequested,
    /// Geocoding-Antwort zu einem Ticket (vom Host zugestellt)
    PlaceLookupCompleted {
        ticket: RequestTicket,
        result: Result<Vec<PlaceCandidate>, ServiceError>,
    },
    /// Linien-Antwort zu einem Ticket (vom Host zugestellt)
    LinesCompleted {
        ticket: RequestTicket,
        result: Result<LineResponse, ServiceError>,
    },
    /// Eintrag aus der Liste löschen
    DeleteSubmissionRequested { id: SubmissionId },
    /// Eintrag ins Formular übernehmen
    EditSubmissionRequested { id: SubmissionId },
    /// Legenden-Checkbox eines Körpers umgeschaltet
    BodyVisibilityToggled { body: CelestialBody, visible: bool },
    /// "Select all" in der Legende
    SelectAllBodiesRequested,
    /// "Select none" in der Legende
    SelectNoBodiesRequested,
    /// Kurve auf der Karte angeklickt
    CurveClicked { curve: CurveId },
    /// Fehlermeldung schließen
    DismissErrorRequested,
    /// Kartenausschnitt auf Weltansicht zurücksetzen
    ResetViewRequested,
    /// Kartenausschnitt verschieben (Delta in Grad)
    MapPanned { delta_lat: f64, delta_lon: f64 },
    /// Kartenausschnitt zoomen
    MapZoomed { factor: f64 },
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofort anwenden)
    OptionsChanged { options: Box<AppOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
