//! Handler für Formular und Submission-Lifecycle.

use crate::app::requests::RequestTicket;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{LineResponse, PlaceCandidate, ServiceError, SubmissionDraft, SubmissionId};

/// Übernimmt die aktuellen Formularwerte.
pub fn update_draft(state: &mut AppState, draft: SubmissionDraft) {
    state.ui.draft = draft;
}

/// Validiert das Formular und stößt die Requests an.
pub fn submit(state: &mut AppState) {
    use_cases::lifecycle::submit(state);
}

/// Verarbeitet eine Geocoding-Antwort.
pub fn apply_place_lookup(
    state: &mut AppState,
    ticket: RequestTicket,
    result: Result<Vec<PlaceCandidate>, ServiceError>,
) {
    use_cases::lifecycle::apply_place_lookup(state, ticket, result);
}

/// Verarbeitet eine Linien-Antwort.
pub fn apply_line_result(
    state: &mut AppState,
    ticket: RequestTicket,
    result: Result<LineResponse, ServiceError>,
) {
    use_cases::lifecycle::apply_line_result(state, ticket, result);
}

/// Entfernt eine Submission aus der Liste.
pub fn delete(state: &mut AppState, id: SubmissionId) {
    use_cases::manage::delete(state, id);
}

/// Füllt das Formular mit einer bestehenden Submission.
pub fn prefill_draft(state: &mut AppState, id: SubmissionId) {
    use_cases::manage::prefill_draft(state, id);
}
