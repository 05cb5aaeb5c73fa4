//! Submission-Lifecycle: Absenden → (Geocoding) → Linienberechnung → Rendern.
//!
//! Beide Netzwerk-Aufrufe sind Suspensionspunkte: der Use-Case legt einen
//! Request in die Outbox und kehrt zurück. Die Antworten kommen als eigene
//! Commands mit Ticket zurück, in beliebiger Reihenfolge.

use crate::app::display_surface::DisplaySurface;
use crate::app::requests::{PendingRequest, RequestTicket};
use crate::app::AppState;
use crate::core::{
    CurveHandle, DraftLocation, LayerGroup, LineResponse, PlaceCandidate, RequestStage,
    ServiceError, Submission, SubmissionError, ValidatedDraft,
};
use crate::shared::smooth_line;
use std::time::{SystemTime, UNIX_EPOCH};

/// Validiert das Formular und stößt Geocoding bzw. Linienberechnung an.
///
/// Ist ein Ortsname angegeben, wird immer zuerst geocodiert. Bei ungültigen
/// Eingaben wird nur die Fehlermeldung gesetzt. Busy gilt nur bis die
/// Linienberechnung in der Outbox liegt.
pub fn submit(state: &mut AppState) {
    let validated = match state.ui.draft.validate() {
        Ok(validated) => validated,
        Err(err) => {
            log::info!("Submit abgelehnt: {}", err);
            state.requests.clear_busy();
            state.ui.show_error(err.user_message());
            return;
        }
    };

    match validated.location.clone() {
        DraftLocation::Place(query) => {
            log::info!("Geocoding für '{}' angefordert", query);
            let ticket = state.requests.issue_place_lookup(validated, query);
            state.requests.set_busy(ticket);
        }
        DraftLocation::Coordinates { lat, lon } => {
            start_line_request(state, validated, lat, lon);
            state.requests.clear_busy();
        }
    }
}

/// Verarbeitet eine Geocoding-Antwort.
///
/// Der erste Treffer überschreibt die Koordinaten im Formular und startet
/// die Linienberechnung. Ohne Treffer wird nichts gelistet.
pub fn apply_place_lookup(
    state: &mut AppState,
    ticket: RequestTicket,
    result: Result<Vec<PlaceCandidate>, ServiceError>,
) {
    let draft = match state.requests.complete(ticket) {
        Some(PendingRequest::PlaceLookup { draft }) => draft,
        Some(other) => {
            log::warn!("Ticket {:?} gehört nicht zu einem Geocoding: {:?}", ticket, other);
            return;
        }
        None => {
            log::warn!("Geocoding-Antwort für unbekanntes Ticket {:?} verworfen", ticket);
            return;
        }
    };

    let candidates = match result {
        Ok(candidates) => candidates,
        Err(source) => {
            state.requests.clear_busy_if(ticket);
            let err = SubmissionError::NetworkFailure {
                stage: RequestStage::PlaceLookup,
                source,
            };
            state.ui.show_error(err.user_message());
            return;
        }
    };

    let Some(first) = candidates.first() else {
        state.requests.clear_busy_if(ticket);
        let query = draft.birth_place().unwrap_or_default().to_string();
        state
            .ui
            .show_error(SubmissionError::PlaceNotFound(query).user_message());
        return;
    };

    log::info!(
        "Ort '{}' aufgelöst: {}, {} ({} Treffer)",
        draft.birth_place().unwrap_or_default(),
        first.lat,
        first.lon,
        candidates.len()
    );
    state.ui.draft.set_coordinates(first.lat, first.lon);

    start_line_request(state, draft, first.lat, first.lon);
    state.requests.clear_busy_if(ticket);
}

/// Verarbeitet eine Linien-Antwort.
///
/// Erfolg: pro gelieferten Körper eine geglättete Kurve, gemeinsam als
/// Layer-Gruppe auf die Oberfläche. Fehler: Eintrag bleibt ohne Darstellung
/// gelistet.
pub fn apply_line_result(
    state: &mut AppState,
    ticket: RequestTicket,
    result: Result<LineResponse, ServiceError>,
) {
    let submission = match state.requests.complete(ticket) {
        Some(PendingRequest::LineComputation { submission }) => submission,
        Some(other) => {
            log::warn!("Ticket {:?} gehört nicht zu einer Linienberechnung: {:?}", ticket, other);
            return;
        }
        None => {
            log::warn!("Linien-Antwort für unbekanntes Ticket {:?} verworfen", ticket);
            return;
        }
    };

    let response = match result {
        Ok(response) => response,
        Err(source) => {
            state.submissions.mark_failed(submission.id);
            let err = SubmissionError::NetworkFailure {
                stage: RequestStage::LineComputation,
                source,
            };
            state.ui.show_error(err.user_message());
            return;
        }
    };

    let listed = state.submissions.get(submission.id).is_some();
    if !listed && state.options.retract_on_delete {
        log::info!(
            "Linien für gelöschte Submission {} verworfen",
            submission.id
        );
        return;
    }

    render_lines(state, &submission, &response);
}

/// Baut aus einer Antwort die Layer-Gruppe einer Submission und zeichnet sie.
fn render_lines(state: &mut AppState, submission: &Submission, response: &LineResponse) {
    let segments = state.options.segments_per_interval;
    let mut group = LayerGroup::new(submission.id);

    for (body, raw) in response.known_bodies() {
        let points = smooth_line(raw, segments);
        let id = state.layers.allocate_curve_id();
        let mut handle =
            CurveHandle::styled(id, body, submission, points, state.options.line_weight);
        if state.options.new_curves_follow_visibility && !state.layers.is_visible(body) {
            handle.opacity = 0.0;
        }
        group.push(handle);
    }

    let members = group.members();
    let group_id = state.surface.add_group(group);
    state.ui.focused_curve = None;
    for (body, curve) in &members {
        state.layers.register(*body, *curve);
    }

    if state.options.fit_view_on_render && !members.is_empty() {
        let ids: Vec<_> = members.iter().map(|(_, curve)| *curve).collect();
        state.surface.fit_to(&ids);
    }

    let curve_count = members.len();
    if state
        .submissions
        .attach_group(submission.id, group_id, members)
    {
        log::info!(
            "Submission {} gerendert: {} Linien",
            submission.id,
            curve_count
        );
    } else {
        log::info!(
            "Submission {} wurde vor der Antwort gelöscht: {} Linien verwaist",
            submission.id,
            curve_count
        );
    }
}

/// Listet die Submission und legt ihre Linienberechnung in die Outbox.
fn start_line_request(
    state: &mut AppState,
    draft: ValidatedDraft,
    lat: f64,
    lon: f64,
) -> RequestTicket {
    let id = state.submissions.allocate_id(now_ms());
    let submission = draft.into_submission(id, lat, lon);
    log::info!("Submission angenommen: {}", submission.list_label());

    state.submissions.register(submission.clone());
    let ticket = state.requests.issue_line_computation(submission);
    log::debug!("Linienberechnung für {} als {:?} angefordert", id, ticket);
    ticket
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
