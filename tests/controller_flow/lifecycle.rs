use super::support::*;
use astro_lines_map::app::SubmissionPhase;
use astro_lines_map::{
    AppController, AppIntent, AppState, CelestialBody, PlaceCandidate, ServiceError,
};

#[test]
fn direct_coordinates_render_nine_smoothed_curves() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    submit(
        &mut controller,
        &mut state,
        draft("Ada", "1990-05-17T08:30", "48.1", "11.6", ""),
    );
    assert!(!state.is_busy(), "Linienberechnung blockiert das Formular nicht");
    assert_eq!(state.submission_count(), 1, "Eintrag wird vor der Antwort gelistet");

    let (ticket, request) = take_line_request(&mut state);
    assert_eq!(request.datetime, "1990-05-17T08:30");
    assert_eq!(request.birth_lat, 48.1);
    assert_eq!(request.birth_lon, 11.6);
    assert_eq!(request.planets, CelestialBody::ALL.to_vec());

    complete_lines(&mut controller, &mut state, ticket, Ok(nine_body_response()));

    assert!(!state.is_busy());
    assert_eq!(state.curve_count(), 9);
    assert_eq!(state.surface.group_count(), 1);
    for body in CelestialBody::ALL {
        assert_eq!(state.layers.handles(body).len(), 1, "{body}: genau ein Handle");
    }

    let record = state.submissions.iter().next().expect("Eintrag vorhanden");
    assert_eq!(record.phase, SubmissionPhase::Rendered);
    assert_eq!(record.curves.len(), 9);
    assert_eq!(
        record.submission.list_label(),
        "Ada (1990-05-17T08:30, 48.1, 11.6, no city)"
    );

    let sun = state
        .layers
        .handles(CelestialBody::Sun)
        .first()
        .and_then(|id| state.surface.curve(*id))
        .expect("Sonnenlinie gezeichnet");
    assert_eq!(sun.points.len(), 11, "3 Punkte, S=5 → (3-1)*5+1");
    assert_eq!(sun.opacity, 1.0);
    assert_eq!(sun.label, "Ada: Sun - Vitality, leadership, self-expression");
    assert_eq!(sun.submission_id, record.submission.id);
}

#[test]
fn form_is_free_again_while_line_request_is_in_flight() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    submit(
        &mut controller,
        &mut state,
        draft("Ivo", "1988-08-08T08:00", "0", "0", ""),
    );
    let outbox = state.requests.take_outbox();
    assert_eq!(outbox.len(), 1);
    assert!(matches!(
        outbox[0],
        astro_lines_map::OutboundRequest::LineComputation { .. }
    ));
    assert_eq!(state.requests.in_flight_count(), 1);
    assert!(!state.is_busy(), "Formular ist sofort wieder frei");

    submit(
        &mut controller,
        &mut state,
        draft("Jo", "1989-09-09T09:00", "", "", "Rome"),
    );
    assert!(state.is_busy(), "Geocoding hält das Formular");
    let (ticket, _) = take_place_lookup(&mut state);
    complete_place(
        &mut controller,
        &mut state,
        ticket,
        Ok(vec![PlaceCandidate {
            lat: 41.9,
            lon: 12.5,
            display_name: None,
        }]),
    );
    assert!(!state.is_busy(), "Busy endet sobald die Linienberechnung ansteht");
    assert_eq!(state.requests.in_flight_count(), 2, "Beide Linienberechnungen laufen");
    assert_eq!(state.submission_count(), 2);
}

#[test]
fn missing_fields_show_validation_message_and_register_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    submit(
        &mut controller,
        &mut state,
        draft("", "1990-05-17T08:30", "48.1", "11.6", ""),
    );

    assert_eq!(
        state.ui.error_message.as_deref(),
        Some("Please fill out all required fields (or provide a valid city name).")
    );
    assert!(state.submissions.is_empty());
    assert!(state.requests.outbox().is_empty());
    assert!(!state.is_busy());
}

#[test]
fn place_not_found_registers_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    submit(
        &mut controller,
        &mut state,
        draft("Bo", "2001-01-01T00:00", "", "", "Atlantis"),
    );
    let (ticket, query) = take_place_lookup(&mut state);
    assert_eq!(query, "Atlantis");
    assert!(state.is_busy());

    complete_place(&mut controller, &mut state, ticket, Ok(Vec::new()));

    assert_eq!(
        state.ui.error_message.as_deref(),
        Some("City not found. Please check your input.")
    );
    assert!(state.submissions.is_empty());
    assert_eq!(state.curve_count(), 0);
    assert!(state.requests.outbox().is_empty(), "Kein Linien-Request");
    assert!(!state.is_busy());
}

#[test]
fn place_lookup_overrides_typed_coordinates() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    submit(
        &mut controller,
        &mut state,
        draft("Cy", "1970-03-03T03:03", "1", "2", "Berlin"),
    );
    let (ticket, _) = take_place_lookup(&mut state);
    complete_place(
        &mut controller,
        &mut state,
        ticket,
        Ok(vec![
            PlaceCandidate {
                lat: 52.52,
                lon: 13.405,
                display_name: Some("Berlin".into()),
            },
            PlaceCandidate {
                lat: 0.0,
                lon: 0.0,
                display_name: None,
            },
        ]),
    );

    assert_eq!(state.ui.draft.birth_lat, "52.52", "Formular zeigt aufgelöste Breite");
    assert_eq!(state.ui.draft.birth_lon, "13.405");
    assert!(!state.is_busy(), "Busy endet mit dem Geocoding");

    let (line_ticket, request) = take_line_request(&mut state);
    assert_eq!(request.birth_lat, 52.52);
    assert_eq!(request.birth_lon, 13.405);

    let record = state.submissions.iter().next().expect("gelistet");
    assert_eq!(record.submission.birth_place.as_deref(), Some("Berlin"));

    complete_lines(&mut controller, &mut state, line_ticket, Ok(nine_body_response()));
    assert!(!state.is_busy());
    assert_eq!(state.curve_count(), 9);
}

#[test]
fn place_lookup_network_failure_shows_city_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    submit(
        &mut controller,
        &mut state,
        draft("Di", "1980-08-08T08:08", "", "", "Paris"),
    );
    let (ticket, _) = take_place_lookup(&mut state);
    complete_place(
        &mut controller,
        &mut state,
        ticket,
        Err(ServiceError::Transport("connection refused".into())),
    );

    assert_eq!(
        state.ui.error_message.as_deref(),
        Some("Error fetching city data.")
    );
    assert!(state.submissions.is_empty());
    assert!(!state.is_busy());
}

#[test]
fn line_failure_keeps_record_listed_without_curves() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    submit(
        &mut controller,
        &mut state,
        draft("Ed", "1999-12-31T23:59", "10", "20", ""),
    );
    let (ticket, _) = take_line_request(&mut state);
    complete_lines(
        &mut controller,
        &mut state,
        ticket,
        Err(ServiceError::Status {
            status: 500,
            reason: "Internal Server Error".into(),
        }),
    );

    let message = state.ui.error_message.clone().expect("Fehlermeldung gesetzt");
    assert!(message.starts_with("Error: "), "Meldung war: {message}");
    assert_eq!(state.submission_count(), 1);
    let record = state.submissions.iter().next().expect("gelistet");
    assert_eq!(record.phase, SubmissionPhase::Failed);
    assert_eq!(state.curve_count(), 0);
    assert!(!state.is_busy());
}

#[test]
fn unknown_and_missing_bodies_are_skipped() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    submit(
        &mut controller,
        &mut state,
        draft("Fa", "2010-10-10T10:10", "0", "0", ""),
    );
    let (ticket, _) = take_line_request(&mut state);
    let response = astro_lines_map::LineResponse::from_json(
        r#"{
            "mars": {"rising_line": [{"lat": 1.0, "lon": 2.0}, {"lat": 3.0, "lon": 4.0}]},
            "pluto": {"rising_line": [{"lat": 0.0, "lon": 0.0}, {"lat": 1.0, "lon": 1.0}]}
        }"#,
    )
    .expect("gültiges JSON");
    complete_lines(&mut controller, &mut state, ticket, Ok(response));

    assert_eq!(state.curve_count(), 1, "Nur Mars wird gezeichnet");
    assert_eq!(state.layers.handles(CelestialBody::Mars).len(), 1);
    assert!(state.layers.handles(CelestialBody::Sun).is_empty());
}

#[test]
fn out_of_order_completions_render_each_attempt() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    submit(
        &mut controller,
        &mut state,
        draft("First", "2000-01-01T00:00", "1", "1", ""),
    );
    let (first, _) = take_line_request(&mut state);
    submit(
        &mut controller,
        &mut state,
        draft("Second", "2000-01-02T00:00", "2", "2", ""),
    );
    let (second, _) = take_line_request(&mut state);
    assert_eq!(state.requests.in_flight_count(), 2);

    complete_lines(&mut controller, &mut state, second, Ok(nine_body_response()));
    assert!(!state.is_busy(), "Laufende Linienberechnungen halten kein Busy");

    complete_lines(&mut controller, &mut state, first, Ok(nine_body_response()));
    assert_eq!(state.curve_count(), 18);
    assert_eq!(state.surface.group_count(), 2);
    assert!(state
        .submissions
        .iter()
        .all(|r| r.phase == SubmissionPhase::Rendered));

    let mut ids: Vec<_> = state.submissions.iter().map(|r| r.submission.id).collect();
    let sorted = {
        let mut s = ids.clone();
        s.sort();
        s
    };
    assert_eq!(ids, sorted, "IDs steigen streng monoton");
    ids.dedup();
    assert_eq!(ids.len(), 2);
}

#[test]
fn error_slot_is_last_write_wins() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    submit(
        &mut controller,
        &mut state,
        draft("A", "2000-01-01T00:00", "", "", "Nowhere"),
    );
    let (place_ticket, _) = take_place_lookup(&mut state);
    submit(
        &mut controller,
        &mut state,
        draft("B", "2000-01-01T00:00", "5", "5", ""),
    );
    let (line_ticket, _) = take_line_request(&mut state);

    complete_lines(
        &mut controller,
        &mut state,
        line_ticket,
        Err(ServiceError::Transport("timeout".into())),
    );
    complete_place(&mut controller, &mut state, place_ticket, Ok(Vec::new()));

    assert_eq!(
        state.ui.error_message.as_deref(),
        Some("City not found. Please check your input."),
        "Die zuletzt eingetroffene Meldung gewinnt"
    );
}

#[test]
fn new_submit_clears_previous_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    submit(&mut controller, &mut state, draft("", "", "", "", ""));
    assert!(state.ui.error_message.is_some());

    submit(
        &mut controller,
        &mut state,
        draft("Gi", "2000-01-01T00:00", "0", "0", ""),
    );
    assert!(state.ui.error_message.is_none());
}

#[test]
fn unknown_ticket_is_ignored() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    complete_lines(
        &mut controller,
        &mut state,
        astro_lines_map::RequestTicket(999),
        Ok(nine_body_response()),
    );

    assert_eq!(state.curve_count(), 0);
    assert!(state.ui.error_message.is_none());
}

#[test]
fn delete_orphans_curves_by_default() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    render_direct(&mut controller, &mut state, "Ha");
    let id = state.submissions.iter().next().expect("gelistet").submission.id;

    controller
        .handle_intent(&mut state, AppIntent::DeleteSubmissionRequested { id })
        .expect("Delete");

    assert!(state.submissions.is_empty());
    assert_eq!(state.curve_count(), 9, "Linien bleiben verwaist auf der Karte");
    assert_eq!(state.layers.total_handles(), 9);

    controller
        .handle_intent(&mut state, AppIntent::SelectNoBodiesRequested)
        .expect("Select none");
    assert!(
        state.surface.curves().all(|c| c.opacity == 0.0),
        "Verwaiste Linien folgen weiterhin der Legende"
    );
}

#[test]
fn delete_with_retract_option_removes_curves() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.options.retract_on_delete = true;
    render_direct(&mut controller, &mut state, "Ib");
    render_direct(&mut controller, &mut state, "Jo");
    let id = state.submissions.iter().next().expect("gelistet").submission.id;

    controller
        .handle_intent(&mut state, AppIntent::DeleteSubmissionRequested { id })
        .expect("Delete");

    assert_eq!(state.submission_count(), 1);
    assert_eq!(state.curve_count(), 9);
    assert_eq!(state.surface.group_count(), 1);
    assert_eq!(state.layers.total_handles(), 9);
    assert_eq!(state.surface.curves_of_submission(id).count(), 0);
}

#[test]
fn late_result_after_delete_is_rendered_as_orphan() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    submit(
        &mut controller,
        &mut state,
        draft("Ka", "2000-01-01T00:00", "3", "4", ""),
    );
    let (ticket, _) = take_line_request(&mut state);
    let id = state.submissions.iter().next().expect("gelistet").submission.id;
    controller
        .handle_intent(&mut state, AppIntent::DeleteSubmissionRequested { id })
        .expect("Delete");

    complete_lines(&mut controller, &mut state, ticket, Ok(nine_body_response()));

    assert!(state.submissions.is_empty());
    assert_eq!(state.curve_count(), 9);
    assert_eq!(state.surface.curves_of_submission(id).count(), 9);
}

#[test]
fn late_result_after_delete_is_discarded_with_retract_option() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.options.retract_on_delete = true;

    submit(
        &mut controller,
        &mut state,
        draft("Lu", "2000-01-01T00:00", "3", "4", ""),
    );
    let (ticket, _) = take_line_request(&mut state);
    let id = state.submissions.iter().next().expect("gelistet").submission.id;
    controller
        .handle_intent(&mut state, AppIntent::DeleteSubmissionRequested { id })
        .expect("Delete");

    complete_lines(&mut controller, &mut state, ticket, Ok(nine_body_response()));

    assert_eq!(state.curve_count(), 0);
    assert_eq!(state.layers.total_handles(), 0);
}

#[test]
fn edit_prefills_form_and_resubmit_creates_new_entry() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    render_direct(&mut controller, &mut state, "Mo");
    let before = state.submissions.iter().next().expect("gelistet").clone();

    controller
        .handle_intent(&mut state, AppIntent::DraftEdited { draft: draft("", "", "", "", "") })
        .expect("Formular leeren");
    controller
        .handle_intent(
            &mut state,
            AppIntent::EditSubmissionRequested {
                id: before.submission.id,
            },
        )
        .expect("Edit");

    assert_eq!(state.ui.draft.display_name, "Mo");
    assert_eq!(state.ui.draft.birth_datetime, "1990-05-17T08:30");
    assert_eq!(state.ui.draft.birth_lat, "48.1");
    assert_eq!(state.ui.draft.birth_lon, "11.6");
    assert_eq!(state.submission_count(), 1, "Bearbeiten ändert die Liste nicht");

    controller
        .handle_intent(&mut state, AppIntent::SubmitRequested)
        .expect("Resubmit");
    let (ticket, _) = take_line_request(&mut state);
    complete_lines(&mut controller, &mut state, ticket, Ok(nine_body_response()));

    assert_eq!(state.submission_count(), 2, "Neuer Eintrag neben dem alten");
    assert_eq!(state.curve_count(), 18);
    let first = state.submissions.iter().next().expect("gelistet");
    assert_eq!(first.submission, before.submission, "Alter Eintrag unverändert");
}

#[test]
fn fit_view_option_moves_viewport_to_new_lines() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.options.fit_view_on_render = true;

    render_direct(&mut controller, &mut state, "Ny");

    let viewport = state.surface.viewport();
    assert!(viewport.center.lon > 0.0, "Mitte liegt bei den Linien");
}
