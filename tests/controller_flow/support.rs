use astro_lines_map::{
    AppController, AppIntent, AppState, CelestialBody, GeoPoint, LineRequest, LineResponse,
    OutboundRequest, PlaceCandidate, RequestTicket, SubmissionDraft,
};

pub fn draft(name: &str, datetime: &str, lat: &str, lon: &str, place: &str) -> SubmissionDraft {
    SubmissionDraft {
        display_name: name.into(),
        birth_datetime: datetime.into(),
        birth_lat: lat.into(),
        birth_lon: lon.into(),
        birth_place: place.into(),
    }
}

/// Formular füllen und absenden.
pub fn submit(controller: &mut AppController, state: &mut AppState, draft: SubmissionDraft) {
    controller
        .handle_intent(state, AppIntent::DraftEdited { draft })
        .expect("DraftEdited");
    controller
        .handle_intent(state, AppIntent::SubmitRequested)
        .expect("SubmitRequested");
}

/// Genau ein Linien-Request in der Outbox.
pub fn take_line_request(state: &mut AppState) -> (RequestTicket, LineRequest) {
    let mut outbox = state.requests.take_outbox();
    assert_eq!(outbox.len(), 1, "Genau ein Request erwartet: {outbox:?}");
    match outbox.remove(0) {
        OutboundRequest::LineComputation { ticket, request } => (ticket, request),
        other => panic!("Linien-Request erwartet, war: {other:?}"),
    }
}

/// Genau ein Geocoding-Request in der Outbox.
pub fn take_place_lookup(state: &mut AppState) -> (RequestTicket, String) {
    let mut outbox = state.requests.take_outbox();
    assert_eq!(outbox.len(), 1, "Genau ein Request erwartet: {outbox:?}");
    match outbox.remove(0) {
        OutboundRequest::PlaceLookup { ticket, query } => (ticket, query),
        other => panic!("Geocoding-Request erwartet, war: {other:?}"),
    }
}

/// Antwort mit je drei Punkten für jeden der neun Körper.
pub fn nine_body_response() -> LineResponse {
    let mut response = LineResponse::default();
    for (i, body) in CelestialBody::ALL.into_iter().enumerate() {
        let lon = i as f64 * 10.0;
        response.insert(
            body,
            vec![
                GeoPoint::new(-60.0, lon),
                GeoPoint::new(0.0, lon + 5.0),
                GeoPoint::new(60.0, lon),
            ],
        );
    }
    response
}

pub fn complete_lines(
    controller: &mut AppController,
    state: &mut AppState,
    ticket: RequestTicket,
    result: Result<LineResponse, astro_lines_map::ServiceError>,
) {
    controller
        .handle_intent(state, AppIntent::LinesCompleted { ticket, result })
        .expect("LinesCompleted");
}

pub fn complete_place(
    controller: &mut AppController,
    state: &mut AppState,
    ticket: RequestTicket,
    result: Result<Vec<PlaceCandidate>, astro_lines_map::ServiceError>,
) {
    controller
        .handle_intent(state, AppIntent::PlaceLookupCompleted { ticket, result })
        .expect("PlaceLookupCompleted");
}

/// Submission mit direkten Koordinaten absenden und mit neun Linien beantworten.
pub fn render_direct(controller: &mut AppController, state: &mut AppState, name: &str) {
    submit(
        controller,
        state,
        draft(name, "1990-05-17T08:30", "48.1", "11.6", ""),
    );
    let (ticket, _) = take_line_request(state);
    complete_lines(controller, state, ticket, Ok(nine_body_response()));
}
