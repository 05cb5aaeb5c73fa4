use astro_lines_map::{
    CelestialBody, LineRequest, LineResponse, PlaceCandidate, ServiceError, Submission,
    SubmissionId,
};

#[test]
fn test_line_response_fixture_skips_unknown_bodies() {
    let json = include_str!("fixtures/line_response.json");
    let response = LineResponse::from_json(json).expect("Fixture sollte parsebar sein");

    assert_eq!(response.len(), 4, "Alle Schlüssel bleiben erhalten");

    let bodies: Vec<CelestialBody> = response.known_bodies().map(|(b, _)| b).collect();
    assert_eq!(
        bodies,
        vec![CelestialBody::Sun, CelestialBody::Moon, CelestialBody::Venus],
        "Reihenfolge der Antwort, ohne unbekannte Körper"
    );

    let (_, sun) = response
        .known_bodies()
        .next()
        .expect("Sonne vorhanden");
    assert_eq!(sun.len(), 5);
    assert_eq!(sun[0].lat, -66.0);
    assert_eq!(sun[4].lon, -69.6);

    let data = &response.lines["sun"];
    assert_eq!(data.planet_ra, Some(322.1));
    assert_eq!(data.planet_dec, Some(-14.7));
    assert_eq!(response.lines["moon"].planet_ra, None);
}

#[test]
fn test_line_response_rejects_malformed_json() {
    let err = LineResponse::from_json(r#"{"sun": {"points": []}}"#)
        .expect_err("rising_line fehlt");
    assert!(matches!(err, ServiceError::Decode(_)), "Decode-Fehler erwartet: {err:?}");
}

#[test]
fn test_nominatim_fixture_parses_string_coordinates() {
    let json = include_str!("fixtures/nominatim_berlin.json");
    let candidates = PlaceCandidate::list_from_json(json).expect("Fixture sollte parsebar sein");

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].lat, 52.5170365);
    assert_eq!(candidates[0].lon, 13.3888599);
    assert_eq!(
        candidates[0].display_name.as_deref(),
        Some("Berlin, Deutschland")
    );
    assert_eq!(candidates[1].lon, -71.1853829);
}

#[test]
fn test_place_candidates_accept_numbers_and_empty_list() {
    let candidates = PlaceCandidate::list_from_json(r#"[{"lat": 1.5, "lon": -2}]"#)
        .expect("Zahlen sind erlaubt");
    assert_eq!(candidates[0].lat, 1.5);
    assert_eq!(candidates[0].lon, -2.0);

    let empty = PlaceCandidate::list_from_json("[]").expect("leere Liste");
    assert!(empty.is_empty());

    assert!(PlaceCandidate::list_from_json(r#"[{"lat": "north", "lon": "1"}]"#).is_err());
}

#[test]
fn test_line_request_serializes_wire_shape() {
    let submission = Submission {
        id: SubmissionId(1_700_000_000_000),
        display_name: "Ada".into(),
        birth_datetime: "1815-12-10T12:00".into(),
        birth_lat: 51.5074,
        birth_lon: -0.1278,
        birth_place: Some("London".into()),
    };

    let json = serde_json::to_value(LineRequest::for_submission(&submission))
        .expect("Request serialisierbar");

    assert_eq!(
        json,
        serde_json::json!({
            "datetime": "1815-12-10T12:00",
            "birth_lat": 51.5074,
            "birth_lon": -0.1278,
            "planets": [
                "sun", "moon", "mercury", "venus", "mars",
                "jupiter", "saturn", "uranus", "neptune"
            ]
        })
    );
}
