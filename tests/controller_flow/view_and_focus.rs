use super::support::*;
use astro_lines_map::{AppController, AppIntent, AppState, CelestialBody};

#[test]
fn clicking_a_curve_dims_all_others() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    render_direct(&mut controller, &mut state, "A");
    render_direct(&mut controller, &mut state, "B");

    controller
        .handle_intent(
            &mut state,
            AppIntent::BodyVisibilityToggled {
                body: CelestialBody::Saturn,
                visible: false,
            },
        )
        .expect("Toggle");

    let focus = state.layers.handles(CelestialBody::Sun)[0];
    controller
        .handle_intent(&mut state, AppIntent::CurveClicked { curve: focus })
        .expect("Klick");

    assert_eq!(state.ui.focused_curve, Some(focus));
    let dim = state.options.focus_dim_opacity;
    for curve in state.surface.curves() {
        let expected = if curve.id == focus { 1.0 } else { dim };
        assert_eq!(curve.opacity, expected, "Kurve {:?}", curve.id);
    }

    controller
        .handle_intent(&mut state, AppIntent::SelectAllBodiesRequested)
        .expect("Select all");
    assert!(
        state.surface.curves().all(|c| c.opacity == 1.0),
        "Legende wirkt nach dem Fokus normal"
    );
    assert_eq!(state.ui.focused_curve, None, "Hervorhebung ist aufgehoben");
}

#[test]
fn legend_toggle_and_new_render_end_the_focus() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    render_direct(&mut controller, &mut state, "A");

    let focus = state.layers.handles(CelestialBody::Moon)[0];
    controller
        .handle_intent(&mut state, AppIntent::CurveClicked { curve: focus })
        .expect("Klick");
    assert_eq!(state.ui.focused_curve, Some(focus));

    controller
        .handle_intent(
            &mut state,
            AppIntent::BodyVisibilityToggled {
                body: CelestialBody::Venus,
                visible: false,
            },
        )
        .expect("Toggle");
    assert_eq!(state.ui.focused_curve, None, "Einzelner Toggle beendet den Fokus");

    controller
        .handle_intent(&mut state, AppIntent::CurveClicked { curve: focus })
        .expect("Klick");
    controller
        .handle_intent(&mut state, AppIntent::SelectNoBodiesRequested)
        .expect("Select none");
    assert_eq!(state.ui.focused_curve, None, "Select none beendet den Fokus");

    controller
        .handle_intent(&mut state, AppIntent::CurveClicked { curve: focus })
        .expect("Klick");
    render_direct(&mut controller, &mut state, "B");
    assert_eq!(state.ui.focused_curve, None, "Neue Linien beenden den Fokus");
}

#[test]
fn scene_mirrors_surface_and_view_can_be_reset() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    render_direct(&mut controller, &mut state, "A");

    controller
        .handle_intent(&mut state, AppIntent::MapZoomed { factor: 4.0 })
        .expect("Zoom");
    controller
        .handle_intent(
            &mut state,
            AppIntent::MapPanned {
                delta_lat: 10.0,
                delta_lon: -20.0,
            },
        )
        .expect("Pan");

    let scene = controller.build_map_scene(&state);
    assert_eq!(scene.curves.len(), 9);
    assert_eq!(scene.viewport.zoom, 4.0);
    assert_eq!(scene.viewport.center.lat, 10.0);

    controller
        .handle_intent(&mut state, AppIntent::ResetViewRequested)
        .expect("Reset");
    let scene = controller.build_map_scene(&state);
    assert_eq!(scene.viewport.zoom, 1.0);
    assert_eq!(scene.viewport.center.lon, 0.0);
}

#[test]
fn clicking_a_hidden_curve_brings_it_back_focused() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    render_direct(&mut controller, &mut state, "A");

    controller
        .handle_intent(
            &mut state,
            AppIntent::BodyVisibilityToggled {
                body: CelestialBody::Mars,
                visible: false,
            },
        )
        .expect("Toggle");
    let hidden = state.layers.handles(CelestialBody::Mars)[0];

    let scene = controller.build_map_scene(&state);
    let picked = scene
        .curves
        .iter()
        .find(|c| c.id == hidden)
        .expect("Ausgeblendete Kurve bleibt in der Szene");
    assert_eq!(picked.opacity, 0.0);

    controller
        .handle_intent(&mut state, AppIntent::CurveClicked { curve: hidden })
        .expect("Klick");
    let curve = state.surface.curve(hidden).expect("Kurve vorhanden");
    assert_eq!(curve.opacity, 1.0, "Klick hebt die ausgeblendete Linie hervor");
    assert_eq!(state.ui.focused_curve, Some(hidden));
    assert!(!state.layers.is_visible(CelestialBody::Mars), "Legende bleibt aus");
}
