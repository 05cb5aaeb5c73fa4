use super::support::*;
use astro_lines_map::{AppController, AppIntent, AppState, CelestialBody};

fn opacities(state: &AppState, body: CelestialBody) -> Vec<f32> {
    state
        .layers
        .handles(body)
        .iter()
        .filter_map(|id| state.surface.curve(*id))
        .map(|c| c.opacity)
        .collect()
}

#[test]
fn toggle_body_hides_and_restores_only_that_body() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    render_direct(&mut controller, &mut state, "A");
    render_direct(&mut controller, &mut state, "B");

    controller
        .handle_intent(
            &mut state,
            AppIntent::BodyVisibilityToggled {
                body: CelestialBody::Venus,
                visible: false,
            },
        )
        .expect("Toggle");

    assert_eq!(opacities(&state, CelestialBody::Venus), vec![0.0, 0.0]);
    assert_eq!(opacities(&state, CelestialBody::Mars), vec![1.0, 1.0]);
    assert!(!state.layers.is_visible(CelestialBody::Venus));
    assert_eq!(state.layers.handles(CelestialBody::Venus).len(), 2);

    controller
        .handle_intent(
            &mut state,
            AppIntent::BodyVisibilityToggled {
                body: CelestialBody::Venus,
                visible: true,
            },
        )
        .expect("Toggle");
    assert_eq!(opacities(&state, CelestialBody::Venus), vec![1.0, 1.0]);
}

#[test]
fn select_none_then_all_keeps_collections() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    render_direct(&mut controller, &mut state, "A");

    controller
        .handle_intent(&mut state, AppIntent::SelectNoBodiesRequested)
        .expect("Select none");
    assert!(state.surface.curves().all(|c| c.opacity == 0.0));
    assert!(CelestialBody::ALL
        .into_iter()
        .all(|b| !state.layers.is_visible(b)));
    assert_eq!(state.layers.total_handles(), 9);

    controller
        .handle_intent(&mut state, AppIntent::SelectAllBodiesRequested)
        .expect("Select all");
    assert!(state.surface.curves().all(|c| c.opacity == 1.0));
}

#[test]
fn new_curves_ignore_unchecked_body_by_default() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::BodyVisibilityToggled {
                body: CelestialBody::Moon,
                visible: false,
            },
        )
        .expect("Toggle");
    render_direct(&mut controller, &mut state, "A");

    assert_eq!(opacities(&state, CelestialBody::Moon), vec![1.0]);
    assert!(!state.layers.is_visible(CelestialBody::Moon), "Checkbox bleibt aus");
}

#[test]
fn new_curves_follow_unchecked_body_with_option() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.options.new_curves_follow_visibility = true;

    controller
        .handle_intent(
            &mut state,
            AppIntent::BodyVisibilityToggled {
                body: CelestialBody::Moon,
                visible: false,
            },
        )
        .expect("Toggle");
    render_direct(&mut controller, &mut state, "A");

    assert_eq!(opacities(&state, CelestialBody::Moon), vec![0.0]);
    assert_eq!(opacities(&state, CelestialBody::Sun), vec![1.0]);
}
