//! Use-Case-Funktionen für Legende und Linien-Hervorhebung.

use crate::app::AppState;
use crate::core::{CelestialBody, CurveId};

/// Blendet alle Linien eines Körpers ein oder aus.
///
/// Setzt dabei die Deckkraft direkt, eine aktive Hervorhebung endet.
pub fn set_body_visibility(state: &mut AppState, body: CelestialBody, visible: bool) {
    state.layers.set_visibility(&mut state.surface, body, visible);
    state.ui.focused_curve = None;
    log::debug!(
        "{} {}: {} Linien",
        body.display_name(),
        if visible { "eingeblendet" } else { "ausgeblendet" },
        state.layers.handles(body).len()
    );
}

/// Blendet die Linien aller Körper ein oder aus.
pub fn set_all_visibility(state: &mut AppState, visible: bool) {
    state.layers.set_all_visibility(&mut state.surface, visible);
    state.ui.focused_curve = None;
    log::debug!(
        "Alle Körper {}",
        if visible { "eingeblendet" } else { "ausgeblendet" }
    );
}

/// Hebt eine Linie hervor und dimmt alle übrigen.
pub fn focus_curve(state: &mut AppState, curve: CurveId) {
    if state
        .surface
        .focus_curve(curve, state.options.focus_dim_opacity)
    {
        state.ui.focused_curve = Some(curve);
    } else {
        log::warn!("Fokus: Kurve {:?} existiert nicht", curve);
    }
}
