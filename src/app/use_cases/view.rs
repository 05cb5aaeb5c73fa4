//! Use-Case-Funktionen für den Kartenausschnitt.

use crate::app::AppState;

/// Setzt den Kartenausschnitt auf die Weltansicht zurück.
pub fn reset_view(state: &mut AppState) {
    state.surface.viewport_mut().reset();
}

/// Verschiebt den Kartenausschnitt um ein Delta in Grad.
pub fn pan(state: &mut AppState, delta_lat: f64, delta_lon: f64) {
    state.surface.viewport_mut().pan(delta_lat, delta_lon);
}

/// Zoomt den Kartenausschnitt um einen Faktor.
pub fn zoom(state: &mut AppState, factor: f64) {
    state.surface.viewport_mut().zoom_by(factor);
}
