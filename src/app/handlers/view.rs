//! Handler für den Kartenausschnitt.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt den Kartenausschnitt zurück.
pub fn reset_view(state: &mut AppState) {
    use_cases::view::reset_view(state);
}

/// Verschiebt den Kartenausschnitt.
pub fn pan(state: &mut AppState, delta_lat: f64, delta_lon: f64) {
    use_cases::view::pan(state, delta_lat, delta_lon);
}

/// Zoomt den Kartenausschnitt.
pub fn zoom(state: &mut AppState, factor: f64) {
    use_cases::view::zoom(state, factor);
}
