//! Handler für Legende und Linien-Fokus.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{CelestialBody, CurveId};

/// Setzt die Sichtbarkeit eines Körpers.
pub fn set_body_visibility(state: &mut AppState, body: CelestialBody, visible: bool) {
    use_cases::visibility::set_body_visibility(state, body, visible);
}

/// Setzt die Sichtbarkeit aller Körper.
pub fn set_all_visibility(state: &mut AppState, visible: bool) {
    use_cases::visibility::set_all_visibility(state, visible);
}

/// Hebt eine Kurve hervor.
pub fn focus_curve(state: &mut AppState, curve: CurveId) {
    use_cases::visibility::focus_curve(state, curve);
}
