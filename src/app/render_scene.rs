//! Builder für Karten-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{MapScene, SceneCurve};

/// Baut eine MapScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> MapScene {
    let curves = state
        .surface
        .curves()
        .map(|c| SceneCurve {
            id: c.id,
            body: c.body,
            points: c.points.clone(),
            color: c.color,
            opacity: c.opacity,
            weight: c.weight,
            label: c.label.clone(),
        })
        .collect();

    MapScene {
        viewport: *state.surface.viewport(),
        curves,
        pick_radius_px: state.options.pick_radius_px,
    }
}
