//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Submissions: {} | Lines: {}",
                state.submission_count(),
                state.curve_count()
            ));

            ui.separator();

            let in_flight = state.requests.in_flight_count();
            if in_flight > 0 {
                ui.spinner();
                ui.label(format!("Requests pending: {}", in_flight));
            } else {
                ui.label("Idle");
            }

            ui.separator();

            let viewport = state.surface.viewport();
            ui.label(format!(
                "Zoom: {:.2}x | Center: ({:.2}, {:.2})",
                viewport.zoom, viewport.center.lat, viewport.center.lon
            ));

            if let Some(curve) = state
                .ui
                .focused_curve
                .and_then(|id| state.surface.curve(id))
            {
                ui.separator();
                ui.label(format!("Focused: {}", curve.label));
            }
        });
    });
}
