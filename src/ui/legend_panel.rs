//! Rechte Seitenleiste: Legende mit Sichtbarkeit pro Himmelskörper.

use crate::app::{AppIntent, AppState};
use crate::core::CelestialBodyCatalog;

/// Rendert die Legende und gibt erzeugte Events zurück.
pub fn render_legend_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("legend_panel")
        .default_width(260.0)
        .min_width(200.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Planets");
            ui.separator();

            for (body, info) in CelestialBodyCatalog::iter() {
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    let [r, g, b] = info.color;
                    ui.painter()
                        .rect_filled(rect, 2.0, egui::Color32::from_rgb(r, g, b));

                    let mut visible = state.layers.is_visible(body);
                    let response = ui
                        .checkbox(&mut visible, CelestialBodyCatalog::legend_label(body))
                        .on_hover_text(CelestialBodyCatalog::color_hex(body));
                    if response.changed() {
                        events.push(AppIntent::BodyVisibilityToggled { body, visible });
                    }
                });
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Select all").clicked() {
                    events.push(AppIntent::SelectAllBodiesRequested);
                }
                if ui.button("Select none").clicked() {
                    events.push(AppIntent::SelectNoBodiesRequested);
                }
            });
        });

    events
}
