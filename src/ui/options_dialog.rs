//! Optionen-Dialog für Dienste, Glättung, Darstellung und Lifecycle.

use crate::app::{AppIntent, AppState};
use crate::shared::SEGMENTS_PER_INTERVAL_MAX;

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Options")
        .collapsible(true)
        .resizable(true)
        .default_width(380.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // ── Dienste ─────────────────────────────────────────
            ui.collapsing("Services", |ui| {
                changed |= text_edit(ui, "Line API:", &mut opts.line_api_url);
                changed |= text_edit(ui, "Geocoder:", &mut opts.geocoder_url);
                changed |= text_edit(ui, "User-Agent:", &mut opts.user_agent);
                ui.weak("Service changes apply to new requests.");
            });

            // ── Darstellung ─────────────────────────────────────
            ui.collapsing("Lines", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Segments per interval:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.segments_per_interval)
                                .range(1..=SEGMENTS_PER_INTERVAL_MAX),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Line weight (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.line_weight)
                                .range(0.1..=10.0)
                                .speed(0.1),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Dimmed opacity:");
                    changed |= ui
                        .add(egui::Slider::new(&mut opts.focus_dim_opacity, 0.0..=1.0))
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Pick radius (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.pick_radius_px)
                                .range(1.0..=30.0)
                                .speed(0.5),
                        )
                        .changed();
                });
                changed |= ui
                    .checkbox(&mut opts.fit_view_on_render, "Fit view to new lines")
                    .changed();
            });

            // ── Lifecycle ───────────────────────────────────────
            ui.collapsing("Submissions", |ui| {
                changed |= ui
                    .checkbox(
                        &mut opts.retract_on_delete,
                        "Deleting a submission removes its lines",
                    )
                    .changed();
                changed |= ui
                    .checkbox(
                        &mut opts.new_curves_follow_visibility,
                        "New lines follow the legend checkboxes",
                    )
                    .changed();
            });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Defaults").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Close").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden
    if changed {
        events.push(AppIntent::OptionsChanged {
            options: Box::new(opts),
        });
    }

    events
}

fn text_edit(ui: &mut egui::Ui, label: &str, value: &mut String) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.text_edit_singleline(value).changed()
    })
    .inner
}
