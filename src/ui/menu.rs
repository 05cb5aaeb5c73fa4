//! Top-Menü (File, View).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Options...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset view").clicked() {
                    events.push(AppIntent::ResetViewRequested);
                    ui.close();
                }

                ui.separator();

                if ui
                    .add_enabled(state.curve_count() > 0, egui::Button::new("Show all lines"))
                    .clicked()
                {
                    events.push(AppIntent::SelectAllBodiesRequested);
                    ui.close();
                }
                if ui
                    .add_enabled(state.curve_count() > 0, egui::Button::new("Hide all lines"))
                    .clicked()
                {
                    events.push(AppIntent::SelectNoBodiesRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
