//! Linke Seitenleiste: Eingabeformular, Fehlerbereich und Submission-Liste.

use super::submissions_panel::render_submission_list;
use crate::app::{AppIntent, AppState};

/// Rendert die linke Seitenleiste und gibt erzeugte Events zurück.
pub fn render_form_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("form_panel")
        .default_width(300.0)
        .min_width(240.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Birth data");
            ui.separator();

            render_form(ui, state, &mut events);
            render_error_slot(ui, state, &mut events);

            ui.separator();
            ui.heading("Submissions");
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    render_submission_list(ui, state, &mut events);
                });
        });

    events
}

fn render_form(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let mut draft = state.ui.draft.clone();
    let mut changed = false;

    egui::Grid::new("form_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            changed |= text_row(ui, "Name:", &mut draft.display_name, "");
            changed |= text_row(
                ui,
                "Birth date:",
                &mut draft.birth_datetime,
                "YYYY-MM-DDTHH:MM",
            );
            changed |= text_row(ui, "Latitude:", &mut draft.birth_lat, "e.g. 52.52");
            changed |= text_row(ui, "Longitude:", &mut draft.birth_lon, "e.g. 13.40");
            changed |= text_row(ui, "City:", &mut draft.birth_place, "optional");
        });

    if changed {
        events.push(AppIntent::DraftEdited { draft });
    }

    ui.add_space(4.0);
    let busy = state.is_busy();
    let label = if busy { "Loading..." } else { "Submit" };
    if ui.add_enabled(!busy, egui::Button::new(label)).clicked() {
        events.push(AppIntent::SubmitRequested);
    }
}

fn text_row(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) -> bool {
    ui.label(label);
    let changed = ui
        .add(egui::TextEdit::singleline(value).hint_text(hint))
        .changed();
    ui.end_row();
    changed
}

fn render_error_slot(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let Some(message) = &state.ui.error_message else {
        return;
    };
    ui.add_space(4.0);
    ui.horizontal_wrapped(|ui| {
        ui.colored_label(egui::Color32::from_rgb(220, 80, 80), message);
        if ui.small_button("✖").on_hover_text("Dismiss").clicked() {
            events.push(AppIntent::DismissErrorRequested);
        }
    });
}
