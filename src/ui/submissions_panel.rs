//! Liste aller Submissions dieser Session.

use crate::app::{AppIntent, AppState, SubmissionPhase};

/// Rendert die Submission-Liste in den übergebenen Bereich.
pub fn render_submission_list(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    if state.submissions.is_empty() {
        ui.weak("No submissions yet");
        return;
    }

    for record in state.submissions.iter() {
        let id = record.submission.id;
        ui.horizontal_wrapped(|ui| {
            let marker = match record.phase {
                SubmissionPhase::Requesting => "⏳",
                SubmissionPhase::Rendered => "●",
                SubmissionPhase::Failed => "⚠",
            };
            ui.label(marker);
            ui.label(record.submission.list_label());
            if ui.small_button("Edit").clicked() {
                events.push(AppIntent::EditSubmissionRequested { id });
            }
            if ui.small_button("Delete").clicked() {
                events.push(AppIntent::DeleteSubmissionRequested { id });
            }
        });
    }
}
