//! Löschen und Bearbeiten gelisteter Submissions.

use crate::app::display_surface::DisplaySurface;
use crate::app::AppState;
use crate::core::SubmissionId;

/// Entfernt eine Submission aus der Liste.
///
/// Ihre Linien bleiben auf der Karte und in den Körper-Sammlungen, außer
/// `retract_on_delete` ist aktiv.
pub fn delete(state: &mut AppState, id: SubmissionId) {
    let Some(record) = state.submissions.remove(id) else {
        log::warn!("Löschen: Submission {} ist nicht gelistet", id);
        return;
    };

    if !state.options.retract_on_delete {
        log::info!(
            "Submission {} gelöscht, {} Linien bleiben auf der Karte",
            id,
            record.curves.len()
        );
        return;
    }

    if let Some(group) = record.group {
        state.surface.remove_group(group);
    }
    for (body, curve) in &record.curves {
        state.layers.retract(*body, *curve);
        if state.ui.focused_curve == Some(*curve) {
            state.ui.focused_curve = None;
        }
    }
    log::info!(
        "Submission {} samt {} Linien entfernt",
        id,
        record.curves.len()
    );
}

/// Kopiert die Felder einer Submission zurück ins Formular.
///
/// Der Datensatz selbst bleibt unverändert; erneutes Absenden erzeugt einen
/// neuen Eintrag.
pub fn prefill_draft(state: &mut AppState, id: SubmissionId) {
    let Some(record) = state.submissions.get(id) else {
        log::warn!("Bearbeiten: Submission {} ist nicht gelistet", id);
        return;
    };
    state.ui.draft = record.submission.to_draft();
    log::debug!("Formular mit Submission {} gefüllt", id);
}
