//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::DraftEdited { draft } => vec![AppCommand::UpdateDraft { draft }],
        AppIntent::SubmitRequested => {
            if state.is_busy() {
                log::debug!("Submit während laufendem Geocoding: neuer, unabhängiger Versuch");
            }
            vec![AppCommand::ClearErrorMessage, AppCommand::SubmitDraft]
        }
        AppIntent::PlaceLookupCompleted { ticket, result } => {
            vec![AppCommand::ApplyPlaceLookup { ticket, result }]
        }
        AppIntent::LinesCompleted { ticket, result } => {
            vec![AppCommand::ApplyLineResult { ticket, result }]
        }
        AppIntent::DeleteSubmissionRequested { id } => vec![AppCommand::DeleteSubmission { id }],
        AppIntent::EditSubmissionRequested { id } => {
            vec![AppCommand::PrefillDraftFromSubmission { id }]
        }
        AppIntent::BodyVisibilityToggled { body, visible } => {
            vec![AppCommand::SetBodyVisibility { body, visible }]
        }
        AppIntent::SelectAllBodiesRequested => {
            vec![AppCommand::SetAllBodiesVisibility { visible: true }]
        }
        AppIntent::SelectNoBodiesRequested => {
            vec![AppCommand::SetAllBodiesVisibility { visible: false }]
        }
        AppIntent::CurveClicked { curve } => vec![AppCommand::FocusCurve { curve }],
        AppIntent::DismissErrorRequested => vec![AppCommand::ClearErrorMessage],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::MapPanned {
            delta_lat,
            delta_lon,
        } => vec![AppCommand::PanView {
            delta_lat,
            delta_lon,
        }],
        AppIntent::MapZoomed { factor } => vec![AppCommand::ZoomView { factor }],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
