//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::MapScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Formular & Lifecycle ===
            AppCommand::UpdateDraft { draft } => handlers::submission::update_draft(state, draft),
            AppCommand::ClearErrorMessage => handlers::dialog::clear_error_message(state),
            AppCommand::SubmitDraft => handlers::submission::submit(state),
            AppCommand::ApplyPlaceLookup { ticket, result } => {
                handlers::submission::apply_place_lookup(state, ticket, result)
            }
            AppCommand::ApplyLineResult { ticket, result } => {
                handlers::submission::apply_line_result(state, ticket, result)
            }
            AppCommand::DeleteSubmission { id } => handlers::submission::delete(state, id),
            AppCommand::PrefillDraftFromSubmission { id } => {
                handlers::submission::prefill_draft(state, id)
            }

            // === Legende & Fokus ===
            AppCommand::SetBodyVisibility { body, visible } => {
                handlers::visibility::set_body_visibility(state, body, visible)
            }
            AppCommand::SetAllBodiesVisibility { visible } => {
                handlers::visibility::set_all_visibility(state, visible)
            }
            AppCommand::FocusCurve { curve } => handlers::visibility::focus_curve(state, curve),

            // === Kartenausschnitt ===
            AppCommand::ResetView => handlers::view::reset_view(state),
            AppCommand::PanView {
                delta_lat,
                delta_lon,
            } => handlers::view::pan(state, delta_lat, delta_lon),
            AppCommand::ZoomView { factor } => handlers::view::zoom(state, factor),

            // === Dialoge & Anwendung ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, *options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Karten-Szene für den aktuellen Frame.
    pub fn build_map_scene(&self, state: &AppState) -> MapScene {
        render_scene::build(state)
    }
}
