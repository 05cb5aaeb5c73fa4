//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::AppOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: AppOptions) -> anyhow::Result<()> {
    state.options = options.sanitized();
    persist_options(state)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = AppOptions::default();
    persist_options(state)
}

/// Leert den transienten Fehlerbereich.
pub fn clear_error_message(state: &mut AppState) {
    state.ui.error_message = None;
}

fn persist_options(state: &AppState) -> anyhow::Result<()> {
    match &state.options_path {
        Some(path) => state.options.save_to_file(path),
        None => Ok(()),
    }
}
