//! Application State: zentrale Datenhaltung.

use super::display_surface::MapSurface;
use super::line_layer_store::LineLayerStore;
use super::requests::RequestQueue;
use super::submission_registry::SubmissionRegistry;
use super::CommandLog;
use crate::core::{CurveId, SubmissionDraft};
use crate::shared::AppOptions;
use std::path::PathBuf;

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Aktuelle Formularwerte
    pub draft: SubmissionDraft,
    /// Gemeinsamer, transienter Fehlerbereich (letzter Schreiber gewinnt)
    pub error_message: Option<String>,
    /// Zuletzt angeklickte Kurve (hervorgehoben)
    pub focused_curve: Option<CurveId>,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (leeres Formular, kein Fehler).
    pub fn new() -> Self {
        Self::default()
    }

    /// Schreibt eine Meldung in den Fehlerbereich und loggt sie.
    pub fn show_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{}", message);
        self.error_message = Some(message);
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Gelistete Submissions dieser Session
    pub submissions: SubmissionRegistry,
    /// Kurven-Handles pro Himmelskörper + Sichtbarkeit
    pub layers: LineLayerStore,
    /// Kartenoberfläche mit allen gezeichneten Kurven
    pub surface: MapSurface,
    /// Ausstehende Netzwerk-Requests
    pub requests: RequestQueue,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen
    pub options: AppOptions,
    /// Speicherort der Optionen (None = nicht persistieren)
    pub options_path: Option<PathBuf>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(AppOptions::default())
    }

    /// Erstellt einen leeren App-State mit den angegebenen Optionen.
    pub fn with_options(options: AppOptions) -> Self {
        Self {
            submissions: SubmissionRegistry::new(),
            layers: LineLayerStore::new(),
            surface: MapSurface::new(),
            requests: RequestQueue::new(),
            ui: UiState::new(),
            options,
            options_path: None,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// `true` solange der zuletzt abgeschickte Formular-Versuch läuft.
    pub fn is_busy(&self) -> bool {
        self.requests.is_busy()
    }

    /// Anzahl gelisteter Submissions (für UI-Anzeige)
    pub fn submission_count(&self) -> usize {
        self.submissions.len()
    }

    /// Anzahl gezeichneter Kurven (für UI-Anzeige)
    pub fn curve_count(&self) -> usize {
        self.surface.curve_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
