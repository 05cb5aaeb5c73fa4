//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod display_surface;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod line_layer_store;
pub mod render_scene;
pub mod requests;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Submissions, Layer, Oberfläche, Formular).
pub mod state;
pub mod submission_registry;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use display_surface::{DisplaySurface, MapSurface};
pub use events::{AppCommand, AppIntent};
pub use line_layer_store::LineLayerStore;
pub use render_scene::build as build_map_scene;
pub use requests::{OutboundRequest, PendingRequest, RequestQueue, RequestTicket};
pub use state::{AppState, UiState};
pub use submission_registry::{SubmissionPhase, SubmissionRecord, SubmissionRegistry};
