//! Astro Lines Map Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod net;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DisplaySurface, LineLayerStore, MapSurface,
    OutboundRequest, RequestTicket, SubmissionRegistry, UiState,
};
pub use core::{
    CelestialBody, CelestialBodyCatalog, CurveHandle, CurveId, GeoPoint, LineRequest,
    LineResponse, PlaceCandidate, ServiceError, Submission, SubmissionDraft, SubmissionError,
    SubmissionId,
};
pub use net::{HttpLineClient, LineComputation, NetworkDispatcher, NominatimClient, PlaceLookup};
pub use shared::{smooth_line, AppOptions, MapScene};
