//! Core-Domänentypen: Geo-Punkte, Himmelskörper, Submissions, Kurven, Wire-Formate.

pub mod celestial_body;
pub mod curve;
pub mod error;
pub mod geo_point;
pub mod map_viewport;
pub mod submission;
pub mod wire;

pub use celestial_body::{BodyInfo, CelestialBody, CelestialBodyCatalog};
pub use curve::{hover_label, CurveHandle, CurveId, GroupId, LayerGroup};
pub use error::{RequestStage, ServiceError, SubmissionError};
pub use geo_point::{GeoBounds, GeoPoint};
pub use map_viewport::MapViewport;
pub use submission::{DraftLocation, Submission, SubmissionDraft, SubmissionId, ValidatedDraft};
pub use wire::{BodyLineData, LineRequest, LineResponse, PlaceCandidate};
