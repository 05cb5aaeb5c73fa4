//! Geteilte Typen und Funktionen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;
pub mod spline_geometry;

pub use options::AppOptions;
pub use options::{FOCUS_DIM_OPACITY, SEGMENTS_PER_INTERVAL, SEGMENTS_PER_INTERVAL_MAX};
pub use render_scene::{distance_to_segment, MapScene, SceneCurve};
pub use spline_geometry::smooth_line;
