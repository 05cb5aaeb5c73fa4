//! Gerenderte Kurven (CurveHandle) und ihre Gruppierung pro Submission.

use super::{CelestialBody, CelestialBodyCatalog, GeoPoint, Submission, SubmissionId};
use std::sync::Arc;

/// ID einer Kurve auf der Kartenoberfläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurveId(pub u64);

/// ID einer Layer-Gruppe auf der Kartenoberfläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u64);

/// Darstellbare Kurve: geglättete Linie eines Körpers für eine Submission.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveHandle {
    pub id: CurveId,
    pub body: CelestialBody,
    /// Besitzende Submission (kann nach dem Löschen verwaist sein)
    pub submission_id: SubmissionId,
    /// Geglättete Punkte (Arc für O(1)-Clone in die Render-Szene)
    pub points: Arc<[GeoPoint]>,
    pub color: [u8; 3],
    /// Linienstärke in Pixeln
    pub weight: f32,
    /// 0.0 = unsichtbar, 1.0 = voll sichtbar
    pub opacity: f32,
    /// Hover-Text
    pub label: String,
}

impl CurveHandle {
    /// Baut eine Kurve im Katalog-Stil des Körpers, voll sichtbar.
    pub fn styled(
        id: CurveId,
        body: CelestialBody,
        submission: &Submission,
        points: Vec<GeoPoint>,
        weight: f32,
    ) -> Self {
        Self {
            id,
            body,
            submission_id: submission.id,
            points: points.into(),
            color: CelestialBodyCatalog::info(body).color,
            weight,
            opacity: 1.0,
            label: hover_label(&submission.display_name, body),
        }
    }
}

/// Tooltip-Text: "Name: Sun - Vitality, leadership, self-expression".
pub fn hover_label(display_name: &str, body: CelestialBody) -> String {
    format!(
        "{}: {} - {}",
        display_name,
        body.display_name(),
        CelestialBodyCatalog::info(body).influence
    )
}

/// Alle Kurven einer Submission (höchstens eine pro Körper).
#[derive(Debug, Clone, PartialEq)]
pub struct LayerGroup {
    pub submission_id: SubmissionId,
    pub curves: Vec<CurveHandle>,
}

impl LayerGroup {
    /// Leere Gruppe für eine Submission.
    pub fn new(submission_id: SubmissionId) -> Self {
        Self {
            submission_id,
            curves: Vec::new(),
        }
    }

    /// Fügt eine Kurve hinzu. Eine vorhandene Kurve desselben Körpers wird ersetzt.
    pub fn push(&mut self, curve: CurveHandle) {
        if let Some(existing) = self.curves.iter_mut().find(|c| c.body == curve.body) {
            log::warn!(
                "Doppelte Linie für {} in Submission {} ersetzt",
                curve.body,
                self.submission_id
            );
            *existing = curve;
        } else {
            self.curves.push(curve);
        }
    }

    /// (Körper, Kurven-ID) aller Kurven in Einfügereihenfolge.
    pub fn members(&self) -> Vec<(CelestialBody, CurveId)> {
        self.curves.iter().map(|c| (c.body, c.id)).collect()
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}
