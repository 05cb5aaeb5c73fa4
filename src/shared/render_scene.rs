//! Render-Szene als expliziter Übergabevertrag zwischen App und Karten-Canvas.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use crate::core::{CelestialBody, CurveId, GeoPoint, MapViewport};
use glam::DVec2;
use std::sync::Arc;

/// Eine zu zeichnende Kurve.
#[derive(Debug, Clone)]
pub struct SceneCurve {
    pub id: CurveId,
    pub body: CelestialBody,
    /// Geglättete Punkte (geteilt mit dem CurveHandle)
    pub points: Arc<[GeoPoint]>,
    pub color: [u8; 3],
    pub opacity: f32,
    pub weight: f32,
    pub label: String,
}

/// Read-only Daten für einen Frame.
#[derive(Debug, Clone)]
pub struct MapScene {
    /// Kartenausschnitt für diesen Frame
    pub viewport: MapViewport,
    /// Kurven in Zeichenreihenfolge (zuerst hinzugefügte zuerst)
    pub curves: Vec<SceneCurve>,
    /// Hover-/Klick-Toleranz in Pixeln
    pub pick_radius_px: f32,
}

impl MapScene {
    /// Gibt zurück, ob mindestens eine Kurve vorhanden ist.
    pub fn has_curves(&self) -> bool {
        !self.curves.is_empty()
    }

    /// Sucht die Kurve mit dem kleinsten Screen-Abstand zu `pointer`.
    ///
    /// Ausgeblendete Kurven (Deckkraft 0) bleiben anklickbar. Bei Gleichstand
    /// gewinnt die zuletzt gezeichnete (oberste) Kurve.
    pub fn pick_curve(&self, pointer: DVec2, screen_size: DVec2) -> Option<&SceneCurve> {
        let radius = self.pick_radius_px as f64;
        let mut best: Option<(&SceneCurve, f64)> = None;

        for curve in &self.curves {
            let Some(dist) = self.screen_distance(curve, pointer, screen_size) else {
                continue;
            };
            if dist > radius {
                continue;
            }
            if best.is_none_or(|(_, d)| dist <= d) {
                best = Some((curve, dist));
            }
        }

        best.map(|(curve, _)| curve)
    }

    fn screen_distance(&self, curve: &SceneCurve, pointer: DVec2, screen_size: DVec2) -> Option<f64> {
        let projected: Vec<DVec2> = curve
            .points
            .iter()
            .filter(|p| p.lat.is_finite() && p.lon.is_finite())
            .map(|p| self.viewport.geo_to_screen(*p, screen_size))
            .collect();

        match projected.as_slice() {
            [] => None,
            [single] => Some(single.distance(pointer)),
            _ => projected
                .windows(2)
                .map(|w| distance_to_segment(pointer, w[0], w[1]))
                .min_by(|a, b| a.total_cmp(b)),
        }
    }
}

/// Abstand eines Punkts zu einer Strecke.
pub fn distance_to_segment(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f64::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
