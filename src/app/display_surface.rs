//! Kartenoberfläche: Fähigkeiten, die der Core zum Darstellen von Kurven braucht.
//!
//! Der Core spricht ausschließlich über [`DisplaySurface`] mit der Oberfläche.
//! [`MapSurface`] ist die In-Memory-Implementierung, aus der der egui-Canvas
//! pro Frame seine Szene baut.

use crate::core::{CurveHandle, CurveId, GeoBounds, GroupId, LayerGroup, MapViewport, SubmissionId};
use indexmap::IndexMap;

/// Abstrakte Fähigkeiten einer Kartenoberfläche.
pub trait DisplaySurface {
    /// Fügt alle Kurven einer Gruppe gemeinsam als sichtbares Overlay hinzu.
    fn add_group(&mut self, group: LayerGroup) -> GroupId;

    /// Entfernt eine Gruppe samt ihrer Kurven. `false` wenn unbekannt.
    fn remove_group(&mut self, group: GroupId) -> bool;

    /// Setzt die Deckkraft einer Kurve (0.0–1.0). Unbekannte IDs werden ignoriert.
    fn set_curve_opacity(&mut self, curve: CurveId, opacity: f32);

    /// Passt die Ansicht auf die angegebenen Kurven an.
    fn fit_to(&mut self, curves: &[CurveId]);
}

/// In-Memory-Kartenoberfläche.
#[derive(Debug, Clone, Default)]
pub struct MapSurface {
    curves: IndexMap<CurveId, CurveHandle>,
    groups: IndexMap<GroupId, Vec<CurveId>>,
    next_group_id: u64,
    viewport: MapViewport,
}

impl MapSurface {
    /// Leere Oberfläche mit Weltansicht.
    pub fn new() -> Self {
        Self::default()
    }

    /// Kurve per ID.
    pub fn curve(&self, id: CurveId) -> Option<&CurveHandle> {
        self.curves.get(&id)
    }

    /// Alle Kurven in Zeichenreihenfolge.
    pub fn curves(&self) -> impl Iterator<Item = &CurveHandle> {
        self.curves.values()
    }

    /// Kurven-IDs einer Gruppe.
    pub fn group_curves(&self, group: GroupId) -> Option<&[CurveId]> {
        self.groups.get(&group).map(Vec::as_slice)
    }

    /// Alle Kurven, die einer Submission zugeordnet sind (auch verwaiste).
    pub fn curves_of_submission(&self, id: SubmissionId) -> impl Iterator<Item = &CurveHandle> {
        self.curves.values().filter(move |c| c.submission_id == id)
    }

    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Aktueller Kartenausschnitt.
    pub fn viewport(&self) -> &MapViewport {
        &self.viewport
    }

    /// Mutabler Kartenausschnitt (Reset, Host-Anpassungen).
    pub fn viewport_mut(&mut self) -> &mut MapViewport {
        &mut self.viewport
    }

    /// Hebt eine Kurve hervor: sie wird voll sichtbar, alle anderen gedimmt.
    ///
    /// Betrifft jede Kurve der Oberfläche, auch ausgeblendete und verwaiste.
    /// `false` wenn die Kurve unbekannt ist (dann bleibt alles unverändert).
    pub fn focus_curve(&mut self, focus: CurveId, dim_opacity: f32) -> bool {
        if !self.curves.contains_key(&focus) {
            return false;
        }
        for (id, curve) in self.curves.iter_mut() {
            curve.opacity = if *id == focus { 1.0 } else { dim_opacity };
        }
        true
    }
}

impl DisplaySurface for MapSurface {
    fn add_group(&mut self, group: LayerGroup) -> GroupId {
        let group_id = GroupId(self.next_group_id);
        self.next_group_id += 1;

        let mut ids = Vec::with_capacity(group.curves.len());
        for curve in group.curves {
            ids.push(curve.id);
            self.curves.insert(curve.id, curve);
        }
        log::debug!(
            "Gruppe {:?} mit {} Kurven hinzugefügt (Submission {})",
            group_id,
            ids.len(),
            group.submission_id
        );
        self.groups.insert(group_id, ids);
        group_id
    }

    fn remove_group(&mut self, group: GroupId) -> bool {
        let Some(ids) = self.groups.shift_remove(&group) else {
            return false;
        };
        for id in &ids {
            self.curves.shift_remove(id);
        }
        log::debug!("Gruppe {:?} mit {} Kurven entfernt", group, ids.len());
        true
    }

    fn set_curve_opacity(&mut self, curve: CurveId, opacity: f32) {
        if let Some(handle) = self.curves.get_mut(&curve) {
            handle.opacity = opacity.clamp(0.0, 1.0);
        }
    }

    fn fit_to(&mut self, curves: &[CurveId]) {
        let points = curves
            .iter()
            .filter_map(|id| self.curves.get(id))
            .flat_map(|c| c.points.iter());
        if let Some(bounds) = GeoBounds::from_points(points) {
            self.viewport.fit_bounds(&bounds);
        }
    }
}
