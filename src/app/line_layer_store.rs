//! Index der gerenderten Kurven pro Himmelskörper mit Sichtbarkeits-Flag.
//!
//! Die Kurven selbst gehören ihrer Layer-Gruppe auf der Oberfläche; der Store
//! hält nur IDs (Rückverweise) und schaltet die Sichtbarkeit pro Körper.

use super::display_surface::DisplaySurface;
use crate::core::{CelestialBody, CurveId};
use indexmap::IndexMap;

/// Kurven und Legenden-Zustand eines Körpers.
#[derive(Debug, Clone)]
struct BodyLayer {
    handles: Vec<CurveId>,
    visible: bool,
}

/// Pro Körper die aktuell registrierten Kurven und ihr gemeinsamer Sichtbarkeitszustand.
#[derive(Debug, Clone)]
pub struct LineLayerStore {
    layers: IndexMap<CelestialBody, BodyLayer>,
    next_curve_id: u64,
}

impl Default for LineLayerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LineLayerStore {
    /// Leerer Store, alle Körper sichtbar (Legende komplett angehakt).
    pub fn new() -> Self {
        let layers = CelestialBody::ALL
            .into_iter()
            .map(|body| {
                (
                    body,
                    BodyLayer {
                        handles: Vec::new(),
                        visible: true,
                    },
                )
            })
            .collect();
        Self {
            layers,
            next_curve_id: 0,
        }
    }

    /// Vergibt eine neue, session-weit eindeutige Kurven-ID.
    pub fn allocate_curve_id(&mut self) -> CurveId {
        let id = CurveId(self.next_curve_id);
        self.next_curve_id += 1;
        id
    }

    /// Hängt eine Kurve an die Sammlung des Körpers an.
    ///
    /// Das Sichtbarkeits-Flag des Körpers bleibt unverändert, die Deckkraft der
    /// Kurve wird nicht angefasst.
    pub fn register(&mut self, body: CelestialBody, handle: CurveId) {
        self.layer_mut(body).handles.push(handle);
    }

    /// Entfernt eine Kurve aus der Sammlung des Körpers. `false` wenn unbekannt.
    pub fn retract(&mut self, body: CelestialBody, handle: CurveId) -> bool {
        let handles = &mut self.layer_mut(body).handles;
        let before = handles.len();
        handles.retain(|h| *h != handle);
        handles.len() != before
    }

    /// Setzt die Deckkraft aller Kurven eines Körpers auf 1 bzw. 0.
    ///
    /// Andere Körper und die Mitgliedschaft bleiben unverändert.
    pub fn set_visibility<S: DisplaySurface + ?Sized>(
        &mut self,
        surface: &mut S,
        body: CelestialBody,
        visible: bool,
    ) {
        let layer = self.layer_mut(body);
        layer.visible = visible;
        let opacity = if visible { 1.0 } else { 0.0 };
        for handle in &layer.handles {
            surface.set_curve_opacity(*handle, opacity);
        }
        log::debug!(
            "{}: {} Kurven {}",
            body,
            layer.handles.len(),
            if visible { "eingeblendet" } else { "ausgeblendet" }
        );
    }

    /// Wendet [`LineLayerStore::set_visibility`] auf jeden Körper des Katalogs an.
    pub fn set_all_visibility<S: DisplaySurface + ?Sized>(&mut self, surface: &mut S, visible: bool) {
        for body in CelestialBody::ALL {
            self.set_visibility(surface, body, visible);
        }
    }

    /// Legenden-Zustand eines Körpers.
    pub fn is_visible(&self, body: CelestialBody) -> bool {
        self.layers.get(&body).is_some_and(|l| l.visible)
    }

    /// Registrierte Kurven eines Körpers in Registrierungsreihenfolge.
    pub fn handles(&self, body: CelestialBody) -> &[CurveId] {
        self.layers
            .get(&body)
            .map(|l| l.handles.as_slice())
            .unwrap_or(&[])
    }

    /// Gesamtzahl registrierter Kurven über alle Körper.
    pub fn total_handles(&self) -> usize {
        self.layers.values().map(|l| l.handles.len()).sum()
    }

    fn layer_mut(&mut self, body: CelestialBody) -> &mut BodyLayer {
        self.layers.entry(body).or_insert_with(|| BodyLayer {
            handles: Vec::new(),
            visible: true,
        })
    }
}
