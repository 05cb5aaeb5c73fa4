//! Geographischer Punkt (Breite/Länge in Grad).

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Punkt auf der Karte in Dezimalgrad.
///
/// Keine Normalisierung und kein Wraparound: Werte werden so durchgereicht,
/// wie sie vom Linien-Backend geliefert werden.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad
    pub lat: f64,
    /// Längengrad
    pub lon: f64,
}

impl GeoPoint {
    /// Erstellt einen Punkt aus Breite und Länge.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Planare Sicht: `x = lat`, `y = lon`.
    #[inline]
    pub fn as_dvec2(self) -> DVec2 {
        DVec2::new(self.lat, self.lon)
    }

    /// Gegenstück zu [`GeoPoint::as_dvec2`].
    #[inline]
    pub fn from_dvec2(v: DVec2) -> Self {
        Self { lat: v.x, lon: v.y }
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

/// Achsenparalleles Rechteck um eine Punktmenge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    /// Südwest-Ecke (kleinste Breite/Länge)
    pub min: GeoPoint,
    /// Nordost-Ecke (größte Breite/Länge)
    pub max: GeoPoint,
}

impl GeoBounds {
    /// Bounding-Box aller endlichen Punkte; `None` wenn keiner vorhanden ist.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a GeoPoint>) -> Option<Self> {
        let mut bounds: Option<Self> = None;
        for p in points {
            if !p.lat.is_finite() || !p.lon.is_finite() {
                continue;
            }
            bounds = Some(match bounds {
                None => Self { min: *p, max: *p },
                Some(b) => Self {
                    min: GeoPoint::new(b.min.lat.min(p.lat), b.min.lon.min(p.lon)),
                    max: GeoPoint::new(b.max.lat.max(p.lat), b.max.lon.max(p.lon)),
                },
            });
        }
        bounds
    }

    /// Mittelpunkt der Box.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::from_dvec2((self.min.as_dvec2() + self.max.as_dvec2()) * 0.5)
    }

    /// Ausdehnung als (Breite, Länge) in Grad.
    pub fn extent(&self) -> DVec2 {
        self.max.as_dvec2() - self.min.as_dvec2()
    }
}
