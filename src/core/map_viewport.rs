//! Kartenausschnitt mit äquirektangulärer Projektion.

use super::{GeoBounds, GeoPoint};
use glam::DVec2;

/// Sichtbarer Kartenausschnitt.
///
/// Plattkarte: ein Grad Breite und ein Grad Länge sind gleich viele Pixel.
/// Bei Zoom 1.0 passen 360° Länge genau in die Viewport-Breite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    /// Kartenmittelpunkt
    pub center: GeoPoint,
    /// Zoom-Faktor (1.0 = ganze Welt)
    pub zoom: f64,
}

impl Default for MapViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl MapViewport {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f64 = 1.0;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f64 = 64.0;
    /// Rand um eingepasste Kurven (Anteil der Ausdehnung).
    const FIT_PADDING: f64 = 0.1;

    /// Weltansicht, zentriert auf (0, 0).
    pub fn new() -> Self {
        Self {
            center: GeoPoint::new(0.0, 0.0),
            zoom: Self::ZOOM_MIN,
        }
    }

    /// Grad pro Pixel bei gegebener Viewport-Breite.
    pub fn degrees_per_pixel(&self, screen_size: DVec2) -> f64 {
        360.0 / (self.zoom * screen_size.x.max(1.0))
    }

    /// Geo → Screen (Ursprung oben links, y nach unten).
    pub fn geo_to_screen(&self, point: GeoPoint, screen_size: DVec2) -> DVec2 {
        let dpp = self.degrees_per_pixel(screen_size);
        DVec2::new(
            (point.lon - self.center.lon) / dpp + screen_size.x * 0.5,
            (self.center.lat - point.lat) / dpp + screen_size.y * 0.5,
        )
    }

    /// Screen → Geo, Umkehrung von [`MapViewport::geo_to_screen`].
    pub fn screen_to_geo(&self, screen: DVec2, screen_size: DVec2) -> GeoPoint {
        let dpp = self.degrees_per_pixel(screen_size);
        GeoPoint::new(
            self.center.lat - (screen.y - screen_size.y * 0.5) * dpp,
            self.center.lon + (screen.x - screen_size.x * 0.5) * dpp,
        )
    }

    /// Passt den Ausschnitt so an, dass `bounds` (mit Rand) sichtbar ist.
    ///
    /// Das Seitenverhältnis des Viewports ist hier unbekannt; angenommen wird
    /// die Weltkarte im Verhältnis 2:1.
    pub fn fit_bounds(&mut self, bounds: &GeoBounds) {
        let extent = bounds.extent() * (1.0 + Self::FIT_PADDING);
        let zoom_lon = if extent.y > 0.0 { 360.0 / extent.y } else { Self::ZOOM_MAX };
        let zoom_lat = if extent.x > 0.0 { 180.0 / extent.x } else { Self::ZOOM_MAX };
        self.center = bounds.center();
        self.zoom = zoom_lon.min(zoom_lat).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Verschiebt den Mittelpunkt um ein Delta in Grad.
    pub fn pan(&mut self, delta_lat: f64, delta_lon: f64) {
        self.center.lat += delta_lat;
        self.center.lon += delta_lon;
    }

    /// Multipliziert den Zoom, begrenzt auf [`Self::ZOOM_MIN`]..[`Self::ZOOM_MAX`].
    pub fn zoom_by(&mut self, factor: f64) {
        if factor.is_finite() && factor > 0.0 {
            self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
        }
    }

    /// Zurück auf die Weltansicht.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
