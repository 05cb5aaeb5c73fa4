//! Karten-Canvas: zeichnet die MapScene und übersetzt Maus-Eingaben in Intents.

use crate::app::AppIntent;
use crate::core::GeoPoint;
use crate::shared::{MapScene, SceneCurve};
use glam::DVec2;

/// Zoom-Faktor pro Scroll-Schritt.
const SCROLL_ZOOM_STEP: f64 = 1.2;
/// Abstand der Gradnetz-Linien in Grad.
const GRATICULE_STEP_DEG: i32 = 30;

/// Rendert die Karte in den verfügbaren Bereich und gibt erzeugte Events zurück.
pub fn render_map_canvas(ui: &mut egui::Ui, scene: &MapScene) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (rect, response) =
        ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
    let size = DVec2::new(rect.width() as f64, rect.height() as f64);
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(18, 24, 38));
    paint_graticule(&painter, rect, scene, size);

    let hovered = response
        .hover_pos()
        .and_then(|pos| scene.pick_curve(to_local(pos, rect), size));

    for curve in &scene.curves {
        let highlight = hovered.is_some_and(|h| h.id == curve.id);
        paint_curve(&painter, rect, scene, size, curve, highlight);
    }

    if !scene.has_curves() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Enter birth data to draw rising lines",
            egui::FontId::proportional(18.0),
            egui::Color32::from_gray(160),
        );
    }

    if response.clicked() {
        if let Some(curve) = response
            .interact_pointer_pos()
            .and_then(|pos| scene.pick_curve(to_local(pos, rect), size))
        {
            events.push(AppIntent::CurveClicked { curve: curve.id });
        }
    }

    if response.dragged() {
        let delta = response.drag_delta();
        let dpp = scene.viewport.degrees_per_pixel(size);
        events.push(AppIntent::MapPanned {
            delta_lat: delta.y as f64 * dpp,
            delta_lon: -delta.x as f64 * dpp,
        });
    }

    if response.hovered() {
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll != 0.0 {
            let factor = if scroll > 0.0 {
                SCROLL_ZOOM_STEP
            } else {
                1.0 / SCROLL_ZOOM_STEP
            };
            events.push(AppIntent::MapZoomed { factor });
        }
    }

    if let Some(curve) = hovered {
        let _ = response.on_hover_text_at_pointer(curve.label.clone());
    }

    events
}

fn to_local(pos: egui::Pos2, rect: egui::Rect) -> DVec2 {
    DVec2::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64)
}

fn to_screen(scene: &MapScene, rect: egui::Rect, size: DVec2, point: GeoPoint) -> egui::Pos2 {
    let s = scene.viewport.geo_to_screen(point, size);
    egui::pos2(rect.min.x + s.x as f32, rect.min.y + s.y as f32)
}

fn paint_graticule(painter: &egui::Painter, rect: egui::Rect, scene: &MapScene, size: DVec2) {
    let stroke = egui::Stroke::new(1.0, egui::Color32::from_gray(55));

    for lon in (-180..=180).step_by(GRATICULE_STEP_DEG as usize) {
        let a = to_screen(scene, rect, size, GeoPoint::new(-90.0, lon as f64));
        let b = to_screen(scene, rect, size, GeoPoint::new(90.0, lon as f64));
        painter.line_segment([a, b], stroke);
    }
    for lat in (-90..=90).step_by(GRATICULE_STEP_DEG as usize) {
        let a = to_screen(scene, rect, size, GeoPoint::new(lat as f64, -180.0));
        let b = to_screen(scene, rect, size, GeoPoint::new(lat as f64, 180.0));
        painter.line_segment([a, b], stroke);
    }
}

fn paint_curve(
    painter: &egui::Painter,
    rect: egui::Rect,
    scene: &MapScene,
    size: DVec2,
    curve: &SceneCurve,
    highlight: bool,
) {
    if curve.opacity <= 0.0 || curve.points.len() < 2 {
        return;
    }
    let [r, g, b] = curve.color;
    let alpha = (curve.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    let width = if highlight {
        curve.weight * 2.5
    } else {
        curve.weight
    };
    let points: Vec<egui::Pos2> = curve
        .points
        .iter()
        .map(|p| to_screen(scene, rect, size, *p))
        .collect();
    painter.add(egui::Shape::line(
        points,
        egui::Stroke::new(width, egui::Color32::from_rgba_unmultiplied(r, g, b, alpha)),
    ));
}
