//! Reine Geometrie-Funktionen für Catmull-Rom-Glättung von Rising Lines.
//!
//! Breite und Länge werden als zwei unabhängige, planare Skalare behandelt
//! (kein Großkreis, kein Wraparound an der Datumsgrenze).

use crate::core::GeoPoint;
use glam::DVec2;

/// Berechnet einen Punkt auf einem Catmull-Rom-Segment (t ∈ [0, 1]).
///
/// p0, p1, p2, p3: vier aufeinanderfolgende Kontrollpunkte.
/// Die Kurve verläuft von p1 nach p2.
pub fn catmull_rom_point(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Verdichtet eine rohe Linie zu einer glatten Punktfolge.
///
/// An den Rändern wird der erste bzw. letzte Punkt als Phantom-Nachbar
/// dupliziert. Pro Knotenintervall entstehen `segments_per_interval` Punkte
/// (t = 0, 1/S, …, (S-1)/S), danach wird der letzte Originalpunkt genau einmal
/// angehängt. Ergebnislänge für n ≥ 2: `(n - 1) * S + 1`.
///
/// Weniger als zwei Punkte werden unverändert zurückgegeben.
/// `segments_per_interval = 0` wird wie 1 behandelt.
pub fn smooth_line(points: &[GeoPoint], segments_per_interval: usize) -> Vec<GeoPoint> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let s = segments_per_interval.max(1);
    let n = points.len();
    let mut result = Vec::with_capacity((n - 1) * s + 1);

    for i in 0..(n - 1) {
        let p0 = if i == 0 { points[i] } else { points[i - 1] }.as_dvec2();
        let p1 = points[i].as_dvec2();
        let p2 = points[i + 1].as_dvec2();
        let p3 = if i + 2 < n { points[i + 2] } else { points[i + 1] }.as_dvec2();

        for j in 0..s {
            let t = j as f64 / s as f64;
            result.push(GeoPoint::from_dvec2(catmull_rom_point(p0, p1, p2, p3, t)));
        }
    }

    // Endpunkt exakt übernehmen, nicht ausgewertet
    result.push(points[n - 1]);
    result
}
