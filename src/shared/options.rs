//! Zentrale Konfiguration der Astro-Lines-Karte.
//!
//! `AppOptions` enthält alle zur Laufzeit änderbaren Werte und wird als TOML
//! neben der Binary gespeichert. Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Dienste ─────────────────────────────────────────────────────────

/// Standard-Endpoint des Linien-Backends.
pub const LINE_API_URL: &str = "http://127.0.0.1:5000/api/compute_rising_lines";
/// Standard-Endpoint für Geocoding (Nominatim-kompatibel).
pub const GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";
/// User-Agent für externe Requests (Nominatim verlangt einen).
pub const USER_AGENT: &str = concat!("astro-lines-map/", env!("CARGO_PKG_VERSION"));

// ── Glättung ────────────────────────────────────────────────────────

/// Zwischenpunkte pro Knotenintervall der Catmull-Rom-Glättung.
pub const SEGMENTS_PER_INTERVAL: usize = 5;
/// Obergrenze für `segments_per_interval` (Dialog und geladene Datei).
pub const SEGMENTS_PER_INTERVAL_MAX: usize = 50;

// ── Darstellung ─────────────────────────────────────────────────────

/// Linienstärke in Pixeln.
pub const LINE_WEIGHT: f32 = 1.0;
/// Deckkraft aller anderen Linien, wenn eine Linie angeklickt wurde.
pub const FOCUS_DIM_OPACITY: f32 = 0.2;
/// Hover-/Klick-Toleranz um eine Linie in Pixeln.
pub const PICK_RADIUS_PX: f32 = 6.0;

/// Laufzeit-Optionen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppOptions {
    // ── Dienste ─────────────────────────────────────────────────
    /// POST-Endpoint für die Linienberechnung
    pub line_api_url: String,
    /// GET-Endpoint für Geocoding
    pub geocoder_url: String,
    /// User-Agent für alle Requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    // ── Glättung ────────────────────────────────────────────────
    /// Zwischenpunkte pro Knotenintervall (≥ 1)
    pub segments_per_interval: usize,

    // ── Darstellung ─────────────────────────────────────────────
    /// Linienstärke in Pixeln
    pub line_weight: f32,
    /// Deckkraft der übrigen Linien beim Fokussieren einer Linie
    #[serde(default = "default_focus_dim_opacity")]
    pub focus_dim_opacity: f32,
    /// Hover-/Klick-Toleranz in Pixeln
    #[serde(default = "default_pick_radius_px")]
    pub pick_radius_px: f32,
    /// Ansicht nach dem Rendern einer Submission auf deren Linien einpassen
    #[serde(default)]
    pub fit_view_on_render: bool,

    // ── Lifecycle ───────────────────────────────────────────────
    /// Löschen einer Submission entfernt auch ihre Linien von der Karte
    #[serde(default)]
    pub retract_on_delete: bool,
    /// Neue Linien übernehmen den aktuellen Legenden-Zustand ihres Körpers
    #[serde(default)]
    pub new_curves_follow_visibility: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            line_api_url: LINE_API_URL.to_string(),
            geocoder_url: GEOCODER_URL.to_string(),
            user_agent: USER_AGENT.to_string(),

            segments_per_interval: SEGMENTS_PER_INTERVAL,

            line_weight: LINE_WEIGHT,
            focus_dim_opacity: FOCUS_DIM_OPACITY,
            pick_radius_px: PICK_RADIUS_PX,
            fit_view_on_render: false,

            retract_on_delete: false,
            new_curves_follow_visibility: false,
        }
    }
}

/// Serde-Default für `user_agent` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_user_agent() -> String {
    USER_AGENT.to_string()
}

/// Serde-Default für `focus_dim_opacity`.
fn default_focus_dim_opacity() -> f32 {
    FOCUS_DIM_OPACITY
}

/// Serde-Default für `pick_radius_px`.
fn default_pick_radius_px() -> f32 {
    PICK_RADIUS_PX
}

impl AppOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("astro_lines_map"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("astro_lines_map.toml")
    }

    /// Klemmt Werte in gültige Bereiche.
    pub fn sanitized(mut self) -> Self {
        self.segments_per_interval = self
            .segments_per_interval
            .clamp(1, SEGMENTS_PER_INTERVAL_MAX);
        self.line_weight = self.line_weight.clamp(0.1, 10.0);
        self.focus_dim_opacity = self.focus_dim_opacity.clamp(0.0, 1.0);
        self.pick_radius_px = self.pick_radius_px.max(1.0);
        self
    }
}
