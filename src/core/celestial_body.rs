//! Katalog der neun Himmelskörper mit Anzeigefarbe und Deutungstext.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Einer der neun festen Himmelskörper, für die Rising Lines berechnet werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CelestialBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

/// Statische Darstellungs-Infos eines Himmelskörpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyInfo {
    /// Linienfarbe (RGB)
    pub color: [u8; 3],
    /// Kurzer Deutungstext für Legende und Tooltip
    pub influence: &'static str,
}

impl CelestialBody {
    /// Alle Körper in Katalog-Reihenfolge (= Reihenfolge im Backend-Request).
    pub const ALL: [CelestialBody; 9] = [
        CelestialBody::Sun,
        CelestialBody::Moon,
        CelestialBody::Mercury,
        CelestialBody::Venus,
        CelestialBody::Mars,
        CelestialBody::Jupiter,
        CelestialBody::Saturn,
        CelestialBody::Uranus,
        CelestialBody::Neptune,
    ];

    /// Wire-ID (Kleinschreibung, wie vom Backend erwartet).
    pub fn id(self) -> &'static str {
        match self {
            CelestialBody::Sun => "sun",
            CelestialBody::Moon => "moon",
            CelestialBody::Mercury => "mercury",
            CelestialBody::Venus => "venus",
            CelestialBody::Mars => "mars",
            CelestialBody::Jupiter => "jupiter",
            CelestialBody::Saturn => "saturn",
            CelestialBody::Uranus => "uranus",
            CelestialBody::Neptune => "neptune",
        }
    }

    /// Sucht einen Körper anhand seiner Wire-ID (Groß-/Kleinschreibung egal).
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|body| body.id().eq_ignore_ascii_case(id.trim()))
    }

    /// Anzeigename mit großem Anfangsbuchstaben ("Sun", "Moon", …).
    pub fn display_name(self) -> &'static str {
        match self {
            CelestialBody::Sun => "Sun",
            CelestialBody::Moon => "Moon",
            CelestialBody::Mercury => "Mercury",
            CelestialBody::Venus => "Venus",
            CelestialBody::Mars => "Mars",
            CelestialBody::Jupiter => "Jupiter",
            CelestialBody::Saturn => "Saturn",
            CelestialBody::Uranus => "Uranus",
            CelestialBody::Neptune => "Neptune",
        }
    }

    /// Katalog-Eintrag dieses Körpers.
    pub fn info(self) -> &'static BodyInfo {
        CelestialBodyCatalog::info(self)
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

const SUN: BodyInfo = BodyInfo {
    color: [0xFD, 0xB8, 0x13],
    influence: "Vitality, leadership, self-expression",
};
const MOON: BodyInfo = BodyInfo {
    color: [0xA0, 0xC1, 0xD1],
    influence: "Emotions, intuition, habits",
};
const MERCURY: BodyInfo = BodyInfo {
    color: [0x8C, 0x8C, 0x94],
    influence: "Communication, learning, reasoning",
};
const VENUS: BodyInfo = BodyInfo {
    color: [0xFF, 0x69, 0xB4],
    influence: "Love, beauty, harmony",
};
const MARS: BodyInfo = BodyInfo {
    color: [0xFF, 0x45, 0x00],
    influence: "Energy, drive, passion",
};
const JUPITER: BodyInfo = BodyInfo {
    color: [0x8F, 0xBC, 0x8F],
    influence: "Expansion, luck, wisdom",
};
const SATURN: BodyInfo = BodyInfo {
    color: [0x70, 0x80, 0x90],
    influence: "Discipline, structure, responsibility",
};
const URANUS: BodyInfo = BodyInfo {
    color: [0x7F, 0xFF, 0xD4],
    influence: "Innovation, change, originality",
};
const NEPTUNE: BodyInfo = BodyInfo {
    color: [0x41, 0x69, 0xE1],
    influence: "Spirituality, dreams, mysticism",
};

/// Read-only Registry aller Himmelskörper. Zur Laufzeit unveränderlich.
pub struct CelestialBodyCatalog;

impl CelestialBodyCatalog {
    /// Farbe und Deutungstext eines Körpers.
    pub fn info(body: CelestialBody) -> &'static BodyInfo {
        match body {
            CelestialBody::Sun => &SUN,
            CelestialBody::Moon => &MOON,
            CelestialBody::Mercury => &MERCURY,
            CelestialBody::Venus => &VENUS,
            CelestialBody::Mars => &MARS,
            CelestialBody::Jupiter => &JUPITER,
            CelestialBody::Saturn => &SATURN,
            CelestialBody::Uranus => &URANUS,
            CelestialBody::Neptune => &NEPTUNE,
        }
    }

    /// Iteriert in Katalog-Reihenfolge über alle Einträge.
    pub fn iter() -> impl Iterator<Item = (CelestialBody, &'static BodyInfo)> {
        CelestialBody::ALL.into_iter().map(|b| (b, Self::info(b)))
    }

    /// Farbe als Hex-String (`#RRGGBB`).
    pub fn color_hex(body: CelestialBody) -> String {
        let [r, g, b] = Self::info(body).color;
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Legenden-Zeile: "Sun - Vitality, leadership, self-expression".
    pub fn legend_label(body: CelestialBody) -> String {
        format!("{} - {}", body.display_name(), Self::info(body).influence)
    }
}
