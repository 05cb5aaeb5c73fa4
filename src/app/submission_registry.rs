//! In-Session-Registry aller Submissions und ihrer Layer-Gruppen.
//!
//! Wird **nicht** persistiert, die Registry gilt nur für die aktuelle
//! Session und ist beim Start leer.
//!
//! Ein Eintrag wird angelegt, sobald der Linien-Request abgeschickt wird.
//! Schlägt der Request fehl, bleibt der Eintrag ohne Darstellung gelistet.

use crate::core::{CelestialBody, CurveId, GroupId, Submission, SubmissionId};

/// Fortschritt eines gelisteten Eintrags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// Linien-Request ist unterwegs
    Requesting,
    /// Layer-Gruppe liegt auf der Karte
    Rendered,
    /// Linien-Request fehlgeschlagen, keine Darstellung
    Failed,
}

/// Ein gelisteter Eintrag.
#[derive(Debug, Clone)]
pub struct SubmissionRecord {
    pub submission: Submission,
    pub phase: SubmissionPhase,
    /// Layer-Gruppe auf der Oberfläche (erst nach erfolgreicher Antwort)
    pub group: Option<GroupId>,
    /// (Körper, Kurve) aller Kurven der Gruppe
    pub curves: Vec<(CelestialBody, CurveId)>,
}

/// In-Session-Registry aller Submissions.
#[derive(Debug, Clone, Default)]
pub struct SubmissionRegistry {
    records: Vec<SubmissionRecord>,
    last_id: u64,
}

impl SubmissionRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Vergibt eine neue ID aus der aktuellen Zeit (ms seit Epoch).
    ///
    /// Liegt `now_ms` nicht über der zuletzt vergebenen ID (gleiche
    /// Millisekunde, Uhr zurückgestellt), wird die letzte ID + 1 vergeben.
    pub fn allocate_id(&mut self, now_ms: u64) -> SubmissionId {
        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;
        SubmissionId(id)
    }

    /// Listet eine Submission im Zustand `Requesting`.
    pub fn register(&mut self, submission: Submission) -> SubmissionId {
        let id = submission.id;
        self.records.push(SubmissionRecord {
            submission,
            phase: SubmissionPhase::Requesting,
            group: None,
            curves: Vec::new(),
        });
        id
    }

    /// Gibt den Record mit der angegebenen ID zurück (falls vorhanden).
    pub fn get(&self, id: SubmissionId) -> Option<&SubmissionRecord> {
        self.records.iter().find(|r| r.submission.id == id)
    }

    /// Verknüpft die gerenderte Gruppe mit dem Eintrag (→ `Rendered`).
    ///
    /// `false` wenn der Eintrag inzwischen gelöscht wurde.
    pub fn attach_group(
        &mut self,
        id: SubmissionId,
        group: GroupId,
        curves: Vec<(CelestialBody, CurveId)>,
    ) -> bool {
        let Some(record) = self.get_mut(id) else {
            return false;
        };
        record.phase = SubmissionPhase::Rendered;
        record.group = Some(group);
        record.curves = curves;
        true
    }

    /// Markiert den Linien-Request eines Eintrags als fehlgeschlagen.
    pub fn mark_failed(&mut self, id: SubmissionId) -> bool {
        let Some(record) = self.get_mut(id) else {
            return false;
        };
        record.phase = SubmissionPhase::Failed;
        true
    }

    /// Entfernt den Record mit der angegebenen ID.
    pub fn remove(&mut self, id: SubmissionId) -> Option<SubmissionRecord> {
        let index = self.records.iter().position(|r| r.submission.id == id)?;
        Some(self.records.remove(index))
    }

    /// Alle Einträge in Erstellungsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &SubmissionRecord> {
        self.records.iter()
    }

    /// Gibt die Anzahl der gelisteten Records zurück.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Gibt zurück ob die Registry leer ist.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn get_mut(&mut self, id: SubmissionId) -> Option<&mut SubmissionRecord> {
        self.records.iter_mut().find(|r| r.submission.id == id)
    }
}
