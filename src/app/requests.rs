//! Ausstehende Netzwerk-Requests: Outbox, In-Flight-Tabelle und Busy-Zustand.
//!
//! Der Controller blockiert nie. Ein Request wird mit Ticket in die Outbox
//! gelegt und vom Host abgeholt; die Antwort kommt später als Intent mit
//! demselben Ticket zurück, in beliebiger Reihenfolge.

use crate::core::{LineRequest, Submission, ValidatedDraft};
use indexmap::IndexMap;

/// Kennung eines einzelnen Requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestTicket(pub u64);

/// Vom Host auszuführender Request.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundRequest {
    /// Ortsname auflösen
    PlaceLookup { ticket: RequestTicket, query: String },
    /// Rising Lines berechnen
    LineComputation {
        ticket: RequestTicket,
        request: LineRequest,
    },
}

impl OutboundRequest {
    /// Ticket des Requests.
    pub fn ticket(&self) -> RequestTicket {
        match self {
            OutboundRequest::PlaceLookup { ticket, .. }
            | OutboundRequest::LineComputation { ticket, .. } => *ticket,
        }
    }
}

/// Kontext eines laufenden Requests, nötig um die Antwort zuzuordnen.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingRequest {
    /// Geocoding für einen validierten Draft
    PlaceLookup { draft: ValidatedDraft },
    /// Linienberechnung für eine gelistete Submission
    LineComputation { submission: Submission },
}

/// Outbox + In-Flight-Tabelle.
#[derive(Debug, Clone, Default)]
pub struct RequestQueue {
    next_ticket: u64,
    outbox: Vec<OutboundRequest>,
    in_flight: IndexMap<RequestTicket, PendingRequest>,
    busy: Option<RequestTicket>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stellt ein Geocoding in die Outbox.
    pub fn issue_place_lookup(&mut self, draft: ValidatedDraft, query: String) -> RequestTicket {
        let ticket = self.next_ticket();
        self.outbox.push(OutboundRequest::PlaceLookup { ticket, query });
        self.in_flight
            .insert(ticket, PendingRequest::PlaceLookup { draft });
        ticket
    }

    /// Stellt eine Linienberechnung in die Outbox.
    pub fn issue_line_computation(&mut self, submission: Submission) -> RequestTicket {
        let ticket = self.next_ticket();
        self.outbox.push(OutboundRequest::LineComputation {
            ticket,
            request: LineRequest::for_submission(&submission),
        });
        self.in_flight
            .insert(ticket, PendingRequest::LineComputation { submission });
        ticket
    }

    /// Übergibt alle noch nicht abgeholten Requests an den Host.
    pub fn take_outbox(&mut self) -> Vec<OutboundRequest> {
        std::mem::take(&mut self.outbox)
    }

    /// Noch nicht abgeholte Requests (read-only).
    pub fn outbox(&self) -> &[OutboundRequest] {
        &self.outbox
    }

    /// Schließt einen Request ab und liefert seinen Kontext.
    ///
    /// `None` bei unbekanntem oder bereits abgeschlossenem Ticket.
    pub fn complete(&mut self, ticket: RequestTicket) -> Option<PendingRequest> {
        self.in_flight.shift_remove(&ticket)
    }

    /// Anzahl laufender Requests.
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    /// Markiert das Formular als beschäftigt mit genau diesem Request.
    pub fn set_busy(&mut self, ticket: RequestTicket) {
        self.busy = Some(ticket);
    }

    /// Hebt den Busy-Zustand auf, falls er zu `ticket` gehört.
    pub fn clear_busy_if(&mut self, ticket: RequestTicket) -> bool {
        if self.busy == Some(ticket) {
            self.busy = None;
            true
        } else {
            false
        }
    }

    /// Hebt den Busy-Zustand bedingungslos auf.
    pub fn clear_busy(&mut self) {
        self.busy = None;
    }

    /// `true` solange der zuletzt abgeschickte Formular-Versuch validiert
    /// oder geocodiert wird.
    pub fn is_busy(&self) -> bool {
        self.busy.is_some()
    }

    fn next_ticket(&mut self) -> RequestTicket {
        let ticket = RequestTicket(self.next_ticket);
        self.next_ticket += 1;
        ticket
    }
}
