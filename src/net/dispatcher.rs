//! Führt Outbox-Requests auf Worker-Threads aus.
//!
//! Jeder Request bekommt einen eigenen Thread. Die Antwort wird als
//! Completion-Intent über einen mpsc-Kanal zurückgegeben und vom Host im
//! nächsten Frame abgeholt; die Reihenfolge ist nicht festgelegt.

use super::{LineComputation, PlaceLookup};
use crate::app::{AppIntent, OutboundRequest};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

/// Brücke zwischen Controller-Outbox und blockierenden Diensten.
pub struct NetworkDispatcher {
    lines: Arc<dyn LineComputation>,
    places: Arc<dyn PlaceLookup>,
    tx: Sender<AppIntent>,
    rx: Receiver<AppIntent>,
}

impl NetworkDispatcher {
    pub fn new(lines: Arc<dyn LineComputation>, places: Arc<dyn PlaceLookup>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            lines,
            places,
            tx,
            rx,
        }
    }

    /// Ersetzt die Dienste (z.B. nach Options-Änderung). Laufende Requests
    /// behalten ihre alten Clients.
    pub fn set_services(&mut self, lines: Arc<dyn LineComputation>, places: Arc<dyn PlaceLookup>) {
        self.lines = lines;
        self.places = places;
    }

    /// Startet jeden Request auf einem eigenen Thread.
    pub fn dispatch(&self, requests: Vec<OutboundRequest>) {
        for request in requests {
            let tx = self.tx.clone();
            match request {
                OutboundRequest::PlaceLookup { ticket, query } => {
                    let places = Arc::clone(&self.places);
                    std::thread::spawn(move || {
                        let result = places.search(&query);
                        let _ = tx.send(AppIntent::PlaceLookupCompleted { ticket, result });
                    });
                }
                OutboundRequest::LineComputation { ticket, request } => {
                    let lines = Arc::clone(&self.lines);
                    std::thread::spawn(move || {
                        let result = lines.compute_lines(&request);
                        let _ = tx.send(AppIntent::LinesCompleted { ticket, result });
                    });
                }
            }
        }
    }

    /// Alle bisher eingetroffenen Completion-Intents (blockiert nicht).
    pub fn drain(&self) -> Vec<AppIntent> {
        self.rx.try_iter().collect()
    }

    /// Wartet auf den nächsten Completion-Intent (für Tests und Headless-Betrieb).
    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<AppIntent> {
        self.rx.recv_timeout(timeout).ok()
    }
}
