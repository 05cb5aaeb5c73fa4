//! Use-Cases der Application-Layer-Orchestrierung.

pub mod lifecycle;
pub mod manage;
pub mod view;
pub mod visibility;
