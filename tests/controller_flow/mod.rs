//! Szenarien für den Submission-Lifecycle, getrieben über `handle_intent`.

mod lifecycle;
mod support;
mod view_and_focus;
mod visibility;
