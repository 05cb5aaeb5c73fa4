//! UI-Komponenten: Menü, Formular, Legende, Karte, Dialoge.

mod form_panel;
mod legend_panel;
/// UI-Layer mit egui
///
/// Panels lesen den AppState und liefern ausschließlich `AppIntent`s zurück.
pub mod map_canvas;
pub mod menu;
pub mod options_dialog;
pub mod status;
mod submissions_panel;

pub use form_panel::render_form_panel;
pub use legend_panel::render_legend_panel;
pub use map_canvas::render_map_canvas;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
