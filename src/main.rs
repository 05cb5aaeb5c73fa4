//! Astro Lines Map.
//!
//! Zeichnet die Rising Lines der Himmelskörper für Geburtsdaten auf eine
//! Weltkarte (egui + eframe).

use astro_lines_map::{
    ui, AppController, AppIntent, AppOptions, AppState, HttpLineClient, NetworkDispatcher,
    NominatimClient,
};
use eframe::egui;
use std::sync::Arc;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Astro Lines Map v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1400.0, 800.0])
                .with_title("Astro Lines Map"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Astro Lines Map",
            options,
            Box::new(|_cc| Ok(Box::new(MapApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct MapApp {
    state: AppState,
    controller: AppController,
    dispatcher: NetworkDispatcher,
    /// Optionen, mit denen die Dienst-Clients gebaut wurden
    service_options: AppOptions,
}

impl MapApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = AppOptions::config_path();
        let options = AppOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(options.clone());
        state.options_path = Some(config_path);

        let dispatcher = NetworkDispatcher::new(
            Arc::new(HttpLineClient::from_options(&options)),
            Arc::new(NominatimClient::from_options(&options)),
        );

        Self {
            state,
            controller: AppController::new(),
            dispatcher,
            service_options: options,
        }
    }
}

impl eframe::App for MapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.collect_ui_events(ctx);
        events.extend(self.dispatcher.drain());
        let has_events = !events.is_empty();

        self.process_events(events);
        self.sync_services();
        self.dispatcher.dispatch(self.state.requests.take_outbox());

        self.maybe_request_repaint(ctx, has_events);
    }
}

impl MapApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_form_panel(ctx, &self.state));
        events.extend(ui::render_legend_panel(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        let scene = self.controller.build_map_scene(&self.state);
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                events.extend(ui::render_map_canvas(ui, &scene));
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Baut die Dienst-Clients neu, wenn sich Endpoints oder User-Agent geändert haben.
    fn sync_services(&mut self) {
        let opts = &self.state.options;
        if opts.line_api_url == self.service_options.line_api_url
            && opts.geocoder_url == self.service_options.geocoder_url
            && opts.user_agent == self.service_options.user_agent
        {
            return;
        }
        log::info!(
            "Dienste neu konfiguriert: {} / {}",
            opts.line_api_url,
            opts.geocoder_url
        );
        self.dispatcher.set_services(
            Arc::new(HttpLineClient::from_options(opts)),
            Arc::new(NominatimClient::from_options(opts)),
        );
        self.service_options = opts.clone();
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_events: bool) {
        if has_events {
            ctx.request_repaint();
        }
        if self.state.requests.in_flight_count() > 0 {
            // Completions kommen über den Kanal, nicht über egui-Events
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}
