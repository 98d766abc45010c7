use eframe::egui;

use crate::ui::app::DeputyGuiApp;

impl DeputyGuiApp {
    pub(crate) fn show_welcome_loading(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.3);
                ui.heading("MeinBundestag");
                ui.add_space(12.0);
                ui.label("Daten werden vom Server geladen");
                ui.add_space(12.0);
                ui.add(egui::Spinner::new().size(32.0));
            });
        });
    }

    pub(crate) fn show_welcome_failure(&mut self, ctx: &egui::Context, message: &str) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.3);
                ui.heading("MeinBundestag");
                ui.add_space(12.0);
                ui.label("Leider konnte keine Verbindung zum Server hergestellt werden.");
                ui.label(
                    "Bitte stellen Sie sicher, dass eine Internetverbindung besteht, \
                     und starten Sie die Anwendung neu.",
                );
                ui.add_space(8.0);
                ui.small(egui::RichText::new(message).weak());
            });
        });
    }
}
