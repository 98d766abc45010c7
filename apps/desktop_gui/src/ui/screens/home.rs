use client_core::find_suggestions;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::ui::app::{DeputyGuiApp, SearchFeedback};

impl DeputyGuiApp {
    pub(crate) fn show_home(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.heading("MeinBundestag");
        });
        ui.add_space(12.0);

        let response = ui.add(
            egui::TextEdit::singleline(&mut self.query)
                .hint_text("Abgeordnete suchen")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.suggestion_selected = false;
            self.search_feedback = None;
        }

        // Suggestions disappear once one of them was picked.
        if !self.suggestion_selected {
            let suggestions = find_suggestions(&self.deputies, &self.query);
            for name in suggestions {
                if ui.selectable_label(false, &name).clicked() {
                    self.query = name;
                    self.suggestion_selected = true;
                    self.search_feedback = None;
                }
            }
        }

        ui.add_space(12.0);
        let search_clicked = ui
            .add_enabled(!self.resolving, egui::Button::new("Suchen"))
            .clicked();
        let submitted =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if search_clicked || submitted {
            self.try_search();
        }

        ui.add_space(12.0);
        if self.resolving {
            ui.add(egui::Spinner::new());
        }
        match &self.search_feedback {
            Some(SearchFeedback::SelectionRequired) => {
                ui.colored_label(
                    ui.visuals().error_fg_color,
                    "Bitte wählen Sie zuerst ein Profil aus.",
                );
            }
            Some(SearchFeedback::NotFound(query)) => {
                ui.colored_label(
                    ui.visuals().error_fg_color,
                    format!("Kein Profil zu \"{query}\" gefunden."),
                );
            }
            None => {}
        }
    }

    fn try_search(&mut self) {
        if self.query.trim().is_empty() || !self.suggestion_selected {
            self.search_feedback = Some(SearchFeedback::SelectionRequired);
            return;
        }

        self.resolving = true;
        self.search_feedback = None;
        let name = self.query.clone();
        self.send_command(BackendCommand::ResolveProfile { name });
    }
}
