use eframe::egui;
use shared::domain::{PersonalContent, Question, Sidejob};

use crate::backend_bridge::commands::BackendCommand;
use crate::ui::app::DeputyGuiApp;

impl DeputyGuiApp {
    pub(crate) fn show_personal(&mut self, ui: &mut egui::Ui) {
        if self.profile.is_none() {
            self.show_prompt(ui, "Bitte wählen Sie zuerst ein Profil aus.");
            return;
        }

        match self.personal_content {
            PersonalContent::Overview => self.show_personal_overview(ui),
            content => self.show_personal_content(ui, content),
        }
    }

    fn show_personal_overview(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.heading("Persönliches");
        ui.add_space(8.0);

        let entries = [
            (PersonalContent::Speeches, "Reden"),
            (PersonalContent::Questions, "Fragen"),
            (PersonalContent::Votes, "Abstimmungen"),
            (PersonalContent::Sidejobs, "Nebentätigkeiten"),
        ];
        for (content, label) in entries {
            let button = egui::Button::new(egui::RichText::new(label).size(16.0))
                .min_size(egui::vec2(ui.available_width(), 40.0));
            if ui.add(button).clicked() {
                self.send_command(BackendCommand::SetPersonalContent { content });
            }
            ui.add_space(6.0);
        }
    }

    fn show_personal_content(&mut self, ui: &mut egui::Ui, content: PersonalContent) {
        ui.add_space(8.0);
        if ui.button("Zurück zur Übersicht").clicked() {
            self.send_command(BackendCommand::SetPersonalContent {
                content: PersonalContent::Overview,
            });
        }
        ui.separator();

        // The profile mirror only changes between frames, never inside one;
        // clone keeps the borrow away from the command dispatch below.
        let Some(profile) = self.profile.clone() else {
            return;
        };

        egui::ScrollArea::vertical().show(ui, |ui| match content {
            PersonalContent::Speeches => {
                for (index, speech) in profile.speeches.iter().enumerate() {
                    let rows = [
                        ("Datum", speech.meta.date.clone()),
                        ("Thema", speech.meta.topic.clone()),
                    ];
                    if self.list_item(ui, &rows).clicked() {
                        self.send_command(BackendCommand::SelectSpeech { index });
                    }
                }
            }
            PersonalContent::Questions => {
                for question in &profile.questions {
                    let rows = [
                        ("Datum", question.date.clone()),
                        ("Kategorie", question.category.clone()),
                        ("Status", question_status(question).to_string()),
                    ];
                    if self.list_item(ui, &rows).clicked() {
                        ui.ctx().open_url(egui::OpenUrl::new_tab(&question.url));
                    }
                }
            }
            PersonalContent::Votes => {
                for vote in &profile.votes {
                    let rows = [
                        ("Datum", vote.date.clone()),
                        ("Thema", vote.title.clone()),
                        ("Stimme", vote.vote.clone()),
                    ];
                    if self.list_item(ui, &rows).clicked() {
                        ui.ctx().open_url(egui::OpenUrl::new_tab(&vote.url));
                    }
                }
            }
            PersonalContent::Sidejobs => {
                for sidejob in &profile.sidejobs {
                    let mut rows = Vec::new();
                    if let Some(period) = sidejob_period(sidejob) {
                        rows.push(("Zeitraum", period));
                    }
                    rows.push(("Kategorie", sidejob.job_category.clone()));
                    rows.push(("Tätigkeit", sidejob.job.clone()));
                    rows.push(("Organisation", sidejob.organization.clone()));
                    if self.list_item(ui, &rows).clicked() {
                        let url = organization_search_url(&sidejob.organization);
                        ui.ctx().open_url(egui::OpenUrl::new_tab(url));
                    }
                }
            }
            PersonalContent::Overview => {}
        });
    }

    /// Key/value rows in a framed group; the whole group is clickable.
    fn list_item(&self, ui: &mut egui::Ui, rows: &[(&str, String)]) -> egui::Response {
        let response = ui
            .group(|ui| {
                ui.set_width(ui.available_width());
                for (key, value) in rows {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(*key).strong());
                        ui.label(value);
                    });
                }
            })
            .response;
        ui.add_space(4.0);
        response.interact(egui::Sense::click())
    }
}

pub(crate) fn question_status(question: &Question) -> &'static str {
    if question.is_answered() {
        "beantwortet"
    } else {
        "nicht beantwortet"
    }
}

/// `"{start} bis {end}"`, but only when both ends of the period are known.
pub(crate) fn sidejob_period(sidejob: &Sidejob) -> Option<String> {
    let dates = sidejob.date.as_ref()?;
    match (&dates.start, &dates.end) {
        (Some(start), Some(end)) => Some(format!("{start} bis {end}")),
        _ => None,
    }
}

pub(crate) fn organization_search_url(organization: &str) -> String {
    url::Url::parse_with_params("https://www.google.com/search", &[("q", organization)])
        .map(String::from)
        .unwrap_or_else(|_| "https://www.google.com/search".to_string())
}

#[cfg(test)]
mod tests {
    use shared::domain::{Answer, SidejobDates};

    use super::*;

    #[test]
    fn question_status_depends_on_answers() {
        let mut question = Question {
            date: "2019-01-01".into(),
            category: "Umwelt".into(),
            url: "https://example.org".into(),
            answers: Vec::new(),
        };
        assert_eq!(question_status(&question), "nicht beantwortet");

        question.answers.push(Answer::default());
        assert_eq!(question_status(&question), "beantwortet");
    }

    #[test]
    fn sidejob_period_requires_both_dates() {
        let mut sidejob = Sidejob {
            job: "Beratung".into(),
            job_category: "Beratung".into(),
            organization: "Beispiel GmbH".into(),
            date: None,
        };
        assert_eq!(sidejob_period(&sidejob), None);

        sidejob.date = Some(SidejobDates {
            start: Some("2018".into()),
            end: None,
        });
        assert_eq!(sidejob_period(&sidejob), None);

        sidejob.date = Some(SidejobDates {
            start: Some("2018".into()),
            end: Some("2019".into()),
        });
        assert_eq!(sidejob_period(&sidejob), Some("2018 bis 2019".into()));
    }

    #[test]
    fn organization_search_url_is_escaped() {
        assert_eq!(
            organization_search_url("Beispiel GmbH & Co."),
            "https://www.google.com/search?q=Beispiel+GmbH+%26+Co."
        );
    }
}
