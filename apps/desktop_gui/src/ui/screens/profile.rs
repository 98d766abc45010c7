use eframe::egui;
use shared::domain::{Profile, Question};

use crate::ui::app::DeputyGuiApp;

pub(crate) const MISSING_VALUE: &str = "keine Angabe";

impl DeputyGuiApp {
    pub(crate) fn show_profile(&mut self, ui: &mut egui::Ui) {
        let Some(profile) = &self.profile else {
            self.show_prompt(ui, "Bitte wählen Sie zuerst ein Profil aus.");
            return;
        };

        let rows = profile_rows(profile);
        ui.add_space(8.0);
        ui.heading(profile.display_name());
        if let Some(url) = &profile.personal.picture.url {
            ui.hyperlink_to("Foto", url);
        }
        ui.add_space(8.0);
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("profile_entries")
                .num_columns(2)
                .striped(true)
                .min_col_width(120.0)
                .show(ui, |ui| {
                    for (description, value) in rows {
                        ui.label(egui::RichText::new(description).strong());
                        ui.label(value);
                        ui.end_row();
                    }
                });
        });
    }

    pub(crate) fn show_prompt(&self, ui: &mut egui::Ui, text: &str) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.3);
            ui.label(egui::RichText::new(text).size(16.0).weak());
        });
    }
}

pub(crate) fn gender_label(gender: Option<&str>) -> &'static str {
    match gender {
        Some("female") => "weiblich",
        Some("male") => "männlich",
        _ => "n.a",
    }
}

pub(crate) fn question_summary(questions: &[Question]) -> String {
    let answered = questions.iter().filter(|q| q.is_answered()).count();
    format!("{answered} von {} Fragen beantwortet", questions.len())
}

pub(crate) fn profile_rows(profile: &Profile) -> Vec<(&'static str, String)> {
    let personal = &profile.personal;
    let missing = || MISSING_VALUE.to_string();
    vec![
        ("Name", profile.display_name()),
        ("Partei", profile.party.clone().unwrap_or_else(missing)),
        (
            "Geburtsjahr",
            personal
                .birthyear
                .map(|year| year.to_string())
                .unwrap_or_else(missing),
        ),
        ("Geschlecht", gender_label(personal.gender.as_deref()).to_string()),
        (
            "Bundesland",
            personal.location.state.clone().unwrap_or_else(missing),
        ),
        (
            "Abschluss",
            personal.education.clone().unwrap_or_else(missing),
        ),
        ("Amt", personal.profession.clone().unwrap_or_else(missing)),
        ("Fragen", question_summary(&profile.questions)),
        ("Reden", profile.speeches.len().to_string()),
        ("Ausschüsse", profile.committees.len().to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use shared::domain::{Answer, PersonalData, Profile};

    use super::*;

    fn question(answered: bool) -> Question {
        Question {
            date: "2019-01-01".into(),
            category: "Umwelt".into(),
            url: "https://example.org".into(),
            answers: if answered {
                vec![Answer::default()]
            } else {
                Vec::new()
            },
        }
    }

    #[test]
    fn summarizes_answered_questions() {
        let questions = vec![question(true), question(false), question(true)];
        assert_eq!(question_summary(&questions), "2 von 3 Fragen beantwortet");
        assert_eq!(question_summary(&[]), "0 von 0 Fragen beantwortet");
    }

    #[test]
    fn maps_gender_to_german_labels() {
        assert_eq!(gender_label(Some("female")), "weiblich");
        assert_eq!(gender_label(Some("male")), "männlich");
        assert_eq!(gender_label(Some("diverse")), "n.a");
        assert_eq!(gender_label(None), "n.a");
    }

    #[test]
    fn missing_fields_fall_back_to_keine_angabe() {
        let profile = Profile {
            personal: PersonalData {
                first_name: "Anna".into(),
                last_name: "Muller".into(),
                ..PersonalData::default()
            },
            ..Profile::default()
        };

        let rows = profile_rows(&profile);
        let value_of = |key: &str| {
            rows.iter()
                .find(|(description, _)| *description == key)
                .map(|(_, value)| value.clone())
                .expect("row")
        };

        assert_eq!(value_of("Name"), "Anna Muller");
        assert_eq!(value_of("Partei"), MISSING_VALUE);
        assert_eq!(value_of("Geburtsjahr"), MISSING_VALUE);
        assert_eq!(value_of("Geschlecht"), "n.a");
        assert_eq!(value_of("Reden"), "0");
    }
}
