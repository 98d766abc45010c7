use eframe::egui;
use shared::domain::{ParagraphKind, SpeechEntry};

use crate::backend_bridge::commands::BackendCommand;
use crate::ui::app::DeputyGuiApp;

/// One renderable block of a speech entry: joined spoken passages
/// interleaved with the interjections that interrupted them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SpeechBlock {
    Passage(String),
    Comment(String),
}

impl DeputyGuiApp {
    pub(crate) fn show_speech(&mut self, ui: &mut egui::Ui) {
        let Some(speech) = self.speech.clone() else {
            self.show_prompt(ui, "Bitte wählen Sie zuerst eine Rede aus.");
            return;
        };

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.heading(capitalize_first(&speech.meta.topic));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Rede schließen").clicked() {
                    self.send_command(BackendCommand::ClearSpeech);
                }
            });
        });
        ui.label(&speech.meta.date);
        ui.label(format!("{} ({})", speech.meta.name, speech.meta.party));
        ui.horizontal(|ui| {
            ui.small(format!("Stimmung {}", speech.analysis.polarity));
            ui.small(format!("Objektivität {}", speech.analysis.subjectivity));
            ui.small(format!("Zwischenrufe {}", speech.analysis.number_of_comments));
        });
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            for entry in &speech.content.entries {
                let speaker = egui::RichText::new(&entry.speaker).strong();
                let speaker = if entry.is_speaker {
                    speaker.color(ui.visuals().hyperlink_color)
                } else {
                    speaker
                };
                ui.add_space(8.0);
                ui.label(speaker);
                for block in speech_blocks(entry) {
                    match block {
                        SpeechBlock::Passage(text) => {
                            ui.label(text);
                        }
                        SpeechBlock::Comment(text) => {
                            ui.indent("comment", |ui| {
                                ui.label(egui::RichText::new(text).italics().weak());
                            });
                        }
                    }
                }
            }
        });
    }
}

/// Joins consecutive spoken paragraphs into one passage and flushes it
/// whenever a comment interrupts, keeping hall order intact.
pub(crate) fn speech_blocks(entry: &SpeechEntry) -> Vec<SpeechBlock> {
    let mut blocks = Vec::new();
    let mut passage: Vec<&str> = Vec::new();

    for paragraph in &entry.paragraphs {
        match paragraph.kind {
            ParagraphKind::Speech => passage.push(&paragraph.text),
            ParagraphKind::Comment => {
                if !passage.is_empty() {
                    blocks.push(SpeechBlock::Passage(passage.join(" ")));
                    passage.clear();
                }
                blocks.push(SpeechBlock::Comment(paragraph.text.clone()));
            }
        }
    }
    if !passage.is_empty() {
        blocks.push(SpeechBlock::Passage(passage.join(" ")));
    }
    blocks
}

pub(crate) fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use shared::domain::SpeechParagraph;

    use super::*;

    fn paragraph(kind: ParagraphKind, text: &str) -> SpeechParagraph {
        SpeechParagraph {
            kind,
            text: text.into(),
        }
    }

    fn entry(paragraphs: Vec<SpeechParagraph>) -> SpeechEntry {
        SpeechEntry {
            speaker: "Anna Muller".into(),
            is_speaker: true,
            paragraphs,
        }
    }

    #[test]
    fn joins_consecutive_paragraphs_until_a_comment() {
        let entry = entry(vec![
            paragraph(ParagraphKind::Speech, "Erster Satz."),
            paragraph(ParagraphKind::Speech, "Zweiter Satz."),
            paragraph(ParagraphKind::Comment, "(Beifall)"),
            paragraph(ParagraphKind::Speech, "Dritter Satz."),
        ]);

        assert_eq!(
            speech_blocks(&entry),
            vec![
                SpeechBlock::Passage("Erster Satz. Zweiter Satz.".into()),
                SpeechBlock::Comment("(Beifall)".into()),
                SpeechBlock::Passage("Dritter Satz.".into()),
            ]
        );
    }

    #[test]
    fn leading_comment_produces_no_empty_passage() {
        let entry = entry(vec![
            paragraph(ParagraphKind::Comment, "(Zuruf)"),
            paragraph(ParagraphKind::Speech, "Antwort."),
        ]);

        assert_eq!(
            speech_blocks(&entry),
            vec![
                SpeechBlock::Comment("(Zuruf)".into()),
                SpeechBlock::Passage("Antwort.".into()),
            ]
        );
    }

    #[test]
    fn entry_without_paragraphs_yields_no_blocks() {
        assert!(speech_blocks(&entry(Vec::new())).is_empty());
    }

    #[test]
    fn capitalizes_the_first_character_only() {
        assert_eq!(capitalize_first("klimaschutz"), "Klimaschutz");
        assert_eq!(capitalize_first("änderungsantrag"), "Änderungsantrag");
        assert_eq!(capitalize_first(""), "");
    }
}
