use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{PersonalContent, Profile, Speech};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{classify_startup_failure, err_label, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

/// Startup tri-state. `Failed` is permanent; the app has to be restarted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StartupStatus {
    Loading,
    Failed(String),
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tab {
    Home,
    Profile,
    Personal,
    Speech,
}

impl Tab {
    fn label(self) -> &'static str {
        match self {
            Tab::Home => "Suche",
            Tab::Profile => "Profil",
            Tab::Personal => "Persönliches",
            Tab::Speech => "Rede",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SearchFeedback {
    /// The search button was pressed without picking a suggestion first.
    SelectionRequired,
    /// The backend had no profile for the attempted query.
    NotFound(String),
}

pub struct DeputyGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    pub(crate) startup: StartupStatus,
    pub(crate) active_tab: Tab,

    pub(crate) query: String,
    pub(crate) suggestion_selected: bool,
    pub(crate) resolving: bool,
    pub(crate) search_feedback: Option<SearchFeedback>,

    // Display mirrors of the store slices owned by the backend worker.
    pub(crate) deputies: Vec<String>,
    pub(crate) profile: Option<Profile>,
    pub(crate) speech: Option<Speech>,
    pub(crate) personal_content: PersonalContent,

    pub(crate) status: String,
}

impl DeputyGuiApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            startup: StartupStatus::Loading,
            active_tab: Tab::Home,
            query: String::new(),
            suggestion_selected: false,
            resolving: false,
            search_feedback: None,
            deputies: Vec::new(),
            profile: None,
            speech: None,
            personal_content: PersonalContent::Overview,
            status: "Daten werden vom Server geladen".to_string(),
        };
        app.send_command(BackendCommand::LoadDeputies);
        app
    }

    pub(crate) fn send_command(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::DeputiesLoaded(names) => {
                    // A late success after the timeout already failed the
                    // startup is ignored; the error screen stays.
                    if self.startup != StartupStatus::Loading {
                        continue;
                    }
                    self.status = format!("{} Abgeordnete geladen", names.len());
                    self.deputies = names;
                    self.startup = StartupStatus::Ready;
                }
                UiEvent::StartupFailed(message) => {
                    if self.startup != StartupStatus::Loading {
                        continue;
                    }
                    self.status = classify_startup_failure(&message);
                    self.startup = StartupStatus::Failed(message);
                }
                UiEvent::ProfileResolved(profile) => {
                    self.resolving = false;
                    self.search_feedback = None;
                    self.query.clear();
                    self.suggestion_selected = false;
                    self.status = format!("Profil von {} geladen", profile.display_name());
                    self.profile = Some(*profile);
                    self.speech = None;
                    self.personal_content = PersonalContent::Overview;
                    self.active_tab = Tab::Profile;
                }
                UiEvent::ProfileNotFound { query } => {
                    self.resolving = false;
                    self.status = format!("Kein Profil zu \"{query}\" gefunden");
                    self.search_feedback = Some(SearchFeedback::NotFound(query));
                }
                UiEvent::SpeechChanged(speech) => {
                    self.speech = speech.map(|speech| *speech);
                    if self.speech.is_some() {
                        self.active_tab = Tab::Speech;
                    } else if self.active_tab == Tab::Speech {
                        self.active_tab = Tab::Personal;
                    }
                }
                UiEvent::PersonalContentChanged(content) => {
                    self.personal_content = content;
                }
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::Error(err) => {
                    if err.context() == UiErrorContext::Search {
                        self.resolving = false;
                    }
                    self.status =
                        format!("Fehler ({}): {}", err_label(err.category()), err.message());
                }
            }
        }
    }

    fn show_tab_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("tab_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for tab in [Tab::Home, Tab::Profile, Tab::Personal, Tab::Speech] {
                    ui.selectable_value(&mut self.active_tab, tab, tab.label());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(egui::RichText::new(&self.status).weak());
                });
            });
        });
    }
}

impl eframe::App for DeputyGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        // Backend events arrive while the UI is idle; keep the loop warm.
        ctx.request_repaint_after(Duration::from_millis(250));

        match self.startup.clone() {
            StartupStatus::Loading => self.show_welcome_loading(ctx),
            StartupStatus::Failed(message) => self.show_welcome_failure(ctx, &message),
            StartupStatus::Ready => {
                self.show_tab_bar(ctx);
                egui::CentralPanel::default().show(ctx, |ui| match self.active_tab {
                    Tab::Home => self.show_home(ui),
                    Tab::Profile => self.show_profile(ui),
                    Tab::Personal => self.show_personal(ui),
                    Tab::Speech => self.show_speech(ui),
                });
            }
        }
    }
}
