//! Backend worker: owns the client core on a dedicated thread and answers
//! UI commands with events.

use std::{sync::Arc, thread, time::Duration};

use client_core::{DeputyClient, HttpApi, ProfileLookup, Settings};
use crossbeam_channel::{Receiver, Sender};
use tracing::{error, info};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Startup data loading is abandoned after this long; the UI then shows a
/// permanent error screen.
pub const STARTUP_TIMEOUT: Duration = Duration::from_secs(30);

pub fn launch(settings: Settings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::StartupFailed(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };

        runtime.block_on(async move {
            let api = match HttpApi::new(&settings.api_url) {
                Ok(api) => Arc::new(api),
                Err(err) => {
                    error!(api_url = %settings.api_url, "invalid backend endpoint: {err}");
                    let _ = ui_tx.try_send(UiEvent::StartupFailed(err.to_string()));
                    return;
                }
            };
            let client = DeputyClient::new(api);
            info!(api_url = %settings.api_url, "backend worker ready");
            let _ = ui_tx.try_send(UiEvent::Info("Hintergrunddienst bereit".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::LoadDeputies => {
                        info!("backend: load_deputies");
                        match tokio::time::timeout(STARTUP_TIMEOUT, client.load_deputies()).await
                        {
                            Ok(Ok(names)) => {
                                let _ = ui_tx.try_send(UiEvent::DeputiesLoaded(names));
                            }
                            Ok(Err(err)) => {
                                error!("backend: load_deputies failed: {err}");
                                let _ = ui_tx.try_send(UiEvent::StartupFailed(err.to_string()));
                            }
                            Err(_elapsed) => {
                                error!(
                                    timeout_secs = STARTUP_TIMEOUT.as_secs(),
                                    "backend: load_deputies timed out"
                                );
                                let _ = ui_tx.try_send(UiEvent::StartupFailed(format!(
                                    "timed out after {}s",
                                    STARTUP_TIMEOUT.as_secs()
                                )));
                            }
                        }
                    }
                    BackendCommand::ResolveProfile { name } => {
                        info!(query = %name, "backend: resolve_profile");
                        match client.resolve_profile(&name).await {
                            Ok(ProfileLookup::Found(profile)) => {
                                let _ =
                                    ui_tx.try_send(UiEvent::ProfileResolved(Box::new(profile)));
                            }
                            Ok(ProfileLookup::NotFound { query }) => {
                                info!(query = %query, "backend: profile not found");
                                let _ = ui_tx.try_send(UiEvent::ProfileNotFound { query });
                            }
                            Err(err) => {
                                error!("backend: resolve_profile failed: {err}");
                                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                    UiErrorContext::Search,
                                    err.to_string(),
                                )));
                            }
                        }
                    }
                    BackendCommand::SelectSpeech { index } => {
                        match client.select_speech(index).await {
                            Ok(speech) => {
                                let _ = ui_tx
                                    .try_send(UiEvent::SpeechChanged(Some(Box::new(speech))));
                            }
                            Err(err) => {
                                error!(index, "backend: select_speech failed: {err}");
                                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                    UiErrorContext::General,
                                    err.to_string(),
                                )));
                            }
                        }
                    }
                    BackendCommand::ClearSpeech => {
                        client.clear_speech().await;
                        let _ = ui_tx.try_send(UiEvent::SpeechChanged(None));
                    }
                    BackendCommand::SetPersonalContent { content } => {
                        client.set_personal_content(content).await;
                        let _ = ui_tx.try_send(UiEvent::PersonalContentChanged(content));
                    }
                }
            }
        });
    });
}
