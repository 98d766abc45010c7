//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        BackendCommand::LoadDeputies => "load_deputies",
        BackendCommand::ResolveProfile { .. } => "resolve_profile",
        BackendCommand::SelectSpeech { .. } => "select_speech",
        BackendCommand::ClearSpeech => "clear_speech",
        BackendCommand::SetPersonalContent { .. } => "set_personal_content",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = "Zu viele Anfragen; bitte erneut versuchen.".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status =
                "Hintergrunddienst nicht erreichbar; bitte Anwendung neu starten.".to_string();
        }
    }
}
