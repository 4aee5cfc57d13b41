//! Console notification adapter.
//!
//! Records the report handoff on stderr instead of delivering mail. The
//! artifact path and the recipient list are the whole interface the core
//! owes the notification collaborator.

use crate::domain::error::SatstackerError;
use crate::ports::notify_port::NotifyPort;
use std::path::Path;

pub struct ConsoleNotifyAdapter;

impl ConsoleNotifyAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleNotifyAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotifyPort for ConsoleNotifyAdapter {
    fn send(&self, artifact: &Path, recipients: &[String]) -> Result<(), SatstackerError> {
        if !artifact.exists() {
            return Err(SatstackerError::Report {
                reason: format!("artifact {} does not exist", artifact.display()),
            });
        }

        for recipient in recipients {
            eprintln!("Queued report {} for {}", artifact.display(), recipient);
        }
        Ok(())
    }
}
