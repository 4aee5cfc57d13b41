//! Notification port trait.

use crate::domain::error::SatstackerError;
use std::path::Path;

/// Port for handing a finished report artifact to a recipient list. The
/// core has no further interface to the notification collaborator.
pub trait NotifyPort {
    fn send(&self, artifact: &Path, recipients: &[String]) -> Result<(), SatstackerError>;
}
