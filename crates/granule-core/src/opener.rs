//! Port for opening an app outside the dashboard.

use thiserror::Error;

/// Failure to hand a URL to the browser.
#[derive(Debug, Error)]
pub enum OpenError {
    #[error("Failed to open {url}: {reason}")]
    Launch { url: String, reason: String },
    #[error("Opener unavailable: {0}")]
    Unavailable(String),
}

/// Opens a URL in a new browsing context (tab, window, or system browser).
pub trait ExternalOpener {
    fn open(&self, url: &str) -> Result<(), OpenError>;
}

/// Opener that records URLs instead of opening them.
///
/// Used by tests and headless hosts.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    opened: std::sync::Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs opened so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

impl ExternalOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        let mut urls = self
            .opened
            .lock()
            .map_err(|e| OpenError::Unavailable(format!("Lock error: {}", e)))?;
        urls.push(url.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_opener_keeps_order() {
        let opener = RecordingOpener::new();
        opener.open("https://slack.com").unwrap();
        opener.open("https://discord.com").unwrap();
        assert_eq!(
            opener.opened(),
            vec!["https://slack.com".to_string(), "https://discord.com".to_string()]
        );
    }
}
