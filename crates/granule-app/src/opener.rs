//! Platform openers for apps that can't be embedded.

use granule_core::{ExternalOpener, OpenError};

/// Opens URLs with the operating system's default browser.
#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
impl ExternalOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        open::that(url).map_err(|e| OpenError::Launch {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Opens URLs in a new browser tab.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserOpener;

#[cfg(target_arch = "wasm32")]
impl ExternalOpener for BrowserOpener {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        let window =
            web_sys::window().ok_or_else(|| OpenError::Unavailable("No window object".to_string()))?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            // Popup blockers return null rather than throwing
            Ok(None) => Err(OpenError::Launch {
                url: url.to_string(),
                reason: "blocked by the browser".to_string(),
            }),
            Err(e) => Err(OpenError::Launch {
                url: url.to_string(),
                reason: format!("{:?}", e),
            }),
        }
    }
}
