//! Platform-specific glue.
//!
//! - [`DocumentRoot`]: the real [`Presentation`] backend. Toggles a class on
//!   `<html>` through `document::eval`, which works in the browser and in the
//!   desktop/mobile webview alike.
//! - [`sleep_ms`]: timer future. `gloo-timers` on web, tokio on desktop.

use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use todoc_core::presentation::is_valid_class_name;
use todoc_core::{Presentation, PresentationError};

/// Presentation backend for the live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl Presentation for DocumentRoot {
    fn set_root_class(&mut self, class: &str, present: bool) -> Result<(), PresentationError> {
        let script = root_class_script(class, present)?;
        let eval = document::eval(&script);

        // The script result arrives asynchronously; failures are logged.
        spawn(async move {
            if let Err(e) = eval.await {
                error!("Failed to update document root class: {:?}", e);
            }
        });
        Ok(())
    }
}

/// Build the `classList.toggle` script for the document element.
///
/// `toggle(name, force)` has set semantics, so repeated calls are no-ops.
pub fn root_class_script(class: &str, present: bool) -> Result<String, PresentationError> {
    if !is_valid_class_name(class) {
        return Err(PresentationError::Script(format!(
            "refusing to toggle class {:?}",
            class
        )));
    }

    Ok(format!(
        "document.documentElement.classList.toggle('{class}', {present});"
    ))
}

/// Sleep for `ms` milliseconds on the current platform's timer.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_add() {
        assert_eq!(
            root_class_script("dark", true).unwrap(),
            "document.documentElement.classList.toggle('dark', true);"
        );
    }

    #[test]
    fn test_script_remove() {
        assert_eq!(
            root_class_script("theme-dark", false).unwrap(),
            "document.documentElement.classList.toggle('theme-dark', false);"
        );
    }

    #[test]
    fn test_script_rejects_injection() {
        assert!(root_class_script("dark'); alert(1); ('", true).is_err());
        assert!(root_class_script("", true).is_err());
        assert!(root_class_script("theme:dark", true).is_err());
    }
}
