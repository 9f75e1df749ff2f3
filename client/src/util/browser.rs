//! Thin wrappers over window APIs used by the management pages.
//!
//! SSR paths no-op; `confirm` answers `false` there so nothing destructive
//! can run without a user.

/// Blocking yes/no prompt.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Bring the form into view when a row switches to edit mode.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
