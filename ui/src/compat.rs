// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(all(not(target_arch = "wasm32"), feature = "desktop"))]
pub use desktop::*;

#[cfg(all(not(target_arch = "wasm32"), not(feature = "desktop")))]
pub use fallback::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use web_sys::ScrollBehavior;
    use web_sys::ScrollToOptions;

    /// Jumps the window back to the top of the page.
    pub fn scroll_to_top() {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Instant);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

#[cfg(all(not(target_arch = "wasm32"), feature = "desktop"))]
pub mod desktop {
    use dioxus::prelude::*;

    pub fn scroll_to_top() {
        // Nothing to await; the script has no result.
        let _ = document::eval("window.scrollTo(0, 0);");
    }
}

#[cfg(all(not(target_arch = "wasm32"), not(feature = "desktop")))]
pub mod fallback {
    pub fn scroll_to_top() {}
}
