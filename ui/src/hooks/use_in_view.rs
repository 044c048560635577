//=============================================================================
// File: src/hooks/use_in_view.rs
//=============================================================================

// Each platform watches the viewport its own way; all of them only feed
// `Visibility` samples into the shared `ViewTrigger` state machine.

use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use catalog::AnimationVariant;
use catalog::ViewTrigger;
use dioxus::prelude::*;

use crate::app_state::AppState;

#[cfg(target_arch = "wasm32")]
use self::wasm32::watch;

#[cfg(all(not(target_arch = "wasm32"), feature = "desktop"))]
use self::desktop::watch;

#[cfg(all(not(target_arch = "wasm32"), not(feature = "desktop")))]
use self::fallback::watch;

/// A reveal trigger bound to one anchor element.
///
/// Put `anchor` as the `id` of the element to watch, then style any number
/// of elements off `variant()`.
#[derive(Clone, PartialEq)]
pub struct InView {
    pub anchor: String,
    pub trigger: Signal<ViewTrigger>,
}

impl InView {
    pub fn variant(&self) -> AnimationVariant {
        self.trigger.read().variant()
    }

    pub fn is_triggered(&self) -> bool {
        self.trigger.read().is_triggered()
    }
}

fn next_anchor() -> String {
    static NEXT: AtomicUsize = AtomicUsize::new(0);
    format!("in-view-{}", NEXT.fetch_add(1, Ordering::Relaxed))
}

/// Creates a trigger configured from the site config and starts watching
/// its anchor once the component has mounted.
pub fn use_in_view() -> InView {
    let config = use_context::<AppState>().config.reveal;
    let anchor = use_hook(next_anchor);
    let trigger = use_signal(|| ViewTrigger::new(config));

    watch(anchor.clone(), trigger);

    InView { anchor, trigger }
}

/// Scripts for webviews that are driven through `document::eval`.
#[cfg_attr(
    not(all(not(target_arch = "wasm32"), feature = "desktop")),
    allow(dead_code)
)]
mod scripts {
    const REGISTRY: &str = "window.__inViewObservers";

    /// Observes `anchor` and sends `[isIntersecting, ratio]` for every entry.
    /// A missing element reports fully visible once.
    pub fn observe(anchor: &str, threshold: f64) -> String {
        format!(
            r#"
            {REGISTRY} = {REGISTRY} || {{}};
            const previous = {REGISTRY}["{anchor}"];
            if (previous) {{
                previous.disconnect();
            }}
            const el = document.getElementById("{anchor}");
            if (el === null) {{
                dioxus.send([true, 1.0]);
            }} else {{
                const observer = new IntersectionObserver((entries) => {{
                    for (const entry of entries) {{
                        dioxus.send([entry.isIntersecting, entry.intersectionRatio]);
                    }}
                }}, {{ threshold: {threshold} }});
                {REGISTRY}["{anchor}"] = observer;
                observer.observe(el);
            }}
            "#
        )
    }

    /// Disconnects and forgets the observer registered for `anchor`, if any.
    pub fn disconnect(anchor: &str) -> String {
        format!(
            r#"
            const observers = {REGISTRY} || {{}};
            const observer = observers["{anchor}"];
            if (observer) {{
                observer.disconnect();
                delete observers["{anchor}"];
            }}
            "#
        )
    }
}

/// # WebAssembly (WASM) Implementation
/// An `IntersectionObserver` on the anchor element. Its callback pushes samples
/// through a channel into a task on the Dioxus runtime, which owns the writes.
#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use catalog::ViewTrigger;
    use catalog::Visibility;
    use dioxus::prelude::*;
    use dioxus_logger::tracing::debug;
    use dioxus_logger::tracing::warn;
    use futures::StreamExt;
    use futures_channel::mpsc;
    use wasm_bindgen::prelude::*;
    use web_sys::IntersectionObserver;
    use web_sys::IntersectionObserverEntry;
    use web_sys::IntersectionObserverInit;

    type Callback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// Keeps the observer and its JS callback alive together.
    struct Observer {
        observer: IntersectionObserver,
        _callback: Callback,
    }

    impl Drop for Observer {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    pub fn watch(anchor: String, mut trigger: Signal<ViewTrigger>) {
        let mut observer = use_signal(|| None::<Observer>);

        use_effect(move || {
            if observer.peek().is_some() || trigger.peek().is_settled() {
                return;
            }
            let (tx, mut rx) = mpsc::unbounded::<Visibility>();
            match observe(&anchor, trigger.peek().config().threshold(), tx) {
                Ok(handle) => observer.set(Some(handle)),
                Err(e) => {
                    warn!("cannot observe #{anchor}, revealing immediately: {e:?}");
                    trigger.write().force();
                    return;
                }
            }
            let anchor = anchor.clone();
            spawn(async move {
                while let Some(sample) = rx.next().await {
                    if trigger.write().observe(sample) {
                        debug!("#{anchor} is now {:?}", trigger.peek().state());
                    }
                    if trigger.peek().is_settled() {
                        observer.take();
                        break;
                    }
                }
            });
        });

        use_on_unmount(move || {
            observer.take();
        });
    }

    fn observe(
        anchor: &str,
        threshold: f64,
        tx: mpsc::UnboundedSender<Visibility>,
    ) -> Result<Observer, JsValue> {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(anchor))
            .ok_or_else(|| JsValue::from_str("anchor element not found"))?;

        let callback: Callback = Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let _ = tx.unbounded_send(Visibility {
                    intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                });
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(&element);

        Ok(Observer {
            observer,
            _callback: callback,
        })
    }
}

/// # Desktop Implementation
/// The webview has the same `IntersectionObserver`, reached through an
/// evaluated script that streams `[isIntersecting, ratio]` pairs back. Each
/// observer is kept in a registry keyed by anchor so a later script can
/// disconnect it.
#[cfg(all(not(target_arch = "wasm32"), feature = "desktop"))]
mod desktop {
    use catalog::ViewTrigger;
    use catalog::Visibility;
    use dioxus::prelude::*;
    use dioxus_logger::tracing::debug;

    use super::scripts;

    fn disconnect(anchor: &str) {
        // Nothing to await; the script has no result.
        let _ = document::eval(&scripts::disconnect(anchor));
    }

    pub fn watch(anchor: String, mut trigger: Signal<ViewTrigger>) {
        let mut started = use_signal(|| false);

        use_effect({
            let anchor = anchor.clone();
            move || {
                if *started.peek() || trigger.peek().is_settled() {
                    return;
                }
                started.set(true);
                let mut eval =
                    document::eval(&scripts::observe(&anchor, trigger.peek().config().threshold()));
                let anchor = anchor.clone();
                spawn(async move {
                    while let Ok((intersecting, ratio)) = eval.recv::<(bool, f64)>().await {
                        if trigger.write().observe(Visibility { intersecting, ratio }) {
                            debug!("#{anchor} is now {:?}", trigger.peek().state());
                        }
                        if trigger.peek().is_settled() {
                            disconnect(&anchor);
                            break;
                        }
                    }
                });
            }
        });

        use_on_unmount(move || {
            if *started.peek() {
                disconnect(&anchor);
            }
        });
    }
}

/// # Fallback Implementation
/// Nothing can watch a viewport here, so sections reveal as soon as they mount.
#[cfg(all(not(target_arch = "wasm32"), not(feature = "desktop")))]
mod fallback {
    use catalog::ViewTrigger;
    use dioxus::prelude::*;

    pub fn watch(_anchor: String, mut trigger: Signal<ViewTrigger>) {
        use_effect(move || {
            if !trigger.peek().is_triggered() {
                trigger.write().force();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observer_is_registered_under_its_anchor() {
        let script = scripts::observe("in-view-7", 0.25);
        assert!(script.contains(r#"window.__inViewObservers["in-view-7"] = observer;"#));
        assert!(script.contains("threshold: 0.25"));
    }

    #[test]
    fn disconnect_releases_only_its_anchor() {
        let script = scripts::disconnect("in-view-7");
        assert!(script.contains(r#"observers["in-view-7"]"#));
        assert!(script.contains("observer.disconnect();"));
        assert!(script.contains(r#"delete observers["in-view-7"];"#));
        assert!(!script.contains("in-view-8"));
    }

    #[test]
    fn anchors_are_unique() {
        let a = next_anchor();
        let b = next_anchor();
        assert_ne!(a, b);
        assert!(a.starts_with("in-view-"));
    }
}
