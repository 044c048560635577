//! Wrappers that animate their children in.

use catalog::AnimationVariant;
use dioxus::prelude::*;

/// Shows `children` in the hidden or visible style of `variant`, delayed by
/// `index` steps so siblings stagger.
#[component]
pub fn Reveal(
    variant: AnimationVariant,
    #[props(default)] index: usize,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "reveal {variant.class()} {class}",
            style: "--reveal-index: {index};",
            {children}
        }
    }
}

/// Plays the entrance animation once, as soon as it is rendered.
#[component]
pub fn Enter(
    #[props(default)] index: usize,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "enter {class}",
            style: "--enter-index: {index};",
            {children}
        }
    }
}
