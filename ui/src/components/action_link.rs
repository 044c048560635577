use dioxus::prelude::*;

use crate::navigate;
use crate::Page;

#[derive(Props, Clone, PartialEq)]
pub struct ActionLinkProps {
    /// The page to switch to.
    pub to: Page,

    #[props(default, into)]
    pub class: String,

    /// Styles the link as a Pico button.
    #[props(default = false)]
    pub as_button: bool,

    pub children: Element,
}

/// An in-site link. Switches the active page instead of following `href`.
#[component]
pub fn ActionLink(props: ActionLinkProps) -> Element {
    let active_page = use_context::<Signal<Page>>();
    let to = props.to;
    let role = if props.as_button { "button" } else { "link" };

    rsx! {
        a {
            href: "#",
            class: "{props.class}",
            role,
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                navigate(active_page, to);
            },
            {props.children}
        }
    }
}
