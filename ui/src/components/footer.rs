use catalog::content::FooterLink;
use catalog::content::LinkTarget;
use chrono::Datelike;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use crate::app_state::AppState;
use crate::components::action_link::ActionLink;
use crate::components::pico::Container;
use crate::components::pico::Grid;
use crate::components::reveal::Reveal;
use crate::hooks::use_in_view::use_in_view;
use crate::Page;

/// The page a footer link opens, if it opens one.
fn destination(target: LinkTarget) -> Option<Page> {
    match target {
        LinkTarget::About => Some(Page::About),
        LinkTarget::Contact => Some(Page::Contact),
        LinkTarget::Products(category) => Some(Page::Products(category)),
        LinkTarget::External(_) | LinkTarget::Unrouted(_) => None,
    }
}

fn social_icon(name: &str) -> String {
    format!("fab fa-{}", name.to_lowercase())
}

#[component]
fn FooterLinkItem(link: FooterLink) -> Element {
    match link.target {
        LinkTarget::External(url) => rsx! {
            a {
                href: url,
                target: "_blank",
                rel: "noopener noreferrer",
                "{link.name}"
            }
        },
        LinkTarget::Unrouted(path) => rsx! {
            a {
                href: path,
                onclick: move |evt| {
                    evt.prevent_default();
                    debug!("no page behind footer link {path}");
                },
                "{link.name}"
            }
        },
        target => match destination(target) {
            Some(page) => rsx! {
                ActionLink { to: page, "{link.name}" }
            },
            None => rsx! {},
        },
    }
}

#[component]
fn LinkColumn(title: &'static str, links: Vec<FooterLink>) -> Element {
    rsx! {
        h4 { "{title}" }
        ul {
            for link in links {
                li {
                    key: "{link.name}",
                    FooterLinkItem { link }
                }
            }
        }
    }
}

/// Newsletter sign-up. Subscribing does nothing yet.
#[component]
fn Newsletter() -> Element {
    let mut email = use_signal(String::new);

    rsx! {
        h4 { "Stay Updated" }
        p { "Subscribe to our newsletter for recipes, tips, and exclusive offers." }
        form {
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                debug!("newsletter subscription for {:?} ignored", email.peek());
            },
            input {
                r#type: "email",
                placeholder: "Enter your email",
                value: "{email}",
                oninput: move |evt| email.set(evt.value()),
            }
            button { r#type: "submit", "Subscribe" }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let app_state = use_context::<AppState>();
    let in_view = use_in_view();
    let variant = in_view.variant();
    let content = &app_state.content;
    let year = chrono::Local::now().year();
    let social: Vec<(&'static str, &'static str)> = content
        .footer
        .social
        .iter()
        .filter_map(|link| match link.target {
            LinkTarget::External(url) => Some((link.name, url)),
            _ => None,
        })
        .collect();

    rsx! {
        footer {
            class: "site-footer",
            id: "{in_view.anchor}",
            Container {
                Grid {
                    columns: 4,
                    Reveal {
                        variant,
                        index: 0,
                        h3 { "{content.brand}" }
                        p { "{content.tagline}" }
                        div {
                            class: "social",
                            for (name, url) in social {
                                a {
                                    key: "{name}",
                                    href: url,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "aria-label": name,
                                    i { class: social_icon(name) }
                                }
                            }
                        }
                    }
                    Reveal {
                        variant,
                        index: 1,
                        LinkColumn { title: "Products", links: content.footer.products.clone() }
                    }
                    Reveal {
                        variant,
                        index: 2,
                        LinkColumn { title: "Company", links: content.footer.company.clone() }
                    }
                    Reveal {
                        variant,
                        index: 3,
                        Newsletter {}
                    }
                }
                Reveal {
                    variant,
                    index: 4,
                    class: "copyright",
                    p { "© {year} {content.brand}. All rights reserved." }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::CategoryId;
    use catalog::SiteContent;

    #[test]
    fn product_links_open_the_catalog_preset() {
        let footer = SiteContent::spice_delights().footer;
        let pages: Vec<_> = footer.products.iter().map(|l| destination(l.target)).collect();
        assert_eq!(
            pages,
            [
                Some(Page::Products(CategoryId::Organic)),
                Some(Page::Products(CategoryId::Blends)),
                None,
                None,
            ]
        );
    }

    #[test]
    fn company_links() {
        let footer = SiteContent::spice_delights().footer;
        assert_eq!(destination(footer.company[0].target), Some(Page::About));
        assert_eq!(destination(footer.company[1].target), Some(Page::Contact));
        assert_eq!(destination(footer.company[2].target), None);
    }

    #[test]
    fn social_icons_use_brand_classes() {
        assert_eq!(social_icon("Instagram"), "fab fa-instagram");
    }
}
