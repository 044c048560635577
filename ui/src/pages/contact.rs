// File: src/pages/contact.rs
use catalog::content::ContactKind;
use catalog::ContactField;
use catalog::ContactForm;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

use crate::app_state::AppState;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::FormField;
use crate::components::pico::Grid;
use crate::components::pico::Section;
use crate::components::reveal::Enter;
use crate::components::reveal::Reveal;
use crate::hooks::use_in_view::use_in_view;

const LOCATION_IMAGE: &str = "https://images.pexels.com/photos/2422915/pexels-photo-2422915.jpeg";
const NOTE_ICONS: [&str; 3] = ["fas fa-info-circle", "fas fa-truck", "fas fa-headset"];

fn contact_icon(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Address => "fas fa-map-marker-alt",
        ContactKind::Phone => "fas fa-phone-alt",
        ContactKind::Email => "fas fa-envelope",
        ContactKind::Hours => "fas fa-clock",
    }
}

/// The message form. Submitting only logs what was entered; the fields keep
/// their values afterwards.
#[component]
fn MessageForm() -> Element {
    let mut form = use_signal(ContactForm::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match form.read().submit() {
            Ok(submission) => info!("contact form submitted: {}", submission.to_json()),
            Err(e) => warn!("contact form rejected: {e}"),
        }
    };

    rsx! {
        form {
            onsubmit: on_submit,
            FormField {
                field: ContactField::Name,
                value: form.read().get(ContactField::Name).to_string(),
                on_input: move |value| form.write().set(ContactField::Name, value),
            }
            FormField {
                field: ContactField::Email,
                value: form.read().get(ContactField::Email).to_string(),
                input_type: "email".to_string(),
                on_input: move |value| form.write().set(ContactField::Email, value),
            }
            FormField {
                field: ContactField::Subject,
                value: form.read().get(ContactField::Subject).to_string(),
                on_input: move |value| form.write().set(ContactField::Subject, value),
            }
            FormField {
                field: ContactField::Message,
                value: form.read().get(ContactField::Message).to_string(),
                rows: 5,
                on_input: move |value| form.write().set(ContactField::Message, value),
            }
            Button {
                submit: true,
                "Send Message"
            }
        }
    }
}

#[component]
pub fn ContactPage() -> Element {
    let app_state = use_context::<AppState>();
    let in_view = use_in_view();
    let variant = in_view.variant();
    let content = &app_state.content;

    rsx! {
        Section {
            class: "band-brown centered",
            Enter {
                index: 1,
                h1 { "Get in Touch" }
            }
            Enter {
                index: 2,
                p {
                    class: "lede",
                    "Have questions about our products or services? We'd love to hear from you. Send us a message and we'll respond as soon as possible."
                }
            }
        }

        section {
            class: "band band-white",
            div {
                class: "container",
                id: "{in_view.anchor}",
                Grid {
                    columns: 4,
                    for (index, card) in content.contact_cards.iter().enumerate() {
                        Reveal {
                            key: "{card.title}",
                            variant,
                            index,
                            class: "centered",
                            Card {
                                i { class: format!("icon {}", contact_icon(card.kind)) }
                                h3 { "{card.title}" }
                                for detail in card.details.iter().copied() {
                                    p { key: "{detail}", "{detail}" }
                                }
                            }
                        }
                    }
                }
            }
        }

        Section {
            class: "band-cream",
            Grid {
                columns: 2,
                Reveal {
                    variant,
                    Card {
                        h2 { "Send us a Message" }
                        MessageForm {}
                    }
                }
                Reveal {
                    variant,
                    index: 1,
                    Card {
                        img {
                            src: LOCATION_IMAGE,
                            alt: "Location",
                            style: "width: 100%; height: 16rem; object-fit: cover; border-radius: 0.5rem;",
                        }
                    }
                    Card {
                        h3 { "Additional Information" }
                        ul {
                            class: "checklist",
                            for (note, icon) in content.contact_notes.iter().copied().zip(NOTE_ICONS) {
                                li {
                                    key: "{icon}",
                                    i { class: icon }
                                    span { "{note}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::SiteContent;

    #[test]
    fn every_contact_card_has_a_distinct_icon() {
        let content = SiteContent::spice_delights();
        let mut icons: Vec<_> = content.contact_cards.iter().map(|c| contact_icon(c.kind)).collect();
        icons.sort();
        icons.dedup();
        assert_eq!(icons.len(), content.contact_cards.len());
    }

    #[test]
    fn every_note_has_an_icon() {
        assert_eq!(SiteContent::spice_delights().contact_notes.len(), NOTE_ICONS.len());
    }
}
