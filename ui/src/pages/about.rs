// File: src/pages/about.rs
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Grid;
use crate::components::pico::Section;
use crate::components::reveal::Enter;
use crate::components::reveal::Reveal;
use crate::hooks::use_in_view::use_in_view;

const COLLECTION_IMAGE: &str = "https://images.pexels.com/photos/6401671/pexels-photo-6401671.jpeg";

#[component]
pub fn AboutPage() -> Element {
    let app_state = use_context::<AppState>();
    let in_view = use_in_view();
    let variant = in_view.variant();
    let content = &app_state.content;

    rsx! {
        Section {
            class: "band-cream",
            Grid {
                columns: 2,
                Enter {
                    h1 { "Our Journey in the World of Spices" }
                    p {
                        "Since 2003, Spice Delights has been on a mission to bring the finest spices from around the world to your kitchen. Our journey began with a simple passion for authentic flavors and has grown into a commitment to quality and sustainability."
                    }
                    Button { button_type: ButtonType::Secondary, "Learn More" }
                }
                Enter {
                    index: 1,
                    class: "split-image",
                    img {
                        src: COLLECTION_IMAGE,
                        alt: "Spice Collection",
                    }
                }
            }
        }

        section {
            class: "band band-brown",
            div {
                class: "container",
                id: "{in_view.anchor}",
                Grid {
                    columns: 4,
                    for (index, stat) in content.stats.iter().copied().enumerate() {
                        Reveal {
                            key: "{stat.label}",
                            variant,
                            index,
                            class: "centered",
                            p { class: "stat-number", "{stat.number}" }
                            p { "{stat.label}" }
                        }
                    }
                }
            }
        }

        Section {
            class: "band-white",
            Reveal {
                variant,
                class: "centered",
                h2 { "Our Values" }
                p {
                    class: "lede",
                    "At Spice Delights, our values guide everything we do, from sourcing to delivery."
                }
            }
            Grid {
                for (index, value) in content.values.iter().copied().enumerate() {
                    Reveal {
                        key: "{value.title}",
                        variant,
                        index: index + 1,
                        article {
                            class: "centered",
                            div { class: "value-icon", "{value.icon}" }
                            h3 { "{value.title}" }
                            p { "{value.description}" }
                        }
                    }
                }
            }
        }

        Section {
            class: "band-cream",
            Reveal {
                variant,
                class: "centered",
                h2 { "Meet Our Team" }
                p {
                    class: "lede",
                    "The passionate experts behind our premium spice selections."
                }
            }
            Grid {
                for (index, member) in content.team.iter().copied().enumerate() {
                    Reveal {
                        key: "{member.name}",
                        variant,
                        index: index + 1,
                        article {
                            class: "centered",
                            img {
                                class: "team-photo",
                                src: member.image,
                                alt: member.name,
                                loading: "lazy",
                            }
                            h3 { "{member.name}" }
                            p { style: "color: var(--spice-orange);", "{member.role}" }
                            p { "{member.description}" }
                        }
                    }
                }
            }
        }
    }
}
