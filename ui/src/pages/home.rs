// File: src/pages/home.rs
use catalog::CategoryId;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::action_link::ActionLink;
use crate::components::pico::Grid;
use crate::components::pico::Section;
use crate::components::product_card::ProductCard;
use crate::components::reveal::Enter;
use crate::components::reveal::Reveal;
use crate::hooks::use_in_view::use_in_view;
use crate::Page;

const HERO_IMAGE: &str = "https://images.pexels.com/photos/2802527/pexels-photo-2802527.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";
const SELECTION_IMAGE: &str = "https://images.pexels.com/photos/6401669/pexels-photo-6401669.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";

#[component]
fn Hero() -> Element {
    rsx! {
        section {
            class: "hero",
            img {
                class: "hero-backdrop",
                src: HERO_IMAGE,
                alt: "Spices Background",
            }
            div {
                class: "hero-content container",
                Enter {
                    index: 1,
                    h1 {
                        "Discover the World of"
                        span { "Premium Spices" }
                    }
                }
                Enter {
                    index: 2,
                    p {
                        class: "lede",
                        style: "color: #fff;",
                        "Elevate your culinary experience with our carefully curated collection of premium spices"
                    }
                }
                Enter {
                    index: 3,
                    class: "actions",
                    ActionLink {
                        to: Page::Products(CategoryId::All),
                        as_button: true,
                        "Explore Collection"
                    }
                    ActionLink {
                        to: Page::About,
                        class: "secondary",
                        as_button: true,
                        "Learn More"
                    }
                }
            }
        }
    }
}

#[component]
pub fn HomePage() -> Element {
    let app_state = use_context::<AppState>();
    let in_view = use_in_view();
    let variant = in_view.variant();
    let content = &app_state.content;

    rsx! {
        Hero {}

        section {
            id: "{in_view.anchor}",
            class: "band band-cream",
            div {
                class: "container",
                Reveal {
                    variant,
                    class: "centered",
                    h2 { "Featured Products" }
                    p {
                        class: "lede",
                        "Discover our handpicked selection of premium spices, carefully sourced from the finest regions around the world."
                    }
                }
                Grid {
                    for (index, product) in content.featured.iter().copied().enumerate() {
                        Reveal {
                            key: "{product.id}",
                            variant,
                            index: index + 1,
                            ProductCard {
                                name: product.name,
                                description: product.description,
                                image: product.image,
                                price: product.price,
                            }
                        }
                    }
                }
            }
        }

        Section {
            class: "band-white",
            Grid {
                columns: 2,
                Reveal {
                    variant,
                    h2 { "Why Choose Our Spices?" }
                    p {
                        "We take pride in delivering the highest quality spices sourced directly from trusted farmers and producers worldwide."
                    }
                    ul {
                        class: "checklist",
                        for point in content.selling_points.iter().copied() {
                            li {
                                key: "{point}",
                                i { class: "fas fa-check-circle" }
                                span { "{point}" }
                            }
                        }
                    }
                    ActionLink {
                        to: Page::About,
                        as_button: true,
                        "Learn More About Us"
                    }
                }
                Reveal {
                    variant,
                    index: 1,
                    class: "split-image",
                    img {
                        src: SELECTION_IMAGE,
                        alt: "Spice Selection",
                    }
                    div {
                        class: "experience-badge",
                        p {
                            class: "stat-number",
                            style: "color: #fff !important;",
                            "{content.experience.number}"
                        }
                        p { "{content.experience.label}" }
                    }
                }
            }
        }
    }
}
