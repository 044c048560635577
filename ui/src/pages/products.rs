// File: src/pages/products.rs
use catalog::CategoryId;
use catalog::CategorySelector;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::category_filter::CategoryFilter;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Grid;
use crate::components::pico::Section;
use crate::components::product_card::ProductCard;
use crate::components::reveal::Enter;
use crate::components::reveal::Reveal;
use crate::hooks::use_in_view::use_in_view;

/// The catalog, filtered by the selected category.
///
/// `category` is only the initial selection; the page is keyed on it by the
/// caller so a new preset starts a fresh selector.
#[component]
pub fn ProductsPage(category: CategoryId) -> Element {
    let app_state = use_context::<AppState>();
    let selector = use_signal(|| CategorySelector::preset(category));
    let in_view = use_in_view();
    let variant = in_view.variant();

    let active = selector.read().active();
    let products = app_state.content.catalog.filter(active);

    rsx! {
        Section {
            class: "band-cream",
            Enter {
                class: "centered",
                h1 { "Our Premium Spices" }
                p {
                    class: "lede",
                    "Discover our extensive collection of premium spices, carefully sourced from the finest regions around the world."
                }
            }

            CategoryFilter { selector }

            div {
                id: "{in_view.anchor}",
                if products.is_empty() {
                    EmptyState {
                        title: "No products found".to_string(),
                        description: Some(format!("Nothing is listed under {} yet.", active.name())),
                        icon: rsx! { i { class: "fas fa-pepper-hot" } },
                    }
                } else {
                    Grid {
                        for (index, product) in products.into_iter().enumerate() {
                            Reveal {
                                key: "{product.id}",
                                variant,
                                index,
                                ProductCard {
                                    name: product.name,
                                    description: product.description,
                                    image: product.image,
                                    price: product.price,
                                    organic: product.is_organic,
                                    quick_view: true,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
