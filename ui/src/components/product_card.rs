use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;

/// A product tile: image, name, description, price and an (inert) cart button.
///
/// `organic` adds the badge over the image. `quick_view` adds the hover
/// overlay the catalog page uses.
#[component]
pub fn ProductCard(
    name: &'static str,
    description: &'static str,
    image: &'static str,
    price: &'static str,
    #[props(default = false)] organic: bool,
    #[props(default = false)] quick_view: bool,
) -> Element {
    rsx! {
        article {
            class: "product-card",
            div {
                class: "image",
                img {
                    src: image,
                    alt: name,
                    loading: "lazy",
                }
                if organic {
                    span { class: "badge", "Organic" }
                }
                if quick_view {
                    div {
                        class: "quick-view",
                        Button { button_type: ButtonType::Contrast, "Quick View" }
                    }
                }
            }
            div {
                class: "body",
                h3 { "{name}" }
                p { "{description}" }
                div {
                    class: "price-row",
                    span { class: "price", "{price}" }
                    Button { "Add to Cart" }
                }
            }
        }
    }
}
