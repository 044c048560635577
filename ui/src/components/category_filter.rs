use catalog::categories;
use catalog::CategorySelector;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::reveal::Enter;

/// One control per category; clicking one makes it the active selection.
#[component]
pub fn CategoryFilter(mut selector: Signal<CategorySelector>) -> Element {
    rsx! {
        div {
            class: "category-controls",
            role: "group",
            "aria-label": "Filter products by category",
            for (index, category) in categories().into_iter().enumerate() {
                Enter {
                    key: "{category.id}",
                    index,
                    Button {
                        button_type: ButtonType::Primary,
                        outline: !selector.read().is_active(category.id),
                        pressed: selector.read().is_active(category.id),
                        on_click: move |_| {
                            let previous = selector.write().select(category.id);
                            if previous != category.id {
                                debug!("category {} -> {}", previous, category.id);
                            }
                        },
                        "{category.name}"
                    }
                }
            }
        }
    }
}
