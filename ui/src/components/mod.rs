//! Shared building blocks for the pages: layout wrappers, buttons, product
//! tiles and the reveal animations.
pub mod action_link;
pub mod category_filter;
pub mod empty_state;
pub mod footer;
pub mod pico;
pub mod product_card;
pub mod reveal;
