pub mod use_in_view;
