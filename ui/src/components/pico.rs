//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use catalog::ContactField;
use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { div { class: "container", {children} } }
}

/// A responsive grid layout. `columns` sets the column count on wide screens.
#[component]
pub fn Grid(#[props(default = 3)] columns: u8, children: Element) -> Element {
    rsx! {
        div {
            class: "site-grid",
            style: "--grid-columns: {columns};",
            {children}
        }
    }
}

/// A full-width page band with its own background.
#[component]
pub fn Section(#[props(default, into)] class: String, children: Element) -> Element {
    rsx! {
        section {
            class: "band {class}",
            Container { {children} }
        }
    }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Copy, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

impl ButtonType {
    fn to_class(self) -> &'static str {
        match self {
            ButtonType::Primary => "",
            ButtonType::Secondary => "secondary",
            ButtonType::Contrast => "contrast",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    submit: bool,
    /// Renders `aria-pressed` for toggle buttons.
    #[props(optional)]
    pressed: Option<bool>,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = if props.outline {
        format!("{} outline", props.button_type.to_class())
    } else {
        props.button_type.to_class().to_string()
    };
    let html_type = if props.submit { "submit" } else { "button" };
    rsx! {
        button {
            class: "{class_str}",
            r#type: html_type,
            "aria-pressed": props.pressed.map(|p| if p { "true" } else { "false" }),
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FormFieldProps {
    field: ContactField,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text".to_string())]
    input_type: String,
    /// Renders a `<textarea>` with this many rows instead of an `<input>`.
    #[props(optional)]
    rows: Option<u32>,
}

/// A labeled, required form control bound to one contact form field.
pub fn FormField(props: FormFieldProps) -> Element {
    let key = props.field.key();
    let on_input = props.on_input;
    rsx! {
        label {
            r#for: key,
            "{props.field.label()}"
        }
        if let Some(rows) = props.rows {
            textarea {
                id: key,
                name: key,
                rows: "{rows}",
                required: true,
                value: "{props.value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        } else {
            input {
                r#type: "{props.input_type}",
                id: key,
                name: key,
                required: true,
                value: "{props.value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}
