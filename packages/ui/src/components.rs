//! Small styled primitives shared by every view.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Destructive,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Ghost => "btn btn-ghost",
            ButtonVariant::Destructive => "btn btn-destructive",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default)] title: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = variant.class();
    rsx! {
        button {
            class: "{variant_class} {class}",
            r#type: r#type,
            disabled: disabled,
            title: "{title}",
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] autocomplete: String,
    #[props(default)] accept: String,
    #[props(default)] disabled: bool,
    oninput: Option<EventHandler<FormEvent>>,
    onchange: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: r#type,
            placeholder: "{placeholder}",
            value: "{value}",
            autocomplete: "{autocomplete}",
            accept: "{accept}",
            disabled: disabled,
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
            onchange: move |evt| {
                if let Some(handler) = onchange {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default = 5)] rows: u32,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "textarea {class}",
            placeholder: "{placeholder}",
            rows: "{rows}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "label",
            r#for: "{html_for}",
            {children}
        }
    }
}

/// Red error banner.
#[component]
pub fn Alert(#[props(default = "Error".to_string())] title: String, children: Element) -> Element {
    rsx! {
        div {
            class: "alert alert-destructive",
            role: "alert",
            strong { class: "alert-title", "{title}" }
            div { class: "alert-body", {children} }
        }
    }
}

#[component]
pub fn Badge(children: Element) -> Element {
    rsx! {
        span { class: "badge", {children} }
    }
}

/// Round placeholder avatar showing a single letter.
#[component]
pub fn Avatar(initial: String) -> Element {
    rsx! {
        span { class: "avatar", "{initial}" }
    }
}

/// Blocking alert for failures that have no inline place to show.
pub fn show_alert(message: &str) {
    tracing::error!("{message}");
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
