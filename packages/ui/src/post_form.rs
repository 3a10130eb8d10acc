use api::{ImageUpload, PostDraft};
use dioxus::prelude::*;

use crate::components::{Alert, Button, ButtonVariant, Label, Textarea};

/// Create/edit form for a post: content plus an optional image.
///
/// The form keeps its own state, so a failed submission leaves everything
/// the user typed in place. When `initial` carries a stored image it is shown
/// and kept unless a new file is picked.
#[component]
pub fn PostForm(
    heading: String,
    submit_label: String,
    initial: PostDraft,
    /// Absolute URL of the stored image, shown above the file picker.
    current_image_url: Option<String>,
    error: Option<String>,
    #[props(default)] submitting: bool,
    on_submit: EventHandler<PostDraft>,
) -> Element {
    let current_image = initial.current_image.clone();
    let mut content = use_signal(move || initial.content.clone());
    let mut image = use_signal(|| Option::<ImageUpload>::None);
    let mut pick_error = use_signal(|| Option::<String>::None);

    let handle_pick = move |evt: FormEvent| async move {
        pick_error.set(None);
        let Some(file) = evt.files().into_iter().next() else {
            image.set(None);
            return;
        };
        let name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => match ImageUpload::new(name, bytes.to_vec()) {
                Ok(upload) => image.set(Some(upload)),
                Err(e) => {
                    image.set(None);
                    pick_error.set(Some(e.to_string()));
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {name}: {e}");
                image.set(None);
                pick_error.set(Some(format!("Could not read {name}")));
            }
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(PostDraft {
            content: content(),
            image: image(),
            current_image: current_image.clone(),
        });
    };

    let banner = pick_error().or(error);
    let image_label = if current_image_url.is_some() {
        "New image (optional)"
    } else {
        "Image (optional)"
    };

    rsx! {
        div {
            class: "page page-narrow",
            h1 { class: "page-title", "{heading}" }

            if let Some(message) = banner {
                Alert { "{message}" }
            }

            form {
                class: "post-form",
                onsubmit: handle_submit,

                div {
                    class: "form-field",
                    Label { html_for: "content", "Content" }
                    Textarea {
                        id: "content",
                        placeholder: "What's on your mind?",
                        value: content(),
                        oninput: move |evt: FormEvent| content.set(evt.value()),
                    }
                }

                if let Some(url) = current_image_url {
                    div {
                        class: "form-field",
                        p { class: "form-hint", "Current image:" }
                        img { class: "post-form-image", src: "{url}", alt: "Current image" }
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "image", "{image_label}" }
                    input {
                        id: "image",
                        class: "input",
                        r#type: "file",
                        accept: "image/*",
                        onchange: handle_pick,
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full",
                    r#type: "submit",
                    disabled: submitting,
                    if submitting { "Saving..." } else { "{submit_label}" }
                }
            }
        }
    }
}
