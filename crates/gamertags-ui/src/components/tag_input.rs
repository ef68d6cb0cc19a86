//! Tag Input Component
//!
//! One text input per platform with a label floating above the value.
//! The focus flag is local to the component and only changes styling.

use dioxus::prelude::*;
use gamertags_core::Platform;

/// Properties for the TagInput component
#[derive(Clone, PartialEq, Props)]
pub struct TagInputProps {
    /// Platform this input edits
    pub platform: Platform,
    /// Current tag value
    pub value: String,
    /// Called with the full new value on every keystroke
    pub oninput: EventHandler<String>,
}

/// Text input bound to a single platform's tag
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TagInput {
///         platform: Platform::Steam,
///         value: profile().get(Platform::Steam).to_string(),
///         oninput: move |tag| update(Platform::Steam, tag),
///     }
/// }
/// ```
#[component]
pub fn TagInput(props: TagInputProps) -> Element {
    let mut focused = use_signal(|| false);

    let id = props.platform.key();
    let label = props.platform.input_label();
    let wrapper_class = tag_input_class(focused());

    rsx! {
        div { class: "{wrapper_class}",
            input {
                id: "{id}",
                name: "{id}",
                class: "tag-input-field",
                r#type: "text",
                value: "{props.value}",
                placeholder: "{label}",
                autocomplete: "off",
                spellcheck: false,
                oninput: move |e| props.oninput.call(e.value()),
                onfocus: move |_| focused.set(true),
                onblur: move |_| focused.set(false),
            }
            label {
                class: "tag-input-label",
                r#for: "{id}",
                "{label}"
            }
        }
    }
}

fn tag_input_class(focused: bool) -> &'static str {
    if focused {
        "tag-input focused"
    } else {
        "tag-input"
    }
}
