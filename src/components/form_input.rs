//! Labeled text input with an optional inline error.
//!
//! SYSTEM CONTEXT
//! ==============
//! Forms own their field values and validation; this component only renders
//! what it is given. Parents that need imperative access (focus, reading the
//! raw value) pass a `NodeRef` that is bound to the `<input>`.

#[cfg(test)]
#[path = "form_input_test.rs"]
mod form_input_test;

use leptos::prelude::*;

const FULL_WIDTH_CLASS: &str = "w-full";
const WRAPPER_BASE_CLASS: &str = "mb-4";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 mb-1";
const INPUT_BASE_CLASS: &str = "px-3 py-2 bg-white border shadow-sm placeholder-gray-400 focus:outline-none \
     focus:border-blue-500 focus:ring-blue-500 block rounded-md sm:text-sm focus:ring-1";
const INPUT_ERROR_BORDER_CLASS: &str = "border-red-500";
const INPUT_BORDER_CLASS: &str = "border-gray-300";
const ERROR_TEXT_CLASS: &str = "mt-1 text-sm text-red-600";

/// Error text to render, if any. Empty strings render nothing.
fn visible_error(error: Option<&str>) -> Option<&str> {
    error.filter(|e| !e.is_empty())
}

fn wrapper_class(full_width: bool) -> String {
    join_classes(&[WRAPPER_BASE_CLASS, if full_width { FULL_WIDTH_CLASS } else { "" }])
}

fn input_class(has_error: bool, full_width: bool, extra: &str) -> String {
    let border = if has_error { INPUT_ERROR_BORDER_CLASS } else { INPUT_BORDER_CLASS };
    let width = if full_width { FULL_WIDTH_CLASS } else { "" };
    join_classes(&[INPUT_BASE_CLASS, border, width, extra])
}

fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Labeled input control.
///
/// `full_width` defaults to `true`. Standard input attributes are passed
/// through to the `<input>` element unchanged.
#[component]
pub fn FormInput(
    #[prop(into)] label: String,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(default = true)] full_width: bool,
    /// Extra classes appended to the control.
    #[prop(optional, into)]
    class: String,
    #[prop(optional)] node_ref: NodeRef<leptos::html::Input>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    /// HTML `type`; defaults to `text`.
    #[prop(optional, into)]
    input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] autocomplete: Option<String>,
    #[prop(optional, into)] value: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_blur: Option<Callback<()>>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_owned());
    let label_for = id.clone();
    let control_class = move || {
        let has_error = visible_error(error.get().as_deref()).is_some();
        input_class(has_error, full_width, &class)
    };
    let error_text = move || {
        error
            .get()
            .filter(|e| visible_error(Some(e.as_str())).is_some())
            .map(|e| view! { <p class=ERROR_TEXT_CLASS>{e}</p> })
    };

    view! {
        <div class=wrapper_class(full_width)>
            <label class=LABEL_CLASS for=label_for>
                {label}
            </label>
            <input
                node_ref=node_ref
                class=control_class
                id=id
                name=name
                type=input_type
                placeholder=placeholder
                autocomplete=autocomplete
                required=required
                disabled=move || disabled.get().unwrap_or(false)
                prop:value=move || value.get().unwrap_or_default()
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.run(event_target_value(&ev));
                    }
                }
                on:blur=move |_| {
                    if let Some(on_blur) = on_blur.as_ref() {
                        on_blur.run(());
                    }
                }
            />
            {error_text}
        </div>
    }
}
