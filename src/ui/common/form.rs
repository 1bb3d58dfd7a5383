use leptos::prelude::*;

/// Generic form field component with label and controlled input.
///
/// Required fields get both the visual marker and the native `required`
/// attribute, so empty submission is blocked by the input's own validation
/// indicator.
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Form-level field name (`name` attribute)
    name: &'static str,
    /// Whether field is required (asterisk + native required attribute)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                name=name
                type=input_type
                class="input-base"
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    /// Field label text
    label: &'static str,
    /// Form-level field name (`name` attribute)
    name: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 4)]
    rows: u32,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label">{label}</label>
            <textarea
                name=name
                class="input-base resize-none"
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
