//! Waiting-list signup dialog
//!
//! A modal form over the landing page. The page owns the form record and
//! dialog visibility; this component only renders controlled inputs and
//! forwards events upward.

use leptos::prelude::*;

use crate::core::content;
use crate::core::{WaitlistField, WaitlistForm};
use crate::ui::common::{BaseModal, Button, ButtonVariant, FormField, TextAreaField};

#[component]
pub fn WaitlistDialog(
    /// Whether the dialog is visible
    is_open: Signal<bool>,
    /// The page-owned form record
    form: Signal<WaitlistForm>,
    /// Single-field edit callback
    on_field_change: Callback<(WaitlistField, String)>,
    /// Submit attempt callback (the page decides whether it goes through)
    on_submit: Callback<()>,
    /// Cancel/close callback; the form record is left as-is
    on_close: Callback<()>,
) -> impl IntoView {
    let name_value = Signal::derive(move || form.get().name);
    let email_value = Signal::derive(move || form.get().email);
    let description_value = Signal::derive(move || form.get().description);

    view! {
        <BaseModal
            title=content::DIALOG_TITLE.to_string()
            subtitle=content::DIALOG_DESCRIPTION.to_string()
            is_open=is_open
            on_close=on_close
        >
            <form
                on:submit=move |ev| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                <div class="space-y-4">
                    <FormField
                        label=content::FIELD_NAME_LABEL
                        name=WaitlistField::Name.as_str()
                        required=true
                        placeholder=content::FIELD_NAME_PLACEHOLDER
                        value=name_value
                        on_input=Callback::new(move |value| {
                            on_field_change.run((WaitlistField::Name, value));
                        })
                    />
                    <FormField
                        label=content::FIELD_EMAIL_LABEL
                        name=WaitlistField::Email.as_str()
                        required=true
                        input_type="email"
                        placeholder=content::FIELD_EMAIL_PLACEHOLDER
                        value=email_value
                        on_input=Callback::new(move |value| {
                            on_field_change.run((WaitlistField::Email, value));
                        })
                    />
                    <TextAreaField
                        label=content::FIELD_DESCRIPTION_LABEL
                        name=WaitlistField::Description.as_str()
                        placeholder=content::FIELD_DESCRIPTION_PLACEHOLDER
                        value=description_value
                        on_input=Callback::new(move |value| {
                            on_field_change.run((WaitlistField::Description, value));
                        })
                    />
                </div>

                <div class="flex items-center justify-end gap-3 divider-top pt-4 mt-6">
                    <Button variant=ButtonVariant::Outline on_click=on_close>
                        {content::DIALOG_CANCEL}
                    </Button>
                    <Button button_type="submit">
                        {content::DIALOG_SUBMIT}
                    </Button>
                </div>
            </form>
        </BaseModal>
    }
}
