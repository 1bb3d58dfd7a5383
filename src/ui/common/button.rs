use crate::ui::icon::Icon;
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Outline,
    Ghost,
}

/// Button size options
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// Type-safe button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Click handler; omit for buttons the form layer handles
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// HTML button type ("button" or "submit")
    #[prop(default = "button")]
    button_type: &'static str,
    /// Whether button is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Button content (text or elements)
    children: Children,
    /// Optional icon name to show after the text
    #[prop(optional)]
    trailing_icon: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let base_classes = format!("btn-base {} {}", variant.class(), size.class());
    let full_classes = if class.is_empty() {
        base_classes
    } else {
        format!("{} {}", base_classes, class)
    };

    view! {
        <button
            type=button_type
            class=full_classes
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
            disabled=disabled
        >
            {children()}
            {trailing_icon.map(|icon_name| view! {
                <Icon name=icon_name class="icon-btn"/>
            })}
        </button>
    }
}
