use leptos::prelude::*;

/// Inline image icon loaded from the assets dir
#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing/placement
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icon names matching the files under public/icons/
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const X: &str = "x";
    pub const SUN: &str = "sun";
    pub const MOON: &str = "moon";
}
