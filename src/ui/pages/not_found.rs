//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-theme-primary mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-theme-primary mb-2">
                    {content::NOT_FOUND_TITLE}
                </h2>

                <p class="text-theme-secondary mb-8 max-w-md mx-auto">
                    {content::NOT_FOUND_MESSAGE}
                </p>

                <A
                    href="/"
                    attr:class="inline-block px-6 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors"
                >
                    {content::NOT_FOUND_HOME}
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-theme-secondary">
                    {content::FOOTER_COPYRIGHT}
                </p>
            </div>
        </div>
    }
}
