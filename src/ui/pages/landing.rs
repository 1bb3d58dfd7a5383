//! Landing page component
//!
//! The single marketing page for the upcoming platform:
//! - SEO meta tags
//! - Hero section with the waiting-list trigger
//! - Features section with three benefit cards
//! - Call-to-action and footer sections
//! - The waiting-list dialog itself
//!
//! This page owns the two pieces of interactive state: the dialog
//! visibility flag and the waiting-list form record. Everything else is
//! rendered from the fixed string table in `core::content`.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::content::{self, FEATURES, FeatureDescriptor};
use crate::core::{WaitlistField, WaitlistForm, forward_submission};
use crate::ui::WaitlistDialog;
use crate::ui::common::{Button, ButtonSize, ButtonVariant};
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;
use crate::ui::theme::{ThemeContext, use_theme_context};

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let theme = use_theme_context();
    let notifications = use_notifications();

    // Dialog visibility: false at mount, flipped by the two triggers below
    let (waitlist_open, set_waitlist_open) = signal(false);
    // The form record, owned here so the dialog inputs stay controlled
    let form = RwSignal::new(WaitlistForm::new());

    let open_waitlist = Callback::new(move |_: ()| set_waitlist_open.set(true));

    // Cancel leaves the record as-is; only a successful submit resets it
    let close_waitlist = Callback::new(move |_: ()| set_waitlist_open.set(false));

    let on_field_change = Callback::new(move |(field, value): (WaitlistField, String)| {
        form.update(|f| f.set(field, value));
    });

    let on_submit = Callback::new(move |_: ()| {
        let Some(record) = form.try_update(|f| f.submit()).flatten() else {
            // A required field is still empty: dialog stays open, no toast
            return;
        };
        forward_submission(&record);
        set_waitlist_open.set(false);
        notifications.success(content::SUBMIT_SUCCESS_TITLE, content::SUBMIT_SUCCESS_MESSAGE);
    });

    view! {
        <SeoMeta />

        <div class="min-h-screen bg-theme-primary">
            <Header theme=theme />

            // Hero Section
            <header class="bg-accent-primary/5 py-12 md:py-24">
                <div class="container mx-auto px-4 md:px-6">
                    <div class="flex flex-col items-center text-center space-y-4">
                        <h1 class="text-3xl md:text-5xl font-bold tracking-tighter text-accent-primary landing-fade-in-up">
                            {content::HERO_TITLE}
                        </h1>
                        <p class="text-lg md:text-xl text-theme-secondary max-w-2xl landing-fade-in-up landing-delay-200">
                            {content::HERO_SUBTITLE}
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 mt-6 landing-fade-in-up landing-delay-400">
                            <Button
                                size=ButtonSize::Large
                                on_click=open_waitlist
                                trailing_icon=icons::ARROW_RIGHT
                            >
                                {content::JOIN_WAITLIST}
                            </Button>
                            <Button variant=ButtonVariant::Outline size=ButtonSize::Large>
                                {content::LEARN_MORE}
                            </Button>
                        </div>
                    </div>
                </div>
            </header>

            // Features Section
            <section class="py-12 md:py-24">
                <div class="container mx-auto px-4 md:px-6">
                    <div class="text-center mb-12">
                        <h2 class="text-2xl md:text-4xl font-bold tracking-tighter text-theme-primary">
                            {content::FEATURES_TITLE}
                        </h2>
                        <p class="text-theme-secondary mt-4 max-w-2xl mx-auto">
                            {content::FEATURES_SUBTITLE}
                        </p>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        {FEATURES
                            .into_iter()
                            .map(|feature| view! { <FeatureCard feature=feature /> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // CTA Section
            <section class="bg-accent-primary/5 py-12 md:py-24">
                <div class="container mx-auto px-4 md:px-6 text-center">
                    <h2 class="text-2xl md:text-4xl font-bold tracking-tighter text-theme-primary mb-4">
                        {content::CTA_TITLE}
                    </h2>
                    <p class="text-theme-secondary max-w-2xl mx-auto mb-8">
                        {content::CTA_SUBTITLE}
                    </p>
                    <Button
                        size=ButtonSize::Large
                        on_click=open_waitlist
                        trailing_icon=icons::ARROW_RIGHT
                    >
                        {content::JOIN_WAITLIST}
                    </Button>
                </div>
            </section>

            // Footer
            <Footer />

            // Waiting List Dialog
            <WaitlistDialog
                is_open=waitlist_open.into()
                form=form.into()
                on_field_change=on_field_change
                on_submit=on_submit
                on_close=close_waitlist
            />

            // CSS Animations
            <LandingStyles />
        </div>
    }
}

/// Slim page header with logo and theme toggle
#[component]
fn Header(theme: ThemeContext) -> impl IntoView {
    view! {
        <div class="sticky top-0 z-40 bg-theme-primary/80 backdrop-blur-md border-b border-theme/50">
            <div class="container mx-auto px-4 md:px-6">
                <div class="flex items-center justify-between h-14">
                    <div class="flex items-center gap-3">
                        <Logo />
                        <span class="text-lg font-bold text-theme-primary">{content::SITE_NAME}</span>
                    </div>
                    <ThemeToggle theme=theme />
                </div>
            </div>
        </div>
    }
}

/// Theme toggle button component
#[component]
fn ThemeToggle(theme: ThemeContext) -> impl IntoView {
    view! {
        <button
            class="p-2 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors text-gray-600 dark:text-gray-300
                   border border-gray-300 dark:border-gray-600"
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
        >
            {move || {
                if theme.is_dark.get() {
                    view! {
                        <Icon name=icons::SUN class="w-5 h-5" />
                    }
                } else {
                    view! {
                        <Icon name=icons::MOON class="w-5 h-5" />
                    }
                }
            }}
        </button>
    }
}

/// Feature card component
#[component]
fn FeatureCard(feature: FeatureDescriptor) -> impl IntoView {
    view! {
        <div class="bg-theme-primary p-6 rounded-xl border-none shadow-md hover:shadow-lg
                    transition-all duration-300 hover:-translate-y-1">
            <div class="w-12 h-12 rounded-lg bg-accent-primary/10 flex items-center justify-center mb-4">
                <FeatureGlyph icon=feature.icon />
            </div>
            <h3 class="text-lg font-semibold text-theme-primary mb-2">{feature.title}</h3>
            <p class="text-theme-secondary text-sm leading-relaxed">{feature.description}</p>
        </div>
    }
}

/// Feature icon, keyed by the descriptor's icon identifier
#[component]
fn FeatureGlyph(icon: &'static str) -> impl IntoView {
    let svg_content = match icon {
        "rocket" => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09zM12 15l-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2zM9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5" />
        },
        "shield" => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z" />
        },
        "zap" => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M13 10V3L4 14h7v7l9-11h-7z" />
        },
        _ => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 6v6m0 0v6m0-6h6m-6 0H6" />
        },
    };

    view! {
        <svg class="w-6 h-6 text-accent-primary" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
            {svg_content}
        </svg>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text=content::PAGE_TITLE />

        <Meta name="description" content=content::META_DESCRIPTION />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=content::PAGE_TITLE />
        <Meta property="og:description" content=content::META_DESCRIPTION />
    }
}

/// Logo component
#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="w-9 h-9 bg-gradient-to-br from-accent-primary to-blue-600 rounded-xl
                    flex items-center justify-center shadow-lg">
            <svg class="w-5 h-5 text-white" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                      d="M13 10V3L4 14h7v7l9-11h-7z" />
            </svg>
        </div>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-theme py-6 md:py-0">
            <div class="container mx-auto px-4 md:px-6 flex flex-col md:flex-row justify-between items-center gap-4 md:h-24">
                <p class="text-sm text-theme-secondary">
                    {content::FOOTER_COPYRIGHT}
                </p>
                <div class="flex items-center gap-4">
                    <Button variant=ButtonVariant::Ghost size=ButtonSize::Small>
                        {content::FOOTER_PRIVACY}
                    </Button>
                    <Button variant=ButtonVariant::Ghost size=ButtonSize::Small>
                        {content::FOOTER_TERMS}
                    </Button>
                </div>
            </div>
        </footer>
    }
}

/// CSS styles for landing page animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            @keyframes landing-fade-in-up {
                from {
                    opacity: 0;
                    transform: translateY(20px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            .landing-fade-in-up {
                animation: landing-fade-in-up 0.6s ease-out forwards;
            }

            .landing-delay-200 {
                animation-delay: 0.2s;
                opacity: 0;
            }

            .landing-delay-400 {
                animation-delay: 0.4s;
                opacity: 0;
            }
            "#
        </style>
    }
}
