//! Landing page component
//!
//! The Outercamp 2.0 waitlist page:
//! - SEO meta tags, plus the canonical link when the site URL is configured
//! - Hero over the resort photo with staggered on-mount reveals
//! - Feature grid revealed as it scrolls into view
//! - Founding principle quote
//! - FAQ accordion
//! - Waitlist capture form
//! - Footer

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::app::CanonicalUrl;
use crate::core::content::{
    BRAND, FAQS, FEATURES, FaqEntry, Feature, HERO_IMAGE, HERO_IMAGE_ALT, WAITLIST_ANCHOR,
};
use crate::core::{RevealAnimation, RevealTrigger, ViewportMargin, WaitlistFields};
use crate::ui::icon::{Icon, IconKind};
use crate::ui::reveal::{Reveal, RevealGroup};
use crate::ui::waitlist_form::{FormStyle, WaitlistForm};

/// Landing page component with entrance animations
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="min-h-screen bg-background">
            <Nav />
            <Hero />
            <FeaturesSection />
            <QuoteSection />
            <FaqSection />
            <WaitlistSection />
            <Footer />

            <LandingStyles />
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    let canonical_url = use_context::<CanonicalUrl>().map(|url| url.0);

    view! {
        <Title text="Outercamp 2.0 - Join the Waitlist" />
        <Meta name="description" content="The next chapter of wilderness luxury. Join the Outercamp 2.0 waitlist for priority booking and founding rates." />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Outercamp 2.0" />
        <Meta property="og:description" content="Where regenerative design meets radical comfort. Coming 2026." />
        <Meta property="og:image" content=HERO_IMAGE />
        {canonical_url.map(|href| view! {
            <Link rel="canonical" href=href.clone() />
            <Meta property="og:url" content=href />
        })}
    }
}

#[component]
fn Nav() -> impl IntoView {
    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-background/80 backdrop-blur-md border-b border-border/50">
            <div class="container mx-auto flex items-center justify-between py-4 px-6">
                <span class="font-serif text-2xl font-semibold tracking-wide text-foreground">
                    {BRAND}
                </span>
                <span class="text-sm font-sans tracking-widest uppercase text-muted-foreground">
                    "Est. 2024"
                </span>
            </div>
        </nav>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0">
                <img src=HERO_IMAGE alt=HERO_IMAGE_ALT class="w-full h-full object-cover" />
                <div class="absolute inset-0 bg-foreground/40"></div>
            </div>

            <div class="relative z-10 text-center px-6 max-w-3xl mx-auto">
                <Reveal index=0 trigger=RevealTrigger::OnMount>
                    <p class="text-sm font-sans tracking-[0.3em] uppercase text-sand mb-6">
                        "Coming 2026"
                    </p>
                </Reveal>
                <Reveal index=1 trigger=RevealTrigger::OnMount>
                    <h1 class="font-serif text-5xl md:text-7xl lg:text-8xl font-light text-sand-light leading-[1.1] mb-6">
                        "Outercamp 2.0"
                    </h1>
                </Reveal>
                <Reveal index=2 trigger=RevealTrigger::OnMount>
                    <p class="font-sans text-lg md:text-xl text-sand/90 max-w-xl mx-auto mb-10 leading-relaxed">
                        "The next chapter of wilderness luxury. Where regenerative design meets radical comfort."
                    </p>
                </Reveal>
                <Reveal index=3 trigger=RevealTrigger::OnMount>
                    <a
                        href=format!("#{WAITLIST_ANCHOR}")
                        class="inline-block px-8 py-4 border border-sand/40 text-sand font-sans text-sm tracking-widest uppercase hover:bg-sand-light/10 transition-colors duration-300"
                    >
                        "Join the Waitlist"
                    </a>
                </Reveal>
            </div>

            // Scroll hint
            <div class="absolute bottom-10 left-1/2 -translate-x-1/2">
                <Reveal trigger=RevealTrigger::OnMount animation=RevealAnimation::scroll_hint()>
                    <div class="w-px h-16 bg-sand/30 mx-auto mb-2"></div>
                    <p class="text-sand/50 text-xs tracking-widest uppercase font-sans">"Scroll"</p>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="py-24 md:py-32 bg-background">
            <div class="container mx-auto px-6">
                <RevealGroup
                    trigger=RevealTrigger::viewport(ViewportMargin::SECTION)
                    class="text-center mb-20"
                >
                    <Reveal index=0>
                        <p class="text-sm font-sans tracking-[0.3em] uppercase text-muted-foreground mb-4">
                            "The Expansion"
                        </p>
                    </Reveal>
                    <Reveal index=1>
                        <h2 class="font-serif text-4xl md:text-5xl lg:text-6xl font-light text-foreground">
                            "Designed by Nature"
                        </h2>
                    </Reveal>
                </RevealGroup>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8 lg:gap-12">
                    {FEATURES
                        .into_iter()
                        .enumerate()
                        .map(|(i, feature)| {
                            let index = i as u32;
                            view! { <FeatureCard feature=feature index=index /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature, index: u32) -> impl IntoView {
    view! {
        <Reveal
            index=index
            trigger=RevealTrigger::viewport(ViewportMargin::CARD)
            class="text-center group"
        >
            <div class="w-16 h-16 mx-auto mb-6 rounded-full bg-secondary flex items-center justify-center
                        group-hover:bg-primary group-hover:text-primary-foreground transition-colors duration-500">
                <Icon
                    kind=feature.icon.into()
                    class="w-7 h-7 text-primary group-hover:text-primary-foreground transition-colors duration-500"
                />
            </div>
            <h3 class="font-serif text-2xl font-medium text-foreground mb-3">{feature.title}</h3>
            <p class="font-sans text-muted-foreground leading-relaxed">{feature.description}</p>
        </Reveal>
    }
}

#[component]
fn QuoteSection() -> impl IntoView {
    view! {
        <section class="py-24 bg-primary text-primary-foreground">
            <div class="container mx-auto px-6">
                <Reveal
                    trigger=RevealTrigger::viewport(ViewportMargin::NONE)
                    class="max-w-3xl mx-auto text-center"
                >
                    <blockquote>
                        <p class="font-serif text-3xl md:text-4xl lg:text-5xl font-light leading-snug italic">
                            "\u{201c}We don't build on the land. We grow with it.\u{201d}"
                        </p>
                        <cite class="block mt-8 font-sans text-sm tracking-widest uppercase not-italic opacity-70">
                            "Outercamp Founding Principle"
                        </cite>
                    </blockquote>
                </Reveal>
            </div>
        </section>
    }
}

/// FAQ section component
#[component]
fn FaqSection() -> impl IntoView {
    view! {
        <section id="faq" class="py-24 bg-background">
            <div class="container mx-auto px-6 max-w-3xl">
                <RevealGroup
                    trigger=RevealTrigger::viewport(ViewportMargin::SECTION)
                    class="text-center mb-16"
                >
                    <Reveal index=0>
                        <p class="text-sm font-sans tracking-[0.3em] uppercase text-muted-foreground mb-4">
                            "Questions"
                        </p>
                    </Reveal>
                    <Reveal index=1>
                        <h2 class="font-serif text-4xl md:text-5xl font-light text-foreground">
                            "Before You Join"
                        </h2>
                    </Reveal>
                </RevealGroup>

                <div class="space-y-4">
                    {FAQS
                        .into_iter()
                        .enumerate()
                        .map(|(i, faq)| {
                            let index = i as u32;
                            view! { <FaqItem faq=faq index=index /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// FAQ accordion item component
#[component]
fn FaqItem(faq: FaqEntry, index: u32) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    view! {
        <Reveal
            index=index
            trigger=RevealTrigger::viewport(ViewportMargin::CARD)
            class="border border-border overflow-hidden"
        >
            <button
                class="w-full px-6 py-4 flex items-center justify-between gap-4 text-left hover:bg-secondary/50 transition-colors"
                on:click=move |_| set_is_open.update(|v| *v = !*v)
                aria-expanded=move || is_open.get().to_string()
            >
                <span class="font-serif text-xl text-foreground">{faq.question}</span>
                <div
                    class="flex items-center justify-center w-5 h-5 text-muted-foreground flex-shrink-0 transition-transform duration-300"
                    class=("rotate-180", move || is_open.get())
                >
                    <Icon kind=IconKind::ChevronDown class="w-5 h-5" />
                </div>
            </button>
            <div
                class="overflow-hidden transition-all duration-300"
                class:max-h-0=move || !is_open.get()
                class:max-h-96=move || is_open.get()
            >
                <p class="px-6 pb-4 font-sans text-muted-foreground leading-relaxed">
                    {faq.answer}
                </p>
            </div>
        </Reveal>
    }
}

#[component]
fn WaitlistSection() -> impl IntoView {
    view! {
        <section id=WAITLIST_ANCHOR class="py-24 md:py-32 bg-secondary">
            <div class="container mx-auto px-6">
                <RevealGroup
                    trigger=RevealTrigger::viewport(ViewportMargin::NONE)
                    class="max-w-xl mx-auto text-center"
                >
                    <Reveal index=0>
                        <p class="text-sm font-sans tracking-[0.3em] uppercase text-muted-foreground mb-4">
                            "Be First"
                        </p>
                    </Reveal>
                    <Reveal index=1>
                        <h2 class="font-serif text-4xl md:text-5xl font-light text-foreground mb-6">
                            "Join the Waitlist"
                        </h2>
                    </Reveal>
                    <Reveal index=2>
                        <p class="font-sans text-muted-foreground mb-10 leading-relaxed">
                            "Be among the first to experience Outercamp 2.0. Early access members receive priority booking and exclusive founding rates."
                        </p>
                    </Reveal>
                    <WaitlistForm
                        fields=WaitlistFields::NameAndEmail
                        style=FormStyle::Light
                        index=3
                    />
                </RevealGroup>
            </div>
        </section>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 bg-foreground text-background/70">
            <div class="container mx-auto px-6 text-center">
                <p class="font-serif text-xl text-background mb-2">{BRAND}</p>
                <p class="font-sans text-xs tracking-widest uppercase">
                    "© 2026 Outercamp. All rights reserved."
                </p>
            </div>
        </footer>
    }
}

/// CSS for the form controls and the confirmation pop-in
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .waitlist-input {
                flex: 1;
                padding: 1rem 1.25rem;
                border-width: 1px;
                font-size: 0.875rem;
                transition: box-shadow 0.2s;
            }
            .waitlist-input:focus {
                outline: none;
                box-shadow: 0 0 0 2px var(--color-ring);
            }

            .waitlist-button {
                padding: 1rem 2rem;
                font-size: 0.875rem;
                letter-spacing: 0.1em;
                text-transform: uppercase;
                transition: background-color 0.3s;
                cursor: pointer;
            }

            @keyframes waitlist-confirm-in {
                from {
                    opacity: 0;
                    transform: scale(0.95);
                }
                to {
                    opacity: 1;
                    transform: scale(1);
                }
            }

            .waitlist-confirmation {
                padding: 2rem;
                border-width: 1px;
                border-radius: 0.5rem;
                animation: waitlist-confirm-in 0.4s ease-out forwards;
            }
            "#
        </style>
    }
}
