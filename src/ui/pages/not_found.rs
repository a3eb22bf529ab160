//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::content::BRAND;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Report a real 404 status during server rendering
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found - Outercamp" />

        <div class="min-h-screen bg-background flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <h1 class="font-serif text-6xl font-light text-foreground mb-4">"404"</h1>

                <h2 class="font-serif text-2xl text-foreground mb-2">
                    "This trail doesn't go anywhere"
                </h2>

                <p class="font-sans text-muted-foreground mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="inline-block px-8 py-4 bg-primary text-primary-foreground font-sans text-sm tracking-widest uppercase hover:bg-forest-light transition-colors duration-300"
                >
                    "Back to Outercamp"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-muted-foreground">{format!("© 2026 {BRAND}")}</p>
            </div>
        </div>
    }
}
